//! JSON bodies of the remote menu API, and their validation into shared types.

use std::collections::BTreeMap;

use common::{
    api_error::ApiError,
    search_const::MAX_RATING,
    search_result::{DishRating, FacetCount, Restaurant, SearchResult},
    upload::UploadReceipt,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResponse {
    pub count: u64,
    pub results: Vec<RawRestaurant>,
    #[serde(default)]
    pub facets: BTreeMap<String, Vec<RawFacetValue>>,
    #[serde(default)]
    pub search_terms: String,
}

/// One index document. The service sends many more fields; only these are read.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct RawRestaurant {
    pub url: Option<String>,
    pub metadata_storage_name: Option<String>,
    pub ubicacion: Option<String>,
    pub merged_content: Option<String>,
    pub tipologia: Option<String>,
    pub precio: Option<f64>,
    pub puntuacion: Option<f64>,
    pub platos: Option<Vec<RawDish>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawDish {
    pub nombre: String,
    pub puntuacion: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawFacetValue {
    pub value: serde_json::Value,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawUploadResponse {
    pub filename: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawErrorBody {
    pub error: String,
}

fn check_rating(what: &str, rating: f64) -> Result<f64, ApiError> {
    if rating.is_finite() && (0.0..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(ApiError::malformed(format!("{what} rating {rating} is outside 0-{MAX_RATING}")))
    }
}

impl TryFrom<RawRestaurant> for Restaurant {
    type Error = ApiError;

    fn try_from(raw: RawRestaurant) -> Result<Self, Self::Error> {
        let name = raw.metadata_storage_name.clone().unwrap_or_default();
        let rating = raw.puntuacion.map(|r| check_rating(&name, r)).transpose()?;
        let price = match raw.precio {
            Some(p) if !p.is_finite() || p < 0.0 => {
                return Err(ApiError::malformed(format!("{name} has invalid price {p}")));
            }
            other => other,
        };
        let dishes = raw
            .platos
            .unwrap_or_default()
            .into_iter()
            .map(|dish| {
                Ok(DishRating {
                    rating: check_rating(&dish.nombre, dish.puntuacion)?,
                    name: dish.nombre,
                })
            })
            .collect::<Result<Vec<_>, ApiError>>()?;

        Ok(Restaurant {
            file_name: raw.metadata_storage_name,
            image_url: raw.url.filter(|u| !u.is_empty()),
            location: raw.ubicacion.filter(|l| !l.is_empty()),
            excerpt: raw.merged_content.filter(|c| !c.trim().is_empty()),
            cuisine_type: raw.tipologia,
            price,
            rating,
            dishes,
        })
    }
}

fn facet_value_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

impl TryFrom<RawSearchResponse> for SearchResult {
    type Error = ApiError;

    fn try_from(raw: RawSearchResponse) -> Result<Self, Self::Error> {
        let items = raw
            .results
            .into_iter()
            .map(Restaurant::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let facets = raw
            .facets
            .into_iter()
            .map(|(name, values)| {
                let values = values
                    .into_iter()
                    .map(|v| FacetCount { value: facet_value_string(v.value), count: v.count })
                    .collect();
                (name, values)
            })
            .collect();
        Ok(SearchResult {
            count: raw.count,
            items,
            facets,
            query_echoed: raw.search_terms,
        })
    }
}

impl From<RawUploadResponse> for UploadReceipt {
    fn from(raw: RawUploadResponse) -> Self {
        UploadReceipt { stored_name: raw.filename, url: raw.url }
    }
}
