//! Shared search query models and helpers.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{api_error::ApiError, search_const::{MAX_PRICE, MAX_RATING}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CuisineType {
    Italiana,
    Asiatica,
    India,
    Casera,
    Tradicional,
}

impl CuisineType {
    pub const ALL: [CuisineType; 5] = [
        CuisineType::Italiana,
        CuisineType::Asiatica,
        CuisineType::India,
        CuisineType::Casera,
        CuisineType::Tradicional,
    ];

    /// Value sent as `tipologia`.
    pub fn as_param(&self) -> &'static str {
        match self {
            CuisineType::Italiana => "Italiana",
            CuisineType::Asiatica => "Asiatica",
            CuisineType::India => "India",
            CuisineType::Casera => "Casera",
            CuisineType::Tradicional => "Tradicional",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CuisineType::Asiatica => "Asiática",
            other => other.as_param(),
        }
    }
}

impl Display for CuisineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for CuisineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CuisineType::ALL
            .into_iter()
            .find(|c| c.as_param() == s)
            .ok_or_else(|| format!("unknown cuisine type: {s:?}"))
    }
}

/// Result ordering understood by the remote API. The UI never sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Relevance,
    FileName,
    Size,
    Date,
    Sentiment,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::FileName => "file_name",
            SortOrder::Size => "size",
            SortOrder::Date => "date",
            SortOrder::Sentiment => "sentiment",
        }
    }
}

/// A validated query, built fresh for every submit.
///
/// Every `Some` field is a filter that differs from its "no filter" default;
/// construct it through [`SearchFormState::to_query`] to keep that true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub text: String,
    pub cuisine_type: Option<CuisineType>,
    pub min_rating: Option<f64>,
    pub max_price: Option<u32>,
    pub facet: Option<String>,
    pub sort: Option<SortOrder>,
}

impl SearchQuery {
    /// Query string pairs for `GET /search`, `search` first, absent filters omitted.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("search", self.text.clone())];
        if let Some(cuisine_type) = self.cuisine_type {
            params.push(("tipologia", cuisine_type.as_param().to_string()));
        }
        if let Some(min_rating) = self.min_rating {
            params.push(("puntuacion", format!("{}", min_rating)));
        }
        if let Some(max_price) = self.max_price {
            params.push(("precio", format!("{}", max_price)));
        }
        if let Some(facet) = &self.facet {
            params.push(("facet", facet.clone()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.as_param().to_string()));
        }
        params
    }
}

/// Raw values of the search form controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFormState {
    pub text: String,
    pub cuisine_type: Option<CuisineType>,
    pub min_rating: f64,
    pub max_price: u32,
}

impl Default for SearchFormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            cuisine_type: None,
            min_rating: 0.0,
            max_price: MAX_PRICE,
        }
    }
}

impl SearchFormState {
    /// Normalizes the form into a [`SearchQuery`].
    ///
    /// Fails when the trimmed text is empty or a slider value is out of range.
    pub fn to_query(&self) -> Result<SearchQuery, ApiError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ApiError::Validation("search text is empty".to_string()));
        }
        if !(0.0..=MAX_RATING).contains(&self.min_rating) {
            return Err(ApiError::Validation(format!("minimum rating {} is outside 0-{}", self.min_rating, MAX_RATING)));
        }
        if self.max_price > MAX_PRICE {
            return Err(ApiError::Validation(format!("maximum price {} is above {}", self.max_price, MAX_PRICE)));
        }

        Ok(SearchQuery {
            text: text.to_string(),
            cuisine_type: self.cuisine_type,
            min_rating: (self.min_rating > 0.0).then_some(self.min_rating),
            max_price: (self.max_price < MAX_PRICE).then_some(self.max_price),
            facet: None,
            sort: None,
        })
    }

    /// Parses the `<select>` value; the empty option means "all cuisines".
    pub fn set_cuisine_from_select(&mut self, value: &str) {
        self.cuisine_type = value.parse().ok();
    }
}
