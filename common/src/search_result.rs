//! Search results as rendered by the result list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::search_const::DISHES_PREVIEW_COUNT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResult {
    pub count: u64,
    pub items: Vec<Restaurant>,
    pub facets: BTreeMap<String, Vec<FacetCount>>,
    pub query_echoed: String,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.items.is_empty()
    }

    /// "1 resultado" / "N resultados".
    pub fn count_label(&self) -> String {
        let noun = if self.count == 1 { "resultado" } else { "resultados" };
        format!("{} {} encontrados", self.count, noun)
    }

    /// Facet chips in display order: facet name, then server order of values.
    pub fn facet_chips(&self) -> Vec<(String, FacetCount)> {
        self.facets
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.clone(), v.clone())))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRating {
    pub name: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Restaurant {
    /// Stored file name of the menu, e.g. `trattoria.pdf`.
    pub file_name: Option<String>,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub excerpt: Option<String>,
    pub cuisine_type: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub dishes: Vec<DishRating>,
}

impl Restaurant {
    pub fn display_name(&self) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| name.split('.').next())
            .filter(|stem| !stem.is_empty())
            .unwrap_or("Restaurante")
            .to_string()
    }

    /// Render key of the card at `index` in the result grid.
    pub fn card_key(&self, index: usize) -> String {
        format!("restaurant-{}-{}", index, self.file_name.as_deref().unwrap_or_default())
    }

    pub fn cuisine_label(&self) -> String {
        self.cuisine_type.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "Restaurante".to_string())
    }

    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("{}€", price),
            None => "Precio no disponible".to_string(),
        }
    }

    /// Dishes visible on the card for the given toggle state.
    pub fn visible_dishes(&self, show_all: bool) -> &[DishRating] {
        if show_all {
            &self.dishes
        } else {
            &self.dishes[..self.dishes.len().min(DISHES_PREVIEW_COUNT)]
        }
    }

    /// Dishes hidden while collapsed.
    pub fn hidden_dish_count(&self) -> usize {
        self.dishes.len().saturating_sub(DISHES_PREVIEW_COUNT)
    }

    /// Label of the show more / show less toggle, `None` when there is nothing to toggle.
    pub fn dish_toggle_label(&self, show_all: bool) -> Option<String> {
        let hidden = self.hidden_dish_count();
        if hidden == 0 {
            return None;
        }
        if show_all {
            Some("Ver menos".to_string())
        } else {
            Some(format!("Ver {} platos más", hidden))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dishes(n: usize) -> Vec<DishRating> {
        (0..n).map(|i| DishRating { name: format!("plato {i}"), rating: 4.0 }).collect()
    }

    #[test]
    fn collapsed_card_shows_three_and_expanded_shows_all() {
        let restaurant = Restaurant { dishes: dishes(7), ..Default::default() };
        assert_eq!(restaurant.visible_dishes(false).len(), 3);
        assert_eq!(restaurant.visible_dishes(true).len(), 7);
        // toggling back
        assert_eq!(restaurant.visible_dishes(false).len(), 3);
        assert_eq!(restaurant.dish_toggle_label(false).as_deref(), Some("Ver 4 platos más"));
        assert_eq!(restaurant.dish_toggle_label(true).as_deref(), Some("Ver menos"));
    }

    #[test]
    fn short_dish_lists_have_no_toggle() {
        for n in 0..=3 {
            let restaurant = Restaurant { dishes: dishes(n), ..Default::default() };
            assert_eq!(restaurant.visible_dishes(false).len(), n);
            assert_eq!(restaurant.dish_toggle_label(false), None);
        }
    }

    #[test]
    fn display_name_uses_file_stem() {
        let mut restaurant = Restaurant { file_name: Some("la-tagliatella.menu.pdf".to_string()), ..Default::default() };
        assert_eq!(restaurant.display_name(), "la-tagliatella");
        restaurant.file_name = None;
        assert_eq!(restaurant.display_name(), "Restaurante");
        restaurant.file_name = Some(".pdf".to_string());
        assert_eq!(restaurant.display_name(), "Restaurante");
    }

    #[test]
    fn card_key_tolerates_a_missing_file_name() {
        let named = Restaurant { file_name: Some("casa-pepe.pdf".to_string()), ..Default::default() };
        assert_eq!(named.card_key(0), "restaurant-0-casa-pepe.pdf");
        assert_eq!(Restaurant::default().card_key(3), "restaurant-3-");
        assert_ne!(Restaurant::default().card_key(1), Restaurant::default().card_key(2));
    }

    #[test]
    fn labels_fall_back_when_fields_are_missing() {
        let restaurant = Restaurant::default();
        assert_eq!(restaurant.price_label(), "Precio no disponible");
        assert_eq!(restaurant.cuisine_label(), "Restaurante");
        let restaurant = Restaurant { price: Some(12.5), cuisine_type: Some("Casera".to_string()), ..Default::default() };
        assert_eq!(restaurant.price_label(), "12.5€");
        assert_eq!(restaurant.cuisine_label(), "Casera");
    }

    #[test]
    fn count_label_agrees_in_number() {
        let one = SearchResult { count: 1, ..Default::default() };
        let two = SearchResult { count: 2, ..Default::default() };
        assert_eq!(one.count_label(), "1 resultado encontrados");
        assert_eq!(two.count_label(), "2 resultados encontrados");
    }

    #[test]
    fn facet_chips_are_grouped_by_name() {
        let mut facets = BTreeMap::new();
        facets.insert("tipologia".to_string(), vec![FacetCount { value: "India".to_string(), count: 2 }]);
        facets.insert("metadata_author".to_string(), vec![
            FacetCount { value: "Ana".to_string(), count: 3 },
            FacetCount { value: "Luis".to_string(), count: 1 },
        ]);
        let result = SearchResult { count: 5, facets, ..Default::default() };
        let chips = result.facet_chips();
        assert_eq!(chips.len(), 3);
        assert_eq!(chips[0].0, "metadata_author");
        assert_eq!(chips[1].1.value, "Luis");
        assert_eq!(chips[2].0, "tipologia");
    }
}
