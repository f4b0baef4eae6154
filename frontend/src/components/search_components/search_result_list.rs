//! Result header and card grid for a settled search.

use common::search_result::{Restaurant, SearchResult};
use dioxus::prelude::*;

use crate::components::search_components::{search_facets::SearchFacetChips, search_result_item_card::RestaurantCard};

#[component]
pub fn SearchResultList(result: SearchResult) -> Element {
    let count_label = result.count_label();
    let chips = result.facet_chips();
    let query_echoed = result.query_echoed.clone();
    let cards: Vec<(String, Restaurant)> = result
        .items
        .into_iter()
        .enumerate()
        .map(|(index, restaurant)| (restaurant.card_key(index), restaurant))
        .collect();

    rsx! {
        div {
            id: "x-search-result-list",
            style: "display: flex; flex-direction: column; width: 100%;",

            div {
                style: "margin-bottom: 16px;",
                h2 {
                    style: "font-size: 24px; font-weight: 700; color: #1F2937; margin: 0 0 4px 0;",
                    "{count_label}"
                }
                if !query_echoed.is_empty() {
                    p {
                        style: "font-size: 14px; color: #6B7280; margin: 0;",
                        "Búsqueda: \"{query_echoed}\""
                    }
                }
            }

            SearchFacetChips { chips }

            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 24px;
                ",
                for (card_key, restaurant) in cards {
                    RestaurantCard {
                        key: "{card_key}",
                        restaurant,
                    }
                }
            }
        }
    }
}
