//! Facet chips shown above the result grid. Display only.

use common::search_result::FacetCount;
use dioxus::prelude::*;

#[component]
pub fn SearchFacetChips(chips: Vec<(String, FacetCount)>) -> Element {
    if chips.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            id: "x-search-facet-chips",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 8px;
                margin-bottom: 24px;
            ",
            for (facet_name, facet) in chips {
                span {
                    key: "{facet_name}-{facet.value}",
                    style: "
                        display: inline-flex;
                        align-items: center;
                        padding: 4px 12px;
                        border-radius: 9999px;
                        font-size: 14px;
                        font-weight: 500;
                        background: #DBEAFE;
                        color: #1E40AF;
                    ",
                    "{facet_name}: {facet.value} ({facet.count})"
                }
            }
        }
    }
}
