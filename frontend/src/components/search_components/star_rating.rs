use common::rating::stars;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdStar, MdStarBorder}};

/// Five stars, `round(rating)` of them filled.
#[component]
pub fn StarRating(rating: f64) -> Element {
    let fill = stars(rating);
    rsx! {
        div {
            style: "display: flex; flex-direction: row; color: #FACC15;",
            title: "{rating}/5",
            for i in 0..fill.filled {
                Icon { key: "full-{i}", icon: MdStar, style: "width: 20px; height: 20px;" }
            }
            for i in 0..fill.outline {
                Icon { key: "empty-{i}", icon: MdStarBorder, style: "width: 20px; height: 20px;" }
            }
        }
    }
}
