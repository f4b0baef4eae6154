//! Restaurant card: image, badges, excerpt, rating and the dish list.

use common::{rating::rating_label, search_result::{DishRating, Restaurant}};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_communication_icons::MdLocationOn, md_navigation_icons::{MdExpandLess, MdExpandMore}}};

use crate::components::search_components::star_rating::StarRating;

#[component]
pub fn RestaurantCard(restaurant: ReadSignal<Restaurant>) -> Element {
    let mut show_all_dishes = use_signal(|| false);
    let Restaurant { image_url, location, excerpt, rating, .. } = restaurant.read().clone();
    let display_name = restaurant.read().display_name();
    let cuisine_label = restaurant.read().cuisine_label();
    let price_label = restaurant.read().price_label();

    rsx! {
        div {
            class: "x-restaurant-card",
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                border-radius: 8px;
                box-shadow: 0 2px 8px rgba(0,0,0,0.08);
                overflow: hidden;
            ",
            CardImage { image_url, alt: cuisine_label.clone() }

            div {
                style: "padding: 20px; display: flex; flex-direction: column; gap: 8px;",

                // Row 1: CUISINE BADGE - PRICE
                div {
                    style: "display: flex; flex-direction: row; justify-content: space-between; align-items: center;",
                    span {
                        style: "
                            background: #DBEAFE;
                            color: #1E40AF;
                            font-size: 12px;
                            font-weight: 600;
                            padding: 2px 10px;
                            border-radius: 4px;
                        ",
                        "{cuisine_label}"
                    }
                    span { style: "color: #4B5563; font-weight: 500;", "{price_label}" }
                }

                h3 {
                    style: "font-size: 20px; font-weight: 700; color: #1F2937; margin: 0;",
                    "{display_name}"
                }

                if let Some(location) = location {
                    div {
                        style: "display: flex; align-items: center; gap: 4px; font-size: 14px; color: #4B5563;",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                        "{location}"
                    }
                }

                if let Some(excerpt) = excerpt {
                    p { class: "x-line-clamp-3", style: "color: #374151; margin: 0;", "{excerpt}" }
                }

                if let Some(rating) = rating {
                    div {
                        style: "display: flex; flex-direction: row; align-items: center; gap: 4px;",
                        StarRating { rating }
                        span { style: "font-size: 14px; color: #4B5563;", "{rating_label(rating)}" }
                    }
                }

                DishSection { restaurant, show_all_dishes }
            }
        }
    }
}

#[component]
fn CardImage(image_url: ReadSignal<Option<String>>, alt: String) -> Element {
    let mut image_failed = use_signal(|| false);
    match image_url() {
        Some(url) if !image_failed() => rsx! {
            img {
                src: "{url}",
                alt: "{alt}",
                style: "width: 100%; height: 192px; object-fit: cover;",
                onerror: move |_| {
                    image_failed.set(true);
                },
            }
        },
        _ => rsx! {
            div {
                style: "
                    width: 100%;
                    height: 192px;
                    background: #E5E7EB;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #9CA3AF;
                ",
                "Imagen no disponible"
            }
        },
    }
}

#[component]
fn DishSection(restaurant: ReadSignal<Restaurant>, mut show_all_dishes: Signal<bool>) -> Element {
    let restaurant = restaurant.read();
    if restaurant.dishes.is_empty() {
        return rsx! {};
    }
    let show_all = show_all_dishes();
    let visible: Vec<DishRating> = restaurant.visible_dishes(show_all).to_vec();
    let toggle_label = restaurant.dish_toggle_label(show_all);

    rsx! {
        div {
            h4 { style: "font-weight: 600; color: #1F2937; margin: 8px 0;", "Platos destacados:" }
            ul {
                style: "list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 8px;",
                for (index, dish) in visible.into_iter().enumerate() {
                    li {
                        key: "{dish.name}-{index}",
                        style: "display: flex; justify-content: space-between; align-items: center;",
                        span { style: "color: #374151;", "{dish.name}" }
                        StarRating { rating: dish.rating }
                    }
                }
            }
            if let Some(label) = toggle_label {
                button {
                    class: "x-link-button",
                    onclick: move |_| {
                        show_all_dishes.set(!show_all);
                    },
                    span { "{label}" }
                    if show_all {
                        Icon { icon: MdExpandLess, style: "width: 16px; height: 16px;" }
                    } else {
                        Icon { icon: MdExpandMore, style: "width: 16px; height: 16px;" }
                    }
                }
            }
        }
    }
}
