//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSettings};
use dioxus_free_icons::icons::md_maps_icons::MdRestaurantMenu;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1E293B;
                    padding: 16px;
                    box-sizing: border-box;
                    align-items: center;
                ",

                // top part
                NavbarTopLogo{},
                NavbarTopIconLinks{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; height: 100%; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            span {
                style: "color: #FACC15;",
                Icon { icon: MdRestaurantMenu, style: "width: 34px; height: 34px;" }
            }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Buscar" }
            IconLink { to: Route::AdminPage { }, icon: MdSettings, label: "Administración" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        span {
            title: "{label}",
            Link {
                to: to,
                span {
                    style:"color:white;",
                    Icon { icon: icon, style: "width: 26px; height: 26px;" }
                }
            }
        }
    }
}
