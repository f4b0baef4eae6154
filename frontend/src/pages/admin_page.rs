//! Admin panel with the menu upload form.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::MdArrowBack, md_toggle_icons::MdCheckBox, md_alert_icons::MdErrorOutline}};

use crate::{
    api::{api_error_from_server_fn, search_api::get_api_status},
    components::{suspend_boundary::SuspendWrapper, upload_components::upload_form::UploadForm},
    routes::Route,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Upload,
    Manage,
}

impl AdminTab {
    fn label(self) -> &'static str {
        match self {
            AdminTab::Upload => "Subir Menús",
            AdminTab::Manage => "Gestionar Menús",
        }
    }
}

#[component]
pub fn AdminPage() -> Element {
    let active_tab = use_signal(|| AdminTab::Upload);

    rsx! {
        Title { "Panel de Administración" }
        div {
            id: "x-admin-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 100%;
                max-width: 960px;
                margin: 0 auto;
                padding: 32px 40px;
                box-sizing: border-box;
            ",

            div {
                style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between;",
                h1 { style: "font-size: 30px; font-weight: 700; color: #1F2937; margin: 0;", "Panel de Administración" }
                Link {
                    to: Route::HomePage {},
                    class: "x-link-button",
                    Icon { icon: MdArrowBack, style: "width: 18px; height: 18px;" }
                    span { "Volver" }
                }
            }

            SuspendWrapper {
                ApiStatusLine {}
            }

            div {
                style: "background: white; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08); overflow: hidden;",
                div {
                    style: "display: flex; flex-direction: row; border-bottom: 1px solid #E5E7EB;",
                    TabButton { tab: AdminTab::Upload, active_tab }
                    TabButton { tab: AdminTab::Manage, active_tab }
                }
                div {
                    style: "padding: 24px;",
                    match active_tab() {
                        AdminTab::Upload => rsx! { UploadTab {} },
                        AdminTab::Manage => rsx! { ManageTab {} },
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: AdminTab, mut active_tab: Signal<AdminTab>) -> Element {
    let selected = active_tab() == tab;
    let border = if selected { "#2563EB" } else { "transparent" };
    let color = if selected { "#2563EB" } else { "#6B7280" };
    rsx! {
        button {
            style: "
                padding: 12px 24px;
                background: none;
                border: none;
                border-bottom: 2px solid {border};
                color: {color};
                font-weight: 500;
                cursor: pointer;
            ",
            onclick: move |_| active_tab.set(tab),
            "{tab.label()}"
        }
    }
}

#[component]
fn UploadTab() -> Element {
    rsx! {
        h2 { style: "font-size: 20px; font-weight: 600; color: #1F2937; margin: 0 0 8px 0;", "Subir nuevo menú" }
        p {
            style: "color: #4B5563; margin: 0 0 16px 0;",
            "Sube la carta de un restaurante en PDF o imagen. El archivo se indexará para que aparezca en las búsquedas."
        }
        UploadForm {}
    }
}

#[component]
fn ManageTab() -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 48px 0; color: #6B7280;",
            p { style: "margin: 0;", "La gestión de menús estará disponible próximamente." }
        }
    }
}

/// One-line health check of the menu API.
#[component]
fn ApiStatusLine() -> Element {
    let status = use_resource(move || get_api_status()).suspend()?.cloned();
    match status.map_err(api_error_from_server_fn) {
        Ok(status) if status.is_ok() => rsx! {
            div {
                style: "display: flex; align-items: center; gap: 6px; font-size: 14px; color: #15803D;",
                Icon { icon: MdCheckBox, style: "width: 18px; height: 18px;" }
                "API conectada: {status.message}"
            }
        },
        Ok(status) => rsx! {
            div {
                style: "display: flex; align-items: center; gap: 6px; font-size: 14px; color: #B45309;",
                Icon { icon: MdErrorOutline, style: "width: 18px; height: 18px;" }
                "API con estado \"{status.status}\": {status.message}"
            }
        },
        Err(err) => rsx! {
            div {
                style: "display: flex; align-items: center; gap: 6px; font-size: 14px; color: #B91C1C;",
                Icon { icon: MdErrorOutline, style: "width: 18px; height: 18px;" }
                "API no disponible ({err})"
            }
        },
    }
}
