use common::{
    search_query::SearchQuery,
    search_state::{IDLE_HINT, SearchPhase},
};
use dioxus::{logger::tracing, prelude::*};

use crate::{
    api::{api_error_from_server_fn, search_api::search_restaurants},
    components::{
        advisory_banner::AdvisoryBanner,
        search_components::{search_form::SearchForm, search_result_list::SearchResultList},
        suspend_boundary::LoadingIndicator,
    },
};


/// Home page: hero with the search form, then the outcome of the last search.
#[component]
pub fn HomePage() -> Element {
    let mut phase = use_signal(SearchPhase::default);

    let on_search = move |query: SearchQuery| {
        if !phase.write().begin() {
            tracing::warn!("search ignored, another one is in flight");
            return;
        }
        spawn(async move {
            tracing::info!("searching for {:?}", query);
            let outcome = search_restaurants(query).await.map_err(api_error_from_server_fn);
            match &outcome {
                Ok(result) => tracing::info!("search returned {} of {} results", result.items.len(), result.count),
                Err(err) => tracing::error!("search failed: {err}"),
            }
            phase.write().finish(outcome);
        });
    };

    let is_searching = phase.read().is_in_flight();

    rsx! {
        Title { "Buscador de Menús" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
                background: #F9FAFB;
                box-sizing: border-box;
            ",

            div {
                id: "x-home-hero",
                style: "
                    display:flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 16px;
                    padding: 48px 40px;
                    background: linear-gradient(135deg, #2563EB 0%, #4F46E5 100%);
                    color: white;
                    text-align: center;
                ",
                MainTitle {}
                SubText {}
                div {
                    style: "
                        width: 100%;
                        max-width: 900px;
                        background: white;
                        border-radius: 12px;
                        padding: 24px;
                        box-sizing: border-box;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                        color: #111827;
                    ",
                    SearchForm { on_search, is_searching }
                }
            }

            div {
                id: "x-home-results",
                style: "padding: 32px 40px; box-sizing: border-box;",
                SearchOutcome { phase }
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        h1 {
            style: "
                font-size: 40px;
                font-weight: 700;
                letter-spacing: -0.02em;
                margin: 0;
            ",
            "Encuentra los mejores restaurantes cerca de ti"
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        p {
            style: "
                font-size: 20px;
                color: rgba(255,255,255,0.9);
                margin: 0;
            ",
            "Busca por tipo de cocina, ubicación o platos favoritos"
        }
    }
}

#[component]
fn SearchOutcome(phase: ReadSignal<SearchPhase>) -> Element {
    let phase = phase.read();
    if let Some((kind, text)) = phase.advisory() {
        return rsx! {
            AdvisoryBanner { kind, text: text.to_string() }
        };
    }
    match &*phase {
        SearchPhase::Searching => rsx! { LoadingIndicator {} },
        SearchPhase::Results(result) => rsx! { SearchResultList { result: result.clone() } },
        _ => rsx! {
            div {
                style: "text-align: center; padding: 48px 0; color: #6B7280; font-size: 18px;",
                "{IDLE_HINT}"
            }
        },
    }
}
