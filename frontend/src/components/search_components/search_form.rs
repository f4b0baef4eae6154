//! Search box with cuisine, rating and price filters.

use common::{
    search_const::{MAX_PRICE, MAX_RATING, RATING_STEP},
    search_query::{CuisineType, SearchFormState, SearchQuery},
    search_state::{EMPTY_QUERY_ADVISORY, INVALID_FILTERS_ADVISORY},
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

/// Emits a normalized [`SearchQuery`] on submit. Blank text never reaches `on_search`.
#[component]
pub fn SearchForm(on_search: Callback<SearchQuery>, is_searching: ReadSignal<bool>) -> Element {
    let mut form = use_signal(SearchFormState::default);
    let mut validation_message = use_signal(|| None::<&'static str>);

    let submit = move |event: Event<FormData>| {
        event.prevent_default();
        if is_searching() {
            return;
        }
        let query = form.read().to_query();
        match query {
            Ok(query) => {
                validation_message.set(None);
                on_search.call(query);
            }
            Err(err) => {
                tracing::info!("search not sent: {err}");
                let message = if form.read().text.trim().is_empty() { EMPTY_QUERY_ADVISORY } else { INVALID_FILTERS_ADVISORY };
                validation_message.set(Some(message));
            }
        }
    };

    rsx! {
        form {
            onsubmit: submit,
            style: "width: 100%;",
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                    text-align: left;
                ",
                SearchTextInput { form }
                div {
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 16px;
                    ",
                    CuisineSelect { form }
                    MinRatingSlider { form }
                    MaxPriceSlider { form }
                }
                if let Some(message) = validation_message() {
                    div {
                        role: "alert",
                        style: "color: #B91C1C; font-size: 14px;",
                        "{message}"
                    }
                }
                div {
                    style: "display: flex; justify-content: flex-end;",
                    button {
                        r#type: "submit",
                        disabled: is_searching(),
                        class: "x-primary-button",
                        if is_searching() { "Buscando..." } else { "Buscar" }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchTextInput(mut form: Signal<SearchFormState>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                padding: 10px 14px;
                background: white;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #9CA3AF;" }
            input {
                r#type: "text",
                placeholder: "Buscar menús, platos, restaurantes...",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 16px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{form.read().text}",
                oninput: move |e| {
                    form.write().text = e.value();
                },
            }
        }
    }
}

#[component]
fn CuisineSelect(mut form: Signal<SearchFormState>) -> Element {
    let selected = form.read().cuisine_type;
    rsx! {
        div {
            label {
                r#for: "tipologia",
                class: "x-filter-label",
                "Tipología"
            }
            select {
                id: "tipologia",
                class: "x-filter-select",
                onchange: move |e| {
                    form.write().set_cuisine_from_select(&e.value());
                },
                option { value: "", selected: selected.is_none(), "Todas" }
                for cuisine in CuisineType::ALL {
                    option {
                        key: "{cuisine}",
                        value: cuisine.as_param(),
                        selected: selected == Some(cuisine),
                        "{cuisine.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn MinRatingSlider(mut form: Signal<SearchFormState>) -> Element {
    let min_rating = form.read().min_rating;
    rsx! {
        div {
            label {
                r#for: "puntuacion",
                class: "x-filter-label",
                "Puntuación mínima: {min_rating}"
            }
            input {
                r#type: "range",
                id: "puntuacion",
                min: "0",
                max: "{MAX_RATING}",
                step: "{RATING_STEP}",
                value: "{min_rating}",
                style: "width: 100%;",
                oninput: move |e| {
                    if let Ok(value) = e.value().parse::<f64>() {
                        form.write().min_rating = value;
                    }
                },
            }
        }
    }
}

#[component]
fn MaxPriceSlider(mut form: Signal<SearchFormState>) -> Element {
    let max_price = form.read().max_price;
    rsx! {
        div {
            label {
                r#for: "precio",
                class: "x-filter-label",
                "Precio máximo: {max_price}€"
            }
            input {
                r#type: "range",
                id: "precio",
                min: "0",
                max: "{MAX_PRICE}",
                step: "1",
                value: "{max_price}",
                style: "width: 100%;",
                oninput: move |e| {
                    if let Ok(value) = e.value().parse::<u32>() {
                        form.write().max_price = value;
                    }
                },
            }
        }
    }
}
