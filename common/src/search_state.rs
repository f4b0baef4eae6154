//! State machine owned by the home page search controller.
//!
//! `Idle -> Searching -> {Results | Empty | Error} -> Searching -> ...`
//! Every settled state accepts a new search.

use serde::{Deserialize, Serialize};

use crate::{advisory::AdvisoryKind, api_error::ApiError, search_result::SearchResult};

pub const NO_RESULTS_ADVISORY: &str = "No se encontraron restaurantes con los criterios especificados. Intenta con otros filtros.";
pub const SEARCH_FAILED_ADVISORY: &str = "Ocurrió un error al buscar. Por favor, inténtalo de nuevo.";
pub const EMPTY_QUERY_ADVISORY: &str = "Escribe un término de búsqueda.";
pub const INVALID_FILTERS_ADVISORY: &str = "Revisa los filtros de búsqueda.";
pub const IDLE_HINT: &str = "Utiliza el buscador para encontrar restaurantes";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Results(SearchResult),
    /// The search succeeded but matched nothing.
    Empty(SearchResult),
    Error(ApiError),
}

impl SearchPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SearchPhase::Searching)
    }

    /// Moves to `Searching`. Returns `false`, leaving the state untouched, when
    /// a search is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = SearchPhase::Searching;
        true
    }

    /// Settles an in-flight search. Errors drop any previous results.
    pub fn finish(&mut self, outcome: Result<SearchResult, ApiError>) {
        *self = match outcome {
            Ok(result) if result.is_empty() => SearchPhase::Empty(result),
            Ok(result) => SearchPhase::Results(result),
            Err(err) => SearchPhase::Error(err),
        };
    }

    pub fn results(&self) -> Option<&SearchResult> {
        match self {
            SearchPhase::Results(result) => Some(result),
            _ => None,
        }
    }

    /// User-facing message for the current state, if any.
    pub fn advisory(&self) -> Option<(AdvisoryKind, &'static str)> {
        match self {
            SearchPhase::Empty(_) => Some((AdvisoryKind::Warning, NO_RESULTS_ADVISORY)),
            SearchPhase::Error(_) => Some((AdvisoryKind::Error, SEARCH_FAILED_ADVISORY)),
            _ => None,
        }
    }
}
