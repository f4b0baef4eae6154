//! Search API entry points and module exports.

mod search_restaurants;
pub use search_restaurants::search_restaurants;
