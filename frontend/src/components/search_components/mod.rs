pub mod search_form;
pub mod search_facets;
pub mod search_result_list;
pub mod search_result_item_card;
pub mod star_rating;
