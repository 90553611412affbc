pub mod anchor;
pub mod car_card;
pub mod card;
pub mod carousel;
pub mod cars_grid;
pub mod contact_form;
pub mod filters_bar;
pub mod footer;
pub mod navbar;
pub mod search_form;
pub mod submit_button;
pub mod toast;
