pub mod handlers;
pub mod header;
pub mod prediction_form;
pub mod results;
pub mod theme_toggle;
pub mod utils;
