// Reusable components live here.

pub mod cascade_select;
pub mod error_banner;
pub mod feedback_modal;
pub mod header;
pub mod loading_spinner;
pub mod pagination;
pub mod raw_html;
