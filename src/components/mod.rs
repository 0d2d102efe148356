pub mod document_upload;
pub mod hero;
pub mod navbar;
pub mod results_preview;
pub mod search_section;
