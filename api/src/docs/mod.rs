//! Docs module
//!
//! API documentation generated from the route table.

pub mod openapi;
pub mod renderer;

pub use openapi::openapi_document;
pub use renderer::render_docs_page;

pub const API_TITLE: &str = "Auto Bazaar API";
pub const API_DESCRIPTION: &str = "API for the Auto Bazaar car dealership chatbot";
