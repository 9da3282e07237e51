pub mod document;
pub mod fetch;
