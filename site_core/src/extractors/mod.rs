//! Extractors whose rejections use the app's JSON error body

pub mod form;
pub mod query;

pub use form::ApiForm;
pub use query::ApiQuery;
