pub mod envelope;
pub mod geo_filter;
pub mod list_query;
pub mod phone;
pub mod recipients;
pub mod settings;
pub mod source_state;
