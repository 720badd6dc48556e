//! Interface adapters: REST API and text reports

pub mod http;
pub mod report;

pub use http::create_api_router;
