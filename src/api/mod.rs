mod client;
mod error;

pub use client::CatalogClient;
pub use error::ApiError;
