use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse {collection} fixtures: {source}")]
    Fixture {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Leptos configuration error: {0}")]
    Leptos(String),

    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
