use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON in {path}: {source}")]
    CatalogParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    CatalogSerialize(#[source] serde_json::Error),

    #[error("failed to write catalog {path}: {source}")]
    CatalogWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid listing year {year}: no such calendar year")]
    InvalidDateYear { year: i32 },
}
