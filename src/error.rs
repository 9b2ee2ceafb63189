use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortHeaderError {
    #[error("invalid page address {address:?}: {source}")]
    PageAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid sort header config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SortHeaderError>;
