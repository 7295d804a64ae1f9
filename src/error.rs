use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid host \"{host}\": {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Reading path list {path}: {source}")]
    ResourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parsing path list {path}: {source}")]
    ResourceParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
}
