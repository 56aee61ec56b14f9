/// Fatal probe failures. Anything here ends the process with a non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("invalid server url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to make request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
