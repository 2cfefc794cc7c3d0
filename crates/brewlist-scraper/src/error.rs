use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid {header} header value")]
    InvalidHeader {
        header: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error(
        "cannot determine a FIAS id for city \"{input}\"; \
         use --city with a known name (Москва / Санкт-Петербург) \
         or pass --fias-id <UUID> for any other city"
    )]
    UnresolvedCity { input: String },

    #[error("city info returned no cityId for fiasId={fias_id}")]
    MissingCityId { fias_id: String },

    #[error("category \"{name}\" not found in the category tree")]
    CategoryNotFound { name: String },

    #[error("goods search exceeded {max_pages} pages; the continuation token may be cycling")]
    PaginationLimit { max_pages: usize },
}
