//! HTTP client for the retail chain's mobile-app middle API.

mod search;

use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::category::CategoryTreeResponse;
use crate::error::ScraperError;
use crate::types::{
    CityInfoRequest, CityInfoResponse, GoodsSearchRequest, GoodsSearchResponse, Pagination, Sort,
};

/// Production origin of the mobile-app middle API.
pub const BASE_URL: &str = "https://middle-api.magnit.ru";

/// Per-request timeout used by the CLI.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size the mobile app uses for goods search.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pause between search pages. The only backpressure toward the upstream
/// service; there is no retry or adaptive rate limiting.
pub const DEFAULT_INTER_PAGE_DELAY_MS: u64 = 200;

/// Store profile the captured app session was scoped to.
pub(crate) const STORE_TYPE: &str = "market";
pub(crate) const CATALOG_TYPE: &str = "4";
pub(crate) const STORE_CODE: &str = "000";

/// Maximum number of search pages before returning an error. The original
/// contract only terminates on an empty page; this cap protects against a
/// cycling continuation token.
pub(crate) const MAX_PAGES: usize = 500;

/// HTTP client carrying a captured mobile-app session.
///
/// Every request leaves with the same six headers the app sends:
/// bearer `authorization`, `x-device-id`, `x-app-version`, `user-agent`,
/// JSON `content-type`, and JSON `accept`. Credentials are not validated at
/// construction; a stale token surfaces as an HTTP error from whichever
/// endpoint is called first.
pub struct MagnitClient {
    client: Client,
    base_url: String,
}

impl MagnitClient {
    /// Creates a client with the session headers permanently attached.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidHeader`] when a credential contains
    /// bytes that cannot appear in an HTTP header, and [`ScraperError::Http`]
    /// when the underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        token: &str,
        device_id: &str,
        app_version: &str,
        user_agent: &str,
        timeout_secs: u64,
    ) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();

        let mut authorization = header_value("authorization", &format!("bearer {token}"))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        headers.insert(
            HeaderName::from_static("x-device-id"),
            header_value("x-device-id", device_id)?,
        );
        headers.insert(
            HeaderName::from_static("x-app-version"),
            header_value("x-app-version", app_version)?,
        );
        headers.insert(USER_AGENT, header_value("user-agent", user_agent)?);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Points the client at a different API origin. Used by tests to target
    /// a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetches city information for a FIAS id via
    /// `POST /market/v2/city/info`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] — network failure.
    /// - [`ScraperError::UnexpectedStatus`] — non-2xx response.
    /// - [`ScraperError::Deserialize`] — body is not the expected JSON.
    pub async fn city_info(&self, fias_id: &str) -> Result<CityInfoResponse, ScraperError> {
        let url = format!("{}/market/v2/city/info", self.base_url);
        self.post_json(&url, &CityInfoRequest { fias_id }, "city info")
            .await
    }

    /// Fetches the full category tree for the captured store profile via
    /// `GET /v3/categories/store/{store}`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::city_info`].
    pub async fn category_tree(&self) -> Result<CategoryTreeResponse, ScraperError> {
        let url = format!("{}/v3/categories/store/{STORE_CODE}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("storetype", STORE_TYPE), ("catalogtype", CATALOG_TYPE)])
            .send()
            .await?;
        read_json(response, "category tree").await
    }

    /// Fetches one page of the goods search via `POST /v2/goods/search`.
    ///
    /// `token` is the continuation token from the previous page, or an empty
    /// string on the first call.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::city_info`].
    pub async fn search_page(
        &self,
        category_id: i64,
        city_id: &str,
        offset: u32,
        limit: u32,
        token: &str,
    ) -> Result<GoodsSearchResponse, ScraperError> {
        let url = format!("{}/v2/goods/search", self.base_url);
        let body = GoodsSearchRequest {
            catalog_type: CATALOG_TYPE,
            pagination: Pagination { limit, offset },
            sort: Sort {
                order: "desc",
                kind: "popularity",
            },
            store_code: STORE_CODE,
            store_type: STORE_TYPE,
            categories: vec![category_id],
            city_id,
            filters: Vec::new(),
            token,
        };
        self.post_json(&url, &body, "goods search page").await
    }

    async fn post_json<B, T>(&self, url: &str, body: &B, context: &str) -> Result<T, ScraperError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.client.post(url).json(body).send().await?;
        read_json(response, context).await
    }
}

fn header_value(header: &'static str, value: &str) -> Result<HeaderValue, ScraperError> {
    HeaderValue::from_str(value).map_err(|source| ScraperError::InvalidHeader { header, source })
}

/// Checks the HTTP status and deserializes the body, keeping the endpoint
/// name in the error context.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    context: &str,
) -> Result<T, ScraperError> {
    let status = response.status();
    let url = response.url().to_string();

    if !status.is_success() {
        return Err(ScraperError::UnexpectedStatus {
            status: status.as_u16(),
            url,
        });
    }

    let body = response.text().await?;
    serde_json::from_str::<T>(&body).map_err(|source| ScraperError::Deserialize {
        context: format!("{context} from {url}"),
        source,
    })
}
