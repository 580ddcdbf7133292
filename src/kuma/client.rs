//! KUMA HTTP client for API interactions

use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{api, defaults};
use crate::kuma::connection::Connection;
use crate::kuma::envelope::{Envelope, Outcome};
use crate::kuma::traits::PaginatedResponse;

/// Query parameters of a request; repeated keys are sent as repeated pairs
pub type Query<'a> = [(&'a str, String)];

/// KUMA Core API client
///
/// Owns one immutable `Connection`. Every operation borrows the client, so a
/// session is passed explicitly to whatever needs it.
pub struct KumaClient {
    client: Client,
    connection: Connection,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
    /// Per-request timeout
    timeout: Duration,
    /// Records per full page
    page_limit: usize,
}

/// HTTP client shared by every session
///
/// Certificate validation is disabled: KUMA Core ships with a self-signed
/// certificate.
fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .danger_accept_invalid_certs(true)
        .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!("Falling back to a default HTTP client: {}", e);
            Client::new()
        })
}

impl KumaClient {
    /// Create a new client for the given connection
    pub fn new(connection: Connection, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            connection,
            base_url_override: None,
            timeout,
            page_limit: api::PAGE_LIMIT,
        }
    }

    /// Create a client with custom base URL (mock servers, plain-HTTP proxies)
    pub fn with_base_url(connection: Connection, base_url: &str, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            connection,
            base_url_override: Some(base_url.trim_end_matches('/').to_string()),
            timeout,
            page_limit: api::PAGE_LIMIT,
        }
    }

    /// Override the number of records per full page (at least 1)
    pub fn with_page_limit(mut self, limit: usize) -> Self {
        self.page_limit = limit.max(1);
        self
    }

    pub fn page_limit(&self) -> usize {
        self.page_limit
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        self.connection.base_url()
    }

    /// Full URL for an API path with URL-encoded query parameters
    pub(crate) fn url(&self, path: &str, query: &Query<'_>) -> String {
        let mut url = format!("{}{}", self.base_url(), path);
        if !query.is_empty() {
            let parts: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&parts.join("&"));
        }
        url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(
            "Authorization",
            format!("Bearer {}", self.connection.token()),
        )
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Send a request and wrap the result in an envelope
    ///
    /// The response is returned only for 200/204; for any other status the
    /// body is consumed into the error details.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> (Envelope, Option<Response>) {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request failed: {}", e);
                return (Envelope::Error(e.to_string()), None);
            }
        };

        let status = response.status().as_u16();
        match status {
            200 | 204 => {
                debug!("Response status: {}", status);
                (Envelope::Ok, Some(response))
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                warn!("API returned status {}", status);
                (Envelope::from_status(status, &body), None)
            }
        }
    }

    /// GET a single JSON document
    ///
    /// Returns `T::default()` with an error envelope when the call fails or
    /// the body cannot be parsed.
    pub(crate) async fn fetch_json<T>(&self, path: &str, query: &Query<'_>, context: &str) -> Outcome<T>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.url(path, query);
        debug!("Fetching {} from: {}", context, url);

        let (envelope, response) = self.execute(self.get(&url)).await;
        let Some(response) = response else {
            return Outcome::new(envelope, T::default());
        };

        match read_json::<T>(response).await {
            Ok(Some(value)) => Outcome::ok(value),
            Ok(None) => Outcome::ok(T::default()),
            Err(e) => Outcome::error(format!("Failed to parse {}: {}", context, e)),
        }
    }

    /// Fetch all pages of a list endpoint
    ///
    /// Requests `page=1, 2, ...` sequentially, appending each page's records,
    /// until a page holds fewer records than the page limit or a call fails.
    /// The returned envelope is the one of the last call made. On failure the
    /// payload holds the records of the pages fetched before it.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/alerts")
    /// * `query` - Query parameters; `page` is appended per request
    /// * `context` - Context for log and error messages (e.g., "alerts")
    ///
    /// # Type Parameters
    /// * `T` - The record type (e.g., Alert, Tenant)
    /// * `R` - The page shape that implements PaginatedResponse<T>
    pub async fn fetch_all_pages<T, R>(
        &self,
        path: &str,
        query: &Query<'_>,
        context: &str,
    ) -> Outcome<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let mut items: Vec<T> = Vec::new();
        let mut envelope = Envelope::Ok;
        let mut page: usize = 1;
        let mut last_count = self.page_limit;

        while last_count == self.page_limit {
            let mut page_query = query.to_vec();
            page_query.push(("page", page.to_string()));
            let url = self.url(path, &page_query);

            debug!("Fetching {} page {} from: {}", context, page, url);

            let (page_envelope, response) = self.execute(self.get(&url)).await;
            envelope = page_envelope;
            let Some(response) = response else {
                break;
            };

            match read_json::<R>(response).await {
                Ok(Some(resp)) => {
                    let batch = resp.into_data();
                    debug!("Page {} returned {} {}", page, batch.len(), context);
                    last_count = batch.len();
                    items.extend(batch);
                    page += 1;
                }
                // No content: nothing more to fetch
                Ok(None) => break,
                Err(e) => {
                    envelope = Envelope::Error(format!(
                        "Failed to parse {} (page {}): {}",
                        context, page, e
                    ));
                    break;
                }
            }
        }

        debug!("Fetched {} {} in total", items.len(), context);
        Outcome::new(envelope, items)
    }
}

/// Read a JSON body; `None` for an empty body (204 No Content)
async fn read_json<T>(response: Response) -> std::result::Result<Option<T>, String>
where
    T: DeserializeOwned,
{
    let body = response.bytes().await.map_err(|e| e.to_string())?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&body)
        .map(Some)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
impl KumaClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        let connection = Connection::new("mock.kuma.local", "7223", "test-token").unwrap();
        Self::with_base_url(connection, base_url, Duration::from_secs(defaults::TIMEOUT_SECS))
    }
}


#[cfg(test)]
mod pagination_tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug, Clone)]
    struct TestItem {
        id: String,
    }

    fn items(start: usize, count: usize) -> serde_json::Value {
        let items: Vec<serde_json::Value> = (start..start + count)
            .map(|i| serde_json::json!({ "id": format!("item-{}", i) }))
            .collect();
        serde_json::Value::Array(items)
    }

    async fn mount_page(server: &MockServer, page: &str, body: serde_json::Value, expected: u64) {
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(expected)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_single_short_page() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri()).with_page_limit(3);

        mount_page(&mock_server, "1", items(0, 2), 1).await;

        let outcome = client
            .fetch_all_pages::<TestItem, Vec<TestItem>>("/items", &[], "items")
            .await;

        assert!(outcome.is_ok());
        assert_eq!(outcome.payload.len(), 2);
    }

    #[tokio::test]
    async fn test_full_pages_then_short_page_in_order() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri()).with_page_limit(2);

        mount_page(&mock_server, "1", items(0, 2), 1).await;
        mount_page(&mock_server, "2", items(2, 2), 1).await;
        mount_page(&mock_server, "3", items(4, 1), 1).await;

        let outcome = client
            .fetch_all_pages::<TestItem, Vec<TestItem>>("/items", &[], "items")
            .await;

        assert!(outcome.is_ok());
        let ids: Vec<&str> = outcome.payload.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["item-0", "item-1", "item-2", "item-3", "item-4"]);

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
    }

    #[tokio::test]
    async fn test_exact_multiple_needs_trailing_empty_page() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri()).with_page_limit(2);

        mount_page(&mock_server, "1", items(0, 2), 1).await;
        mount_page(&mock_server, "2", items(2, 2), 1).await;
        mount_page(&mock_server, "3", items(4, 0), 1).await;

        let outcome = client
            .fetch_all_pages::<TestItem, Vec<TestItem>>("/items", &[], "items")
            .await;

        assert!(outcome.is_ok());
        assert_eq!(outcome.payload.len(), 4);
    }

    #[tokio::test]
    async fn test_error_page_stops_pagination() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri()).with_page_limit(2);

        mount_page(&mock_server, "1", items(0, 2), 1).await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
            .expect(1)
            .mount(&mock_server)
            .await;
        mount_page(&mock_server, "3", items(4, 1), 0).await;

        let outcome = client
            .fetch_all_pages::<TestItem, Vec<TestItem>>("/items", &[], "items")
            .await;

        assert!(!outcome.is_ok());
        assert_eq!(
            outcome.envelope.details(),
            "Status code: 500. Details: internal failure"
        );
        // Records of the successful first page are kept
        assert_eq!(outcome.payload.len(), 2);
        assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_error_on_first_page() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&mock_server)
            .await;

        let outcome = client
            .fetch_all_pages::<TestItem, Vec<TestItem>>("/items", &[], "items")
            .await;

        assert!(!outcome.is_ok());
        assert!(outcome.envelope.details().contains("403"));
        assert!(outcome.payload.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_page_is_an_error() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let outcome = client
            .fetch_all_pages::<TestItem, Vec<TestItem>>("/items", &[], "items")
            .await;

        assert!(!outcome.is_ok());
        assert!(outcome.envelope.details().contains("Failed to parse items (page 1)"));
    }

    #[tokio::test]
    async fn test_caller_query_params_are_kept() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/items"))
            .and(query_param("kind", "correlator"))
            .and(query_param("page", "1"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(items(0, 1)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client
            .fetch_all_pages::<TestItem, Vec<TestItem>>(
                "/items",
                &[("kind", "correlator".to_string())],
                "items",
            )
            .await;

        assert!(outcome.is_ok());
        assert_eq!(outcome.payload.len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_envelope() {
        // Nothing listens on port 9 (discard) in the test environment
        let client = KumaClient::test_client("http://127.0.0.1:9");

        let outcome = client
            .fetch_all_pages::<TestItem, Vec<TestItem>>("/items", &[], "items")
            .await;

        assert!(!outcome.is_ok());
        assert!(!outcome.envelope.details().is_empty());
        assert!(outcome.payload.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_json_no_content() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/doc"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let outcome = client
            .fetch_json::<Option<serde_json::Value>>("/doc", &[], "document")
            .await;

        assert!(outcome.is_ok());
        assert!(outcome.payload.is_none());
    }

    #[tokio::test]
    async fn test_base_url_override_applies_timeout() {
        let mock_server = MockServer::start().await;
        let connection = Connection::new("mock.kuma.local", "7223", "test-token").unwrap();
        let client =
            KumaClient::with_base_url(connection, &mock_server.uri(), Duration::from_millis(200));

        Mock::given(method("GET"))
            .and(path("/doc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": "x"}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let outcome = client
            .fetch_json::<Option<serde_json::Value>>("/doc", &[], "document")
            .await;

        assert!(!outcome.is_ok());
        assert!(outcome.payload.is_none());
    }
}
