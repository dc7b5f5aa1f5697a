use crate::bcpao::{BcpaoDataFetcher, BcpaoError, HttpResponse, HttpTransport};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use url::Url;

/// Canned responses keyed by URL path. Query strings are ignored for
/// matching but every requested URL is recorded for assertions.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, (StatusCode, String)>,
    failing: HashSet<String>,
    honour_size: bool,
    requested: Mutex<Vec<Url>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, status: StatusCode, body: impl Into<String>) -> Self {
        self.routes.insert(path.to_string(), (status, body.into()));
        self
    }

    pub fn ok(self, path: &str, body: impl Into<String>) -> Self {
        self.route(path, StatusCode::OK, body)
    }

    /// Requests to `path` fail at the transport level, the way a refused
    /// connection or timeout would.
    pub fn fail(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    /// Cut JSON array bodies down to the request's `size` parameter, like the
    /// real search endpoint does.
    pub fn honour_size(mut self) -> Self {
        self.honour_size = true;
        self
    }

    pub fn requested(&self) -> Vec<Url> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn fetch(&self, url: &Url) -> Result<HttpResponse, BcpaoError> {
        self.requested.lock().unwrap().push(url.clone());

        if self.failing.contains(url.path()) {
            return Err(transport_error().into());
        }

        let (status, mut body) = self
            .routes
            .get(url.path())
            .cloned()
            .unwrap_or_else(|| panic!("no mock route for {url}"));

        if self.honour_size {
            body = truncate_to_size(url, body);
        }

        Ok(HttpResponse { status, body })
    }
}

/// A genuine `reqwest::Error`, built without touching the network.
pub fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err()
}

fn truncate_to_size(url: &Url, body: String) -> String {
    let size = url
        .query_pairs()
        .find(|(k, _)| k == "size")
        .and_then(|(_, v)| v.parse::<usize>().ok());

    match (size, serde_json::from_str::<Value>(&body)) {
        (Some(size), Ok(Value::Array(mut items))) => {
            items.truncate(size);
            Value::Array(items).to_string()
        }
        _ => body,
    }
}

pub const SEARCH_PATH: &str = "/api/v1/search";

pub fn account_path(account: u64) -> String {
    format!("/api/v1/account/{account}")
}

pub fn fetcher(transport: MockTransport) -> BcpaoDataFetcher<MockTransport> {
    BcpaoDataFetcher::new(transport)
}
