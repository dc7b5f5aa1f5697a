// transport.rs
use crate::bcpao::BcpaoError;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use url::Url;

/// Status and raw body of one GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// The HTTP session the fetcher is handed. Connection pooling, TLS, timeouts
/// and shutdown all belong to the implementor, never to the fetcher.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<HttpResponse, BcpaoError>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn fetch(&self, url: &Url) -> Result<HttpResponse, BcpaoError> {
        let resp = self
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        Ok(HttpResponse { status, body })
    }
}
