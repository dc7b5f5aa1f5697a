// fetcher.rs
use crate::bcpao::models::{AccountDetail, SearchHit};
use crate::bcpao::transport::HttpTransport;
use crate::bcpao::BcpaoError;
use crate::config::FetcherConfig;
use crate::domain::{AccountInfo, AccountMatch};
use serde::de::DeserializeOwned;
use url::Url;

/// Smallest page that can still tell a single match from several.
const MIN_RESOLVE_LIMIT: usize = 2;

/// Looks up Brevard County Property Appraiser accounts by street address
/// and normalizes their account records.
///
/// Holds no mutable state, so a single fetcher can serve concurrent calls.
pub struct BcpaoDataFetcher<T: HttpTransport = reqwest::Client> {
    transport: T,
    api_base: Url,
    search_limit: usize,
}

impl<T: HttpTransport> BcpaoDataFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &FetcherConfig::default())
    }

    pub fn with_config(transport: T, config: &FetcherConfig) -> Self {
        Self {
            transport,
            api_base: config.api_base.clone(),
            search_limit: config.search_limit,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves an address to exactly one account, failing with
    /// `NoResults` or `Ambiguous` otherwise.
    pub async fn find_matching_account(&self, address: &str) -> Result<u64, BcpaoError> {
        self.resolve_account(address).await?.into_account(address)
    }

    /// Same search as `find_matching_account`, but hands back the outcome
    /// instead of turning "zero" and "many" into errors. The page size never
    /// drops below two, otherwise a capped search would hide ambiguity.
    pub async fn resolve_account(&self, address: &str) -> Result<AccountMatch, BcpaoError> {
        let limit = self.search_limit.max(MIN_RESOLVE_LIMIT);
        let accounts = self.find_matching_accounts(address, limit).await?;
        let outcome = AccountMatch::from_candidates(accounts);
        tracing::info!(address, ?outcome, "resolved address");
        Ok(outcome)
    }

    /// Account numbers for every active account matching `address`, in the
    /// order the API returns them. An empty address yields an empty list
    /// without touching the network.
    pub async fn find_matching_accounts(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<u64>, BcpaoError> {
        if address.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = self.search_url(address, limit)?;
        let hits: Vec<SearchHit> = self.get_json(&url).await?;

        hits.iter()
            .map(|hit| {
                hit.account
                    .to_u64()
                    .map_err(|e| BcpaoError::malformed(&url, e))
            })
            .collect()
    }

    /// Fetches one account record and folds it into an `AccountInfo`.
    pub async fn get_account_info(&self, account: u64) -> Result<AccountInfo, BcpaoError> {
        let url = self.account_url(account)?;
        let detail: AccountDetail = self.get_json(&url).await?;

        AccountInfo::from_account_detail(&detail).map_err(|e| BcpaoError::malformed(&url, e))
    }

    /// `{api_base}search?address=..&activeonly=true&size=..&page=1`
    fn search_url(&self, address: &str, limit: usize) -> Result<Url, BcpaoError> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("activeonly", "true")
            .append_pair("size", &limit.to_string())
            .append_pair("page", "1");
        Ok(url)
    }

    /// `{api_base}account/{account}`
    fn account_url(&self, account: u64) -> Result<Url, BcpaoError> {
        self.endpoint(&format!("account/{account}"))
    }

    fn endpoint(&self, path: &str) -> Result<Url, BcpaoError> {
        self.api_base
            .join(path)
            .map_err(|e| BcpaoError::Config(format!("Invalid endpoint '{path}': {e}")))
    }

    async fn get_json<R: DeserializeOwned>(&self, url: &Url) -> Result<R, BcpaoError> {
        tracing::debug!(%url, "GET");

        let resp = self.transport.fetch(url).await?;

        if !resp.status.is_success() {
            tracing::warn!(%url, status = %resp.status, "non-success response");
            return Err(BcpaoError::RemoteRequest {
                url: url.to_string(),
                status: resp.status.as_u16(),
            });
        }

        serde_json::from_str(&resp.body).map_err(|e| BcpaoError::malformed(url, e))
    }
}
