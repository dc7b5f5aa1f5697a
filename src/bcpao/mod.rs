pub mod fetcher;
mod fetcher_error;
pub mod models;
pub mod transport;

pub use fetcher::BcpaoDataFetcher;
pub use fetcher_error::BcpaoError;
pub use transport::{HttpResponse, HttpTransport};
