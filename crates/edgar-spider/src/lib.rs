pub mod config;
pub mod error;
pub mod fetch;
pub mod filing;
pub mod progress;

/// Interactive-data resolution against the [EDGAR] company browser; listing pages, interactive-data
/// pages and the Excel exports of the financial statements they link to.
///
/// [EDGAR]: https://www.sec.gov/cgi-bin/browse-edgar
pub mod edgar;

pub use config::EdgarConfig;
pub use error::{Result, SpiderError};
pub use fetch::{build_client, Fetch, HttpFetcher};
pub use filing::{DocumentReference, FilingReference};

/// Shortcut for required HTTP elements.
pub(crate) mod http {
    pub(crate) use reqwest::Client as HttpClient;
    pub(crate) use url::Url;
}

/// Human readable elapsed time, for log lines.
pub fn time_elapsed(time: std::time::Instant) -> String {
    format!("time elapsed: {:.3}s", time.elapsed().as_secs_f64())
}
