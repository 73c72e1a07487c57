use crate::error::{Result, SpiderError};
use crate::http::Url;

/// Root of every EDGAR URL; relative hrefs are resolved against it.
pub const SEC_BASE_URL: &str = "https://www.sec.gov";

/// Company browser (the listing endpoint).
pub const LISTING_PATH: &str = "/cgi-bin/browse-edgar";

/// Quarterly reports.
pub const FORM_TYPE: &str = "10-Q";

/// Number of most recent filings requested from the listing endpoint.
pub const RESULT_COUNT: u32 = 100;

/// Filer used when the caller does not name one (Amazon.com, Inc.).
pub const DEFAULT_CIK: &str = "1018724";

// Page layout. A change to the EDGAR markup should only ever touch these.
pub const TABLE_CLASS: &str = "tableFile2";
pub const MARKER_ID: &str = "interactiveDataBtn";
pub const DATE_COLUMN: usize = 3;
pub const EXCEL_LABEL: &str = "View Excel Document";

/// Everything the resolvers need to know about the site they are talking to.
///
/// `EdgarConfig::default()` targets the public SEC site; `base_url` may be pointed elsewhere
/// (a mirror, or a local fixture server).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgarConfig {
    pub base_url: String,
    pub listing_path: String,
    pub form_type: String,
    pub count: u32,
    pub table_class: String,
    pub marker_id: String,
    pub date_column: usize,
    pub excel_label: String,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            base_url: SEC_BASE_URL.to_string(),
            listing_path: LISTING_PATH.to_string(),
            form_type: FORM_TYPE.to_string(),
            count: RESULT_COUNT,
            table_class: TABLE_CLASS.to_string(),
            marker_id: MARKER_ID.to_string(),
            date_column: DATE_COLUMN,
            excel_label: EXCEL_LABEL.to_string(),
        }
    }
}

impl EdgarConfig {
    /// Default configuration with a different site root.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// The site root without its trailing slash; site paths are appended to it verbatim.
    pub fn root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Absolutize a site path, e.g. the listing path or an href found on an EDGAR page.
    ///
    /// Paths starting with `/` are appended to the base URL as written, so a base with a path of
    /// its own (a mirror at `http://host/sec`) keeps it, and `..` segments or spaces in the href
    /// are carried over untouched. Hrefs that are already absolute are kept as they are; anything
    /// else is joined onto the base.
    pub fn resolve_href(&self, href: &str) -> Result<String> {
        let href = href.trim();
        if href.is_empty() {
            return Err(SpiderError::Parse("empty href".to_string()));
        }

        if href.starts_with('/') && !href.starts_with("//") {
            let url = format!("{}{href}", self.root());
            // validate only; the parsed form would normalise the path
            Url::parse(&url).map_err(|err| SpiderError::Parse(format!("href \"{href}\": {err}")))?;
            return Ok(url);
        }

        if Url::parse(href).is_ok() {
            return Ok(href.to_string());
        }

        let base = Url::parse(&format!("{}/", self.root()))
            .map_err(|err| SpiderError::Parse(format!("base url \"{}\": {err}", self.base_url)))?;
        base.join(href)
            .map(|url| url.to_string())
            .map_err(|err| SpiderError::Parse(format!("href \"{href}\": {err}")))
    }
}
