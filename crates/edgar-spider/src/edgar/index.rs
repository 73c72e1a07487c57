use super::selector;
use crate::config::EdgarConfig;
use crate::error::{Result, SpiderError};
use crate::fetch::Fetch;
use crate::filing::FilingReference;
use crate::http::Url;
use crate::progress::Observer;
use scraper::{ElementRef, Html};
use tracing::{debug, error, trace};

/// Fetch the listing page for `cik` and return its qualifying filings, in page order.
pub async fn resolve_index<F, O>(
    fetcher: &F,
    observer: &O,
    cik: &str,
    cfg: &EdgarConfig,
) -> Result<Vec<FilingReference>>
where
    F: Fetch + ?Sized,
    O: Observer + ?Sized,
{
    let url = listing_url(cik, cfg)?;
    debug!("fetching listing page for CIK {cik}");
    let body = fetcher.fetch(&url).await?;
    observer.on_listing_url(url.as_str());

    let filings = parse_listing(&body, cfg).map_err(|err| {
        error!("failed to read listing page {url}, error({err})");
        err
    })?;
    debug!("{} filings found for CIK {cik}", filings.len());

    observer.on_listing(filings.len());
    Ok(filings)
}

/// The company browser URL for `cik`, carrying the fixed query configuration.
pub fn listing_url(cik: &str, cfg: &EdgarConfig) -> Result<Url> {
    let cik = cik.trim();
    if cik.is_empty() {
        return Err(SpiderError::Parse("empty CIK".to_string()));
    }

    let listing = cfg.resolve_href(&cfg.listing_path)?;
    let mut url = Url::parse(&listing)
        .map_err(|err| SpiderError::Parse(format!("listing url \"{listing}\": {err}")))?;
    url.query_pairs_mut()
        .append_pair("action", "getcompany")
        .append_pair("CIK", cik)
        .append_pair("type", &cfg.form_type)
        .append_pair("dateb", "")
        .append_pair("owner", "exclude")
        .append_pair("start", "")
        .append_pair("output", "")
        .append_pair("count", &cfg.count.to_string());

    Ok(url)
}

/// Extract the filings table of a listing page.
///
/// The first row is the header. A later row qualifies when it holds an element whose id contains
/// the interactive-data marker; the filing date comes from its configured cell and the link from
/// the marker's href. A table with no qualifying rows yields an empty list; a page without the
/// table is [SpiderError::NotFound].
pub fn parse_listing(html: &str, cfg: &EdgarConfig) -> Result<Vec<FilingReference>> {
    let table_sel = selector(&format!(".{}", cfg.table_class))?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;
    let marker_sel = selector(&format!("[id*=\"{}\"]", cfg.marker_id))?;

    let document = Html::parse_document(html);
    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| SpiderError::NotFound(format!("table with class \"{}\"", cfg.table_class)))?;

    let mut filings = vec![];
    for (i, row) in table.select(&row_sel).enumerate().skip(1) {
        let Some(marker) = row.select(&marker_sel).next() else {
            trace!("row {i} has no interactive data, skipping");
            continue;
        };

        let filing_date = row
            .select(&cell_sel)
            .nth(cfg.date_column)
            .map(text_of)
            .ok_or_else(|| {
                SpiderError::NotFound(format!("filing date (cell {}) in row {i}", cfg.date_column))
            })?;

        let href = marker
            .value()
            .attr("href")
            .ok_or_else(|| SpiderError::NotFound(format!("href of \"{}\" in row {i}", cfg.marker_id)))?;
        let url = cfg.resolve_href(href)?;

        trace!("row {i}: {filing_date} -> {url}");
        filings.push(FilingReference::new(filing_date, url));
    }

    Ok(filings)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
