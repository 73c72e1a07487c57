use super::selector;
use crate::config::EdgarConfig;
use crate::error::{Result, SpiderError};
use crate::fetch::Fetch;
use crate::filing::{DocumentReference, FilingReference};
use crate::http::Url;
use crate::progress::Observer;
use scraper::Html;
use tracing::{debug, error, trace};

/// Fetch the interactive-data page of `filing` and return its Excel document link.
pub async fn resolve_document<F>(
    fetcher: &F,
    filing: &FilingReference,
    cfg: &EdgarConfig,
) -> Result<DocumentReference>
where
    F: Fetch + ?Sized,
{
    let url = Url::parse(&filing.interactive_data_url).map_err(|err| {
        SpiderError::Parse(format!(
            "interactive data url \"{}\": {err}",
            filing.interactive_data_url
        ))
    })?;

    let body = fetcher.fetch(&url).await?;
    parse_document_link(&body, filing, cfg).map_err(|err| {
        error!("failed to read interactive data page {url}, error({err})");
        err
    })
}

/// Resolve every filing, one request at a time and in input order.
///
/// The first failure aborts the batch; nothing resolved before it is returned.
pub async fn resolve_all<F, O>(
    fetcher: &F,
    observer: &O,
    filings: &[FilingReference],
    cfg: &EdgarConfig,
) -> Result<Vec<DocumentReference>>
where
    F: Fetch + ?Sized,
    O: Observer + ?Sized,
{
    let total = filings.len();
    let mut documents = Vec::with_capacity(total);
    for filing in filings {
        documents.push(resolve_document(fetcher, filing, cfg).await?);
        observer.on_document(documents.len(), total);
    }
    debug!("{total} document links resolved");

    Ok(documents)
}

/// Find the anchor labelled with the Excel caption and pair its link with the filing date.
///
/// The label must match the anchor's whole text (surrounding whitespace aside); the first such
/// anchor in document order wins. Text of markup nested inside the anchor is concatenated before
/// the comparison.
pub fn parse_document_link(
    html: &str,
    filing: &FilingReference,
    cfg: &EdgarConfig,
) -> Result<DocumentReference> {
    let anchor_sel = selector("a")?;
    let document = Html::parse_document(html);

    let href = document
        .select(&anchor_sel)
        .find(|a| a.text().collect::<String>().trim() == cfg.excel_label)
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| {
            SpiderError::NotFound(format!(
                "link \"{}\" on {}",
                cfg.excel_label, filing.interactive_data_url
            ))
        })?;

    let url = cfg.resolve_href(href)?;
    trace!("{} -> {url}", filing.filing_date);

    Ok(DocumentReference::new(filing.filing_date.clone(), url))
}
