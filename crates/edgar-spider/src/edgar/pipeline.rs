use super::{resolve_all, resolve_index};
use crate::config::EdgarConfig;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::filing::DocumentReference;
use crate::progress::Observer;
use tracing::{error, info};

/// Where a run of [resolve_financial_documents] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Nothing known yet; the listing page is being resolved.
    Idle,

    /// Interactive-data links are known; their documents are being resolved.
    Resolving,

    Completed,

    Failed,
}

/// Resolve every 10-Q filing of `cik` to its financial statements spreadsheet.
///
/// The listing page is resolved first, then each filing's interactive-data page, strictly one
/// request after another. Results keep the listing order. Any error ends the run and is returned
/// as is; there is no partial result.
pub async fn resolve_financial_documents<F, O>(
    fetcher: &F,
    observer: &O,
    cik: &str,
    cfg: &EdgarConfig,
) -> Result<Vec<DocumentReference>>
where
    F: Fetch + ?Sized,
    O: Observer + ?Sized,
{
    let time = std::time::Instant::now();
    observer.on_stage(Stage::Idle);

    match run(fetcher, observer, cik, cfg).await {
        Ok(documents) => {
            observer.on_stage(Stage::Completed);
            info!(
                "{} documents resolved for CIK {cik}. {}",
                documents.len(),
                crate::time_elapsed(time)
            );
            Ok(documents)
        }
        Err(err) => {
            observer.on_stage(Stage::Failed);
            error!("failed to resolve documents for CIK {cik}, error({err})");
            Err(err)
        }
    }
}

async fn run<F, O>(
    fetcher: &F,
    observer: &O,
    cik: &str,
    cfg: &EdgarConfig,
) -> Result<Vec<DocumentReference>>
where
    F: Fetch + ?Sized,
    O: Observer + ?Sized,
{
    let filings = resolve_index(fetcher, observer, cik, cfg).await?;
    observer.on_stage(Stage::Resolving);
    resolve_all(fetcher, observer, &filings, cfg).await
}
