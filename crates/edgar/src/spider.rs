use anyhow::Context;
use colored::Colorize;
use dotenv::var;
use edgar_spider::edgar::{self, Stage};
use edgar_spider::progress::{BarObserver, Observer, TraceObserver};
use edgar_spider::{EdgarConfig, HttpFetcher};
use serde::Serialize;
use tracing::{debug, info, trace};

/// Resolve the Excel financial statements of `cik` and print them.
pub(crate) async fn resolve(cik: &str, json: bool, tui: bool) -> anyhow::Result<()> {
    let (fetcher, cfg) = build()?;
    let observer = observer(tui);

    let time = std::time::Instant::now();
    let documents =
        edgar::resolve_financial_documents(&fetcher, &*observer, cik, &cfg).await?;
    info!(
        "financial documents collected, {}",
        edgar_spider::time_elapsed(time)
    );

    if json {
        print_json(&documents)?;
    } else {
        for doc in &documents {
            println!("{}  {}", doc.filing_date.magenta(), doc.document_url);
        }
    }

    Ok(())
}

/// Resolve only the listing page of `cik` and print its interactive data links.
pub(crate) async fn listing(cik: &str, json: bool, tui: bool) -> anyhow::Result<()> {
    let (fetcher, cfg) = build()?;
    let observer = observer(tui);

    let filings = match edgar::resolve_index(&fetcher, &*observer, cik, &cfg).await {
        Ok(filings) => filings,
        Err(err) => {
            observer.on_stage(Stage::Failed);
            return Err(err.into());
        }
    };
    observer.on_stage(Stage::Completed);

    if json {
        print_json(&filings)?;
    } else {
        for filing in &filings {
            println!(
                "{}  {}",
                filing.filing_date.magenta(),
                filing.interactive_data_url
            );
        }
    }

    Ok(())
}

// fetcher & configuration, read from the environment
fn build() -> anyhow::Result<(HttpFetcher, EdgarConfig)> {
    let user_agent = var("USER_AGENT")
        .context("environment variable USER_AGENT (the SEC requires a contact User-Agent)")?;
    trace!("building http client, user agent: {user_agent}");
    let fetcher = HttpFetcher::with_user_agent(&user_agent)?;

    let cfg = match var("EDGAR_BASE_URL") {
        Ok(base_url) => {
            debug!("EDGAR_BASE_URL override: {base_url}");
            EdgarConfig::with_base_url(&base_url)
        }
        Err(_) => EdgarConfig::default(),
    };

    Ok((fetcher, cfg))
}

fn observer(tui: bool) -> Box<dyn Observer> {
    if tui {
        Box::new(BarObserver::new())
    } else {
        Box::new(TraceObserver)
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
