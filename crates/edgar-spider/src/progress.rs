use crate::edgar::pipeline::Stage;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

/// Receives coarse progress from the resolvers.
///
/// Hooks are called at fixed points only: once the listing page has been fetched, once it has
/// been read, after each document link is resolved, and on every [Stage] transition. They never
/// influence the result.
pub trait Observer {
    /// The listing page was fetched from `url`; reported before the page is read.
    fn on_listing_url(&self, url: &str);

    /// The listing page produced `filings` qualifying rows.
    fn on_listing(&self, filings: usize);

    /// `completed` of `total` document links are resolved.
    fn on_document(&self, completed: usize, total: usize);

    fn on_stage(&self, _stage: Stage) {}
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {
    fn on_listing_url(&self, _url: &str) {}
    fn on_listing(&self, _filings: usize) {}
    fn on_document(&self, _completed: usize, _total: usize) {}
}

/// Emits progress as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver;

impl Observer for TraceObserver {
    fn on_listing_url(&self, url: &str) {
        info!("search page URL: {url}");
    }

    fn on_listing(&self, filings: usize) {
        info!("{filings} interactive data links found; getting docs URLs ...");
    }

    fn on_document(&self, completed: usize, total: usize) {
        info!(
            "{}%... ({completed}/{total})",
            percent_complete(completed, total)
        );
    }

    fn on_stage(&self, stage: Stage) {
        match stage {
            Stage::Completed => info!("done!"),
            stage => debug!("pipeline stage: {stage:?}"),
        }
    }
}

/// Draws progress with an [indicatif] bar, for interactive use.
#[derive(Clone, Debug)]
pub struct BarObserver {
    pb: ProgressBar,
}

impl BarObserver {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner().with_message("searching listing page ...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }
}

impl Default for BarObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for BarObserver {
    fn on_listing_url(&self, url: &str) {
        self.pb.println(format!("search page URL: {url}"));
    }

    fn on_listing(&self, filings: usize) {
        self.pb.set_length(filings as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{msg} {spinner:.magenta}\n\
            [{elapsed_precise:.magenta}] |{bar:40.cyan/blue}| {pos}/{len} \
            [Rate: {per_sec:.magenta}, ETA: {eta:.blue}]",
        ) {
            self.pb.set_style(style.progress_chars("##-"));
        }
        self.pb.set_message("getting docs URLs ...");
    }

    fn on_document(&self, completed: usize, total: usize) {
        self.pb.set_position(completed as u64);
        self.pb
            .set_message(format!("{}%...", percent_complete(completed, total)));
    }

    fn on_stage(&self, stage: Stage) {
        match stage {
            Stage::Completed => self.pb.finish_with_message("done!"),
            Stage::Failed => self.pb.abandon_with_message("failed"),
            _ => (),
        }
    }
}

/// Whole percentage of `completed` out of `total`, rounded down.
///
/// An empty batch counts as finished.
///
/// ```rust
/// use edgar_spider::progress::percent_complete;
///
/// assert_eq!(percent_complete(1, 3), 33);
/// assert_eq!(percent_complete(2, 3), 66);
/// assert_eq!(percent_complete(0, 0), 100);
/// ```
pub fn percent_complete(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (100 * completed.min(total) / total) as u8
}
