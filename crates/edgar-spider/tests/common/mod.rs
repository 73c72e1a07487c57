#![allow(dead_code)]

use async_trait::async_trait;
use edgar_spider::edgar::index::listing_url;
use edgar_spider::edgar::Stage;
use edgar_spider::progress::Observer;
use edgar_spider::{EdgarConfig, Fetch, Result, SpiderError};
use std::collections::HashMap as Map;
use std::sync::Mutex;
use url::Url;

pub const CIK: &str = "1018724";

pub const LISTING: &str = include_str!("../files/listing.html");
pub const LISTING_EMPTY: &str = include_str!("../files/listing_empty.html");
pub const LISTING_MISSING: &str = include_str!("../files/listing_missing.html");
pub const INTERACTIVE: &str = include_str!("../files/interactive.html");
pub const INTERACTIVE_A3: &str = include_str!("../files/interactive_a3.html");
pub const INTERACTIVE_MISSING: &str = include_str!("../files/interactive_missing.html");

/// Serves recorded pages by URL; anything unrecorded fails like a dead connection.
#[derive(Default)]
pub struct Recorded {
    pages: Map<String, String>,
    pub requests: Mutex<Vec<String>>,
}

impl Recorded {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    /// The listing page of [CIK] under the default configuration.
    pub fn listing(self, body: &str) -> Self {
        let url = listing_url(CIK, &EdgarConfig::default()).unwrap();
        self.page(url.as_str(), body)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetch for Recorded {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| SpiderError::Transport {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    ListingUrl(String),
    Listing(usize),
    Document(usize, usize),
    Stage(Stage),
}

/// Keeps every progress event, in order.
#[derive(Default)]
pub struct Recorder {
    pub events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn stages(&self) -> Vec<Stage> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Stage(stage) => Some(stage),
                _ => None,
            })
            .collect()
    }
}

impl Observer for Recorder {
    fn on_listing_url(&self, url: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::ListingUrl(url.to_string()));
    }

    fn on_listing(&self, filings: usize) {
        self.events.lock().unwrap().push(Event::Listing(filings));
    }

    fn on_document(&self, completed: usize, total: usize) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Document(completed, total));
    }

    fn on_stage(&self, stage: Stage) {
        self.events.lock().unwrap().push(Event::Stage(stage));
    }
}
