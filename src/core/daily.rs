//! Metaphor of the day.
//!
//! A random metaphor-tagged quote fetched from a quote service, remembered
//! per calendar day (UTC) in a [`ResultCache`] so repeated calls on the same
//! day show the same quote and work offline.

use crate::core::cache::ResultCache;
use crate::core::clock::Clock;
use crate::core::config::AppConfig;
use crate::core::error::{MetaphorError, Result};
use crate::core::storage::Storage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub const DAILY_CACHE_KEY: &str = "metaphorever-daily-cache";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

pub trait QuoteSource {
    fn fetch(&self) -> Result<Quote>;
}

#[derive(Deserialize)]
struct QuotableReply {
    content: String,
    #[serde(default)]
    author: String,
}

/// Client for a quotable.io-compatible `/random` endpoint.
pub struct QuotableClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl QuotableClient {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.quote_api_url.trim_end_matches('/').to_string(),
        })
    }

    fn request(&self) -> Result<QuotableReply> {
        let url = format!("{}/random", self.base_url);
        log::debug!("GET {url}");

        Ok(self
            .http
            .get(&url)
            .query(&[("tags", "metaphor")])
            .send()?
            .error_for_status()?
            .json()?)
    }
}

impl QuoteSource for QuotableClient {
    fn fetch(&self) -> Result<Quote> {
        let reply = self.request().map_err(|e| {
            log::error!("Quote request failed: {e}");
            MetaphorError::daily(e.to_string())
        })?;

        let text = reply.content.trim().to_string();
        if text.is_empty() {
            return Err(MetaphorError::daily("the service returned no quote"));
        }
        Ok(Quote {
            text,
            author: reply.author.trim().to_string(),
        })
    }
}

pub struct DailyMetaphor {
    cache: ResultCache<Quote>,
    clock: Arc<dyn Clock>,
    source: Box<dyn QuoteSource>,
}

impl DailyMetaphor {
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        source: Box<dyn QuoteSource>,
    ) -> Self {
        Self {
            cache: ResultCache::new(storage, clock.clone(), DAILY_CACHE_KEY),
            clock,
            source,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Today's quote, fetched at most once per day.
    pub fn today(&self) -> Result<Quote> {
        let key = self.date().format("%Y-%m-%d").to_string();
        if let Some(quote) = self.cache.lookup(&key) {
            return Ok(quote);
        }

        let quote = self.source.fetch()?;
        self.cache.store(&key, quote.clone());
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingSource {
        calls: Rc<Cell<usize>>,
        fail: bool,
    }

    impl QuoteSource for CountingSource {
        fn fetch(&self) -> Result<Quote> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(MetaphorError::daily("offline"));
            }
            Ok(Quote {
                text: format!("Life is a highway #{}", self.calls.get()),
                author: "Tom Cochrane".to_string(),
            })
        }
    }

    fn setup(fail: bool) -> (Arc<ManualClock>, Rc<Cell<usize>>, DailyMetaphor) {
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        ));
        let calls = Rc::new(Cell::new(0));
        let daily = DailyMetaphor::new(
            storage,
            clock.clone(),
            Box::new(CountingSource {
                calls: calls.clone(),
                fail,
            }),
        );
        (clock, calls, daily)
    }

    #[test]
    fn test_same_day_reuses_quote() -> Result<()> {
        let (clock, calls, daily) = setup(false);

        let first = daily.today()?;
        clock.advance(chrono::Duration::hours(10));
        let second = daily.today()?;

        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        Ok(())
    }

    #[test]
    fn test_next_day_fetches_again() -> Result<()> {
        let (clock, calls, daily) = setup(false);

        let first = daily.today()?;
        clock.advance(chrono::Duration::days(1));
        let second = daily.today()?;

        assert_ne!(first, second);
        assert_eq!(calls.get(), 2);
        assert_eq!(daily.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        Ok(())
    }

    #[test]
    fn test_failure_is_not_cached() {
        let (_, calls, daily) = setup(true);

        assert!(matches!(daily.today(), Err(MetaphorError::Daily { .. })));
        assert!(daily.today().is_err());
        assert_eq!(calls.get(), 2);
    }
}
