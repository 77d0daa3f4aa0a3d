// SPDX-License-Identifier: MPL-2.0
//! URL-keyed cache of themed icon pairs.
//!
//! # Design
//!
//! - **Render once**: a URL is fetched and rasterized at most once per
//!   successful load; the stored pair is never replaced or evicted.
//! - **Shared loads**: while a URL is loading, later callers wait for
//!   that load instead of starting their own, and receive the same
//!   result (pair or error).
//! - **No partial entries**: a failed load stores nothing, so the next
//!   request starts over.
//!
//! The state lock is never held across an await point.

use super::fetch::SvgFetcher;
use super::render::rasterize;
use super::source::IconUrlTemplate;
use super::{IconSize, Theme, ThemedImage, ThemedPair};
use crate::error::IconResult;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

type LoadOutcome = Option<IconResult<ThemedPair>>;

/// Statistics about cache behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from a stored pair.
    pub hits: u64,

    /// Loads started (each one fetches the source once).
    pub loads: u64,

    /// Requests that waited on another caller's load.
    pub joins: u64,

    /// Loads that ended in an error.
    pub failures: u64,
}

#[derive(Default)]
struct State {
    entries: HashMap<String, ThemedPair>,
    in_flight: HashMap<String, watch::Receiver<LoadOutcome>>,
    stats: CacheStats,
}

enum Claim {
    Hit(ThemedPair),
    Join(watch::Receiver<LoadOutcome>),
    Lead(watch::Sender<LoadOutcome>),
}

/// Themed icon cache backed by an [`SvgFetcher`].
///
/// The cache is an ordinary owned value; share it with `Arc` when several
/// tasks need icons.
pub struct ThemeCache<F> {
    fetcher: F,
    size: IconSize,
    template: IconUrlTemplate,
    state: Mutex<State>,
}

impl<F: SvgFetcher> ThemeCache<F> {
    /// Creates an empty cache rendering 18x18 icons from Material Icons.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            size: IconSize::default(),
            template: IconUrlTemplate::default(),
            state: Mutex::new(State::default()),
        }
    }

    /// Sets the offscreen surface size used for every load.
    #[must_use]
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the template used by [`themed_icon`](Self::themed_icon).
    #[must_use]
    pub fn with_template(mut self, template: IconUrlTemplate) -> Self {
        self.template = template;
        self
    }

    #[must_use]
    pub fn size(&self) -> IconSize {
        self.size
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resolves `icon` through the URL template and returns its dark-mode image.
    ///
    /// # Errors
    ///
    /// Returns the load failure if the icon could not be fetched or rendered.
    pub async fn themed_icon(&self, icon: &str) -> IconResult<ThemedImage> {
        let url = self.template.url_for(icon);
        self.themed_image(&url, Theme::default()).await
    }

    /// Returns the variant of the icon at `url` for `theme`, loading it on a miss.
    ///
    /// # Errors
    ///
    /// Returns the load failure if the icon could not be fetched or rendered.
    pub async fn themed_image(&self, url: &str, theme: Theme) -> IconResult<ThemedImage> {
        let pair = self.themed_pair(url).await?;
        Ok(pair.select(theme).clone())
    }

    /// Returns both variants of the icon at `url`, loading them on a miss.
    ///
    /// # Errors
    ///
    /// Returns the load failure if the icon could not be fetched or rendered.
    pub async fn themed_pair(&self, url: &str) -> IconResult<ThemedPair> {
        loop {
            match self.claim(url) {
                Claim::Hit(pair) => {
                    tracing::debug!(url, "Themed icon cache hit");
                    return Ok(pair);
                }
                Claim::Join(mut rx) => {
                    tracing::debug!(url, "Waiting on in-flight icon load");
                    let outcome = rx.wait_for(Option::is_some).await.ok().and_then(|v| v.clone());
                    match outcome {
                        Some(result) => return result,
                        // The loading caller went away before finishing; try again.
                        None => continue,
                    }
                }
                Claim::Lead(tx) => return self.load(url, tx).await,
            }
        }
    }

    /// Returns the stored pair for `url` without loading.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<ThemedPair> {
        self.lock().entries.get(url).cloned()
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.lock().entries.contains_key(url)
    }

    /// Number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn claim(&self, url: &str) -> Claim {
        let mut state = self.lock();

        if let Some(pair) = state.entries.get(url).cloned() {
            state.stats.hits += 1;
            return Claim::Hit(pair);
        }

        if let Some(rx) = state.in_flight.get(url).cloned() {
            state.stats.joins += 1;
            return Claim::Join(rx);
        }

        let (tx, rx) = watch::channel(None);
        state.in_flight.insert(url.to_string(), rx);
        state.stats.loads += 1;
        Claim::Lead(tx)
    }

    async fn load(&self, url: &str, tx: watch::Sender<LoadOutcome>) -> IconResult<ThemedPair> {
        let mut flight = FlightGuard {
            cache: self,
            url,
            armed: true,
        };

        tracing::info!(url, "Loading themed icon");
        let result = self.render_pipeline(url).await;

        {
            let mut state = self.lock();
            state.in_flight.remove(url);
            match &result {
                Ok(pair) => {
                    state.entries.insert(url.to_string(), pair.clone());
                }
                Err(err) => {
                    state.stats.failures += 1;
                    tracing::warn!(url, "Themed icon load failed: {err}");
                }
            }
        }
        flight.armed = false;

        tx.send_replace(Some(result.clone()));
        result
    }

    async fn render_pipeline(&self, url: &str) -> IconResult<ThemedPair> {
        let svg = self.fetcher.fetch(url).await?;
        let raster = rasterize(&svg, self.size)?;
        Ok(ThemedPair::from_raster(raster))
    }
}

/// Clears the in-flight marker if a load is dropped before completing.
struct FlightGuard<'a, F: SvgFetcher> {
    cache: &'a ThemeCache<F>,
    url: &'a str,
    armed: bool,
}

impl<F: SvgFetcher> Drop for FlightGuard<'_, F> {
    fn drop(&mut self) {
        if self.armed {
            self.cache.lock().in_flight.remove(self.url);
        }
    }
}
