// SPDX-License-Identifier: MPL-2.0
//! Themed icons for the player controls.
//!
//! An icon identifier resolves to an SVG URL, the SVG is rasterized once,
//! and both tone variants are kept for the lifetime of the owning
//! [`ThemeCache`]:
//!
//! - the **light-mode** image keeps the icon's original (dark) ink and
//!   is meant for light backgrounds;
//! - the **dark-mode** image has its RGB channels inverted and is meant
//!   for dark backgrounds.
//!
//! # Usage
//!
//! ```ignore
//! let cache = ThemeCache::new(HttpFetcher::new(max_bytes)?);
//! let play = cache.themed_icon("play_arrow").await?;
//! let button = button(iced::widget::image(play.handle().clone()));
//! ```

pub mod cache;
pub mod fetch;
pub mod render;
pub mod source;

pub use cache::{CacheStats, ThemeCache};
pub use fetch::{HttpFetcher, SvgFetcher};
pub use render::{invert_rgb, rasterize, RgbaRaster};
pub use source::{icon_url, IconUrlTemplate};

use crate::config::defaults::{DEFAULT_ICON_SIZE, MAX_ICON_SIZE, MIN_ICON_SIZE};
use iced::widget::image::Handle;
use std::sync::Arc;

/// Background tone an icon will be shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Theme {
    /// Dark background: the inverted (light ink) raster.
    #[default]
    Dark,
    /// Light background: the original (dark ink) raster.
    Light,
}

/// Offscreen surface dimensions used when rasterizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSize {
    width: u32,
    height: u32,
}

impl IconSize {
    /// Creates a size, clamping each edge to the supported range.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.clamp(MIN_ICON_SIZE, MAX_ICON_SIZE),
            height: height.clamp(MIN_ICON_SIZE, MAX_ICON_SIZE),
        }
    }

    #[must_use]
    pub fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self::square(DEFAULT_ICON_SIZE)
    }
}

/// One rendered variant: the raw raster and a ready-to-display handle.
#[derive(Debug, Clone)]
pub struct ThemedImage {
    raster: Arc<RgbaRaster>,
    handle: Handle,
}

impl ThemedImage {
    fn new(raster: RgbaRaster) -> Self {
        let handle = Handle::from_rgba(raster.width(), raster.height(), raster.pixels().to_vec());
        Self {
            raster: Arc::new(raster),
            handle,
        }
    }

    #[must_use]
    pub fn raster(&self) -> &RgbaRaster {
        &self.raster
    }

    /// Image handle for iced widgets.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// Both tone variants rendered from one source URL.
#[derive(Debug, Clone)]
pub struct ThemedPair {
    light_mode: ThemedImage,
    dark_mode: ThemedImage,
}

impl ThemedPair {
    /// Builds the pair from a raster in original ink.
    #[must_use]
    pub fn from_raster(original: RgbaRaster) -> Self {
        let mut inverted = original.clone();
        invert_rgb(inverted.pixels_mut());
        Self {
            light_mode: ThemedImage::new(original),
            dark_mode: ThemedImage::new(inverted),
        }
    }

    /// The variant for the given background tone.
    #[must_use]
    pub fn select(&self, theme: Theme) -> &ThemedImage {
        match theme {
            Theme::Dark => &self.dark_mode,
            Theme::Light => &self.light_mode,
        }
    }

    #[must_use]
    pub fn light_mode(&self) -> &ThemedImage {
        &self.light_mode
    }

    #[must_use]
    pub fn dark_mode(&self) -> &ThemedImage {
        &self.dark_mode
    }
}
