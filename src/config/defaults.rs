// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Icons**: Raster size and source template for themed icons
//! - **Network**: Limits applied while fetching icon sources

// ==========================================================================
// Icon Defaults
// ==========================================================================

/// Default edge length of a rendered icon, in logical pixels.
pub const DEFAULT_ICON_SIZE: u32 = 18;

/// Smallest icon edge accepted from configuration.
pub const MIN_ICON_SIZE: u32 = 1;

/// Largest icon edge accepted from configuration.
pub const MAX_ICON_SIZE: u32 = 1024;

/// Placeholder replaced by the icon identifier in a URL template.
pub const ICON_PLACEHOLDER: &str = "{icon}";

/// Material Icons SVG endpoint.
pub const DEFAULT_ICON_URL_TEMPLATE: &str =
    "https://fonts.gstatic.com/s/i/materialicons/{icon}/v6/24px.svg?download=true";

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default cap on an icon response body (256 KiB).
pub const DEFAULT_MAX_ICON_BYTES: u64 = 256 * 1024;

/// Maximum redirects followed when fetching an icon.
pub const MAX_REDIRECTS: usize = 10;

/// User agent sent with icon requests.
pub const USER_AGENT: &str = concat!("RuurdMovieMaker/", env!("CARGO_PKG_VERSION"));
