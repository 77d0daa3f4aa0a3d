// SPDX-License-Identifier: MPL-2.0
//! Icon identifier to SVG URL mapping.

use crate::config::defaults::{DEFAULT_ICON_URL_TEMPLATE, ICON_PLACEHOLDER};
use crate::error::{Error, Result};

/// Resolves an identifier against the default Material Icons template.
///
/// # Examples
///
/// ```
/// use movie_maker::icon::icon_url;
///
/// assert_eq!(
///     icon_url("pause"),
///     "https://fonts.gstatic.com/s/i/materialicons/pause/v6/24px.svg?download=true"
/// );
/// ```
#[must_use]
pub fn icon_url(icon: &str) -> String {
    IconUrlTemplate::default().url_for(icon)
}

/// URL template with an `{icon}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconUrlTemplate(String);

impl IconUrlTemplate {
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the template has no `{icon}` placeholder.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(ICON_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "icon URL template must contain {ICON_PLACEHOLDER}: {template}"
            )));
        }
        Ok(Self(template))
    }

    #[must_use]
    pub fn url_for(&self, icon: &str) -> String {
        self.0.replace(ICON_PLACEHOLDER, icon)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IconUrlTemplate {
    fn default() -> Self {
        Self(DEFAULT_ICON_URL_TEMPLATE.to_string())
    }
}
