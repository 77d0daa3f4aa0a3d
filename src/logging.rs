// SPDX-License-Identifier: MPL-2.0
//! Logging configuration using tracing.
//!
//! Log level is controlled by the `MOVIE_MAKER_LOG` environment variable:
//!
//! ```bash
//! MOVIE_MAKER_LOG=debug movie-maker icon play_arrow
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "MOVIE_MAKER_LOG";

const DEFAULT_FILTER: &str = "movie_maker=info,warn";

/// Installs a stderr subscriber. Calling it twice is a no-op.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
