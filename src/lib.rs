// SPDX-License-Identifier: MPL-2.0
//! `movie_maker` holds the small pieces of the Ruurd Movie Maker player that
//! are not tied to a window: the playback clock formatter and the themed
//! icon cache used by the transport controls.

#![doc(html_root_url = "https://docs.rs/movie_maker/0.1.0")]

pub mod clock;
pub mod config;
pub mod error;
pub mod icon;
pub mod logging;
