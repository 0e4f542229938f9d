//! Core types for tvguide.
//!
//! This crate turns a TV schedule website into an EPG feed:
//! - `extractor` discovers days and scrapes raw program rows
//! - `normalizer` anchors local clock times to absolute timestamps
//! - `export` writes the tab-separated feed

pub mod clock;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod export;
pub mod extractor;
pub mod normalizer;
pub mod schedule;
pub mod source;

pub use config::ScheduleConfig;
pub use error::{TvGuideError, TvGuideResult};
pub use schedule::{Day, Program};
