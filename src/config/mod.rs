//! Configuration module for smokenotes
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{ExtractionSettings, FetchSettings, GeneralSettings, HistorySettings, Settings};
