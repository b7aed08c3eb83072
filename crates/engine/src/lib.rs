//! Bite engine for bitestore
//!
//! This crate sits on top of a store adapter and provides:
//! - BiteStore: point writes, point reads and windowed scans of bites
//! - Scan: two-pass range scan with previous/next hints on one read view
//! - Pagination: the page shape returned by a scan
//! - Config: `bitestore.toml` loading (write policy, limits)
//!
//! The engine owns no storage of its own. It is handed an
//! `Arc<dyn Store>` and every operation goes through that handle.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bites;
pub mod config;
pub mod pagination;
pub mod scan;

pub use bites::BiteStore;
pub use config::{EngineConfig, WritePolicy, CONFIG_FILE_NAME};
pub use pagination::{LegacyPage, PaginationResult};
pub use scan::scan_window;
