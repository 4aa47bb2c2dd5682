//! Captured records and capture reports for capnotify
//!
//! This crate owns the read-only view of a capture event: the
//! [`CapturedRecord`] model, the [`RecordStore`] interface the host
//! application implements, and the [`ReportFormatter`] that turns a record
//! into the text of a notification.
//!
//! # Example
//!
//! ```rust
//! use capnotify_capture::{CapturedRecord, CookieToken, ReportFormatter};
//!
//! let record = CapturedRecord::new("42")
//!     .with_source("demo")
//!     .with_principal("alice")
//!     .with_origin_address("1.2.3.4")
//!     .with_cookie("example.com", CookieToken::new("sid", "..."));
//!
//! let report = ReportFormatter::utc().format(&record);
//! assert!(report.contains("`example.com`: 1 cookies"));
//! ```

mod error;
mod record;
mod report;
mod store;

pub use error::StoreError;
pub use record::{CapturedRecord, CookieToken};
pub use report::{BANNER, ReportFormatter, ReportTimeZone, TIME_FORMAT};
pub use store::{JsonRecordStore, MemoryRecordStore, RecordStore};
