//! Test fixtures providing reusable test data.
//!
//! Fixtures are plain in-memory values. They never talk to Discord and can be used
//! freely in unit tests to keep expectations deterministic.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let sent_at = fixture::time::reference_time();
//! let later = fixture::time::minutes_after(sent_at, 30);
//! ```

pub mod time;
