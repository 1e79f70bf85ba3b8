//! Offline Reminder Test Utils
//!
//! Provides shared testing utilities for the offline reminder bot. The bot consumes
//! Serenity gateway payloads, so most tests need realistic `Presence`, `Message` and
//! `Guild` values without a live connection to Discord.
//!
//! # Overview
//!
//! The test utilities consist of two main components:
//! - **serenity**: Factories that build Serenity structs by deserializing JSON
//! - **fixture**: Reusable in-memory data such as fixed reference timestamps
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{fixture, serenity::create_test_presence};
//!
//! #[tokio::test]
//! async fn test_presence_tracking() {
//!     let presence = create_test_presence(123456789, Some(987654321), "online");
//!     let now = fixture::time::reference_time();
//!     // Convert and feed into the bot...
//! }
//! ```

pub mod fixture;
pub mod serenity;
