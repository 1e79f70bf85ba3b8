//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Presence, Message) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's gateway
//! would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild_with_presences, create_test_message};
//!
//! #[tokio::test]
//! async fn test_guild_snapshot() {
//!     let guild = create_test_guild_with_presences(
//!         123456789,
//!         "Test Guild",
//!         &[(111111111, "online"), (222222222, "offline")],
//!     );
//!     let message = create_test_message(555, 444, Some(123456789), 111111111, false);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `guild::create_test_guild_with_presences` - Guild carrying member presences
//! - `presence::create_test_presence` - Create Serenity Presence objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod guild;
pub mod message;
pub mod presence;

// Re-export commonly used functions for convenience
pub use guild::{create_test_guild, create_test_guild_with_presences};
pub use message::create_test_message;
pub use presence::create_test_presence;
