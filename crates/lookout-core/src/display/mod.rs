//! Markdown presentation of plans, reports and the store feed.
//!
//! Domain models stay free of formatting concerns; everything the CLI
//! prints goes through the `Display` implementations collected here.
//!
//! - [`collections`]: the store feed ([`Feed`])
//! - [`datetime`]: local time zone formatting ([`LocalDateTime`])
//! - [`models`]: `Display` for [`crate::models::Plan`]

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::Feed;
pub use datetime::LocalDateTime;
