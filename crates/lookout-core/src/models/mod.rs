//! Data models for the research pipeline.
//!
//! A [`Plan`] drives a scan, the scan produces [`CapturedItem`]s, a capped
//! [`Corpus`] of those items is summarized into a [`Report`]. Markdown
//! `Display` implementations live in [`crate::display`].

pub mod corpus;
pub mod item;
pub mod plan;
pub mod report;


pub use corpus::Corpus;
pub use item::CapturedItem;
pub use plan::Plan;
pub use report::Report;
