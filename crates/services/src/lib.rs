#![forbid(unsafe_code)]

pub mod error;
pub mod feed_service;
pub mod media;
pub mod post_source;

pub use feed_core::Clock;

pub use error::FeedError;
pub use feed_service::{FeedConfig, HttpPostSource};
pub use post_source::{PostSource, StaticPostSource};
