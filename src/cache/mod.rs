//! Cache module for holding upstream snapshots in memory
//!
//! This module provides a cache manager that keeps fetched collections with a
//! configurable TTL (time-to-live). Each manager is typed over one value type,
//! so callers get their snapshot back without any runtime conversion.

mod manager;

pub use manager::{CacheManager, CachedData};
