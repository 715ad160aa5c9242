//! Core components of the `nse-options-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`NseClient`] and its builder.
//! - The primary [`NseError`] type.
//! - Internal networking, session warm-up and retry logic.

/// The main client (`NseClient`), builder, and configuration.
pub mod client;
/// The primary error type (`NseError`) for the crate.
pub mod error;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NseClient`
pub use client::{Backoff, CacheMode, NseClient, NseClientBuilder, RetryConfig};
pub use error::NseError;
