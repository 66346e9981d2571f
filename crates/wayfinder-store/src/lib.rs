//! # Wayfinder Store
//!
//! Transient, process-wide storage for payloads that travel alongside a
//! string route.
//!
//! Navigation engines only carry strings. To hand an arbitrary value to the
//! next screen, the caller stores it in a [`TransientDataRegistry`] under a
//! freshly minted [`DataToken`], puts only the token in the route, and the
//! destination reads the value back with the token.
//!
//! ## Quick Start
//!
//! ```rust
//! use wayfinder_store::TransientDataRegistry;
//!
//! #[derive(Debug, PartialEq)]
//! struct CartItem { sku: String, quantity: u32 }
//!
//! let registry = TransientDataRegistry::new();
//! let token = registry.generate_key();
//! registry.put(token.clone(), CartItem { sku: "A-1".into(), quantity: 2 });
//!
//! // The destination knows which shape to expect
//! let item = registry.take::<CartItem>(&token).unwrap();
//! assert_eq!(item.quantity, 2);
//!
//! // Wrong shapes and unknown tokens fail soft
//! assert!(registry.get::<String>(&token).is_none());
//! ```
//!
//! ## Eviction
//!
//! Entries are never consumed implicitly. A [`RegistryConfig`] bounds the
//! registry by entry count (oldest first) and optionally by age, so tokens
//! whose destination never reads them do not accumulate.

pub mod config;
pub mod entry;
pub mod registry;
pub mod statistics;
pub mod token;

pub use config::{DEFAULT_MAX_ENTRIES, MAX_TTL_SECS, RegistryConfig, RegistryConfigError};
pub use registry::{Payload, TransientDataRegistry};
pub use statistics::RegistryStatistics;
pub use token::{DataToken, TOKEN_PREFIX};

/// `tracing` target for events emitted by this crate.
pub const LOG_TARGET: &str = "wayfinder::store";
