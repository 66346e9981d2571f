//! Link classification and deep-link request building.
//!
//! # Examples
//!
//! ```rust
//! use wayfinder::links::{LinkNormalizer, NavigationConfig};
//!
//! let normalizer = LinkNormalizer::new(NavigationConfig::shared());
//! assert_eq!(
//!     normalizer.to_deep_link("https://example.com/cart").as_deref(),
//!     Some("yfy://cart")
//! );
//! ```

pub use wayfinder_links::*;
