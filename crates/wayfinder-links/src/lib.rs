//! Link resolution for Wayfinder.
//!
//! This crate decides what kind of destination a navigation string is and
//! turns link-shaped destinations into transport-ready requests:
//!
//! - **Classification**: route, custom-scheme deep link, HTTPS app link, or invalid
//! - **Normalization**: literal prefix substitution between app links and deep links
//! - **Parameter extraction**: query parameters plus a numeric `id` path segment
//! - **Request building**: [`DeepLinkRequest`] values the navigation engine consumes
//!
//! # Quick Start
//!
//! ```rust
//! use wayfinder_links::{DeepLinkRequestBuilder, LinkClassifier, LinkType};
//!
//! let classifier = LinkClassifier::default();
//! assert_eq!(classifier.classify("cart"), LinkType::Route);
//! assert_eq!(classifier.classify("yfy://product/42"), LinkType::DeepLink);
//! assert_eq!(classifier.classify("https://example.com/product/42"), LinkType::AppLink);
//!
//! let request = DeepLinkRequestBuilder::default()
//!     .build("https://example.com/product/42")
//!     .unwrap();
//! assert_eq!(request.as_str(), "yfy://product/42");
//! ```
//!
//! # Custom configuration
//!
//! ```rust
//! use std::sync::Arc;
//! use wayfinder_links::{LinkClassifier, LinkType, NavigationConfig};
//!
//! let config = Arc::new(NavigationConfig::new("shop", "shop.example.org").unwrap());
//! let classifier = LinkClassifier::new(config);
//! assert_eq!(classifier.classify("shop://cart"), LinkType::DeepLink);
//! assert_eq!(classifier.classify("yfy://cart"), LinkType::Invalid);
//! ```

pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod normalize;
pub mod params;
pub mod request;

// Re-export main types for convenience
pub use classify::{LinkClassifier, LinkType};
pub use config::{
	APP_LINK_PREFIX, DEEP_LINK_PREFIX, DEFAULT_APP_LINK_DOMAIN, DEFAULT_DEEP_LINK_SCHEME,
	NavigationConfig, NavigationSettings,
};
pub use error::{ConfigError, LinkError};
pub use normalize::LinkNormalizer;
pub use params::{ID_PARAM, ParameterExtractor};
pub use request::{DeepLinkRequest, DeepLinkRequestBuilder};

/// `tracing` target for events emitted by this crate.
pub const LOG_TARGET: &str = "wayfinder::links";

/// Result type for link operations.
pub type LinkResult<T> = Result<T, LinkError>;
