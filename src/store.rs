//! Transient data registry.
//!
//! # Examples
//!
//! ```rust
//! use wayfinder::store::TransientDataRegistry;
//!
//! let registry = TransientDataRegistry::new();
//! let token = registry.generate_key();
//! registry.put(token.clone(), 42_u32);
//! assert_eq!(registry.get::<u32>(&token).as_deref(), Some(&42));
//! ```

pub use wayfinder_store::*;
