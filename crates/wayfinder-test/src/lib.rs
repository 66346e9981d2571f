//! # Wayfinder Test
//!
//! Testing utilities for Wayfinder.
//!
//! - **[`RecordingNavController`]**: navigation engine that records every call
//!   and can be told to refuse, fail or panic
//! - **[`RecordingLauncher`]**: application launcher that records intents
//! - **[`RecordingSink`]**: diagnostic sink that keeps every failure
//! - **[`logging`]**: one-time `tracing` setup and log capture
//! - **[`fixtures`]**: `rstest` fixtures wiring the above to isolated registries
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wayfinder_navigation::NavigationManager;
//! use wayfinder_store::TransientDataRegistry;
//! use wayfinder_test::{NavCall, RecordingNavController};
//!
//! let controller = Arc::new(RecordingNavController::new());
//! let manager = NavigationManager::new().with_registry(Arc::new(TransientDataRegistry::new()));
//! manager.set_nav_controller(controller.clone());
//!
//! manager.navigate("home").unwrap();
//! assert_eq!(controller.calls(), vec![NavCall::Navigate { route: "home".into(), options: None }]);
//! ```

pub mod controller;
pub mod diagnostics;
pub mod fixtures;
pub mod launcher;
pub mod logging;

pub use controller::{EngineBehavior, NavCall, RecordingNavController};
pub use diagnostics::RecordingSink;
pub use launcher::RecordingLauncher;
pub use logging::{CapturedLogs, capture_logs, init_test_logging};
