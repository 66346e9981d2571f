//! The navigation engine seam.
//!
//! Wayfinder does not render screens or keep a back stack. It drives an
//! engine that does, through the [`NavController`] trait.

use std::fmt;
use std::sync::Arc;

use wayfinder_links::DeepLinkRequest;

use crate::error::EngineError;

/// Operations Wayfinder needs from a navigation engine.
///
/// Implementations may fail by returning an [`EngineError`] or by panicking;
/// both are converted into a navigation error at the call site.
pub trait NavController: Send + Sync {
	/// Pushes a route onto the back stack.
	fn navigate(&self, route: &str, options: Option<&NavOptions>) -> Result<(), EngineError>;

	/// Navigates to the destination matching a deep-link request.
	fn navigate_deep_link(&self, request: &DeepLinkRequest) -> Result<(), EngineError>;

	/// Pops one level. Returns `false` when already at the top level.
	fn navigate_up(&self) -> Result<bool, EngineError>;

	/// Pops to the graph's start destination, removing it too when `inclusive`.
	fn pop_back_stack_to_start(&self, inclusive: bool) -> Result<bool, EngineError>;

	/// Pops to the most recent entry for `route`.
	fn pop_back_stack(&self, route: &str, inclusive: bool) -> Result<bool, EngineError>;

	/// Records a string argument on the current back-stack entry.
	fn set_current_entry_argument(&self, key: &str, value: &str) -> Result<(), EngineError>;
}

/// Back-stack target for [`NavOptions::with_pop_up_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopUpTo {
	pub route: String,
	pub inclusive: bool,
	pub save_state: bool,
}

/// Options applied when pushing a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavOptions {
	single_top: bool,
	restore_state: bool,
	pop_up_to: Option<PopUpTo>,
}

impl NavOptions {
	/// Creates empty options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Reuses the top entry if it already shows the destination.
	pub fn with_single_top(mut self, single_top: bool) -> Self {
		self.single_top = single_top;
		self
	}

	/// Restores state previously saved for the destination.
	pub fn with_restore_state(mut self, restore_state: bool) -> Self {
		self.restore_state = restore_state;
		self
	}

	/// Pops the back stack to `route` before pushing.
	pub fn with_pop_up_to(mut self, route: impl Into<String>, inclusive: bool, save_state: bool) -> Self {
		self.pop_up_to = Some(PopUpTo {
			route: route.into(),
			inclusive,
			save_state,
		});
		self
	}

	pub fn single_top(&self) -> bool {
		self.single_top
	}

	pub fn restore_state(&self) -> bool {
		self.restore_state
	}

	pub fn pop_up_to(&self) -> Option<&PopUpTo> {
		self.pop_up_to.as_ref()
	}
}

/// Whether a [`NavigationManager`](crate::NavigationManager) currently drives
/// an engine.
#[derive(Clone, Default)]
pub enum HandleState {
	#[default]
	Detached,
	Attached(Arc<dyn NavController>),
}

impl HandleState {
	/// Returns true if an engine is attached.
	pub fn is_attached(&self) -> bool {
		matches!(self, Self::Attached(_))
	}

	/// Returns the attached engine, if any.
	pub fn handle(&self) -> Option<Arc<dyn NavController>> {
		match self {
			Self::Attached(handle) => Some(Arc::clone(handle)),
			Self::Detached => None,
		}
	}
}

impl fmt::Debug for HandleState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Detached => f.write_str("Detached"),
			Self::Attached(_) => f.write_str("Attached"),
		}
	}
}
