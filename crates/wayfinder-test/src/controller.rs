//! Recording navigation engine.

use parking_lot::Mutex;
use wayfinder_links::DeepLinkRequest;
use wayfinder_navigation::{EngineError, NavController, NavOptions};

/// Route the simulated back stack starts with.
pub const START_DESTINATION: &str = "home";

/// One call received by a [`RecordingNavController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCall {
	Navigate {
		route: String,
		options: Option<NavOptions>,
	},
	DeepLink {
		uri: String,
	},
	NavigateUp,
	PopToStart {
		inclusive: bool,
	},
	PopBackStack {
		route: String,
		inclusive: bool,
	},
	SetArgument {
		key: String,
		value: String,
	},
}

/// How a [`RecordingNavController`] answers calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EngineBehavior {
	/// Simulate a back stack.
	#[default]
	Simulate,
	/// Return an [`EngineError`] with this message from every call.
	Fail(String),
	/// Panic with this message on every call.
	Panic(String),
}

/// A [`NavController`] that records calls and simulates a back stack.
///
/// The stack starts with [`START_DESTINATION`]. Pushed routes and deep links
/// are added on top; pops follow the usual engine rules and report whether
/// anything was popped.
///
/// # Examples
///
/// ```
/// use wayfinder_navigation::NavController;
/// use wayfinder_test::RecordingNavController;
///
/// let controller = RecordingNavController::new();
/// controller.navigate("cart", None).unwrap();
///
/// assert_eq!(controller.back_stack(), vec!["home", "cart"]);
/// assert!(controller.navigate_up().unwrap());
/// assert!(!controller.navigate_up().unwrap());
/// ```
#[derive(Debug)]
pub struct RecordingNavController {
	calls: Mutex<Vec<NavCall>>,
	stack: Mutex<Vec<String>>,
	behavior: Mutex<EngineBehavior>,
}

impl Default for RecordingNavController {
	fn default() -> Self {
		Self::new()
	}
}

impl RecordingNavController {
	pub fn new() -> Self {
		Self {
			calls: Mutex::new(Vec::new()),
			stack: Mutex::new(vec![START_DESTINATION.to_string()]),
			behavior: Mutex::new(EngineBehavior::Simulate),
		}
	}

	/// Creates a controller that fails every call with `message`.
	pub fn failing(message: impl Into<String>) -> Self {
		let controller = Self::new();
		controller.set_behavior(EngineBehavior::Fail(message.into()));
		controller
	}

	/// Creates a controller that panics on every call with `message`.
	pub fn panicking(message: impl Into<String>) -> Self {
		let controller = Self::new();
		controller.set_behavior(EngineBehavior::Panic(message.into()));
		controller
	}

	pub fn set_behavior(&self, behavior: EngineBehavior) {
		*self.behavior.lock() = behavior;
	}

	pub fn calls(&self) -> Vec<NavCall> {
		self.calls.lock().clone()
	}

	/// Route of the most recent push, if any.
	pub fn last_route(&self) -> Option<String> {
		self.calls.lock().iter().rev().find_map(|call| match call {
			NavCall::Navigate { route, .. } => Some(route.clone()),
			_ => None,
		})
	}

	/// URI of the most recent deep-link navigation, if any.
	pub fn last_deep_link(&self) -> Option<String> {
		self.calls.lock().iter().rev().find_map(|call| match call {
			NavCall::DeepLink { uri } => Some(uri.clone()),
			_ => None,
		})
	}

	/// Value most recently recorded on a back-stack entry under `key`.
	pub fn entry_argument(&self, key: &str) -> Option<String> {
		self.calls.lock().iter().rev().find_map(|call| match call {
			NavCall::SetArgument { key: k, value } if k == key => Some(value.clone()),
			_ => None,
		})
	}

	pub fn back_stack(&self) -> Vec<String> {
		self.stack.lock().clone()
	}

	fn record(&self, call: NavCall) -> Result<(), EngineError> {
		self.calls.lock().push(call);
		let behavior = self.behavior.lock().clone();
		match behavior {
			EngineBehavior::Simulate => Ok(()),
			EngineBehavior::Fail(message) => Err(EngineError::new(message)),
			EngineBehavior::Panic(message) => panic!("{}", message),
		}
	}
}

fn route_path(route: &str) -> &str {
	route.split_once('?').map_or(route, |(path, _)| path)
}

impl NavController for RecordingNavController {
	fn navigate(&self, route: &str, options: Option<&NavOptions>) -> Result<(), EngineError> {
		self.record(NavCall::Navigate {
			route: route.to_string(),
			options: options.cloned(),
		})?;
		let mut stack = self.stack.lock();
		let single_top = options.is_some_and(NavOptions::single_top);
		let on_top = stack
			.last()
			.is_some_and(|top| route_path(top) == route_path(route));
		if !(single_top && on_top) {
			stack.push(route.to_string());
		}
		Ok(())
	}

	fn navigate_deep_link(&self, request: &DeepLinkRequest) -> Result<(), EngineError> {
		self.record(NavCall::DeepLink {
			uri: request.to_string(),
		})?;
		self.stack.lock().push(request.to_string());
		Ok(())
	}

	fn navigate_up(&self) -> Result<bool, EngineError> {
		self.record(NavCall::NavigateUp)?;
		let mut stack = self.stack.lock();
		if stack.len() > 1 {
			stack.pop();
			Ok(true)
		} else {
			Ok(false)
		}
	}

	fn pop_back_stack_to_start(&self, inclusive: bool) -> Result<bool, EngineError> {
		self.record(NavCall::PopToStart { inclusive })?;
		let mut stack = self.stack.lock();
		let keep = if inclusive { 0 } else { 1 };
		let popped = stack.len() > keep;
		stack.truncate(keep);
		Ok(popped)
	}

	fn pop_back_stack(&self, route: &str, inclusive: bool) -> Result<bool, EngineError> {
		self.record(NavCall::PopBackStack {
			route: route.to_string(),
			inclusive,
		})?;
		let mut stack = self.stack.lock();
		let Some(index) = stack.iter().rposition(|entry| route_path(entry) == route) else {
			return Ok(false);
		};
		let keep = if inclusive { index } else { index + 1 };
		let popped = stack.len() > keep;
		stack.truncate(keep);
		Ok(popped)
	}

	fn set_current_entry_argument(&self, key: &str, value: &str) -> Result<(), EngineError> {
		self.record(NavCall::SetArgument {
			key: key.to_string(),
			value: value.to_string(),
		})
	}
}
