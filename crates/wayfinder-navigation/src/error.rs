//! Navigation results and errors.

use std::any::Any;
use std::fmt;

use thiserror::Error;

use crate::context::LaunchOrigin;

/// Outcome of every navigation operation.
///
/// `Ok(())` means the request was handed to the engine. The transition itself
/// is owned by the engine and completes asynchronously.
pub type NavigationResult = Result<(), NavigationError>;

/// Failure reported by a navigation engine or an application launcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
	message: String,
}

impl EngineError {
	/// Creates an engine error with a human-readable message.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	/// Converts a caught panic payload into an engine error.
	pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
		let message = if let Some(message) = payload.downcast_ref::<&str>() {
			(*message).to_string()
		} else if let Some(message) = payload.downcast_ref::<String>() {
			message.clone()
		} else {
			"navigation engine panicked".to_string()
		};
		Self { message }
	}

	/// Returns the message.
	pub fn message(&self) -> &str {
		&self.message
	}
}

/// The operation that was running when an engine failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	Navigate,
	NavigateUp,
	NavigateToRoot,
	ClearBackStack,
	HandleDeepLink,
	PopBackStack,
	Launch(LaunchOrigin),
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Navigate => f.write_str("Navigation failed"),
			Self::NavigateUp => f.write_str("Navigate up failed"),
			Self::NavigateToRoot => f.write_str("Navigate to root failed"),
			Self::ClearBackStack => f.write_str("Clear back stack failed"),
			Self::HandleDeepLink => f.write_str("Deep link handling failed"),
			Self::PopBackStack => f.write_str("Pop back stack failed"),
			Self::Launch(LaunchOrigin::Context) => f.write_str("Context navigation failed"),
			Self::Launch(LaunchOrigin::Activity) => f.write_str("Activity navigation failed"),
		}
	}
}

/// Coarse classification of a [`NavigationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationErrorKind {
	/// No navigation engine is attached.
	Unattached,
	/// The destination is blank.
	InvalidInput,
	/// The destination is neither a route, a deep link nor an app link.
	Unclassifiable,
	/// A link destination could not be turned into a request.
	BuildFailure,
	/// The engine or launcher failed while dispatching.
	EngineFailure,
	/// The engine declined the request, or the caller cannot serve it.
	Rejected,
}

/// Why a navigation operation did not happen.
///
/// The `Display` output is the human-readable message callers surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
	#[error("NavController is not set")]
	NotAttached,

	#[error("Destination cannot be empty")]
	EmptyDestination,

	#[error("Invalid link format: {0}")]
	InvalidLinkFormat(String),

	#[error("Invalid deep link: {0}")]
	InvalidDeepLink(String),

	#[error("Cannot navigate up")]
	CannotNavigateUp,

	#[error("Cannot navigate to root")]
	CannotNavigateToRoot,

	#[error("Route navigation from {0} needs NavController")]
	RouteRequiresController(LaunchOrigin),

	#[error("{operation}: {source}")]
	Engine {
		operation: Operation,
		#[source]
		source: EngineError,
	},
}

impl NavigationError {
	pub(crate) fn engine(operation: Operation, source: EngineError) -> Self {
		Self::Engine { operation, source }
	}

	/// Returns the human-readable message.
	pub fn message(&self) -> String {
		self.to_string()
	}

	/// Returns the underlying engine failure, if any.
	pub fn cause(&self) -> Option<&EngineError> {
		match self {
			Self::Engine { source, .. } => Some(source),
			_ => None,
		}
	}

	/// Classifies the error.
	pub fn kind(&self) -> NavigationErrorKind {
		match self {
			Self::NotAttached => NavigationErrorKind::Unattached,
			Self::EmptyDestination => NavigationErrorKind::InvalidInput,
			Self::InvalidLinkFormat(_) => NavigationErrorKind::Unclassifiable,
			Self::InvalidDeepLink(_) => NavigationErrorKind::BuildFailure,
			Self::Engine { .. } => NavigationErrorKind::EngineFailure,
			Self::CannotNavigateUp
			| Self::CannotNavigateToRoot
			| Self::RouteRequiresController(_) => NavigationErrorKind::Rejected,
		}
	}
}
