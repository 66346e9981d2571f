//! Well-known routes and deep links.
//!
//! Route constants are bare navigation-graph identifiers; deep-link constants
//! are built on [`DEEP_LINK_PREFIX`](crate::DEEP_LINK_PREFIX). Builder
//! functions append path segments or query parameters (query values are
//! percent-encoded).

use url::form_urlencoded;

macro_rules! deep_link {
	($path:literal) => {
		concat!("yfy://", $path)
	};
}

fn with_query(base: &str, name: &str, value: &str) -> String {
	let query = form_urlencoded::Serializer::new(String::new())
		.append_pair(name, value)
		.finish();
	format!("{}?{}", base, query)
}

/// In-app routes.
pub mod routes {
	/// Authentication screens.
	pub mod auth {
		pub const LOGIN: &str = "login";
		pub const REGISTER: &str = "register";
		pub const FORGOT_PASSWORD: &str = "forgot_password";

		/// `login`, or `login?email=<email>` when an email is given.
		pub fn login_with_args(email: Option<&str>) -> String {
			match email {
				Some(email) => super::super::with_query(LOGIN, "email", email),
				None => LOGIN.to_string(),
			}
		}
	}

	/// Profile screens.
	pub mod profile {
		pub const PROFILE: &str = "profile";
		pub const PROFILE_EDIT: &str = "profile_edit";
		pub const PROFILE_SETTINGS: &str = "profile_settings";

		pub fn profile_with_id(user_id: &str) -> String {
			format!("{}/{}", PROFILE, user_id)
		}

		pub fn profile_edit(user_id: &str) -> String {
			format!("{}/{}", PROFILE_EDIT, user_id)
		}
	}

	/// Home screens.
	pub mod home {
		pub const MAIN: &str = "home";
		pub const SEARCH: &str = "search";
		pub const FAVORITES: &str = "favorites";

		pub fn search_with_query(query: &str) -> String {
			super::super::with_query(SEARCH, "q", query)
		}
	}
}

/// Deep links under the default scheme.
pub mod deep_links {
	/// Authentication links.
	pub mod auth {
		pub const LOGIN: &str = deep_link!("auth/login");
		pub const REGISTER: &str = deep_link!("auth/register");
		pub const FORGOT_PASSWORD: &str = deep_link!("auth/forgot-password");

		pub fn login_with_email(email: &str) -> String {
			super::super::with_query(LOGIN, "email", email)
		}
	}

	/// Profile links.
	pub mod profile {
		pub const PROFILE: &str = deep_link!("profile");
		pub const PROFILE_EDIT: &str = deep_link!("profile/edit");
		pub const PROFILE_SETTINGS: &str = deep_link!("profile/settings");

		pub fn profile_with_id(user_id: &str) -> String {
			format!("{}/{}", PROFILE, user_id)
		}

		pub fn profile_edit(user_id: &str) -> String {
			format!("{}/{}", PROFILE_EDIT, user_id)
		}
	}

	/// Home links.
	pub mod home {
		pub const MAIN: &str = deep_link!("home");
		pub const SEARCH: &str = deep_link!("home/search");
		pub const FAVORITES: &str = deep_link!("home/favorites");

		pub fn search_with_query(query: &str) -> String {
			super::super::with_query(SEARCH, "q", query)
		}
	}
}
