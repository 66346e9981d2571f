//! Loading link and registry settings, and navigating with them.

use std::sync::Arc;

use rstest::rstest;
use serial_test::serial;
use wayfinder::links::config::{DOMAIN_ENV_VAR, SCHEME_ENV_VAR};
use wayfinder::links::{ConfigError, NavigationConfig};
use wayfinder::navigation::{NavigationError, NavigationManager};
use wayfinder::store::{RegistryConfig, RegistryConfigError};
use wayfinder_test::fixtures::{NavigationHarness, harness};

struct EnvVarGuard {
	vars: Vec<String>,
}

impl EnvVarGuard {
	fn new() -> Self {
		Self { vars: Vec::new() }
	}

	fn set(&mut self, key: &str, value: &str) {
		unsafe {
			std::env::set_var(key, value);
		}
		self.vars.push(key.to_string());
	}
}

impl Drop for EnvVarGuard {
	fn drop(&mut self) {
		for key in &self.vars {
			unsafe {
				std::env::remove_var(key);
			}
		}
	}
}

#[rstest]
#[serial(navigation_env)]
fn test_from_env_reads_both_variables() {
	// Arrange
	let mut guard = EnvVarGuard::new();
	guard.set(SCHEME_ENV_VAR, "shop");
	guard.set(DOMAIN_ENV_VAR, "shop.example.org");

	// Act
	let config = NavigationConfig::from_env().unwrap();

	// Assert
	assert_eq!(config.deep_link_prefix(), "shop://");
	assert_eq!(config.app_link_prefix(), "https://shop.example.org/");
}

#[rstest]
#[serial(navigation_env)]
fn test_from_env_defaults_unset_variables() {
	// Arrange
	let mut guard = EnvVarGuard::new();
	guard.set(SCHEME_ENV_VAR, "shop");

	// Act
	let config = NavigationConfig::from_env().unwrap();

	// Assert
	assert_eq!(config.scheme(), "shop");
	assert_eq!(config.app_link_prefix(), "https://example.com/");
}

#[rstest]
#[serial(navigation_env)]
fn test_from_env_rejects_malformed_scheme() {
	// Arrange
	let mut guard = EnvVarGuard::new();
	guard.set(SCHEME_ENV_VAR, "1shop");

	// Act
	let result = NavigationConfig::from_env();

	// Assert
	assert!(matches!(result, Err(ConfigError::InvalidScheme(scheme)) if scheme == "1shop"));
}

#[rstest]
#[case("deep_link_scheme = \"shop\"", "shop://", "https://example.com/")]
#[case("app_link_domain = \"m.example.org\"", "yfy://", "https://m.example.org/")]
#[case("", "yfy://", "https://example.com/")]
fn test_from_toml(#[case] source: &str, #[case] deep_link_prefix: &str, #[case] app_link_prefix: &str) {
	// Act
	let config = NavigationConfig::from_toml_str(source).unwrap();

	// Assert
	assert_eq!(config.deep_link_prefix(), deep_link_prefix);
	assert_eq!(config.app_link_prefix(), app_link_prefix);
}

#[rstest]
#[case("app_link_domain = \"example.com/app\"")]
#[case("deep_link_scheme = \"\"")]
#[case("deep_link_scheme = 42")]
fn test_from_toml_rejects_bad_settings(#[case] source: &str) {
	assert!(NavigationConfig::from_toml_str(source).is_err());
}

#[rstest]
fn test_registry_config_from_toml() {
	// Act
	let config = RegistryConfig::from_toml_str("max_entries = 16\nttl_secs = 30").unwrap();
	let zero = RegistryConfig::from_toml_str("max_entries = 0");

	// Assert
	assert_eq!(config.max_entries(), Some(16));
	assert_eq!(config.ttl(), Some(std::time::Duration::from_secs(30)));
	assert!(matches!(zero, Err(RegistryConfigError::ZeroCapacity)));
}

#[rstest]
fn test_manager_follows_custom_config(harness: NavigationHarness) {
	// Arrange
	let config = Arc::new(NavigationConfig::new("shop", "shop.example.org").unwrap());
	let manager = NavigationManager::new()
		.with_config(config)
		.with_registry(Arc::clone(&harness.registry));
	manager.set_nav_controller(Arc::clone(&harness.controller) as Arc<dyn wayfinder::NavController>);

	// Act
	let app_link = manager.navigate("https://shop.example.org/cart");
	let foreign = manager.navigate("yfy://cart");

	// Assert
	assert!(app_link.is_ok());
	assert_eq!(
		harness.controller.last_deep_link().as_deref(),
		Some("shop://cart")
	);
	assert_eq!(
		foreign.unwrap_err(),
		NavigationError::InvalidLinkFormat("yfy://cart".to_string())
	);
}
