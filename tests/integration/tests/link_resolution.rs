//! Link classification, normalization, extraction and request building
//! through the public `wayfinder` facade.

use std::sync::Arc;

use proptest::prelude::*;
use rstest::rstest;
use tracing::Level;
use wayfinder::links::{
	APP_LINK_PREFIX, DEEP_LINK_PREFIX, DeepLinkRequestBuilder, LinkClassifier, LinkNormalizer,
	LOG_TARGET, LinkType, NavigationConfig, ParameterExtractor,
};
use wayfinder_test::capture_logs;

fn classifier() -> LinkClassifier {
	LinkClassifier::default()
}

fn normalizer() -> LinkNormalizer {
	LinkNormalizer::new(NavigationConfig::shared())
}

#[rstest]
#[case("cart", LinkType::Route)]
#[case("product_detail/42", LinkType::Route)]
#[case("chat_detail/abc?draft=1", LinkType::Route)]
#[case("yfy://product/42", LinkType::DeepLink)]
#[case("https://example.com/cart", LinkType::AppLink)]
#[case("", LinkType::Invalid)]
#[case("not a route://x", LinkType::Invalid)]
#[case("bogus://x", LinkType::Invalid)]
#[case("http://example.com/cart", LinkType::Invalid)]
fn test_classify_destinations(#[case] destination: &str, #[case] expected: LinkType) {
	// Act
	let link_type = classifier().classify(destination);

	// Assert
	assert_eq!(link_type, expected, "destination: {:?}", destination);
}

#[rstest]
fn test_classification_follows_custom_config() {
	// Arrange
	let config = Arc::new(NavigationConfig::new("shop", "shop.example.org").unwrap());
	let classifier = LinkClassifier::new(Arc::clone(&config));

	// Act & Assert
	assert_eq!(classifier.classify("shop://cart"), LinkType::DeepLink);
	assert_eq!(
		classifier.classify("https://shop.example.org/cart"),
		LinkType::AppLink
	);
	assert_eq!(classifier.classify(DEEP_LINK_PREFIX), LinkType::Invalid);
	assert_eq!(classifier.classify(APP_LINK_PREFIX), LinkType::Invalid);
}

#[rstest]
#[case("https://example.com/product/42", "yfy://product/42")]
#[case("https://example.com/", "yfy://")]
#[case("yfy://cart", "yfy://cart")]
fn test_to_deep_link(#[case] link: &str, #[case] expected: &str) {
	// Act
	let deep_link = normalizer().to_deep_link(link);

	// Assert
	assert_eq!(deep_link.as_deref(), Some(expected));
}

#[rstest]
#[case("cart")]
#[case("")]
#[case("   ")]
#[case("bogus://x")]
fn test_to_deep_link_rejects_non_links(#[case] destination: &str) {
	assert_eq!(normalizer().to_deep_link(destination), None);
}

#[rstest]
fn test_prefix_substitution_leaves_the_rest_untouched() {
	// Arrange
	let normalizer = normalizer();

	// Act
	let app_link = normalizer.deep_link_to_app_link("yfy://chat_detail/7?draft=yfy://x");

	// Assert
	assert_eq!(app_link, "https://example.com/chat_detail/7?draft=yfy://x");
	assert_eq!(normalizer.app_link_to_deep_link("cart"), "cart");
}

#[rstest]
#[case("yfy://product?id=42&ref=home", &[("id", "42"), ("ref", "home")])]
#[case("yfy://product/42", &[("id", "42")])]
#[case("yfy://product/42?ref=home", &[("id", "42"), ("ref", "home")])]
#[case("yfy://chat_detail/abc", &[])]
#[case("not a uri", &[])]
fn test_extract_parameters(#[case] link: &str, #[case] expected: &[(&str, &str)]) {
	// Act
	let params = ParameterExtractor::new().extract(link);

	// Assert
	assert_eq!(params.len(), expected.len(), "params: {:?}", params);
	for (key, value) in expected {
		assert_eq!(params.get(*key).map(String::as_str), Some(*value));
	}
}

#[rstest]
fn test_build_request_from_app_link() {
	// Arrange
	let builder = DeepLinkRequestBuilder::default();

	// Act
	let request = builder.build("https://example.com/product_detail/42?ref=mail");

	// Assert
	let request = request.unwrap();
	assert_eq!(request.as_str(), "yfy://product_detail/42?ref=mail");
	assert_eq!(request.uri().scheme(), "yfy");
}

#[rstest]
#[case("cart")]
#[case("")]
#[case("bogus://x")]
fn test_build_request_rejects_non_links(#[case] destination: &str) {
	assert!(DeepLinkRequestBuilder::default().build(destination).is_none());
}

#[rstest]
fn test_best_effort_failures_log_under_links_target() {
	// Arrange
	let logs = capture_logs();

	// Act
	let params = ParameterExtractor::new().extract("not a uri");
	let request = DeepLinkRequestBuilder::default().build("yfy://[bad");

	// Assert
	assert!(params.is_empty());
	assert!(request.is_none());
	let events = logs.matching(Level::DEBUG, LOG_TARGET);
	assert_eq!(LOG_TARGET, "wayfinder::links");
	assert_eq!(events.len(), 2, "events: {:?}", logs.events());
	assert_eq!(events[0].message, "failed to extract parameters");
	assert_eq!(events[1].message, "failed to build deep link request");
}

proptest! {
	#[test]
	fn prop_routes_classify_as_route(route in "[a-z_]{1,12}(/[a-z0-9]{1,8}){0,3}") {
		prop_assert_eq!(classifier().classify(&route), LinkType::Route);
	}

	#[test]
	fn prop_separator_without_known_prefix_is_invalid(
		scheme in "[a-x]{1,8}",
		rest in "[a-z0-9/]{0,16}",
	) {
		prop_assume!(scheme != "yfy");
		let destination = format!("{}://{}", scheme, rest);
		prop_assert_eq!(classifier().classify(&destination), LinkType::Invalid);
	}

	#[test]
	fn prop_app_link_round_trips_through_deep_link(path in "[a-z0-9_/]{1,24}") {
		let normalizer = normalizer();
		let app_link = format!("{}{}", APP_LINK_PREFIX, path);

		let deep_link = normalizer.app_link_to_deep_link(&app_link);

		prop_assert_eq!(classifier().classify(&deep_link), LinkType::DeepLink);
		prop_assert_eq!(normalizer.deep_link_to_app_link(&deep_link), app_link);
	}

	#[test]
	fn prop_numeric_segment_becomes_id(id in 1u64..1_000_000u64) {
		let params = ParameterExtractor::new().extract(&format!("yfy://product_detail/{}", id));
		prop_assert_eq!(params.get("id"), Some(&id.to_string()));
	}
}
