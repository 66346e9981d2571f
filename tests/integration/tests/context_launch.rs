//! Launching links from outside the navigation host.

use std::sync::Arc;

use rstest::rstest;
use wayfinder::navigation::{
	ACTION_VIEW, AppLauncher, ContextNavigator, DATA_KEY, LaunchOrigin, NavigationError,
	NavigationErrorKind, take_navigation_data,
};
use wayfinder::store::TransientDataRegistry;
use wayfinder_integration_tests::CartItem;
use wayfinder_test::RecordingLauncher;
use wayfinder_test::fixtures::{ContextHarness, context_harness};

#[rstest]
#[case("yfy://product_detail/42")]
#[case("https://example.com/product_detail/42")]
fn test_link_is_launched_as_view_intent(context_harness: ContextHarness, #[case] link: &str) {
	// Act
	context_harness.navigator.navigate(link).unwrap();

	// Assert
	let intent = context_harness.launcher.last_intent().unwrap();
	assert_eq!(intent.action(), ACTION_VIEW);
	assert_eq!(intent.uri().as_str(), link);
	assert!(intent.extras().is_empty());
}

#[rstest]
fn test_payload_is_recovered_by_launched_screen(context_harness: ContextHarness) {
	// Arrange
	let item = CartItem::sample();

	// Act
	context_harness
		.navigator
		.navigate_with_data("yfy://cart", item.clone())
		.unwrap();

	// Assert
	let intent = context_harness.launcher.last_intent().unwrap();
	assert!(intent.extra(DATA_KEY).is_some());
	let received = take_navigation_data::<CartItem, _>(&intent, &context_harness.registry).unwrap();
	assert_eq!(*received, item);
	assert!(context_harness.registry.is_empty());
}

#[rstest]
fn test_route_requires_controller(context_harness: ContextHarness) {
	// Act
	let result = context_harness
		.navigator
		.navigate_with_data("cart", CartItem::sample());

	// Assert
	let error = result.unwrap_err();
	assert_eq!(error, NavigationError::RouteRequiresController(LaunchOrigin::Context));
	assert_eq!(
		error.message(),
		"Route navigation from context needs NavController"
	);
	assert!(context_harness.launcher.intents().is_empty());
	assert!(context_harness.registry.is_empty());
}

#[rstest]
#[case("", NavigationErrorKind::InvalidInput)]
#[case("bogus://x", NavigationErrorKind::Unclassifiable)]
fn test_bad_destinations_are_reported(
	context_harness: ContextHarness,
	#[case] destination: &str,
	#[case] kind: NavigationErrorKind,
) {
	// Act
	let result = context_harness.navigator.navigate(destination);

	// Assert
	assert_eq!(result.unwrap_err().kind(), kind);
	assert_eq!(context_harness.sink.kinds(), vec![kind]);
	assert!(context_harness.launcher.intents().is_empty());
}

#[rstest]
fn test_launcher_failure_discards_payload(context_harness: ContextHarness) {
	// Arrange
	context_harness.launcher.fail_with("no activity found");

	// Act
	let result = context_harness
		.navigator
		.navigate_with_data("yfy://cart", CartItem::sample());

	// Assert
	let error = result.unwrap_err();
	assert_eq!(error.message(), "Context navigation failed: no activity found");
	assert!(context_harness.registry.is_empty());
}

#[rstest]
fn test_activity_origin_names_itself_in_errors() {
	// Arrange
	let launcher = Arc::new(RecordingLauncher::failing("activity finishing"));
	let navigator = ContextNavigator::for_activity(Arc::clone(&launcher) as Arc<dyn AppLauncher>)
		.with_registry(Arc::new(TransientDataRegistry::new()));

	// Act
	let route_error = navigator.navigate("chat_list").unwrap_err();
	let launch_error = navigator.navigate("yfy://chat_list").unwrap_err();

	// Assert
	assert_eq!(navigator.origin(), LaunchOrigin::Activity);
	assert_eq!(
		route_error.message(),
		"Route navigation from activity needs NavController"
	);
	assert_eq!(
		launch_error.message(),
		"Activity navigation failed: activity finishing"
	);
}
