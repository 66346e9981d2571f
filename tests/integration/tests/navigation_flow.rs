//! End-to-end navigation through the manager and screen entry points with a
//! recording engine, the app route graph and the payload registry.

use std::sync::Arc;

use rstest::rstest;
use tracing::Level;
use wayfinder::navigation::{
	LOG_TARGET, NavArguments, NavOptions, NavigationError, NavigationErrorKind, NavigationManager,
	Operation, navigation_data, take_navigation_data,
};
use wayfinder::store::TransientDataRegistry;
use wayfinder_integration_tests::{CartItem, ChatDraft, app_routes, destinations};
use wayfinder_test::fixtures::{NavigationHarness, harness};
use wayfinder_test::{EngineBehavior, NavCall, RecordingNavController, capture_logs};

#[rstest]
fn test_navigate_without_engine_fails() {
	// Arrange
	let manager = NavigationManager::new().with_registry(Arc::new(TransientDataRegistry::new()));

	// Act
	let result = manager.navigate("cart");

	// Assert
	let error = result.unwrap_err();
	assert_eq!(error, NavigationError::NotAttached);
	assert_eq!(error.message(), "NavController is not set");
}

#[rstest]
fn test_payload_reaches_destination_through_route_graph(harness: NavigationHarness) {
	// Arrange
	let routes = app_routes();
	let item = CartItem::sample();

	// Act
	harness
		.manager
		.navigate_with_data(destinations::CART, item.clone(), None)
		.unwrap();

	// Assert
	let route = harness.controller.last_route().unwrap();
	let matched = routes.resolve(&route).unwrap();
	assert_eq!(matched.feature, "cart");
	assert_eq!(matched.definition.pattern().as_str(), destinations::CART);
	let received = navigation_data::<CartItem, _>(&matched.arguments, &harness.registry).unwrap();
	assert_eq!(*received, item);
}

#[rstest]
fn test_path_parameter_and_payload_resolve_together(harness: NavigationHarness) {
	// Arrange
	let routes = app_routes();
	let draft = ChatDraft {
		chat_id: "abc".to_string(),
		text: "see you at noon".to_string(),
	};
	let route = destinations::chat_detail("abc");

	// Act
	harness
		.manager
		.navigate_with_data(&route, draft.clone(), None)
		.unwrap();

	// Assert
	let sent = harness.controller.last_route().unwrap();
	let matched = routes.resolve(&sent).unwrap();
	assert_eq!(matched.feature, "chat");
	assert_eq!(matched.arguments.get("chatId"), Some("abc"));
	let received = take_navigation_data::<ChatDraft, _>(&matched.arguments, &harness.registry);
	assert_eq!(received.as_deref(), Some(&draft));
	assert!(harness.registry.is_empty());
}

#[rstest]
#[case("", NavigationError::EmptyDestination)]
#[case("   ", NavigationError::EmptyDestination)]
#[case("bogus://x", NavigationError::InvalidLinkFormat("bogus://x".to_string()))]
#[case("not a route://x", NavigationError::InvalidLinkFormat("not a route://x".to_string()))]
fn test_rejected_destinations_never_reach_engine(
	harness: NavigationHarness,
	#[case] destination: &str,
	#[case] expected: NavigationError,
) {
	// Act
	let result = harness.manager.navigate_with_data(destination, CartItem::sample(), None);

	// Assert
	assert_eq!(result.unwrap_err(), expected);
	assert!(harness.controller.calls().is_empty());
	assert!(harness.registry.is_empty());
	assert_eq!(harness.sink.len(), 1);
}

#[rstest]
#[case("yfy://product_detail/42")]
#[case("https://example.com/product_detail/42")]
fn test_links_dispatch_as_deep_link_requests(harness: NavigationHarness, #[case] link: &str) {
	// Act
	harness.manager.navigate(link).unwrap();

	// Assert
	assert_eq!(
		harness.controller.last_deep_link().as_deref(),
		Some("yfy://product_detail/42")
	);
	assert_eq!(harness.controller.last_route(), None);
}

#[rstest]
fn test_back_stack_flow(harness: NavigationHarness) {
	// Arrange
	let manager = &harness.manager;
	manager.navigate(destinations::PRODUCT_LIST).unwrap();
	manager.navigate("product_detail/42").unwrap();
	manager.navigate(destinations::CART).unwrap();

	// Act & Assert
	manager.navigate_up().unwrap();
	assert_eq!(
		harness.controller.back_stack(),
		vec!["home", "product_list", "product_detail/42"]
	);

	manager.navigate_to_root().unwrap();
	assert_eq!(harness.controller.back_stack(), vec!["home"]);

	let error = manager.navigate_up().unwrap_err();
	assert_eq!(error, NavigationError::CannotNavigateUp);
	let error = manager.navigate_to_root().unwrap_err();
	assert_eq!(error, NavigationError::CannotNavigateToRoot);

	manager.clear_back_stack().unwrap();
	assert!(harness.controller.back_stack().is_empty());
}

#[rstest]
fn test_single_top_keeps_one_entry(harness: NavigationHarness) {
	// Arrange
	let options = NavOptions::new().with_single_top(true);

	// Act
	harness
		.manager
		.navigate_with_options(destinations::CART, Some(&options))
		.unwrap();
	harness
		.manager
		.navigate_with_data(destinations::CART, CartItem::sample(), Some(&options))
		.unwrap();

	// Assert
	assert_eq!(harness.controller.back_stack(), vec!["home", "cart"]);
	assert!(matches!(
		harness.controller.calls().last(),
		Some(NavCall::Navigate { options: Some(sent), .. }) if sent.single_top()
	));
}

#[rstest]
fn test_pop_back_stack_hands_result_to_previous_screen(harness: NavigationHarness) {
	// Arrange
	let manager = &harness.manager;
	manager.navigate(destinations::CART).unwrap();
	manager.navigate(destinations::CHECKOUT).unwrap();
	let item = CartItem::sample();

	// Act
	manager
		.pop_back_stack_with_data(destinations::CART, Some(item.clone()))
		.unwrap();

	// Assert
	assert_eq!(harness.controller.back_stack(), vec!["home", "cart"]);
	let token = harness.controller.entry_argument("dataKey").unwrap();
	let arguments = NavArguments::new().with("dataKey", token);
	let received = navigation_data::<CartItem, _>(&arguments, &harness.registry).unwrap();
	assert_eq!(*received, item);
}

#[rstest]
fn test_pop_back_stack_to_missing_route_is_not_an_error(harness: NavigationHarness) {
	// Act
	let result = harness.manager.pop_back_stack_with_data::<CartItem>("chat_list", None);

	// Assert
	assert!(result.is_ok());
	assert_eq!(harness.controller.back_stack(), vec!["home"]);
	assert!(harness.registry.is_empty());
}

#[rstest]
fn test_engine_failure_discards_payload() {
	// Arrange
	let harness = NavigationHarness::new(Arc::new(RecordingNavController::failing("graph not set")));

	// Act
	let result = harness
		.manager
		.navigate_with_data(destinations::CART, CartItem::sample(), None);

	// Assert
	let error = result.unwrap_err();
	assert_eq!(error.kind(), NavigationErrorKind::EngineFailure);
	assert_eq!(error.message(), "Navigation failed: graph not set");
	assert!(harness.registry.is_empty());
}

#[rstest]
fn test_engine_panic_becomes_error(harness: NavigationHarness) {
	// Arrange
	harness
		.controller
		.set_behavior(EngineBehavior::Panic("destination not in graph".to_string()));

	// Act
	let result = harness.manager.navigate_up();

	// Assert
	match result.unwrap_err() {
		NavigationError::Engine { operation, source } => {
			assert_eq!(operation, Operation::NavigateUp);
			assert_eq!(source.message(), "destination not in graph");
		}
		other => panic!("unexpected error: {:?}", other),
	}
	assert_eq!(harness.sink.kinds(), vec![NavigationErrorKind::EngineFailure]);
}

#[rstest]
fn test_detach_then_reattach(harness: NavigationHarness) {
	// Act
	harness.manager.clear_nav_controller();
	let detached = harness.manager.navigate(destinations::CART);
	harness.manager.clear_nav_controller();
	harness
		.manager
		.set_nav_controller(Arc::clone(&harness.controller) as Arc<dyn wayfinder::NavController>);
	let attached = harness.manager.navigate(destinations::CART);

	// Assert
	assert_eq!(detached.unwrap_err(), NavigationError::NotAttached);
	assert!(attached.is_ok());
	assert_eq!(harness.controller.back_stack(), vec!["home", "cart"]);
}

#[rstest]
fn test_screen_navigator_shares_registry(harness: NavigationHarness) {
	// Arrange
	let screen = harness.screen();
	let routes = app_routes();

	// Act
	screen
		.navigate_with_data("product_detail/42", CartItem::sample(), None)
		.unwrap();
	screen.navigate_up().unwrap();
	let error = screen.navigate_up().unwrap_err();

	// Assert
	let sent = harness.controller.calls();
	let route = match &sent[0] {
		NavCall::Navigate { route, .. } => route.clone(),
		other => panic!("unexpected call: {:?}", other),
	};
	let matched = routes.resolve(&route).unwrap();
	assert_eq!(matched.arguments.get("productId"), Some("42"));
	assert!(navigation_data::<CartItem, _>(&matched.arguments, &harness.registry).is_some());
	assert_eq!(error, NavigationError::CannotNavigateUp);
	assert_eq!(harness.sink.len(), 1);
}

#[rstest]
fn test_clear_navigation_data_drops_pending_payloads(harness: NavigationHarness) {
	// Arrange
	harness
		.manager
		.navigate_with_data(destinations::CART, CartItem::sample(), None)
		.unwrap();
	assert_eq!(harness.registry.len(), 1);

	// Act
	harness.manager.clear_navigation_data();

	// Assert
	assert!(harness.registry.is_empty());
}

#[rstest]
fn test_failures_are_logged_as_warnings() {
	// Arrange
	let logs = capture_logs();
	let manager = NavigationManager::new().with_registry(Arc::new(TransientDataRegistry::new()));

	// Act
	let _ = manager.navigate("cart");

	// Assert
	let warnings = logs.matching(Level::WARN, LOG_TARGET);
	assert_eq!(warnings.len(), 1);
	assert_eq!(warnings[0].message, "navigation failed");
	assert_eq!(warnings[0].field("origin"), Some("manager"));
	assert_eq!(warnings[0].field("action"), Some("navigate"));
	assert_eq!(warnings[0].field("subject"), Some("cart"));
	assert_eq!(warnings[0].field("error"), Some("NavController is not set"));
}
