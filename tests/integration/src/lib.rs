//! Shared fixtures for Wayfinder integration tests.
//!
//! Feature route providers and payload types shaped like the ones a product,
//! cart and chat feature would contribute.

use serde::{Deserialize, Serialize};
use wayfinder_navigation::{FeatureRouteProvider, RouteDefinition, RouteRegistry};

pub mod destinations {
	pub const PRODUCT_LIST: &str = "product_list";
	pub const PRODUCT_DETAIL: &str = "product_detail/{productId}";
	pub const CART: &str = "cart";
	pub const CHECKOUT: &str = "checkout";
	pub const CHAT_LIST: &str = "chat_list";
	pub const CHAT_DETAIL: &str = "chat_detail/{chatId}";

	pub fn product_detail(product_id: &str) -> String {
		format!("product_detail/{}", product_id)
	}

	pub fn chat_detail(chat_id: &str) -> String {
		format!("chat_detail/{}", chat_id)
	}
}

pub struct ProductRoutes;

impl FeatureRouteProvider for ProductRoutes {
	fn feature_prefix(&self) -> &str {
		"product"
	}

	fn routes(&self) -> Vec<RouteDefinition> {
		vec![
			RouteDefinition::new(destinations::PRODUCT_LIST),
			RouteDefinition::new(destinations::PRODUCT_DETAIL).with_builder(destinations::product_detail),
		]
	}
}

pub struct CartRoutes;

impl FeatureRouteProvider for CartRoutes {
	fn feature_prefix(&self) -> &str {
		"cart"
	}

	fn routes(&self) -> Vec<RouteDefinition> {
		vec![
			RouteDefinition::new(destinations::CART),
			RouteDefinition::new(destinations::CHECKOUT),
		]
	}
}

pub struct ChatRoutes;

impl FeatureRouteProvider for ChatRoutes {
	fn feature_prefix(&self) -> &str {
		"chat"
	}

	fn routes(&self) -> Vec<RouteDefinition> {
		vec![
			RouteDefinition::new(destinations::CHAT_LIST),
			RouteDefinition::new(destinations::CHAT_DETAIL).with_builder(destinations::chat_detail),
		]
	}
}

/// Routes of every feature.
///
/// # Panics
///
/// Panics if two features register the same pattern.
pub fn app_routes() -> RouteRegistry {
	let mut registry = RouteRegistry::new();
	registry
		.register(ProductRoutes)
		.and_then(|registry| registry.register(CartRoutes))
		.and_then(|registry| registry.register(ChatRoutes))
		.expect("feature routes must not overlap");
	registry
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
	pub product_id: u64,
	pub title: String,
	pub quantity: u32,
	pub unit_price_cents: u64,
}

impl CartItem {
	pub fn sample() -> Self {
		Self {
			product_id: 42,
			title: "Desk lamp".to_string(),
			quantity: 2,
			unit_price_cents: 1999,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatDraft {
	pub chat_id: String,
	pub text: String,
}
