//! Shared fixtures for the route-gate integration tests.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};

use pathlab::core::route_auth::generate_access_token;
use pathlab::tenant_adapter::InMemoryTenantAdapter;
use pathlab::{App, AppBuilder};
use pathlab_types::types::{ResourceKind, TnId};

pub const SECRET: &str = "integration-test-secret";

/// App with a few seeded resources: report R1 and catalog test T1 belong
/// to lab 1, invoice I1 to lab 2.
pub fn test_app() -> App {
	let adapter = Arc::new(InMemoryTenantAdapter::new());
	adapter.insert(ResourceKind::Report, "R1", TnId(1));
	adapter.insert(ResourceKind::CatalogTest, "T1", TnId(1));
	adapter.insert(ResourceKind::Invoice, "I1", TnId(2));

	AppBuilder::new().token_secret(SECRET).tenant_adapter(adapter).build().unwrap()
}

pub fn test_router() -> Router {
	let app = test_app();
	pathlab::routes::routes(app)
}

pub fn token(user: &str, role: &str, tn: Option<u32>) -> String {
	generate_access_token(SECRET, user, role, tn.map(TnId)).unwrap().into()
}

pub fn request(method: &str, uri: &str, bearer: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder().method(method).uri(uri);
	if let Some(token) = bearer {
		builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
	}
	builder.body(Body::empty()).unwrap()
}

// vim: ts=4
