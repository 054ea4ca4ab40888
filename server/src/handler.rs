//! Demo handlers for the gated resources.
//!
//! Deliberately thin: the resource CRUD itself lives behind the data
//! store and is not the concern of this crate. Handlers echo the resolved
//! authorization data so gated routes are observable end to end.

use axum::{Json, extract::Path, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::core::extract::{Auth, Authz};

pub async fn health() -> impl IntoResponse {
	Json(json!({ "success": true, "status": "ok" }))
}

pub async fn list_labs(Authz(decision): Authz) -> impl IntoResponse {
	Json(json!({ "success": true, "labs": [], "level": decision.level }))
}

pub async fn list_patients(
	Auth(principal): Auth,
	Authz(decision): Authz,
	Path(lab_id): Path<u32>,
) -> impl IntoResponse {
	Json(json!({
		"success": true,
		"lab_id": lab_id,
		"requested_by": principal.user_id,
		"permissions": decision.permissions,
	}))
}

pub async fn create_patient(Path(lab_id): Path<u32>) -> impl IntoResponse {
	(StatusCode::CREATED, Json(json!({ "success": true, "lab_id": lab_id })))
}

pub async fn create_sample(Path(lab_id): Path<u32>) -> impl IntoResponse {
	(StatusCode::CREATED, Json(json!({ "success": true, "lab_id": lab_id })))
}

pub async fn get_report(Path(report_id): Path<String>) -> impl IntoResponse {
	Json(json!({ "success": true, "report_id": report_id }))
}

pub async fn approve_report(
	Authz(decision): Authz,
	Path(report_id): Path<String>,
) -> impl IntoResponse {
	Json(json!({
		"success": true,
		"report_id": report_id,
		"approved_at_level": decision.level,
	}))
}

pub async fn get_invoice(Path(invoice_id): Path<String>) -> impl IntoResponse {
	Json(json!({ "success": true, "invoice_id": invoice_id }))
}

pub async fn list_catalog_tests(Authz(decision): Authz) -> impl IntoResponse {
	Json(json!({ "success": true, "tests": [], "level": decision.level }))
}

pub async fn create_catalog_test() -> impl IntoResponse {
	(StatusCode::CREATED, Json(json!({ "success": true })))
}

pub async fn update_catalog_test(Path(test_id): Path<String>) -> impl IntoResponse {
	Json(json!({ "success": true, "test_id": test_id }))
}

pub async fn staff_profile(
	Auth(principal): Auth,
	Path(user_id): Path<String>,
) -> impl IntoResponse {
	Json(json!({
		"success": true,
		"user_id": user_id,
		"requested_by": principal.user_id,
	}))
}

// vim: ts=4
