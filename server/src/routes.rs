//! API routes and their authorization gates.
//!
//! Gates are static per-route declarations; the token middleware is the
//! outermost layer so every gate sees the attached principal.

use axum::{
	Router, middleware,
	routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::middleware as mw;
use crate::core::route_auth;
use crate::handler;
use crate::prelude::*;
use pathlab_rbac::roles::perm;
use pathlab_rbac::{CatalogAction, Gate, Role};

/// Any authenticated, valid role; tenant scoping still applies.
const ANY_ROLE: Gate = Gate::new();

const LABS: Gate = Gate::new().roles(&[Role::SuperAdmin]).permissions(&[perm::MANAGE_LABS]);
const PATIENTS_VIEW: Gate = Gate::new().permissions(&[perm::VIEW_PATIENTS]);
const PATIENTS_MANAGE: Gate = Gate::new().permissions(&[perm::MANAGE_PATIENTS]);
const SAMPLES_MANAGE: Gate = Gate::new().permissions(&[perm::MANAGE_SAMPLES]);
const REPORT_APPROVE: Gate = Gate::new()
	.roles(&[Role::SuperAdmin, Role::LabAdmin])
	.permissions(&[perm::APPROVE_REPORTS]);
const INVOICES_VIEW: Gate = Gate::new().permissions(&[perm::VIEW_INVOICES]);

pub fn routes(app: App) -> Router {
	let labs = Router::new()
		.route("/api/labs", get(handler::list_labs))
		.route_layer(middleware::from_fn(mw::require(&LABS)));

	let patients = Router::new()
		.route("/api/lab/{lab_id}/patients", get(handler::list_patients))
		.route_layer(middleware::from_fn(mw::require(&PATIENTS_VIEW)));

	let patients_manage = Router::new()
		.route("/api/lab/{lab_id}/patients", post(handler::create_patient))
		.route_layer(middleware::from_fn(mw::require(&PATIENTS_MANAGE)));

	let samples = Router::new()
		.route("/api/lab/{lab_id}/samples", post(handler::create_sample))
		.route_layer(middleware::from_fn(mw::require(&SAMPLES_MANAGE)));

	let reports = Router::new()
		.route("/api/report/{report_id}", get(handler::get_report))
		.route_layer(middleware::from_fn_with_state(
			app.clone(),
			mw::require_resource(&ANY_ROLE, ResourceKind::Report, "report_id"),
		));

	let report_approve = Router::new()
		.route("/api/report/{report_id}/approve", post(handler::approve_report))
		.route_layer(middleware::from_fn_with_state(
			app.clone(),
			mw::require_resource(&REPORT_APPROVE, ResourceKind::Report, "report_id"),
		));

	let invoices = Router::new()
		.route("/api/invoice/{invoice_id}", get(handler::get_invoice))
		.route_layer(middleware::from_fn_with_state(
			app.clone(),
			mw::require_resource(&INVOICES_VIEW, ResourceKind::Invoice, "invoice_id"),
		));

	let catalog_list = Router::new()
		.route("/api/tests", get(handler::list_catalog_tests))
		.route_layer(middleware::from_fn(mw::require_catalog(CatalogAction::List)));

	let catalog_create = Router::new()
		.route("/api/tests", post(handler::create_catalog_test))
		.route_layer(middleware::from_fn(mw::require_catalog(CatalogAction::Create)));

	// Update runs both policy tables: the catalog matrix first, then the
	// tenant check against the test's owning lab
	let catalog_update = Router::new()
		.route("/api/test/{test_id}", put(handler::update_catalog_test))
		.route_layer(middleware::from_fn_with_state(
			app.clone(),
			mw::require_resource(&ANY_ROLE, ResourceKind::CatalogTest, "test_id"),
		))
		.route_layer(middleware::from_fn(mw::require_catalog(CatalogAction::Update)));

	let staff = Router::new()
		.route("/api/staff/{user_id}/profile", get(handler::staff_profile))
		.route_layer(middleware::from_fn(mw::require_owner("user_id")));

	Router::new()
		.route("/api/health", get(handler::health))
		.merge(labs)
		.merge(patients)
		.merge(patients_manage)
		.merge(samples)
		.merge(reports)
		.merge(report_approve)
		.merge(invoices)
		.merge(catalog_list)
		.merge(catalog_create)
		.merge(catalog_update)
		.merge(staff)
		.layer(middleware::from_fn_with_state(app.clone(), route_auth::optional_auth))
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.with_state(app)
}

// vim: ts=4
