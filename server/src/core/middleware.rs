//! Route-gate middlewares.
//!
//! Each factory takes the static authorization requirements of a route
//! and returns a cloneable middleware closure. The gate evaluates the
//! decision, and either attaches it to the request for the handler or
//! terminates with the denial translated to HTTP. Denials never
//! propagate as errors past this layer.

use axum::{
	Json,
	extract::{RawPathParams, Request, State},
	http::StatusCode,
	middleware::Next,
	response::{IntoResponse, Response},
};
use serde_json::json;
use std::pin::Pin;

use crate::core::extract::{Authz, OptionalAuth};
use crate::prelude::*;
use pathlab_rbac::{
	CatalogAction, Decision, DenyKind, Gate, authorize, authorize_catalog,
	authorize_for_resource, authorize_owner_or_elevated, owner::DEFAULT_ELEVATED,
};

pub type GateOutput = Pin<Box<dyn Future<Output = PlResult<Response>> + Send>>;

/// Middleware factory for role/permission gates.
///
/// If the route path names a lab (`lab_id` segment), tenant isolation is
/// enforced against it; otherwise only the static checks run.
pub fn require(
	gate: &'static Gate,
) -> impl Fn(OptionalAuth, RawPathParams, Request, Next) -> GateOutput + Clone {
	move |auth, params, req, next| Box::pin(check_gate(auth, params, req, next, gate))
}

/// Middleware factory for routes naming a resource id instead of a lab.
///
/// After the static gate passes, the owning lab of `(kind, {param})` is
/// resolved through the tenant adapter and checked against the principal.
pub fn require_resource(
	gate: &'static Gate,
	kind: ResourceKind,
	param: &'static str,
) -> impl Fn(State<App>, OptionalAuth, RawPathParams, Request, Next) -> GateOutput + Clone {
	move |state, auth, params, req, next| {
		Box::pin(check_resource(state, auth, params, req, next, gate, kind, param))
	}
}

/// Middleware factory for self-access routes: the `{param}` path segment
/// must equal the principal's user id, unless the role is elevated.
pub fn require_owner(
	param: &'static str,
) -> impl Fn(OptionalAuth, RawPathParams, Request, Next) -> GateOutput + Clone {
	move |auth, params, req, next| Box::pin(check_owner(auth, params, req, next, param))
}

/// Middleware factory for test-catalog actions (separate policy table).
pub fn require_catalog(
	action: CatalogAction,
) -> impl Fn(OptionalAuth, Request, Next) -> GateOutput + Clone {
	move |OptionalAuth(principal), req, next| {
		let decision = authorize_catalog(principal.as_ref(), action);
		Box::pin(finish(decision, req, next))
	}
}

async fn check_gate(
	OptionalAuth(principal): OptionalAuth,
	params: RawPathParams,
	req: Request,
	next: Next,
	gate: &'static Gate,
) -> PlResult<Response> {
	let target = target_tenant(&params)?;
	let decision = authorize(principal.as_ref(), gate, target);
	finish(decision, req, next).await
}

#[allow(clippy::too_many_arguments)]
async fn check_resource(
	State(app): State<App>,
	OptionalAuth(principal): OptionalAuth,
	params: RawPathParams,
	req: Request,
	next: Next,
	gate: &'static Gate,
	kind: ResourceKind,
	param: &'static str,
) -> PlResult<Response> {
	let resource_id = path_param(&params, param)?;
	let decision = authorize_for_resource(
		app.tenant_adapter.as_ref(),
		principal.as_ref(),
		gate,
		kind,
		&resource_id,
	)
	.await;
	finish(decision, req, next).await
}

async fn check_owner(
	OptionalAuth(principal): OptionalAuth,
	params: RawPathParams,
	req: Request,
	next: Next,
	param: &'static str,
) -> PlResult<Response> {
	let owner = path_param(&params, param)?;
	let decision = authorize_owner_or_elevated(principal.as_ref(), &owner, DEFAULT_ELEVATED);
	finish(decision, req, next).await
}

/// Attaches an allowed decision to the request, or terminates with the
/// denial.
async fn finish(decision: Decision, mut req: Request, next: Next) -> PlResult<Response> {
	if let Some(kind) = &decision.deny {
		return Ok(deny_response(kind));
	}
	req.extensions_mut().insert(Authz(decision));
	Ok(next.run(req).await)
}

/// The tenant named by the route path, if any.
fn target_tenant(params: &RawPathParams) -> PlResult<Option<TnId>> {
	for (key, value) in params {
		if key == "lab_id" {
			let id: u32 = value
				.parse()
				.map_err(|_| Error::ValidationError(format!("invalid lab id: {value}")))?;
			return Ok(Some(TnId(id)));
		}
	}
	Ok(None)
}

fn path_param(params: &RawPathParams, name: &str) -> PlResult<Box<str>> {
	for (key, value) in params {
		if key == name {
			return Ok(value.into());
		}
	}
	// A route was wired with the wrong middleware parameter
	Err(Error::Internal(format!("missing route parameter: {name}")))
}

/// Translates a denial kind into the documented status policy plus the
/// structured body. 401 for unauthenticated, 404 for missing resources,
/// 500 when the check itself failed, 403 for everything else.
pub fn deny_response(kind: &DenyKind) -> Response {
	let status = match kind {
		DenyKind::Unauthenticated => StatusCode::UNAUTHORIZED,
		DenyKind::NotFound => StatusCode::NOT_FOUND,
		DenyKind::CheckFailed => StatusCode::INTERNAL_SERVER_ERROR,
		_ => StatusCode::FORBIDDEN,
	};

	let message = match kind {
		DenyKind::Unauthenticated => "authentication required",
		DenyKind::InvalidRole => "unknown role",
		DenyKind::InsufficientRole => "role not permitted for this operation",
		DenyKind::InsufficientPermission { .. } => "missing required permissions",
		DenyKind::TenantMismatch => "resource belongs to another lab",
		DenyKind::NotOwner => "not the owner of this resource",
		DenyKind::NotFound => "resource not found",
		DenyKind::CheckFailed => "authorization check failed",
	};

	let body = Json(json!({
		"success": false,
		"message": message,
		"error": kind.as_str(),
	}));

	(status, body).into_response()
}


// vim: ts=4
