//! The central authorization decision.

use pathlab_types::prelude::*;

use crate::decision::{Decision, DenyKind};
use crate::roles::Role;

/// Decides whether `principal` may pass `gate`, optionally enforcing
/// tenant isolation against `target_tenant` (a tenant named by the route
/// path).
///
/// The steps run in a fixed order and each one short-circuits:
///
/// 1. authentication (principal present)
/// 2. role validity (name resolves in the role table)
/// 3. role membership (empty allowed set = any valid role)
/// 4. permission coverage (every required permission; all missing ones
///    are reported)
/// 5. tenant isolation (skipped entirely for super-admin)
///
/// The ordering determines which denial a caller sees: an
/// unauthenticated request with a mismatched tenant reports
/// `Unauthenticated`, never `TenantMismatch`.
pub fn authorize(
	principal: Option<&Principal>,
	gate: &crate::Gate,
	target_tenant: Option<TnId>,
) -> Decision {
	let decision = evaluate(principal, gate, target_tenant);
	observe(principal, gate, &decision);
	decision
}

fn evaluate(
	principal: Option<&Principal>,
	gate: &crate::Gate,
	target_tenant: Option<TnId>,
) -> Decision {
	let Some(principal) = principal else {
		return Decision::denied(DenyKind::Unauthenticated);
	};

	let Some(role) = Role::parse(&principal.role) else {
		return Decision::denied(DenyKind::InvalidRole);
	};

	if !gate.roles.is_empty() && !gate.roles.contains(&role) {
		return Decision::denied(DenyKind::InsufficientRole);
	}

	let missing: Vec<&'static str> =
		gate.permissions.iter().copied().filter(|p| !role.has_permission(p)).collect();
	if !missing.is_empty() {
		return Decision::denied(DenyKind::InsufficientPermission { missing });
	}

	// Super-admin principals are not bound to a tenant and may act on any
	if let Some(target) = target_tenant {
		if role != Role::SuperAdmin && principal.tn_id != Some(target) {
			return Decision::denied(DenyKind::TenantMismatch);
		}
	}

	Decision::allowed(role)
}

/// One structured event per decision, for the audit trail.
fn observe(principal: Option<&Principal>, gate: &crate::Gate, decision: &Decision) {
	let principal_id = principal.map_or("-", |p| p.user_id.as_ref());
	let role = principal.map_or("-", |p| p.role.as_ref());

	match &decision.deny {
		None => debug!(
			principal = principal_id,
			role = role,
			allowed_roles = ?gate.roles,
			required_permissions = ?gate.permissions,
			decision = "allow",
			"authorization decision"
		),
		Some(kind) => warn!(
			principal = principal_id,
			role = role,
			allowed_roles = ?gate.roles,
			required_permissions = ?gate.permissions,
			decision = kind.as_str(),
			"authorization denied"
		),
	}
}


// vim: ts=4
