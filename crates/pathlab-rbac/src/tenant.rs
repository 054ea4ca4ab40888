//! Tenant-scoped authorization for routes that name a resource id
//! instead of a lab id.
//!
//! Runs the static gate first, then a single data-store round trip to
//! resolve the owning tenant. A missing resource is a `NotFound`
//! decision, distinct from `TenantMismatch`; a store failure is
//! `CheckFailed` — authorization cannot fail open.

use pathlab_types::prelude::*;
use pathlab_types::tenant_adapter::TenantAdapter;

use crate::decision::{Decision, DenyKind, Gate};
use crate::roles::Role;

/// Authorizes `principal` against `gate` for the resource `(kind, id)`,
/// enforcing tenant isolation against the resource's owning lab.
///
/// Super-admin principals skip the lookup entirely; the handler itself
/// reports a missing resource in that case.
pub async fn authorize_for_resource(
	adapter: &dyn TenantAdapter,
	principal: Option<&Principal>,
	gate: &Gate,
	kind: ResourceKind,
	resource_id: &str,
) -> Decision {
	// Static steps first; their denials take precedence over anything
	// the lookup could report
	let decision = crate::authorize::authorize(principal, gate, None);
	if !decision.allow {
		return decision;
	}

	// The gate passed, so the principal and role are known valid here
	let Some(principal) = principal else {
		return Decision::denied(DenyKind::Unauthenticated);
	};
	if Role::parse(&principal.role) == Some(Role::SuperAdmin) {
		return decision;
	}

	match adapter.resource_tenant(kind, resource_id).await {
		Ok(Some(owner)) => {
			if principal.tn_id == Some(owner) {
				decision
			} else {
				warn!(
					principal = %principal.user_id,
					resource = kind.as_str(),
					resource_id = resource_id,
					owner_tenant = %owner,
					decision = "tenant_mismatch",
					"cross-tenant access denied"
				);
				Decision::denied(DenyKind::TenantMismatch)
			}
		}
		Ok(None) => Decision::denied(DenyKind::NotFound),
		Err(err) => {
			error!(
				resource = kind.as_str(),
				resource_id = resource_id,
				error = %err,
				"tenant resolution failed"
			);
			Decision::denied(DenyKind::CheckFailed)
		}
	}
}


// vim: ts=4
