//! Self-access authorization: resources scoped to the acting user's own
//! record rather than to role/tenant.
//!
//! This is a separate entry point, not a step inside
//! [`authorize`](crate::authorize::authorize): the matching key is user
//! identity, and the elevated-role semantics differ from route gates.

use pathlab_types::prelude::*;

use crate::decision::{Decision, DenyKind};
use crate::roles::Role;

/// Roles that may read any user's record.
pub const DEFAULT_ELEVATED: &[Role] = &[Role::SuperAdmin, Role::LabAdmin];

/// Allows elevated roles unconditionally, otherwise requires the
/// principal to be the resource owner.
pub fn authorize_owner_or_elevated(
	principal: Option<&Principal>,
	resource_owner: &str,
	elevated: &[Role],
) -> Decision {
	let Some(principal) = principal else {
		return Decision::denied(DenyKind::Unauthenticated);
	};

	let Some(role) = Role::parse(&principal.role) else {
		return Decision::denied(DenyKind::InvalidRole);
	};

	if elevated.contains(&role) || principal.user_id.as_ref() == resource_owner {
		return Decision::allowed(role);
	}

	warn!(
		principal = %principal.user_id,
		role = %principal.role,
		owner = resource_owner,
		decision = "not_owner",
		"self-access denied"
	);
	Decision::denied(DenyKind::NotOwner)
}


// vim: ts=4
