//! Per-action authorization for the test catalog.
//!
//! The catalog has its own action matrix, independent of the global
//! permission table: a role may lack `manage_tests` globally and still be
//! allowed to browse the catalog. The two tables evolve separately; they
//! are deliberately not merged, since updating one without the other must
//! never widen the reach of the global permission set.

use pathlab_types::prelude::*;

use crate::decision::{Decision, DenyKind};
use crate::roles::Role;

/// Operations on the test catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogAction {
	List,
	View,
	Create,
	Update,
	Delete,
}

impl CatalogAction {
	pub fn as_str(self) -> &'static str {
		match self {
			CatalogAction::List => "catalog:list",
			CatalogAction::View => "catalog:view",
			CatalogAction::Create => "catalog:create",
			CatalogAction::Update => "catalog:update",
			CatalogAction::Delete => "catalog:delete",
		}
	}
}

/// The (role, action) matrix. Total over both enums.
pub fn catalog_allows(role: Role, action: CatalogAction) -> bool {
	use CatalogAction::{Create, Delete, List, Update, View};

	match role {
		Role::SuperAdmin | Role::LabAdmin => true,
		// Technicians maintain test definitions but don't add or remove them
		Role::Technician => matches!(action, List | View | Update),
		// Front-desk and billing staff can browse for booking and pricing
		Role::Finance | Role::Receptionist | Role::Staff => matches!(action, List | View),
		Role::Patient => matches!(action, List),
	}
}

/// Entry point for catalog operations; same denial taxonomy as the
/// route-gate decision.
pub fn authorize_catalog(principal: Option<&Principal>, action: CatalogAction) -> Decision {
	let Some(principal) = principal else {
		return Decision::denied(DenyKind::Unauthenticated);
	};

	let Some(role) = Role::parse(&principal.role) else {
		return Decision::denied(DenyKind::InvalidRole);
	};

	if !catalog_allows(role, action) {
		warn!(
			principal = %principal.user_id,
			role = %principal.role,
			action = action.as_str(),
			decision = "insufficient_permission",
			"catalog action denied"
		);
		return Decision::denied(DenyKind::InsufficientPermission {
			missing: vec![action.as_str()],
		});
	}

	Decision::allowed(role)
}


// vim: ts=4
