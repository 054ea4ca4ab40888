//! Black-box tests of the authorization entry points, covering the
//! decision ordering and the documented role scenarios.

use pathlab_rbac::roles::perm;
use pathlab_rbac::{
	CatalogAction, DEFAULT_ELEVATED, DenyKind, Gate, Role, authorize, authorize_catalog,
	authorize_owner_or_elevated,
};
use pathlab_types::principal::Principal;
use pathlab_types::types::TnId;

fn principal(user: &str, role: &str, tenant: Option<u32>) -> Principal {
	Principal::new(user, role, tenant.map(TnId))
}

#[test]
fn denial_ordering_is_stable() {
	const GATE: Gate =
		Gate::new().roles(&[Role::LabAdmin]).permissions(&[perm::MANAGE_STAFF]);
	let target = Some(TnId(9));

	// No principal: everything else is wrong too, but authentication is
	// reported
	assert_eq!(authorize(None, &GATE, target).deny, Some(DenyKind::Unauthenticated));

	// Invalid role beats membership, permissions and tenant
	let stale = principal("U1", "retired_role", Some(1));
	assert_eq!(authorize(Some(&stale), &GATE, target).deny, Some(DenyKind::InvalidRole));

	// Membership beats permissions and tenant
	let tech = principal("U1", "technician", Some(1));
	assert_eq!(authorize(Some(&tech), &GATE, target).deny, Some(DenyKind::InsufficientRole));

	// Permissions beat tenant
	let finance = principal("U1", "finance", Some(1));
	let gate = Gate::new().permissions(&[perm::MANAGE_STAFF]);
	assert_eq!(
		authorize(Some(&finance), &gate, target).deny,
		Some(DenyKind::InsufficientPermission { missing: vec![perm::MANAGE_STAFF] })
	);

	// Finally the tenant check
	let admin = principal("U1", "lab_admin", Some(1));
	let gate = Gate::new().roles(&[Role::LabAdmin]);
	assert_eq!(authorize(Some(&admin), &gate, target).deny, Some(DenyKind::TenantMismatch));
}

#[test]
fn lab_admin_cross_tenant_is_tenant_mismatch() {
	let admin = principal("U1", "lab_admin", Some(1));
	let gate = Gate::new().roles(&[Role::LabAdmin]);
	let decision = authorize(Some(&admin), &gate, Some(TnId(2)));
	assert_eq!(decision.deny, Some(DenyKind::TenantMismatch));
}

#[test]
fn technician_manage_tests_allowed() {
	let tech = principal("U1", "technician", Some(1));
	let gate = Gate::new()
		.roles(&[Role::LabAdmin, Role::Technician])
		.permissions(&[perm::MANAGE_TESTS]);
	let decision = authorize(Some(&tech), &gate, None);
	assert!(decision.allow);
	assert_eq!(decision.level, Role::Technician.level());
	assert!(decision.permissions.contains(&perm::UPDATE_TEST_RESULTS));
}

#[test]
fn receptionist_manage_tests_reports_missing_list() {
	let recep = principal("U1", "receptionist", Some(1));
	let gate = Gate::new().permissions(&[perm::MANAGE_TESTS]);
	let decision = authorize(Some(&recep), &gate, None);
	assert_eq!(
		decision.deny,
		Some(DenyKind::InsufficientPermission { missing: vec![perm::MANAGE_TESTS] })
	);
}

#[test]
fn super_admin_ignores_any_tenant_target() {
	let root = principal("U0", "super_admin", None);
	for target in [1u32, 2, 999] {
		let gate = Gate::new().permissions(&[perm::MANAGE_LABS]);
		assert!(authorize(Some(&root), &gate, Some(TnId(target))).allow);
	}
}

#[test]
fn staff_self_access() {
	let staff = principal("U1", "staff", Some(1));
	assert_eq!(
		authorize_owner_or_elevated(Some(&staff), "U2", DEFAULT_ELEVATED).deny,
		Some(DenyKind::NotOwner)
	);
	assert!(authorize_owner_or_elevated(Some(&staff), "U1", DEFAULT_ELEVATED).allow);
}

#[test]
fn subset_permissions_always_allow() {
	// Every role passes a gate requiring a subset of its own permissions
	for role in Role::ALL {
		let p = principal("U1", role.as_str(), Some(1));
		let gate = Gate::new().permissions(role.permissions());
		assert!(
			authorize(Some(&p), &gate, None).allow,
			"{role} must cover its own permission set"
		);
	}
}

#[test]
fn catalog_and_global_tables_disagree_safely() {
	// Staff can browse the catalog while lacking manage_tests globally
	let staff = principal("U1", "staff", Some(1));
	assert!(authorize_catalog(Some(&staff), CatalogAction::View).allow);

	let gate = Gate::new().permissions(&[perm::MANAGE_TESTS]);
	assert!(!authorize(Some(&staff), &gate, None).allow);
}

// vim: ts=4
