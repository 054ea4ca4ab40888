//! Authorization decision types.

use crate::roles::Role;

/// The tagged reason an authorization call was denied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DenyKind {
	/// No principal attached; the authentication middleware did not run
	Unauthenticated,
	/// Principal's role name has no entry in the role table
	InvalidRole,
	/// Principal's role is not in the route's allowed-role set
	InsufficientRole,
	/// Role lacks one or more required permissions; carries exactly the
	/// missing ones for diagnostics
	InsufficientPermission { missing: Vec<&'static str> },
	/// Non-super-admin principal acting on another lab's resource
	TenantMismatch,
	/// Self-access check failed and the role is not elevated
	NotOwner,
	/// Tenant resolution found no such resource
	NotFound,
	/// Tenant resolution failed; authorization never fails open
	CheckFailed,
}

impl DenyKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			DenyKind::Unauthenticated => "unauthenticated",
			DenyKind::InvalidRole => "invalid_role",
			DenyKind::InsufficientRole => "insufficient_role",
			DenyKind::InsufficientPermission { .. } => "insufficient_permission",
			DenyKind::TenantMismatch => "tenant_mismatch",
			DenyKind::NotOwner => "not_owner",
			DenyKind::NotFound => "not_found",
			DenyKind::CheckFailed => "check_failed",
		}
	}
}

/// Outcome of one authorization evaluation.
///
/// Computed once per middleware invocation and attached to the request
/// for downstream handlers; never cached across requests. On success it
/// carries the caller's full permission set and hierarchy level so
/// handlers don't re-query the role table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
	pub allow: bool,
	pub deny: Option<DenyKind>,
	pub permissions: &'static [&'static str],
	pub level: u8,
}

impl Decision {
	pub fn allowed(role: Role) -> Self {
		Decision { allow: true, deny: None, permissions: role.permissions(), level: role.level() }
	}

	pub fn denied(kind: DenyKind) -> Self {
		Decision { allow: false, deny: Some(kind), permissions: &[], level: 0 }
	}
}

/// Static per-route authorization requirements.
///
/// Declared next to the route definition, not runtime data. An empty
/// role set means any authenticated, valid role; the permission check
/// still applies.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gate {
	pub roles: &'static [Role],
	pub permissions: &'static [&'static str],
}

impl Gate {
	pub const fn new() -> Self {
		Gate { roles: &[], permissions: &[] }
	}

	pub const fn roles(mut self, roles: &'static [Role]) -> Self {
		self.roles = roles;
		self
	}

	pub const fn permissions(mut self, permissions: &'static [&'static str]) -> Self {
		self.permissions = permissions;
		self
	}
}


// vim: ts=4
