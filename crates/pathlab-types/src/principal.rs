//! The authenticated actor for one request.

use crate::types::TnId;

/// Context struct for an authenticated user.
///
/// Constructed by the token-verification middleware and attached to the
/// request extensions; read-only for the rest of the request lifecycle.
///
/// The role is kept as the raw string from the token and only parsed
/// into a [`Role`](../../pathlab_rbac/roles/enum.Role.html) at decision
/// time, so a stale token naming a retired role surfaces as an invalid
/// role denial instead of failing authentication.
#[derive(Clone, Debug)]
pub struct Principal {
	pub user_id: Box<str>,
	pub role: Box<str>,
	/// Owning lab. `None` only for super-admin principals, which are not
	/// bound to any tenant. Always a plain scalar id: tenant resolution
	/// happens at the construction boundary, never inside authorization.
	pub tn_id: Option<TnId>,
}

impl Principal {
	pub fn new(user_id: &str, role: &str, tn_id: Option<TnId>) -> Self {
		Principal { user_id: user_id.into(), role: role.into(), tn_id }
	}
}

// vim: ts=4
