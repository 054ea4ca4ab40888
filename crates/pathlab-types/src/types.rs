//! Core identifier types

use serde::{Deserialize, Serialize};

/// Tenant (lab) identifier. The unit of data isolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct TnId(pub u32);

impl std::fmt::Display for TnId {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u32> for TnId {
	fn from(id: u32) -> Self {
		TnId(id)
	}
}

/// Kinds of tenant-owned resources a route can name.
///
/// Used by the `TenantAdapter` to resolve which lab owns a resource when
/// the owning tenant cannot be derived from the route path alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
	Lab,
	Patient,
	Sample,
	Report,
	Invoice,
	CatalogTest,
	TestPackage,
	Staff,
}

impl ResourceKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ResourceKind::Lab => "lab",
			ResourceKind::Patient => "patient",
			ResourceKind::Sample => "sample",
			ResourceKind::Report => "report",
			ResourceKind::Invoice => "invoice",
			ResourceKind::CatalogTest => "catalog_test",
			ResourceKind::TestPackage => "test_package",
			ResourceKind::Staff => "staff",
		}
	}
}


// vim: ts=4
