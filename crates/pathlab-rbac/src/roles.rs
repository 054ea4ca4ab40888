//! Role hierarchy and the global role/permission table.
//!
//! Roles form a closed set: every role the platform knows is a variant of
//! [`Role`], and the permission table is a total function over it. Role
//! names only exist as strings at serialization boundaries (tokens,
//! route declarations); an unknown name there is a stale or malformed
//! token, reported as an invalid-role denial.
//!
//! The table is process-wide static data, initialized at compile time and
//! never mutated while serving traffic.

/// Fine-grained capability strings.
pub mod perm {
	pub const MANAGE_LABS: &str = "manage_labs";
	pub const MANAGE_STAFF: &str = "manage_staff";
	pub const VIEW_PATIENTS: &str = "view_patients";
	pub const MANAGE_PATIENTS: &str = "manage_patients";
	pub const MANAGE_SAMPLES: &str = "manage_samples";
	pub const MANAGE_TESTS: &str = "manage_tests";
	pub const MANAGE_PACKAGES: &str = "manage_packages";
	pub const UPDATE_TEST_RESULTS: &str = "update_test_results";
	pub const MANAGE_REPORTS: &str = "manage_reports";
	pub const APPROVE_REPORTS: &str = "approve_reports";
	pub const MANAGE_INVOICES: &str = "manage_invoices";
	pub const VIEW_INVOICES: &str = "view_invoices";
	pub const VIEW_OWN_REPORTS: &str = "view_own_reports";
}

/// A named bundle of privilege level + permission set.
///
/// Level ordering is total and monotonic with privilege:
/// super-admin > lab-admin > operational roles > patient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
	SuperAdmin,
	LabAdmin,
	Technician,
	Finance,
	Receptionist,
	Staff,
	Patient,
}

impl Role {
	pub const ALL: &'static [Role] = &[
		Role::SuperAdmin,
		Role::LabAdmin,
		Role::Technician,
		Role::Finance,
		Role::Receptionist,
		Role::Staff,
		Role::Patient,
	];

	/// Parses a role name from a serialization boundary. `None` means the
	/// name has no entry in the table (retired or malformed).
	pub fn parse(name: &str) -> Option<Role> {
		match name {
			"super_admin" => Some(Role::SuperAdmin),
			"lab_admin" => Some(Role::LabAdmin),
			"technician" => Some(Role::Technician),
			"finance" => Some(Role::Finance),
			"receptionist" => Some(Role::Receptionist),
			"staff" => Some(Role::Staff),
			"patient" => Some(Role::Patient),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Role::SuperAdmin => "super_admin",
			Role::LabAdmin => "lab_admin",
			Role::Technician => "technician",
			Role::Finance => "finance",
			Role::Receptionist => "receptionist",
			Role::Staff => "staff",
			Role::Patient => "patient",
		}
	}

	/// Hierarchy level. Unknown role names resolve to 0 via [`level_of`],
	/// below every real role.
	pub fn level(self) -> u8 {
		match self {
			Role::SuperAdmin => 100,
			Role::LabAdmin => 80,
			Role::Technician => 60,
			Role::Finance => 50,
			Role::Receptionist => 40,
			Role::Staff => 30,
			Role::Patient => 10,
		}
	}

	/// Declared permission set for this role.
	pub fn permissions(self) -> &'static [&'static str] {
		use perm::*;

		match self {
			Role::SuperAdmin => &[
				MANAGE_LABS,
				MANAGE_STAFF,
				VIEW_PATIENTS,
				MANAGE_PATIENTS,
				MANAGE_SAMPLES,
				MANAGE_TESTS,
				MANAGE_PACKAGES,
				UPDATE_TEST_RESULTS,
				MANAGE_REPORTS,
				APPROVE_REPORTS,
				MANAGE_INVOICES,
				VIEW_INVOICES,
			],
			Role::LabAdmin => &[
				MANAGE_STAFF,
				VIEW_PATIENTS,
				MANAGE_PATIENTS,
				MANAGE_SAMPLES,
				MANAGE_TESTS,
				MANAGE_PACKAGES,
				UPDATE_TEST_RESULTS,
				MANAGE_REPORTS,
				APPROVE_REPORTS,
				MANAGE_INVOICES,
				VIEW_INVOICES,
			],
			Role::Technician => &[MANAGE_TESTS, UPDATE_TEST_RESULTS, VIEW_PATIENTS],
			Role::Finance => &[MANAGE_INVOICES, VIEW_INVOICES, VIEW_PATIENTS],
			Role::Receptionist => &[VIEW_PATIENTS, MANAGE_PATIENTS, MANAGE_SAMPLES],
			Role::Staff => &[VIEW_PATIENTS],
			Role::Patient => &[VIEW_OWN_REPORTS],
		}
	}

	pub fn has_permission(self, permission: &str) -> bool {
		self.permissions().contains(&permission)
	}
}

impl std::fmt::Display for Role {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Role {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Role::parse(s).ok_or(())
	}
}

/// Level of a role name; 0 for unknown names.
pub fn level_of(name: &str) -> u8 {
	Role::parse(name).map_or(0, Role::level)
}

/// Permission set of a role name; empty for unknown names. Absence of
/// permissions is a valid, safe default.
pub fn permissions_of(name: &str) -> &'static [&'static str] {
	Role::parse(name).map_or(&[], Role::permissions)
}

/// True iff `name` resolves to a role at least as privileged as
/// `required`. Unknown names sit at level 0, so this is conservatively
/// false against any real role.
pub fn role_level_at_least(name: &str, required: Role) -> bool {
	level_of(name) >= required.level()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_round_trip() {
		for role in Role::ALL {
			assert_eq!(Role::parse(role.as_str()), Some(*role));
		}
		assert_eq!(Role::parse("janitor"), None);
		assert_eq!(Role::parse("SUPER_ADMIN"), None);
	}

	#[test]
	fn test_level_ordering_total() {
		let mut levels: Vec<u8> = Role::ALL.iter().map(|r| r.level()).collect();
		levels.sort_unstable();
		levels.dedup();
		assert_eq!(levels.len(), Role::ALL.len(), "levels must be distinct");

		assert!(Role::SuperAdmin.level() > Role::LabAdmin.level());
		assert!(Role::LabAdmin.level() > Role::Technician.level());
		assert!(Role::Staff.level() > Role::Patient.level());
	}

	#[test]
	fn test_unknown_role_is_level_zero() {
		assert_eq!(level_of("janitor"), 0);
		assert!(!role_level_at_least("janitor", Role::Patient));
		assert!(role_level_at_least("lab_admin", Role::Technician));
		assert!(!role_level_at_least("staff", Role::LabAdmin));
	}

	#[test]
	fn test_technician_permission_set() {
		let perms = Role::Technician.permissions();
		assert_eq!(perms, &[perm::MANAGE_TESTS, perm::UPDATE_TEST_RESULTS, perm::VIEW_PATIENTS]);
	}

	#[test]
	fn test_receptionist_lacks_manage_tests() {
		assert!(!Role::Receptionist.has_permission(perm::MANAGE_TESTS));
		assert!(Role::Receptionist.has_permission(perm::VIEW_PATIENTS));
	}

	#[test]
	fn test_permissions_of_unknown_is_empty() {
		assert!(permissions_of("janitor").is_empty());
		assert!(!permissions_of("technician").is_empty());
	}
}

// vim: ts=4
