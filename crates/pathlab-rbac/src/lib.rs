//! Authorization core for the Pathlab platform.
//!
//! Two policy universes, kept deliberately separate:
//!
//! - the global role/permission table ([`roles`]), consulted by the
//!   ordered [`authorize`](authorize::authorize) decision together with
//!   tenant isolation;
//! - the test-catalog action matrix ([`catalog`]), a per-action table
//!   with its own entry point.
//!
//! A third entry point, [`owner`], handles self-access resources keyed by
//! user identity instead of role/tenant.
//!
//! All decisions are values ([`Decision`](decision::Decision)), computed
//! fresh from static tables plus the request's `Principal`; nothing here
//! holds mutable state, so concurrent evaluation needs no coordination.

pub mod authorize;
pub mod catalog;
pub mod decision;
pub mod owner;
pub mod roles;
pub mod tenant;

pub use authorize::authorize;
pub use catalog::{CatalogAction, authorize_catalog};
pub use decision::{Decision, DenyKind, Gate};
pub use owner::{DEFAULT_ELEVATED, authorize_owner_or_elevated};
pub use roles::Role;
pub use tenant::authorize_for_resource;

// vim: ts=4
