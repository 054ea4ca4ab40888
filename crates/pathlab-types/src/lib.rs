//! Shared types and adapter traits for the Pathlab platform.
//!
//! This crate contains the foundational types that are shared between the
//! server crate and the authorization core: tenant/user identifiers, the
//! authenticated `Principal`, the common error enum, and the
//! `TenantAdapter` trait used to resolve which lab owns a resource.

pub mod error;
pub mod prelude;
pub mod principal;
pub mod tenant_adapter;
pub mod types;

// vim: ts=4
