//! Pathlab is a multi-tenant pathology lab platform.
//!
//! Each lab is a tenant and the unit of data isolation. This crate is the
//! HTTP boundary: it verifies bearer tokens into a `Principal`, declares a
//! static authorization gate per route, and translates every denial kind
//! from `pathlab-rbac` into a consistent HTTP status plus a structured
//! JSON body.
//!
//! Status policy: `Unauthenticated` → 401, `NotFound` → 404,
//! `CheckFailed` → 500, every other denial → 403.

pub mod core;
pub mod handler;
pub mod prelude;
pub mod routes;
pub mod tenant_adapter;

pub use crate::core::app::{App, AppBuilder, AppState, serve};

// vim: ts=4
