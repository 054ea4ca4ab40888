pub mod app;
pub mod extract;
pub mod middleware;
pub mod route_auth;

pub use extract::{Auth, Authz, OptionalAuth};

// vim: ts=4
