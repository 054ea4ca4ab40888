//! Custom extractors for Pathlab-specific request data

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::prelude::*;
use pathlab_rbac::Decision;

// Auth //
//******//
/// The authenticated `Principal`, set by the token middleware.
#[derive(Clone, Debug)]
pub struct Auth(pub Principal);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::Unauthorized)
		}
	}
}

// OptionalAuth //
//**************//
/// Auth extractor that doesn't fail if no principal is attached
#[derive(Clone, Debug)]
pub struct OptionalAuth(pub Option<Principal>);

impl<S> FromRequestParts<S> for OptionalAuth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let auth = parts.extensions.get::<Auth>().cloned().map(|a| a.0);
		Ok(OptionalAuth(auth))
	}
}

// Authz //
//*******//
/// The authorization decision computed by the route gate, carrying the
/// caller's resolved permission set and level for downstream handlers.
#[derive(Clone, Debug)]
pub struct Authz(pub Decision);

impl<S> FromRequestParts<S> for Authz
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(authz) = parts.extensions.get::<Authz>().cloned() {
			Ok(authz)
		} else {
			// A handler asked for a decision on a route without a gate
			Err(Error::Internal("no authorization gate on this route".into()))
		}
	}
}

// vim: ts=4
