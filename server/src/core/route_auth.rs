//! Bearer-token verification: turns an `Authorization` header into a
//! `Principal` attached to the request.
//!
//! This is the upstream collaborator of the authorization gates — it only
//! establishes who the caller is; what they may do is decided per route
//! by the middleware in [`super::middleware`].

const TOKEN_EXPIRE: u64 = 8; /* hours */

use axum::{
	body::Body,
	extract::State,
	http::{Request, header, response::Response},
	middleware::Next,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use std::time;

use crate::core::extract::Auth;
use crate::prelude::*;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccessClaims<S> {
	/// User id
	pub sub: S,
	/// Role name, parsed by the authorization core at decision time
	pub r: S,
	/// Owning lab; absent for super-admin tokens
	pub tn: Option<u32>,
	pub exp: u64,
}

pub fn generate_access_token(
	secret: &str,
	user_id: &str,
	role: &str,
	tn_id: Option<TnId>,
) -> PlResult<Box<str>> {
	let expire = time::SystemTime::now()
		.duration_since(time::UNIX_EPOCH)
		.map_err(|_| Error::Internal("system clock before epoch".into()))?
		.as_secs() + 3600 * TOKEN_EXPIRE;

	let token = jsonwebtoken::encode(
		&jsonwebtoken::Header::new(Algorithm::HS256),
		&AccessClaims::<&str> { sub: user_id, r: role, tn: tn_id.map(|t| t.0), exp: expire },
		&jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
	)
	.map_err(|_| Error::Internal("token signing failed".into()))?
	.into();

	Ok(token)
}

fn validate_token(secret: &str, token: &str) -> PlResult<Principal> {
	let decoding_key = DecodingKey::from_secret(secret.as_bytes());

	let token_data = decode::<AccessClaims<Box<str>>>(
		token,
		&decoding_key,
		&Validation::new(Algorithm::HS256),
	)
	.map_err(|_| Error::Unauthorized)?;

	let claims = token_data.claims;
	Ok(Principal { user_id: claims.sub, role: claims.r, tn_id: claims.tn.map(TnId) })
}

fn bearer_token(req: &Request<Body>) -> Option<&str> {
	req.headers()
		.get(header::AUTHORIZATION)
		.and_then(|h| h.to_str().ok())
		.and_then(|h| h.strip_prefix("Bearer "))
		.map(str::trim)
}

/// Rejects requests without a valid token.
pub async fn require_auth(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> PlResult<Response<Body>> {
	let token = bearer_token(&req).ok_or(Error::Unauthorized)?;
	let principal = validate_token(&app.token_secret, token)?;

	req.extensions_mut().insert(Auth(principal));

	Ok(next.run(req).await)
}

/// Attaches a `Principal` when a valid token is present; requests without
/// a token pass through unauthenticated so the route gate can report
/// `Unauthenticated` itself. A present-but-invalid token is still an
/// error.
pub async fn optional_auth(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> PlResult<Response<Body>> {
	if let Some(token) = bearer_token(&req) {
		let principal = validate_token(&app.token_secret, token)?;
		req.extensions_mut().insert(Auth(principal));
	}

	Ok(next.run(req).await)
}


// vim: ts=4
