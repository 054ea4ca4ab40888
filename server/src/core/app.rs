//! App state and builder

use std::sync::Arc;

use crate::prelude::*;
use pathlab_types::tenant_adapter::TenantAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
pub struct AppOpts {
	pub listen: Box<str>,
}

pub struct AppState {
	pub opts: AppOpts,
	pub token_secret: Box<str>,
	pub tenant_adapter: Arc<dyn TenantAdapter>,
}

pub type App = Arc<AppState>;

pub struct AppBuilder {
	opts: AppOpts,
	token_secret: Option<Box<str>>,
	tenant_adapter: Option<Arc<dyn TenantAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// try_init: tests build several apps in one process
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();

		AppBuilder {
			opts: AppOpts { listen: "127.0.0.1:8080".into() },
			token_secret: None,
			tenant_adapter: None,
		}
	}

	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	pub fn token_secret(&mut self, secret: impl Into<Box<str>>) -> &mut Self {
		self.token_secret = Some(secret.into());
		self
	}

	pub fn tenant_adapter(&mut self, adapter: Arc<dyn TenantAdapter>) -> &mut Self {
		self.tenant_adapter = Some(adapter);
		self
	}

	pub fn build(&mut self) -> PlResult<App> {
		let token_secret = self
			.token_secret
			.take()
			.ok_or_else(|| Error::ValidationError("token secret not configured".into()))?;
		let tenant_adapter = self
			.tenant_adapter
			.take()
			.ok_or_else(|| Error::ValidationError("tenant adapter not configured".into()))?;

		Ok(Arc::new(AppState {
			opts: AppOpts { listen: self.opts.listen.clone() },
			token_secret,
			tenant_adapter,
		}))
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Binds the listen address and serves the API router until shutdown.
pub async fn serve(app: App) -> PlResult<()> {
	let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
	info!("Pathlab {} listening on {}", VERSION, app.opts.listen);
	axum::serve(listener, crate::routes::routes(app.clone())).await?;
	Ok(())
}

// vim: ts=4
