use std::{env, process, sync::Arc};

use pathlab::tenant_adapter::InMemoryTenantAdapter;
use pathlab::{AppBuilder, serve};
use pathlab_types::error::{Error, PlResult};

#[tokio::main]
async fn main() {
	if let Err(err) = run().await {
		eprintln!("pathlab: {err}");
		process::exit(1);
	}
}

async fn run() -> PlResult<()> {
	let listen = env::var("PATHLAB_LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
	let secret = env::var("PATHLAB_TOKEN_SECRET")
		.map_err(|_| Error::ValidationError("PATHLAB_TOKEN_SECRET must be set".into()))?;

	let app = AppBuilder::new()
		.listen(listen)
		.token_secret(secret)
		.tenant_adapter(Arc::new(InMemoryTenantAdapter::new()))
		.build()?;

	serve(app).await
}

// vim: ts=4
