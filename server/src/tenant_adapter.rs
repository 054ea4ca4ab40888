//! In-memory tenant adapter.
//!
//! Backs the demo server and the integration tests; a real deployment
//! implements `TenantAdapter` against the document store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::prelude::*;
use pathlab_types::tenant_adapter::TenantAdapter;

#[derive(Debug, Default)]
pub struct InMemoryTenantAdapter {
	resources: RwLock<HashMap<(ResourceKind, Box<str>), TnId>>,
}

impl InMemoryTenantAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&self, kind: ResourceKind, id: &str, tn_id: TnId) {
		self.resources.write().insert((kind, id.into()), tn_id);
	}
}

#[async_trait]
impl TenantAdapter for InMemoryTenantAdapter {
	async fn resource_tenant(&self, kind: ResourceKind, id: &str) -> PlResult<Option<TnId>> {
		Ok(self.resources.read().get(&(kind, id.into())).copied())
	}
}


// vim: ts=4
