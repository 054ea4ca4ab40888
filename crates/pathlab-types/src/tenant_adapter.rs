//! Adapter trait for resolving which lab owns a resource.
//!
//! Most routes name their tenant directly (a `lab_id` path segment), but
//! some name only a resource id (`/api/report/{report_id}`). For those the
//! authorization layer needs a single data-store round trip to find the
//! owning tenant before it can enforce isolation.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::PlResult;
use crate::types::{ResourceKind, TnId};

/// Resolves the owning tenant of a stored resource.
///
/// Implemented by the data-store layer. Returns `Ok(None)` when the
/// resource does not exist; `Err` is reserved for store failures, which
/// the authorization layer treats as fail-closed.
#[async_trait]
pub trait TenantAdapter: Debug + Send + Sync {
	async fn resource_tenant(&self, kind: ResourceKind, id: &str) -> PlResult<Option<TnId>>;
}

/// Blanket impl so `Arc<dyn TenantAdapter>` and `Arc<T>` both work where
/// a `TenantAdapter` is expected.
#[async_trait]
impl<T: TenantAdapter + ?Sized> TenantAdapter for Arc<T> {
	async fn resource_tenant(&self, kind: ResourceKind, id: &str) -> PlResult<Option<TnId>> {
		(**self).resource_tenant(kind, id).await
	}
}

// vim: ts=4
