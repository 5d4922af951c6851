//! User attribute (claim) repository

use crate::domain::{ClaimMap, UserStoreRef};
use crate::error::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAttributeRepository: Send + Sync {
    /// Get the persisted claims of a user in the default profile
    async fn fetch_user_claims(&self, username: &str, user_store: &UserStoreRef)
        -> Result<ClaimMap>;

    /// Resolve the user store for a user store domain within a tenant
    async fn resolve_user_store(&self, domain: &str, tenant_domain: &str) -> Result<UserStoreRef>;
}
