//! Interest catalog service.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::Interest;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait InterestService: Send + Sync {
    /// Catalog listing, ordered by name
    async fn list(&self, category: Option<String>) -> AppResult<Vec<Interest>>;
}

pub struct InterestCatalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> InterestCatalog<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> InterestService for InterestCatalog<U> {
    async fn list(&self, category: Option<String>) -> AppResult<Vec<Interest>> {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self.uow.interests().list(category).await
    }
}

/// Reject interest id lists that reference unknown catalog entries.
pub(crate) async fn ensure_interests_exist<U>(uow: &U, ids: &[Uuid]) -> AppResult<()>
where
    U: UnitOfWork + ?Sized,
{
    let wanted: HashSet<Uuid> = ids.iter().copied().collect();
    if wanted.is_empty() {
        return Ok(());
    }

    let found: HashSet<Uuid> = uow
        .interests()
        .find_by_ids(wanted.iter().copied().collect())
        .await?
        .into_iter()
        .map(|i| i.id)
        .collect();

    let mut missing: Vec<String> = wanted
        .difference(&found)
        .map(|id| id.to_string())
        .collect();
    if missing.is_empty() {
        return Ok(());
    }

    missing.sort();
    Err(AppError::validation(format!(
        "Unknown interest id(s): {}",
        missing.join(", ")
    )))
}
