//! Interest catalog repository, plus helpers for resolving profile interest links.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::entities::interest::{self, Entity as InterestEntity};
use crate::domain::Interest;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait InterestRepository: Send + Sync {
    /// All interests, optionally restricted to one category, ordered by name
    async fn list(&self, category: Option<String>) -> AppResult<Vec<Interest>>;

    /// Resolve ids into interests, ordered by name; unknown ids are skipped
    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Interest>>;
}

pub struct InterestStore {
    db: DatabaseConnection,
}

impl InterestStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InterestRepository for InterestStore {
    async fn list(&self, category: Option<String>) -> AppResult<Vec<Interest>> {
        let mut query = InterestEntity::find();
        if let Some(category) = category {
            query = query.filter(interest::Column::Category.eq(category));
        }

        let models = query
            .order_by_asc(interest::Column::Name)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Interest::from).collect())
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Interest>> {
        let catalog = load_catalog(&self.db, ids.into_iter().collect()).await?;
        let mut interests: Vec<Interest> = catalog.into_values().collect();
        sort_by_name(&mut interests);
        Ok(interests)
    }
}

/// Fetch the interests for a set of ids in one query, keyed by id.
pub(crate) async fn load_catalog<C: ConnectionTrait>(
    db: &C,
    ids: HashSet<Uuid>,
) -> AppResult<HashMap<Uuid, Interest>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = InterestEntity::find()
        .filter(interest::Column::Id.is_in(ids))
        .all(db)
        .await?;
    Ok(models
        .into_iter()
        .map(|m| (m.id, Interest::from(m)))
        .collect())
}

/// Group `(owner_id, interest_id)` link rows into per-owner interest lists.
pub(crate) fn group_by_owner(
    links: Vec<(Uuid, Uuid)>,
    catalog: &HashMap<Uuid, Interest>,
) -> HashMap<Uuid, Vec<Interest>> {
    let mut grouped: HashMap<Uuid, Vec<Interest>> = HashMap::new();
    for (owner_id, interest_id) in links {
        if let Some(interest) = catalog.get(&interest_id) {
            grouped.entry(owner_id).or_default().push(interest.clone());
        }
    }
    for interests in grouped.values_mut() {
        sort_by_name(interests);
    }
    grouped
}

fn sort_by_name(interests: &mut [Interest]) {
    interests.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn interest(name: &str) -> Interest {
        Interest {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_by_owner_sorts_and_drops_unknown_ids() {
        let rust = interest("Rust");
        let go = interest("Go");
        let catalog: HashMap<Uuid, Interest> =
            [(rust.id, rust.clone()), (go.id, go.clone())].into_iter().collect();

        let owner_a = Uuid::new_v4();
        let owner_b = Uuid::new_v4();
        let links = vec![
            (owner_a, rust.id),
            (owner_a, go.id),
            (owner_b, Uuid::new_v4()),
        ];

        let grouped = group_by_owner(links, &catalog);
        assert_eq!(grouped[&owner_a], vec![go, rust]);
        assert!(!grouped.contains_key(&owner_b));
    }
}
