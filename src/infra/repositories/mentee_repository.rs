//! Mentee profile repository.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::{
    sea_query::{extension::postgres::PgFunc, Expr},
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::mentee_interest::{self, Entity as MenteeInterestEntity};
use super::entities::mentee_profile::{self, ActiveModel, Entity as MenteeEntity};
use super::interest_repository::{group_by_owner, load_catalog};
use super::write_error;
use crate::domain::{HelpType, MenteeProfile, NewMenteeProfile};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Listing of mentees, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenteeQuery {
    /// Mentee must be looking for this help type
    pub help_needed: Option<HelpType>,
    pub limit: u64,
    pub offset: u64,
}

/// One edit of a mentee profile, written in a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct MenteeProfileUpdate {
    pub profile_id: Uuid,
    /// Merged row to persist; `None` leaves the row untouched
    pub row: Option<MenteeProfile>,
    /// Replacement interest links; `None` keeps the current links
    pub interest_ids: Option<Vec<Uuid>>,
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MenteeRepository: Send + Sync {
    /// Find the mentee profile owned by a user, with interests
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<MenteeProfile>>;

    /// Create a profile and link its interests; Conflict if the user already has one
    async fn create(&self, user_id: Uuid, profile: NewMenteeProfile) -> AppResult<MenteeProfile>;

    /// Persist the merged row and/or replace the interest links atomically
    async fn update(&self, update: MenteeProfileUpdate) -> AppResult<()>;

    /// Mentees matching the query, newest first
    async fn list(&self, query: MenteeQuery) -> AppResult<Vec<MenteeProfile>>;
}

pub struct MenteeStore {
    db: DatabaseConnection,
}

impl MenteeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_interests(
        &self,
        models: Vec<mentee_profile::Model>,
    ) -> AppResult<Vec<MenteeProfile>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let profile_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let links: Vec<(Uuid, Uuid)> = MenteeInterestEntity::find()
            .filter(mentee_interest::Column::MenteeProfileId.is_in(profile_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|link| (link.mentee_profile_id, link.interest_id))
            .collect();

        let catalog = load_catalog(&self.db, links.iter().map(|(_, id)| *id).collect()).await?;
        let mut grouped = group_by_owner(links, &catalog);

        models
            .into_iter()
            .map(|model| {
                let interests = grouped.remove(&model.id).unwrap_or_default();
                model.into_domain(interests)
            })
            .collect()
    }
}

async fn insert_links<C: ConnectionTrait>(
    db: &C,
    profile_id: Uuid,
    interest_ids: &[Uuid],
) -> AppResult<()> {
    let unique: BTreeSet<Uuid> = interest_ids.iter().copied().collect();
    if unique.is_empty() {
        return Ok(());
    }

    let rows = unique.into_iter().map(|interest_id| mentee_interest::ActiveModel {
        mentee_profile_id: Set(profile_id),
        interest_id: Set(interest_id),
    });
    MenteeInterestEntity::insert_many(rows)
        .exec_without_returning(db)
        .await
        .map_err(|e| write_error(e, "Interest already linked"))?;
    Ok(())
}

#[async_trait]
impl MenteeRepository for MenteeStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<MenteeProfile>> {
        let Some(model) = MenteeEntity::find()
            .filter(mentee_profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_interests(vec![model]).await?.pop())
    }

    async fn create(&self, user_id: Uuid, profile: NewMenteeProfile) -> AppResult<MenteeProfile> {
        let now = chrono::Utc::now();
        let txn = self.db.begin().await?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            industry: Set(profile.industry),
            goals: Set(profile.goals),
            help_needed: Set(HelpType::to_stored(&HelpType::normalize(profile.help_needed))),
            background: Set(profile.background),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| write_error(e, "Mentee profile already exists for this user"))?;

        insert_links(&txn, model.id, &profile.interest_ids).await?;
        txn.commit().await?;

        tracing::info!(user_id = %user_id, profile_id = %model.id, "Mentee profile created");

        self.with_interests(vec![model])
            .await?
            .pop()
            .ok_or_else(|| AppError::internal("Created mentee profile could not be loaded"))
    }

    async fn update(&self, update: MenteeProfileUpdate) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if let Some(profile) = update.row {
            let active = ActiveModel {
                id: Unchanged(profile.id),
                user_id: Unchanged(profile.user_id),
                industry: Set(profile.industry),
                goals: Set(profile.goals),
                help_needed: Set(HelpType::to_stored(&profile.help_needed)),
                background: Set(profile.background),
                created_at: Unchanged(profile.created_at),
                updated_at: Set(profile.updated_at),
            };
            active.update(&txn).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::not_found("Mentee profile not found"),
                other => AppError::from(other),
            })?;
        }
        if let Some(interest_ids) = update.interest_ids {
            MenteeInterestEntity::delete_many()
                .filter(mentee_interest::Column::MenteeProfileId.eq(update.profile_id))
                .exec(&txn)
                .await?;
            insert_links(&txn, update.profile_id, &interest_ids).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn list(&self, query: MenteeQuery) -> AppResult<Vec<MenteeProfile>> {
        let models = list_select(&query).all(&self.db).await?;
        self.with_interests(models).await
    }
}

fn list_select(query: &MenteeQuery) -> Select<MenteeEntity> {
    let mut select = MenteeEntity::find();

    if let Some(help) = query.help_needed {
        select = select.filter(Expr::val(help.as_str()).eq(PgFunc::any(Expr::col((
            MenteeEntity,
            mentee_profile::Column::HelpNeeded,
        )))));
    }

    select
        .order_by_desc(mentee_profile::Column::CreatedAt)
        .offset(query.offset)
        .limit(query.limit)
}
