//! Mentor profile repository.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::{
    sea_query::{extension::postgres::PgFunc, Expr, Func},
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::mentor_interest::{self, Entity as MentorInterestEntity};
use super::entities::mentor_profile::{self, ActiveModel, Entity as MentorEntity};
use super::interest_repository::{group_by_owner, load_catalog};
use super::write_error;
use crate::domain::{HelpType, MentorProfile, NewMentorProfile};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Search over active mentors, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorQuery {
    /// Case-insensitive exact match on industry
    pub industry: Option<String>,
    /// Mentor must offer this help type
    pub help_type: Option<HelpType>,
    /// Mentor user ids to leave out
    pub exclude_user_ids: Vec<Uuid>,
    pub limit: u64,
    pub offset: u64,
}

/// One edit of a mentor profile, written in a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct MentorProfileUpdate {
    pub profile_id: Uuid,
    /// Merged row to persist; `None` leaves the row untouched
    pub row: Option<MentorProfile>,
    /// Replacement interest links; `None` keeps the current links
    pub interest_ids: Option<Vec<Uuid>>,
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MentorRepository: Send + Sync {
    /// Find the mentor profile owned by a user, with interests
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<MentorProfile>>;

    /// Create a profile and link its interests; Conflict if the user already has one
    async fn create(&self, user_id: Uuid, profile: NewMentorProfile) -> AppResult<MentorProfile>;

    /// Persist the merged row and/or replace the interest links atomically
    async fn update(&self, update: MentorProfileUpdate) -> AppResult<()>;

    /// Active mentors matching the query, newest first
    async fn search(&self, query: MentorQuery) -> AppResult<Vec<MentorProfile>>;
}

pub struct MentorStore {
    db: DatabaseConnection,
}

impl MentorStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach interests to a batch of rows with two queries total.
    async fn with_interests(
        &self,
        models: Vec<mentor_profile::Model>,
    ) -> AppResult<Vec<MentorProfile>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let profile_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let links: Vec<(Uuid, Uuid)> = MentorInterestEntity::find()
            .filter(mentor_interest::Column::MentorProfileId.is_in(profile_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|link| (link.mentor_profile_id, link.interest_id))
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

    let rows = unique.into_iter().map(|interest_id| mentor_interest::ActiveModel {
        mentor_profile_id: Set(profile_id),
        interest_id: Set(interest_id),
    });
    MentorInterestEntity::insert_many(rows)
        .exec_without_returning(db)
        .await
        .map_err(|e| write_error(e, "Interest already linked"))?;
    Ok(())
}

#[async_trait]
impl MentorRepository for MentorStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<MentorProfile>> {
        let Some(model) = MentorEntity::find()
            .filter(mentor_profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_interests(vec![model]).await?.pop())
    }

    async fn create(&self, user_id: Uuid, profile: NewMentorProfile) -> AppResult<MentorProfile> {
        let now = chrono::Utc::now();
        let txn = self.db.begin().await?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            industry: Set(profile.industry),
            job_title: Set(profile.job_title),
            help_types_offered: Set(HelpType::to_stored(&HelpType::normalize(
                profile.help_types_offered,
            ))),
            max_requests_per_week: Set(profile.max_requests_per_week),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| write_error(e, "Mentor profile already exists for this user"))?;

        insert_links(&txn, model.id, &profile.interest_ids).await?;
        txn.commit().await?;

        tracing::info!(user_id = %user_id, profile_id = %model.id, "Mentor profile created");

        self.with_interests(vec![model])
            .await?
            .pop()
            .ok_or_else(|| AppError::internal("Created mentor profile could not be loaded"))
    }

    async fn update(&self, update: MentorProfileUpdate) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if let Some(profile) = update.row {
            row_changes(profile).update(&txn).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::not_found("Mentor profile not found"),
                other => AppError::from(other),
            })?;
        }
        if let Some(interest_ids) = update.interest_ids {
            MentorInterestEntity::delete_many()
                .filter(mentor_interest::Column::MentorProfileId.eq(update.profile_id))
                .exec(&txn)
                .await?;
            insert_links(&txn, update.profile_id, &interest_ids).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn search(&self, query: MentorQuery) -> AppResult<Vec<MentorProfile>> {
        let models = search_select(&query).all(&self.db).await?;
        self.with_interests(models).await
    }
}

fn row_changes(profile: MentorProfile) -> ActiveModel {
    ActiveModel {
        id: Unchanged(profile.id),
        user_id: Unchanged(profile.user_id),
        industry: Set(profile.industry),
        job_title: Set(profile.job_title),
        help_types_offered: Set(HelpType::to_stored(&profile.help_types_offered)),
        max_requests_per_week: Set(profile.max_requests_per_week),
        is_active: Set(profile.is_active),
        created_at: Unchanged(profile.created_at),
        updated_at: Set(profile.updated_at),
    }
}

fn search_select(query: &MentorQuery) -> Select<MentorEntity> {
    let mut select = MentorEntity::find().filter(mentor_profile::Column::IsActive.eq(true));

    if let Some(industry) = &query.industry {
        select = select.filter(
            Expr::expr(Func::lower(Expr::col(mentor_profile::Column::Industry)))
                .eq(industry.to_lowercase()),
        );
    }
    if let Some(help_type) = query.help_type {
        select = select.filter(Expr::val(help_type.as_str()).eq(PgFunc::any(Expr::col((
            MentorEntity,
            mentor_profile::Column::HelpTypesOffered,
        )))));
    }
    if !query.exclude_user_ids.is_empty() {
        select =
            select.filter(mentor_profile::Column::UserId.is_not_in(query.exclude_user_ids.clone()));
    }

    select
        .order_by_desc(mentor_profile::Column::CreatedAt)
        .offset(query.offset)
        .limit(query.limit)
}
