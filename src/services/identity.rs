//! Lookups shared by several services: who the caller is, and which
//! mentors they should no longer be shown.

use std::collections::BTreeSet;

use uuid::Uuid;

use super::container::parallel;
use crate::domain::Identity;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Resolve the caller's identity from the mentor and mentee profile tables.
pub async fn resolve_identity<U>(uow: &U, user_id: Uuid) -> AppResult<Identity>
where
    U: UnitOfWork + ?Sized,
{
    let mentors = uow.mentors();
    let mentees = uow.mentees();
    let (mentor, mentee) = parallel::join2(
        mentors.find_by_user_id(user_id),
        mentees.find_by_user_id(user_id),
    )
    .await?;

    Ok(Identity::from_profiles(mentor, mentee))
}

/// Mentor user ids hidden from a mentee's browse results.
///
/// Covers mentors with a pending or accepted request from the mentee,
/// mentors already connected to them, and the mentee's own user id.
pub async fn excluded_mentor_ids<U>(uow: &U, mentee_user_id: Uuid) -> AppResult<Vec<Uuid>>
where
    U: UnitOfWork + ?Sized,
{
    let requests = uow.requests();
    let connections = uow.connections();
    let (contacted, connected) = parallel::join2(
        requests.contacted_mentor_ids(mentee_user_id),
        connections.mentor_ids_for_mentee(mentee_user_id),
    )
    .await?;

    let excluded: BTreeSet<Uuid> = contacted
        .into_iter()
        .chain(connected)
        .chain(std::iter::once(mentee_user_id))
        .collect();
    Ok(excluded.into_iter().collect())
}
