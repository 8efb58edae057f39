//! Mentorship request workflow against the in-memory store.

mod common;

use uuid::Uuid;

use common::{new_mentee, new_mentor, MemoryStore};
use reallyconnect_api::domain::{HelpType, RequestStatus};
use reallyconnect_api::errors::AppError;
use reallyconnect_api::services::RequestDraft;
use reallyconnect_api::Services;

struct Pair {
    store: MemoryStore,
    services: Services,
    mentor: Uuid,
    mentee: Uuid,
}

async fn pair() -> Pair {
    let store = MemoryStore::new();
    let services = store.services();
    let mentor = Uuid::new_v4();
    let mentee = Uuid::new_v4();

    services
        .mentors()
        .create(mentor, new_mentor("Software", 3, vec![]))
        .await
        .unwrap();
    services
        .mentees()
        .create(mentee, new_mentee(Some("Software"), vec![]))
        .await
        .unwrap();

    Pair {
        store,
        services,
        mentor,
        mentee,
    }
}

fn draft(mentor_id: Uuid) -> RequestDraft {
    RequestDraft {
        mentor_id,
        help_type: HelpType::ResumeReview,
        context: "  Could you review my resume for backend roles?  ".to_string(),
        key_questions: vec!["Is my summary too long?".to_string(), "   ".to_string()],
    }
}

#[tokio::test]
async fn test_create_stores_pending_request_with_trimmed_fields() {
    let p = pair().await;

    let request = p
        .services
        .requests()
        .create(p.mentee, draft(p.mentor))
        .await
        .unwrap();

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.responded_at, None);
    assert_eq!(request.context, "Could you review my resume for backend roles?");
    assert_eq!(request.key_questions, vec!["Is my summary too long?".to_string()]);
}

#[tokio::test]
async fn test_second_pending_request_to_same_mentor_conflicts() {
    let p = pair().await;
    let requests = p.services.requests();

    requests.create(p.mentee, draft(p.mentor)).await.unwrap();
    let second = requests.create(p.mentee, draft(p.mentor)).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_new_request_allowed_after_decline() {
    let p = pair().await;
    let requests = p.services.requests();

    let first = requests.create(p.mentee, draft(p.mentor)).await.unwrap();
    requests.decline(first.id, p.mentor).await.unwrap();

    assert!(requests.create(p.mentee, draft(p.mentor)).await.is_ok());
}

#[tokio::test]
async fn test_only_mentees_can_create_requests() {
    let p = pair().await;

    let result = p
        .services
        .requests()
        .create(p.mentor, draft(Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn test_request_to_unknown_mentor_is_not_found() {
    let p = pair().await;

    let result = p
        .services
        .requests()
        .create(p.mentee, draft(Uuid::new_v4()))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_accept_sets_status_and_creates_one_connection() {
    let p = pair().await;
    let requests = p.services.requests();
    let created = requests.create(p.mentee, draft(p.mentor)).await.unwrap();

    let accepted = requests.accept(created.id, p.mentor).await.unwrap();
    assert_eq!(accepted.status, RequestStatus::Accepted);
    assert!(accepted.responded_at.is_some());
    assert_eq!(p.store.connections_between(p.mentor, p.mentee), 1);

    // Retrying is rejected and never adds a second connection
    let retry = requests.accept(created.id, p.mentor).await;
    assert!(matches!(retry, Err(AppError::Conflict(_))));
    assert_eq!(p.store.connections_between(p.mentor, p.mentee), 1);
}

#[tokio::test]
async fn test_accepting_again_for_connected_pair_reuses_connection() {
    let p = pair().await;
    let requests = p.services.requests();

    let first = requests.create(p.mentee, draft(p.mentor)).await.unwrap();
    requests.accept(first.id, p.mentor).await.unwrap();

    let second = requests.create(p.mentee, draft(p.mentor)).await.unwrap();
    requests.accept(second.id, p.mentor).await.unwrap();

    assert_eq!(p.store.connection_count(), 1);
}

#[tokio::test]
async fn test_decline_never_creates_connection() {
    let p = pair().await;
    let requests = p.services.requests();
    let created = requests.create(p.mentee, draft(p.mentor)).await.unwrap();

    let declined = requests.decline(created.id, p.mentor).await.unwrap();
    assert_eq!(declined.status, RequestStatus::Declined);
    assert!(declined.responded_at.is_some());
    assert_eq!(p.store.connection_count(), 0);

    let accept_after = requests.accept(created.id, p.mentor).await;
    assert!(matches!(accept_after, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_only_addressed_mentor_may_respond() {
    let p = pair().await;
    let requests = p.services.requests();
    let created = requests.create(p.mentee, draft(p.mentor)).await.unwrap();

    let by_mentee = requests.accept(created.id, p.mentee).await;
    let by_stranger = requests.decline(created.id, Uuid::new_v4()).await;

    assert!(matches!(by_mentee, Err(AppError::Forbidden(_))));
    assert!(matches!(by_stranger, Err(AppError::Forbidden(_))));

    let unchanged = requests.get(created.id, p.mentor).await.unwrap();
    assert_eq!(unchanged.status, RequestStatus::Pending);
}

#[tokio::test]
async fn test_get_is_limited_to_the_two_parties() {
    let p = pair().await;
    let requests = p.services.requests();
    let created = requests.create(p.mentee, draft(p.mentor)).await.unwrap();

    assert!(requests.get(created.id, p.mentee).await.is_ok());
    assert!(requests.get(created.id, p.mentor).await.is_ok());
    assert!(matches!(
        requests.get(created.id, Uuid::new_v4()).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        requests.get(Uuid::new_v4(), p.mentee).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_follows_caller_identity() {
    let p = pair().await;
    let services = &p.services;

    // A user who is both a mentor and a mentee sees both sides
    let both = Uuid::new_v4();
    services
        .mentors()
        .create(both, new_mentor("Software", 3, vec![]))
        .await
        .unwrap();
    services
        .mentees()
        .create(both, new_mentee(Some("Software"), vec![]))
        .await
        .unwrap();

    let sent = services.requests().create(both, draft(p.mentor)).await.unwrap();
    let received = services.requests().create(p.mentee, draft(both)).await.unwrap();

    let for_both = services.requests().list(both).await.unwrap();
    assert_eq!(
        for_both.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![received.id, sent.id]
    );

    let for_mentor = services.requests().list(p.mentor).await.unwrap();
    assert_eq!(for_mentor.len(), 1);
    assert_eq!(for_mentor[0].id, sent.id);

    let for_mentee = services.requests().list(p.mentee).await.unwrap();
    assert_eq!(for_mentee.len(), 1);
    assert_eq!(for_mentee[0].id, received.id);

    let nobody = services.requests().list(Uuid::new_v4()).await;
    assert!(matches!(nobody, Err(AppError::NotFound(_))));
}
