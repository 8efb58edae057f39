//! Discovery feed, recommendations and profile round-trips against the
//! in-memory store.

mod common;

use uuid::Uuid;

use common::{new_mentee, new_mentor, MemoryStore};
use reallyconnect_api::domain::{
    HelpType, MenteeProfilePatch, MentorProfilePatch, NewUserProfile, RequestStatus,
    UserProfilePatch, UserRole,
};
use reallyconnect_api::errors::AppError;
use reallyconnect_api::services::{DiscoveryFilter, MentorFilter};
use reallyconnect_api::types::{Page, PaginationParams};

fn page(limit: u64) -> Page {
    PaginationParams::new(Some(limit), None).page()
}

#[tokio::test]
async fn test_discovery_requires_mentee_industry() {
    let store = MemoryStore::new();
    let services = store.services();
    let mentee = Uuid::new_v4();
    services
        .mentees()
        .create(mentee, new_mentee(None, vec![]))
        .await
        .unwrap();

    let result = services
        .discovery()
        .browse(mentee, DiscoveryFilter::default(), page(20))
        .await;
    assert!(matches!(result, Err(AppError::InvalidState(_))));

    // Whitespace does not count as an industry either
    services
        .mentees()
        .update(
            mentee,
            MenteeProfilePatch {
                industry: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let result = services
        .discovery()
        .browse(mentee, DiscoveryFilter::default(), page(20))
        .await;
    assert!(matches!(result, Err(AppError::InvalidState(_))));
}

#[tokio::test]
async fn test_discovery_without_mentee_profile_is_not_found() {
    let services = MemoryStore::new().services();

    let result = services
        .discovery()
        .browse(Uuid::new_v4(), DiscoveryFilter::default(), page(20))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_discovery_matches_industry_and_reports_availability() {
    let store = MemoryStore::new();
    let services = store.services();
    let mentee = Uuid::new_v4();
    services
        .mentees()
        .create(mentee, new_mentee(Some("software"), vec![]))
        .await
        .unwrap();

    let busy = Uuid::new_v4();
    let open = Uuid::new_v4();
    let other_industry = Uuid::new_v4();
    services.mentors().create(busy, new_mentor("Software", 2, vec![])).await.unwrap();
    services.mentors().create(open, new_mentor("SOFTWARE", 2, vec![])).await.unwrap();
    services
        .mentors()
        .create(other_industry, new_mentor("Finance", 2, vec![]))
        .await
        .unwrap();

    // Capacity is reached at exactly max pending requests
    store.seed_request(Uuid::new_v4(), busy, RequestStatus::Pending);
    store.seed_request(Uuid::new_v4(), busy, RequestStatus::Pending);
    store.seed_request(Uuid::new_v4(), open, RequestStatus::Pending);
    store.seed_request(Uuid::new_v4(), open, RequestStatus::Declined);

    let feed = services
        .discovery()
        .browse(mentee, DiscoveryFilter::default(), page(20))
        .await
        .unwrap();

    assert_eq!(feed.total, 2);
    // Newest first
    assert_eq!(feed.mentors[0].mentor.user_id, open);
    assert!(feed.mentors[0].is_available);
    assert_eq!(feed.mentors[0].pending_requests, 1);
    assert_eq!(feed.mentors[1].mentor.user_id, busy);
    assert!(!feed.mentors[1].is_available);
    assert_eq!(feed.mentors[1].pending_requests, 2);
    assert_eq!(feed.mentors[1].max_requests, 2);

    let available = services
        .discovery()
        .browse(
            mentee,
            DiscoveryFilter {
                help_type: None,
                available_only: true,
            },
            page(20),
        )
        .await
        .unwrap();
    assert_eq!(available.total, 1);
    assert_eq!(available.mentors[0].mentor.user_id, open);
}

#[tokio::test]
async fn test_discovery_hides_contacted_and_connected_mentors() {
    let store = MemoryStore::new();
    let services = store.services();
    let mentee = Uuid::new_v4();
    services
        .mentees()
        .create(mentee, new_mentee(Some("Software"), vec![]))
        .await
        .unwrap();

    let pending = Uuid::new_v4();
    let accepted = Uuid::new_v4();
    let declined = Uuid::new_v4();
    let fresh = Uuid::new_v4();
    for mentor in [pending, accepted, declined, fresh] {
        services
            .mentors()
            .create(mentor, new_mentor("Software", 5, vec![]))
            .await
            .unwrap();
    }

    let requests = services.requests();
    let draft = |mentor_id| reallyconnect_api::services::RequestDraft {
        mentor_id,
        help_type: HelpType::CareerAdvice,
        context: "Looking for guidance".to_string(),
        key_questions: vec![],
    };
    requests.create(mentee, draft(pending)).await.unwrap();
    let to_accept = requests.create(mentee, draft(accepted)).await.unwrap();
    requests.accept(to_accept.id, accepted).await.unwrap();
    let to_decline = requests.create(mentee, draft(declined)).await.unwrap();
    requests.decline(to_decline.id, declined).await.unwrap();

    let feed = services
        .discovery()
        .browse(mentee, DiscoveryFilter::default(), page(20))
        .await
        .unwrap();
    let mut shown: Vec<Uuid> = feed.mentors.iter().map(|c| c.mentor.user_id).collect();
    shown.sort();
    let mut expected = vec![declined, fresh];
    expected.sort();
    assert_eq!(shown, expected);

    // Recommendations and browse use the same exclusion
    let recommended: Vec<Uuid> = services
        .recommendations()
        .recommend(mentee, None, page(10))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.mentor.user_id)
        .collect();
    assert!(!recommended.contains(&pending));
    assert!(!recommended.contains(&accepted));

    let browsed: Vec<Uuid> = services
        .mentors()
        .browse(mentee, MentorFilter::default(), page(20))
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.user_id)
        .collect();
    assert!(!browsed.contains(&pending));
    assert!(!browsed.contains(&accepted));
}

#[tokio::test]
async fn test_discovery_filters_help_type_and_skips_inactive_mentors() {
    let store = MemoryStore::new();
    let services = store.services();
    let mentee = Uuid::new_v4();
    services
        .mentees()
        .create(mentee, new_mentee(Some("Design"), vec![]))
        .await
        .unwrap();

    let interviewer = Uuid::new_v4();
    let mut profile = new_mentor("Design", 3, vec![]);
    profile.help_types_offered = vec![HelpType::MockInterview];
    services.mentors().create(interviewer, profile).await.unwrap();

    let retired = Uuid::new_v4();
    services
        .mentors()
        .create(retired, new_mentor("Design", 3, vec![]))
        .await
        .unwrap();
    services
        .mentors()
        .update(
            retired,
            MentorProfilePatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let feed = services
        .discovery()
        .browse(
            mentee,
            DiscoveryFilter {
                help_type: Some(HelpType::MockInterview),
                available_only: false,
            },
            page(20),
        )
        .await
        .unwrap();
    assert_eq!(feed.total, 1);
    assert_eq!(feed.mentors[0].mentor.user_id, interviewer);

    let detail = services.discovery().detail(retired, mentee).await;
    assert!(matches!(detail, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_detail_reports_shared_interests() {
    let store = MemoryStore::new();
    let services = store.services();
    let rust = store.seed_interest("Rust", Some("Technology"));
    let chess = store.seed_interest("Chess", Some("Hobbies"));
    let hiking = store.seed_interest("Hiking", Some("Outdoors"));

    let mentor = Uuid::new_v4();
    let mentee = Uuid::new_v4();
    services
        .mentors()
        .create(mentor, new_mentor("Software", 1, vec![rust.id, chess.id]))
        .await
        .unwrap();
    services
        .mentees()
        .create(mentee, new_mentee(Some("Software"), vec![chess.id, hiking.id, rust.id]))
        .await
        .unwrap();
    store.seed_request(Uuid::new_v4(), mentor, RequestStatus::Pending);

    let detail = services.discovery().detail(mentor, mentee).await.unwrap();

    assert_eq!(detail.total_shared_interests, 2);
    assert_eq!(
        detail
            .shared_interests
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Chess", "Rust"]
    );
    assert!(!detail.is_available);
    assert_eq!(detail.pending_requests, 1);
}

#[tokio::test]
async fn test_recommendations_rank_by_shared_interests_then_recency() {
    let store = MemoryStore::new();
    let services = store.services();
    let a = store.seed_interest("AI", None);
    let b = store.seed_interest("Backend", None);
    let c = store.seed_interest("Cloud", None);

    let mentee = Uuid::new_v4();
    services
        .mentees()
        .create(mentee, new_mentee(None, vec![a.id, b.id, c.id]))
        .await
        .unwrap();

    let older_two = Uuid::new_v4();
    let three = Uuid::new_v4();
    let none = Uuid::new_v4();
    let newer_two = Uuid::new_v4();
    services.mentors().create(older_two, new_mentor("X", 3, vec![a.id, b.id])).await.unwrap();
    services.mentors().create(three, new_mentor("Y", 3, vec![a.id, b.id, c.id])).await.unwrap();
    services.mentors().create(none, new_mentor("Z", 3, vec![])).await.unwrap();
    services.mentors().create(newer_two, new_mentor("W", 3, vec![b.id, c.id])).await.unwrap();

    let ranked = services
        .recommendations()
        .recommend(mentee, None, page(3))
        .await
        .unwrap();

    let order: Vec<(Uuid, usize)> = ranked.iter().map(|r| (r.mentor.user_id, r.score)).collect();
    assert_eq!(order, vec![(three, 3), (newer_two, 2), (older_two, 2)]);
}

#[tokio::test]
async fn test_recommendations_require_mentee_profile() {
    let store = MemoryStore::new();
    let services = store.services();
    let mentor = Uuid::new_v4();
    services
        .mentors()
        .create(mentor, new_mentor("Software", 3, vec![]))
        .await
        .unwrap();

    let result = services.recommendations().recommend(mentor, None, page(10)).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn test_profile_interests_round_trip_by_set() {
    let store = MemoryStore::new();
    let services = store.services();
    let rust = store.seed_interest("Rust", Some("Technology"));
    let jazz = store.seed_interest("Jazz", Some("Music"));
    let go = store.seed_interest("Go", Some("Technology"));

    let user = Uuid::new_v4();
    let created = services
        .mentors()
        .create(user, new_mentor("Software", 3, vec![rust.id, jazz.id]))
        .await
        .unwrap();
    assert_eq!(created.interest_ids(), [rust.id, jazz.id].into_iter().collect());

    let updated = services
        .mentors()
        .update(
            user,
            MentorProfilePatch {
                interest_ids: Some(vec![go.id]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.interest_ids(), [go.id].into_iter().collect());
    assert_eq!(updated.industry.as_deref(), Some("Software"));

    let unknown = services
        .mentors()
        .update(
            user,
            MentorProfilePatch {
                interest_ids: Some(vec![Uuid::new_v4()]),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(unknown, Err(AppError::Validation(_))));
    // A rejected update leaves the stored set alone
    let stored = services.mentors().get(user).await.unwrap();
    assert_eq!(stored.interest_ids(), [go.id].into_iter().collect());

    let technology = services
        .interests()
        .list(Some("Technology".to_string()))
        .await
        .unwrap();
    assert_eq!(
        technology.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
        vec!["Go", "Rust"]
    );
}

#[tokio::test]
async fn test_patch_with_fields_and_interests_applies_both() {
    let store = MemoryStore::new();
    let services = store.services();
    let rust = store.seed_interest("Rust", Some("Technology"));
    let go = store.seed_interest("Go", Some("Technology"));

    let user = Uuid::new_v4();
    services
        .mentors()
        .create(user, new_mentor("Software", 3, vec![rust.id]))
        .await
        .unwrap();

    let updated = services
        .mentors()
        .update(
            user,
            MentorProfilePatch {
                job_title: Some("Principal Engineer".to_string()),
                max_requests_per_week: Some(1),
                interest_ids: Some(vec![go.id]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.job_title.as_deref(), Some("Principal Engineer"));
    assert_eq!(updated.max_requests_per_week, 1);
    assert_eq!(updated.interest_ids(), [go.id].into_iter().collect());

    // Unknown interest: neither the fields nor the links change
    let rejected = services
        .mentors()
        .update(
            user,
            MentorProfilePatch {
                job_title: Some("Intern".to_string()),
                interest_ids: Some(vec![Uuid::new_v4()]),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(rejected, Err(AppError::Validation(_))));
    let stored = services.mentors().get(user).await.unwrap();
    assert_eq!(stored.job_title.as_deref(), Some("Principal Engineer"));
    assert_eq!(stored.interest_ids(), [go.id].into_iter().collect());
}

#[tokio::test]
async fn test_user_profile_lifecycle() {
    let services = MemoryStore::new().services();
    let user = Uuid::new_v4();

    assert!(matches!(
        services.users().get(user).await,
        Err(AppError::NotFound(_))
    ));

    let created = services
        .users()
        .create(
            user,
            NewUserProfile {
                full_name: Some("Ada Lovelace".to_string()),
                role: UserRole::Mentee,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.role, UserRole::Mentee);

    let duplicate = services
        .users()
        .create(
            user,
            NewUserProfile {
                full_name: None,
                role: UserRole::Mentor,
            },
        )
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let updated = services
        .users()
        .update(
            user,
            UserProfilePatch {
                role: Some(UserRole::Both),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.role, UserRole::Both);
    assert_eq!(updated.full_name.as_deref(), Some("Ada Lovelace"));
}

#[tokio::test]
async fn test_mentee_browse_filters_by_help_needed() {
    let services = MemoryStore::new().services();

    let career = Uuid::new_v4();
    let resume = Uuid::new_v4();
    services
        .mentees()
        .create(career, new_mentee(Some("Software"), vec![]))
        .await
        .unwrap();
    let mut profile = new_mentee(Some("Software"), vec![]);
    profile.help_needed = vec![HelpType::ResumeReview];
    services.mentees().create(resume, profile).await.unwrap();

    let all = services.mentees().browse(None, page(20)).await.unwrap();
    assert_eq!(
        all.iter().map(|m| m.user_id).collect::<Vec<_>>(),
        vec![resume, career]
    );

    let filtered = services
        .mentees()
        .browse(Some(HelpType::ResumeReview), page(20))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].user_id, resume);
}
