//! In-memory storage for integration tests.
//!
//! Implements every repository over one mutex-guarded state so services and
//! the router run end to end without Postgres. Uniqueness rules mirror the
//! database indexes: one profile per user and role, one pending request per
//! pair, one connection per pair.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use reallyconnect_api::domain::{
    Connection, HelpType, Interest, MenteeProfile, MentorProfile, MentorshipRequest,
    NewMenteeProfile, NewMentorProfile, NewMentorshipRequest, NewUserProfile, RequestScope,
    RequestStatus, UserProfile,
};
use reallyconnect_api::errors::{AppError, AppResult};
use reallyconnect_api::infra::{
    ConnectionRepository, InterestRepository, MenteeProfileUpdate, MenteeQuery, MenteeRepository,
    MentorProfileUpdate, MentorQuery, MentorRepository, RequestRepository, UnitOfWork,
    UserProfileRepository,
};
use reallyconnect_api::Services;

#[derive(Default)]
struct State {
    /// Seconds since the fixed epoch; bumped on every insert
    clock: i64,
    users: HashMap<Uuid, UserProfile>,
    interests: Vec<Interest>,
    mentors: Vec<MentorProfile>,
    mentees: Vec<MenteeProfile>,
    requests: Vec<MentorshipRequest>,
    connections: Vec<Connection>,
}

impl State {
    /// Strictly increasing creation timestamps keep "newest first" deterministic.
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += 1;
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(self.clock)
    }

    fn resolve_interests(&self, ids: &[Uuid]) -> AppResult<Vec<Interest>> {
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            let interest = self
                .interests
                .iter()
                .find(|i| i.id == *id)
                .cloned()
                .ok_or_else(|| AppError::validation("One or more interests do not exist"))?;
            if !found.contains(&interest) {
                found.push(interest);
            }
        }
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }
}

/// Record-level equivalent of the mentor `search` WHERE clause.
fn mentor_matches(query: &MentorQuery, mentor: &MentorProfile) -> bool {
    if !mentor.is_active || query.exclude_user_ids.contains(&mentor.user_id) {
        return false;
    }
    if let Some(help) = query.help_type {
        if !mentor.help_types_offered.contains(&help) {
            return false;
        }
    }
    match &query.industry {
        Some(wanted) => mentor
            .industry
            .as_deref()
            .is_some_and(|industry| industry.to_lowercase() == wanted.to_lowercase()),
        None => true,
    }
}

fn mentee_matches(query: &MenteeQuery, mentee: &MenteeProfile) -> bool {
    query
        .help_needed
        .map_or(true, |help| mentee.help_needed.contains(&help))
}

fn in_scope(scope: RequestScope, request: &MentorshipRequest) -> bool {
    match scope {
        RequestScope::AsMentor(id) => request.mentor_id == id,
        RequestScope::AsMentee(id) => request.mentee_id == id,
        RequestScope::Either(id) => request.involves(id),
    }
}

/// Shared in-memory store handed to `Services::new`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    repos: Arc<MemoryRepos>,
}

#[derive(Default)]
pub struct MemoryRepos {
    state: Mutex<State>,
}

impl MemoryRepos {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> Services {
        Services::new(Arc::new(self.clone()))
    }

    pub fn seed_interest(&self, name: &str, category: Option<&str>) -> Interest {
        let mut state = self.repos.state();
        let interest = Interest {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.map(str::to_string),
            created_at: state.tick(),
        };
        state.interests.push(interest.clone());
        interest
    }

    pub fn connection_count(&self) -> usize {
        self.repos.state().connections.len()
    }

    pub fn connections_between(&self, mentor_id: Uuid, mentee_id: Uuid) -> usize {
        self.repos
            .state()
            .connections
            .iter()
            .filter(|c| c.mentor_id == mentor_id && c.mentee_id == mentee_id)
            .count()
    }

    /// Insert a request row directly, bypassing the workflow checks.
    pub fn seed_request(
        &self,
        mentee_id: Uuid,
        mentor_id: Uuid,
        status: RequestStatus,
    ) -> MentorshipRequest {
        let mut state = self.repos.state();
        let created_at = state.tick();
        let request = MentorshipRequest {
            id: Uuid::new_v4(),
            mentee_id,
            mentor_id,
            help_type: HelpType::CareerAdvice,
            context: "Seeded request".to_string(),
            key_questions: vec![],
            status,
            created_at,
            responded_at: (!status.is_pending()).then_some(created_at),
        };
        state.requests.push(request.clone());
        request
    }
}

#[async_trait]
impl UnitOfWork for MemoryStore {
    fn users(&self) -> Arc<dyn UserProfileRepository> {
        self.repos.clone()
    }

    fn interests(&self) -> Arc<dyn InterestRepository> {
        self.repos.clone()
    }

    fn mentors(&self) -> Arc<dyn MentorRepository> {
        self.repos.clone()
    }

    fn mentees(&self) -> Arc<dyn MenteeRepository> {
        self.repos.clone()
    }

    fn requests(&self) -> Arc<dyn RequestRepository> {
        self.repos.clone()
    }

    fn connections(&self) -> Arc<dyn ConnectionRepository> {
        self.repos.clone()
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

fn page<T>(items: Vec<T>, offset: u64, limit: u64) -> Vec<T> {
    items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

#[async_trait]
impl UserProfileRepository for MemoryRepos {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.state().users.get(&id).cloned())
    }

    async fn create(&self, id: Uuid, profile: NewUserProfile) -> AppResult<UserProfile> {
        let mut state = self.state();
        if state.users.contains_key(&id) {
            return Err(AppError::conflict("User profile already exists"));
        }
        let now = state.tick();
        let created = UserProfile {
            id,
            full_name: profile.full_name,
            role: profile.role,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, profile: UserProfile) -> AppResult<UserProfile> {
        let mut state = self.state();
        match state.users.get_mut(&profile.id) {
            Some(slot) => {
                *slot = profile.clone();
                Ok(profile)
            }
            None => Err(AppError::not_found("User profile not found")),
        }
    }
}

#[async_trait]
impl InterestRepository for MemoryRepos {
    async fn list(&self, category: Option<String>) -> AppResult<Vec<Interest>> {
        let mut interests: Vec<Interest> = self
            .state()
            .interests
            .iter()
            .filter(|i| category.is_none() || i.category == category)
            .cloned()
            .collect();
        interests.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(interests)
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<Interest>> {
        let mut interests: Vec<Interest> = self
            .state()
            .interests
            .iter()
            .filter(|i| ids.contains(&i.id))
            .cloned()
            .collect();
        interests.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(interests)
    }
}

#[async_trait]
impl MentorRepository for MemoryRepos {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<MentorProfile>> {
        Ok(self
            .state()
            .mentors
            .iter()
            .find(|m| m.user_id == user_id)
            .cloned())
    }

    async fn create(&self, user_id: Uuid, profile: NewMentorProfile) -> AppResult<MentorProfile> {
        let mut state = self.state();
        if state.mentors.iter().any(|m| m.user_id == user_id) {
            return Err(AppError::conflict("Mentor profile already exists for this user"));
        }
        let interests = state.resolve_interests(&profile.interest_ids)?;
        let now = state.tick();
        let created = MentorProfile {
            id: Uuid::new_v4(),
            user_id,
            industry: profile.industry,
            job_title: profile.job_title,
            help_types_offered: HelpType::normalize(profile.help_types_offered),
            max_requests_per_week: profile.max_requests_per_week,
            interests,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        state.mentors.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: MentorProfileUpdate) -> AppResult<()> {
        let mut state = self.state();
        let interests = match &update.interest_ids {
            Some(ids) => Some(state.resolve_interests(ids)?),
            None => None,
        };
        let slot = state
            .mentors
            .iter_mut()
            .find(|m| m.id == update.profile_id)
            .ok_or_else(|| AppError::not_found("Mentor profile not found"))?;
        if let Some(row) = update.row {
            *slot = MentorProfile {
                interests: std::mem::take(&mut slot.interests),
                ..row
            };
        }
        if let Some(interests) = interests {
            slot.interests = interests;
        }
        Ok(())
    }

    async fn search(&self, query: MentorQuery) -> AppResult<Vec<MentorProfile>> {
        let mut mentors: Vec<MentorProfile> = self
            .state()
            .mentors
            .iter()
            .filter(|m| mentor_matches(&query, m))
            .cloned()
            .collect();
        mentors.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page(mentors, query.offset, query.limit))
    }
}

#[async_trait]
impl MenteeRepository for MemoryRepos {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<MenteeProfile>> {
        Ok(self
            .state()
            .mentees
            .iter()
            .find(|m| m.user_id == user_id)
            .cloned())
    }

    async fn create(&self, user_id: Uuid, profile: NewMenteeProfile) -> AppResult<MenteeProfile> {
        let mut state = self.state();
        if state.mentees.iter().any(|m| m.user_id == user_id) {
            return Err(AppError::conflict("Mentee profile already exists for this user"));
        }
        let interests = state.resolve_interests(&profile.interest_ids)?;
        let now = state.tick();
        let created = MenteeProfile {
            id: Uuid::new_v4(),
            user_id,
            industry: profile.industry,
            goals: profile.goals,
            help_needed: HelpType::normalize(profile.help_needed),
            background: profile.background,
            interests,
            created_at: now,
            updated_at: now,
        };
        state.mentees.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: MenteeProfileUpdate) -> AppResult<()> {
        let mut state = self.state();
        let interests = match &update.interest_ids {
            Some(ids) => Some(state.resolve_interests(ids)?),
            None => None,
        };
        let slot = state
            .mentees
            .iter_mut()
            .find(|m| m.id == update.profile_id)
            .ok_or_else(|| AppError::not_found("Mentee profile not found"))?;
        if let Some(row) = update.row {
            *slot = MenteeProfile {
                interests: std::mem::take(&mut slot.interests),
                ..row
            };
        }
        if let Some(interests) = interests {
            slot.interests = interests;
        }
        Ok(())
    }

    async fn list(&self, query: MenteeQuery) -> AppResult<Vec<MenteeProfile>> {
        let mut mentees: Vec<MenteeProfile> = self
            .state()
            .mentees
            .iter()
            .filter(|m| mentee_matches(&query, m))
            .cloned()
            .collect();
        mentees.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page(mentees, query.offset, query.limit))
    }
}

#[async_trait]
impl RequestRepository for MemoryRepos {
    async fn create(&self, request: NewMentorshipRequest) -> AppResult<MentorshipRequest> {
        let mut state = self.state();
        let duplicate = state.requests.iter().any(|r| {
            r.mentee_id == request.mentee_id
                && r.mentor_id == request.mentor_id
                && r.status.is_pending()
        });
        if duplicate {
            return Err(AppError::conflict(
                "You already have a pending request with this mentor",
            ));
        }
        let created = MentorshipRequest {
            id: Uuid::new_v4(),
            mentee_id: request.mentee_id,
            mentor_id: request.mentor_id,
            help_type: request.help_type,
            context: request.context,
            key_questions: request.key_questions,
            status: RequestStatus::Pending,
            created_at: state.tick(),
            responded_at: None,
        };
        state.requests.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MentorshipRequest>> {
        Ok(self.state().requests.iter().find(|r| r.id == id).cloned())
    }

    async fn find_pending(
        &self,
        mentee_id: Uuid,
        mentor_id: Uuid,
    ) -> AppResult<Option<MentorshipRequest>> {
        Ok(self
            .state()
            .requests
            .iter()
            .find(|r| r.mentee_id == mentee_id && r.mentor_id == mentor_id && r.status.is_pending())
            .cloned())
    }

    async fn list(&self, scope: RequestScope) -> AppResult<Vec<MentorshipRequest>> {
        let mut requests: Vec<MentorshipRequest> = self
            .state()
            .requests
            .iter()
            .filter(|r| in_scope(scope, r))
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn pending_counts(&self, mentor_ids: Vec<Uuid>) -> AppResult<HashMap<Uuid, u64>> {
        let mut counts = HashMap::new();
        for request in self.state().requests.iter() {
            if request.status.is_pending() && mentor_ids.contains(&request.mentor_id) {
                *counts.entry(request.mentor_id).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn contacted_mentor_ids(&self, mentee_id: Uuid) -> AppResult<Vec<Uuid>> {
        let mut ids: Vec<Uuid> = self
            .state()
            .requests
            .iter()
            .filter(|r| r.mentee_id == mentee_id && r.status != RequestStatus::Declined)
            .map(|r| r.mentor_id)
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    async fn transition(
        &self,
        id: Uuid,
        status: RequestStatus,
        responded_at: DateTime<Utc>,
    ) -> AppResult<Option<MentorshipRequest>> {
        let mut state = self.state();
        let Some(request) = state
            .requests
            .iter_mut()
            .find(|r| r.id == id && r.status.is_pending())
        else {
            return Ok(None);
        };
        request.status = status;
        request.responded_at = Some(responded_at);
        Ok(Some(request.clone()))
    }
}

#[async_trait]
impl ConnectionRepository for MemoryRepos {
    async fn find_between(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
    ) -> AppResult<Option<Connection>> {
        Ok(self
            .state()
            .connections
            .iter()
            .find(|c| c.mentor_id == mentor_id && c.mentee_id == mentee_id)
            .cloned())
    }

    async fn create(
        &self,
        mentor_id: Uuid,
        mentee_id: Uuid,
        request_id: Option<Uuid>,
    ) -> AppResult<Connection> {
        let mut state = self.state();
        if state
            .connections
            .iter()
            .any(|c| c.mentor_id == mentor_id && c.mentee_id == mentee_id)
        {
            return Err(AppError::conflict("Connection already exists"));
        }
        let created = Connection {
            id: Uuid::new_v4(),
            mentor_id,
            mentee_id,
            request_id,
            created_at: state.tick(),
        };
        state.connections.push(created.clone());
        Ok(created)
    }

    async fn mentor_ids_for_mentee(&self, mentee_id: Uuid) -> AppResult<Vec<Uuid>> {
        Ok(self
            .state()
            .connections
            .iter()
            .filter(|c| c.mentee_id == mentee_id)
            .map(|c| c.mentor_id)
            .collect())
    }
}

/// A mentor profile with sensible defaults for tests
pub fn new_mentor(industry: &str, max_requests_per_week: i32, interest_ids: Vec<Uuid>) -> NewMentorProfile {
    NewMentorProfile {
        industry: Some(industry.to_string()),
        job_title: Some("Engineer".to_string()),
        help_types_offered: vec![HelpType::CareerAdvice, HelpType::ResumeReview],
        max_requests_per_week,
        interest_ids,
    }
}

/// A mentee profile with sensible defaults for tests
pub fn new_mentee(industry: Option<&str>, interest_ids: Vec<Uuid>) -> NewMenteeProfile {
    NewMenteeProfile {
        industry: industry.map(str::to_string),
        goals: Some("Grow into a senior role".to_string()),
        help_needed: vec![HelpType::CareerAdvice],
        background: None,
        interest_ids,
    }
}
