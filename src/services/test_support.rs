//! Mock-backed unit of work for service unit tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::infra::{
    ConnectionRepository, InterestRepository, MenteeRepository, MentorRepository,
    MockConnectionRepository, MockInterestRepository, MockMenteeRepository, MockMentorRepository,
    MockRequestRepository, MockUserProfileRepository, RequestRepository, UnitOfWork,
    UserProfileRepository,
};

/// Set expectations on the individual mocks, then `build()`.
/// Repositories without expectations panic when called.
#[derive(Default)]
pub struct TestUnitOfWork {
    pub users: MockUserProfileRepository,
    pub interests: MockInterestRepository,
    pub mentors: MockMentorRepository,
    pub mentees: MockMenteeRepository,
    pub requests: MockRequestRepository,
    pub connections: MockConnectionRepository,
}

impl TestUnitOfWork {
    pub fn build(self) -> MockedUnitOfWork {
        MockedUnitOfWork {
            users: Arc::new(self.users),
            interests: Arc::new(self.interests),
            mentors: Arc::new(self.mentors),
            mentees: Arc::new(self.mentees),
            requests: Arc::new(self.requests),
            connections: Arc::new(self.connections),
        }
    }
}

pub struct MockedUnitOfWork {
    users: Arc<MockUserProfileRepository>,
    interests: Arc<MockInterestRepository>,
    mentors: Arc<MockMentorRepository>,
    mentees: Arc<MockMenteeRepository>,
    requests: Arc<MockRequestRepository>,
    connections: Arc<MockConnectionRepository>,
}

#[async_trait]
impl UnitOfWork for MockedUnitOfWork {
    fn users(&self) -> Arc<dyn UserProfileRepository> {
        self.users.clone()
    }

    fn interests(&self) -> Arc<dyn InterestRepository> {
        self.interests.clone()
    }

    fn mentors(&self) -> Arc<dyn MentorRepository> {
        self.mentors.clone()
    }

    fn mentees(&self) -> Arc<dyn MenteeRepository> {
        self.mentees.clone()
    }

    fn requests(&self) -> Arc<dyn RequestRepository> {
        self.requests.clone()
    }

    fn connections(&self) -> Arc<dyn ConnectionRepository> {
        self.connections.clone()
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
