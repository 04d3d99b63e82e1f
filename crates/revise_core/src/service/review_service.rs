//! Review use-case service.
//!
//! # Responsibility
//! - Validate caller input (known user, non-blank topic).
//! - Schedule new topics and persist their review dates.
//! - Build the upcoming agenda for one user.
//!
//! # Invariants
//! - Only users in the directory can read or write review sets.
//! - Topics are trimmed here; the generator stores them verbatim.
//! - Service layer remains storage-agnostic.

use crate::agenda::{build_agenda, Agenda};
use crate::model::revision::RevisionRecord;
use crate::model::user::UserId;
use crate::repo::review_repo::{RepoError, ReviewStore};
use crate::schedule::{generate_revisions, ScheduleError};
use crate::users::UserDirectory;
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for review use-cases.
#[derive(Debug)]
pub enum ReviewServiceError {
    /// User is not part of the configured directory.
    UnknownUser(String),
    /// Topic is empty after trimming.
    EmptyTopic,
    /// Start date cannot be scheduled.
    Schedule(ScheduleError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ReviewServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownUser(user) => write!(f, "unknown user: `{user}`"),
            Self::EmptyTopic => write!(f, "topic cannot be empty"),
            Self::Schedule(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReviewServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Schedule(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ReviewServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ScheduleError> for ReviewServiceError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

pub type ReviewServiceResult<T> = Result<T, ReviewServiceError>;

/// Review service facade over a store implementation.
pub struct ReviewService<S: ReviewStore> {
    store: S,
    users: UserDirectory,
}

impl<S: ReviewStore> ReviewService<S> {
    /// Creates a service using the provided store and user directory.
    pub fn new(store: S, users: UserDirectory) -> Self {
        Self { store, users }
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// Schedules `topic` from `start` and appends the five reviews to the
    /// user's set.
    ///
    /// Returns the records that were persisted.
    pub fn add_topic(
        &self,
        user: &str,
        topic: &str,
        start: NaiveDate,
    ) -> ReviewServiceResult<Vec<RevisionRecord>> {
        let user = self.resolve_user(user)?;
        let topic = topic.trim();
        if topic.is_empty() {
            warn!("event=topic_add module=service status=error user_id={user} error_code=empty_topic");
            return Err(ReviewServiceError::EmptyTopic);
        }

        let records = generate_revisions(topic, start)?;
        self.store.put(&user, &records)?;

        info!(
            "event=topic_add module=service status=ok user_id={user} start={start} count={}",
            records.len()
        );
        Ok(records)
    }

    /// Returns every stored review of the user, past ones included.
    pub fn reviews(&self, user: &str) -> ReviewServiceResult<Vec<RevisionRecord>> {
        let user = self.resolve_user(user)?;
        Ok(self.store.get(&user)?.unwrap_or_default())
    }

    /// Builds the agenda of reviews due on or after `today`.
    pub fn agenda(&self, user: &str, today: NaiveDate) -> ReviewServiceResult<Agenda> {
        let records = self.reviews(user)?;
        Ok(build_agenda(&records, today))
    }

    /// Drops the user's whole review set.
    pub fn clear(&self, user: &str) -> ReviewServiceResult<()> {
        let user = self.resolve_user(user)?;
        self.store.clear(&user)?;
        Ok(())
    }

    fn resolve_user(&self, raw: &str) -> ReviewServiceResult<UserId> {
        self.users.find(raw).cloned().ok_or_else(|| {
            warn!("event=user_resolve module=service status=error error_code=unknown_user");
            ReviewServiceError::UnknownUser(raw.trim().to_string())
        })
    }
}
