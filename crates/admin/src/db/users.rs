//! User repository: the authoritative customer collection.
//!
//! Holds the records in seed order, answers search/filter queries, applies
//! whole-record updates and deletes, and tracks which record the detail view
//! is showing. Every successful mutation is published as a [`UserEvent`].

use serde::Serialize;
use tokio::sync::broadcast;

use lendsqr_core::{UserId, UserRecord, UserStatus};

use super::RepositoryError;

/// Buffered events per subscriber before slow receivers start lagging.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Change notification published after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserEvent {
    /// A record was replaced in place.
    Updated { id: UserId },
    /// A record was removed. A selection pointing at it is cleared as well.
    Deleted { id: UserId },
    /// The selection pointer was set or cleared.
    SelectionChanged { id: Option<UserId> },
}

impl UserEvent {
    /// Event name, matching the serialized `type` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Updated { .. } => "updated",
            Self::Deleted { .. } => "deleted",
            Self::SelectionChanged { .. } => "selection_changed",
        }
    }
}

/// Headline counts for the users page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub users: usize,
    pub active_users: usize,
    pub users_with_loans: usize,
    pub users_with_savings: usize,
}

/// A non-empty search string, lower-cased once for the case-insensitive fields.
#[derive(Debug, Clone)]
pub struct SearchTerm<'a> {
    raw: &'a str,
    lowered: String,
}

impl<'a> SearchTerm<'a> {
    /// Returns `None` for an empty query, which means "no constraint".
    #[must_use]
    pub fn new(raw: &'a str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw,
            lowered: raw.to_lowercase(),
        })
    }

    /// Substring match on first name, last name, email and organization
    /// (case-insensitive) or phone number (case-sensitive).
    #[must_use]
    pub fn matches(&self, user: &UserRecord) -> bool {
        let q = self.lowered.as_str();
        user.first_name.to_lowercase().contains(q)
            || user.last_name.to_lowercase().contains(q)
            || user.email.to_lowercase().contains(q)
            || user.phone_number.contains(self.raw)
            || user.organization.to_lowercase().contains(q)
    }
}

/// Exact-match filter criteria. `None` fields impose no constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFilter<'a> {
    pub status: Option<UserStatus>,
    pub organization: Option<&'a str>,
}

impl UserFilter<'_> {
    /// An empty organization string counts as "not provided".
    #[must_use]
    pub fn matches(&self, user: &UserRecord) -> bool {
        if let Some(status) = self.status
            && user.status != status
        {
            return false;
        }
        if let Some(org) = self.organization
            && !org.is_empty()
            && user.organization != org
        {
            return false;
        }
        true
    }
}

/// In-memory repository for customer records.
#[derive(Debug)]
pub struct UserRepository {
    users: Vec<UserRecord>,
    selected: Option<UserId>,
    events: broadcast::Sender<UserEvent>,
}

impl UserRepository {
    /// Create a repository seeded with `users`, keeping their order.
    ///
    /// IDs are expected to be unique; the data source enforces this.
    #[must_use]
    pub fn new(users: Vec<UserRecord>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            users,
            selected: None,
            events,
        }
    }

    /// All records in collection order.
    #[must_use]
    pub fn list(&self) -> &[UserRecord] {
        &self.users
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Look up a record by ID.
    #[must_use]
    pub fn get(&self, id: &UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Records matching `query`, in collection order.
    ///
    /// An empty query returns every record.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&UserRecord> {
        match SearchTerm::new(query) {
            Some(term) => self.users.iter().filter(|u| term.matches(u)).collect(),
            None => self.users.iter().collect(),
        }
    }

    /// Records matching every provided criterion, in collection order.
    #[must_use]
    pub fn filter(&self, status: Option<UserStatus>, organization: Option<&str>) -> Vec<&UserRecord> {
        let criteria = UserFilter {
            status,
            organization,
        };
        self.users.iter().filter(|u| criteria.matches(u)).collect()
    }

    /// Replace the record sharing `record.id`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no record has that ID; the
    /// collection is left untouched.
    pub fn update(&mut self, record: UserRecord) -> Result<(), RepositoryError> {
        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id == record.id)
            .ok_or_else(|| RepositoryError::not_found(&record.id))?;

        let id = record.id.clone();
        *slot = record;
        tracing::debug!(user_id = %id, "user record replaced");
        self.publish(UserEvent::Updated { id });
        Ok(())
    }

    /// Remove the record with `id`, returning it.
    ///
    /// Clears the selection if it pointed at this record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no record has that ID; the
    /// collection is left untouched.
    pub fn delete(&mut self, id: &UserId) -> Result<UserRecord, RepositoryError> {
        let index = self
            .users
            .iter()
            .position(|u| &u.id == id)
            .ok_or_else(|| RepositoryError::not_found(id))?;

        let removed = self.users.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        tracing::debug!(user_id = %id, "user record removed");
        self.publish(UserEvent::Deleted { id: id.clone() });
        Ok(removed)
    }

    /// Point the selection at `record`, or clear it with `None`.
    ///
    /// Only the ID is kept, so later updates are visible through
    /// [`selected`](Self::selected).
    pub fn select(&mut self, record: Option<&UserRecord>) {
        self.selected = record.map(|r| r.id.clone());
        self.publish(UserEvent::SelectionChanged {
            id: self.selected.clone(),
        });
    }

    /// The selected record, resolved against the current collection.
    #[must_use]
    pub fn selected(&self) -> Option<&UserRecord> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// The raw selection pointer.
    #[must_use]
    pub const fn selected_id(&self) -> Option<&UserId> {
        self.selected.as_ref()
    }

    /// Distinct organizations in first-seen order.
    #[must_use]
    pub fn organizations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for user in &self.users {
            if !seen.contains(&user.organization.as_str()) {
                seen.push(&user.organization);
            }
        }
        seen
    }

    /// Headline counts. Loan and savings counts are fixed shares (30% / 70%)
    /// of the user count, rounded down.
    #[must_use]
    pub fn stats(&self) -> UserStats {
        let users = self.users.len();
        UserStats {
            users,
            active_users: self
                .users
                .iter()
                .filter(|u| u.status == UserStatus::Active)
                .count(),
            users_with_loans: users * 3 / 10,
            users_with_savings: users * 7 / 10,
        }
    }

    /// Subscribe to change notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<UserEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: UserEvent) {
        // No receivers is fine: nobody is watching.
        let _ = self.events.send(event);
    }
}
