//! User directory.
//!
//! # Responsibility
//! - Provide the fixed, ordered list of known user ids.
//!
//! # Invariants
//! - Ids are unique and keep their configured order.
//! - The directory is never empty.

use crate::model::user::{UserId, UserIdError};

/// Ids provisioned when no explicit list is configured.
pub const DEFAULT_USER_IDS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Ordered set of user ids allowed to own a review set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    ids: Vec<UserId>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self {
            ids: DEFAULT_USER_IDS
                .iter()
                .map(|id| UserId(id.to_string()))
                .collect(),
        }
    }
}

impl UserDirectory {
    /// Builds a directory from raw ids, dropping later duplicates.
    ///
    /// Falls back to [`DEFAULT_USER_IDS`] when `ids` is empty.
    ///
    /// # Errors
    /// - `UserIdError::Empty` when any id is blank.
    pub fn from_ids<I, S>(ids: I) -> Result<Self, UserIdError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<UserId> = Vec::new();
        for raw in ids {
            let id = UserId::parse(raw.as_ref())?;
            if !parsed.contains(&id) {
                parsed.push(id);
            }
        }

        if parsed.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self { ids: parsed })
    }

    pub fn ids(&self) -> &[UserId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.ids.contains(id)
    }

    /// Resolves raw input to a known id.
    pub fn find(&self, raw: &str) -> Option<&UserId> {
        let trimmed = raw.trim();
        self.ids.iter().find(|id| id.as_str() == trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::UserDirectory;
    use crate::model::user::UserIdError;

    #[test]
    fn default_directory_has_five_users() {
        let directory = UserDirectory::default();
        assert_eq!(directory.len(), 5);
        assert_eq!(directory.ids()[0].as_str(), "1");
        assert_eq!(directory.ids()[4].as_str(), "5");
    }

    #[test]
    fn from_ids_keeps_order_and_dedups() {
        let directory = UserDirectory::from_ids(["b", "a", "b"]).unwrap();
        let ids: Vec<&str> = directory.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn from_ids_rejects_blank_and_defaults_when_empty() {
        assert_eq!(
            UserDirectory::from_ids(["ok", " "]).unwrap_err(),
            UserIdError::Empty
        );
        let empty: [&str; 0] = [];
        assert_eq!(UserDirectory::from_ids(empty).unwrap(), UserDirectory::default());
    }

    #[test]
    fn find_trims_input() {
        let directory = UserDirectory::default();
        assert_eq!(directory.find(" 2 ").map(|id| id.as_str()), Some("2"));
        assert!(directory.find("9").is_none());
    }
}
