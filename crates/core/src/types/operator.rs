//! The signed-in back-office operator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AdminRole, Email};

/// Identity handed out by the authentication boundary.
///
/// The user repository never looks at this; the navigation shell reads
/// `name` for the greeting and the session keeps it until logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: Email,
    pub name: String,
    pub role: AdminRole,
}

impl AuthenticatedUser {
    /// Build an operator identity, deriving the display name from the email.
    #[must_use]
    pub fn from_email(email: Email, role: AdminRole) -> Self {
        let name = display_name_from_email(&email);
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            role,
        }
    }

    /// First character of the name, upper-cased, for avatar placeholders.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map_or('U', |c| c.to_ascii_uppercase())
    }
}

/// Turn `grace.effiom_2` into `Grace Effiom 2`.
fn display_name_from_email(email: &Email) -> String {
    let words: Vec<String> = email
        .local_part()
        .split(['.', '_', '-', '+'])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        "User".to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_email() {
        let user = AuthenticatedUser::from_email(
            Email::parse("grace.effiom@lendsqr.com").unwrap(),
            AdminRole::Admin,
        );
        assert_eq!(user.name, "Grace Effiom");
        assert_eq!(user.initial(), 'G');
    }

    #[test]
    fn test_display_name_separators() {
        let email = Email::parse("ada_obi-2@kuda.com").unwrap();
        assert_eq!(display_name_from_email(&email), "Ada Obi 2");
    }

    #[test]
    fn test_ids_are_unique() {
        let email = Email::parse("ops@lendsqr.com").unwrap();
        let a = AuthenticatedUser::from_email(email.clone(), AdminRole::Viewer);
        let b = AuthenticatedUser::from_email(email, AdminRole::Viewer);
        assert_ne!(a.id, b.id);
    }
}
