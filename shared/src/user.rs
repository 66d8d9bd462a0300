use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A user login as reported by the backend session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct User(String);

impl User {
    pub fn new_unchecked(user: String) -> Self {
        Self(user)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::ops::Deref for User {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl AsRef<str> for User {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<User> for String {
    fn from(user: User) -> Self {
        user.0
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid login: {0}")]
pub struct InvalidUser(&'static str);

impl FromStr for User {
    type Err = InvalidUser;

    /// Logins appear percent-encoded in route segments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let login = percent_encoding::percent_decode_str(s)
            .decode_utf8()
            .map_err(|_| InvalidUser("invalid utf-8"))?;

        if login.is_empty() {
            return Err(InvalidUser("login is empty"));
        }
        if login.chars().count() > 39 {
            return Err(InvalidUser("login too long"));
        }

        let valid_chars = login
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'-'));
        if !valid_chars {
            return Err(InvalidUser("login contains invalid characters"));
        }
        if login.starts_with('-') || login.ends_with('-') || login.contains("--") {
            return Err(InvalidUser("login has misplaced hyphens"));
        }

        Ok(Self::new_unchecked(login.into()))
    }
}

impl TryFrom<String> for User {
    type Error = InvalidUser;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_logins() {
        assert!("alice".parse::<User>().is_ok());
        assert!("Alice-42".parse::<User>().is_ok());
        assert!("a".parse::<User>().is_ok());
    }

    #[test]
    fn invalid_logins() {
        assert!("".parse::<User>().is_err());
        assert!("-alice".parse::<User>().is_err());
        assert!("alice-".parse::<User>().is_err());
        assert!("al--ice".parse::<User>().is_err());
        assert!("al ice".parse::<User>().is_err());
        assert!("alicé".parse::<User>().is_err());
        assert!("a".repeat(40).parse::<User>().is_err());
    }

    #[test]
    fn percent_decoded() {
        // route segments arrive encoded, but only valid characters survive
        assert!("al%20ice".parse::<User>().is_err());
        assert_eq!("alice".parse::<User>().unwrap().as_str(), "alice");
    }
}
