pub enum Validation {
    Valid,
    Invalid(&'static str),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn ok(&self) -> Result<(), &'static str> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(msg) => Err(msg),
        }
    }
}

/// User facing validation
pub mod user {
    use super::Validation::{self, *};

    /// Validates a snippet name as entered in the save dialog.
    ///
    /// The rules are checked in order, the first failing rule determines
    /// the reported message.
    #[must_use]
    pub fn is_valid_snippet_name(name: &str) -> Validation {
        if name.is_empty() {
            return Invalid("Name is required");
        }
        if name.chars().count() > 20 {
            return Invalid("Name must be at most 20 characters");
        }

        let valid = name
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'-'));

        match valid {
            true => Valid,
            false => Invalid("Name must be a single word, allowed characters: [a-zA-Z0-9_-]"),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn empty_name_is_required() {
            assert_eq!(is_valid_snippet_name("").ok(), Err("Name is required"));
        }

        #[test]
        fn name_length() {
            for i in 1..=40 {
                let s = "a".repeat(i);
                let v = is_valid_snippet_name(&s);
                assert_eq!(v.is_valid(), i <= 20, "length {i}");
            }
            // multi byte characters count as one character for the limit,
            // but fail the charset rule
            let s = "ä".repeat(21);
            assert_eq!(
                is_valid_snippet_name(&s).ok(),
                Err("Name must be at most 20 characters")
            );
        }

        #[test]
        fn name_chars() {
            assert!(is_valid_snippet_name("brave-otter").is_valid());
            assert!(is_valid_snippet_name("AZ09az-_").is_valid());
            assert!(is_valid_snippet_name("_foo").is_valid());

            for name in ["two words", "foo,bar", "foo.bar", "foo/bar", "föö", "a b"] {
                assert_eq!(
                    is_valid_snippet_name(name).ok(),
                    Err("Name must be a single word, allowed characters: [a-zA-Z0-9_-]"),
                    "{name:?}"
                );
            }
        }

        #[test]
        fn length_beats_charset() {
            // over the limit and full of invalid characters, the length
            // message wins because rules run in order
            let s = "! ".repeat(15);
            assert_eq!(
                is_valid_snippet_name(&s).ok(),
                Err("Name must be at most 20 characters")
            );
        }
    }
}
