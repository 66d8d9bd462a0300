use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The programming languages the editor can run.
///
/// The selected language determines the file extension used when a snippet
/// is saved; the extension is never stored independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Python,
    Php,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Javascript, Language::Python, Language::Php];

    /// The wire and route form, e.g. `javascript`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Python => "python",
            Self::Php => "php",
        }
    }

    /// The human readable form, e.g. `JavaScript`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Javascript => "JavaScript",
            Self::Python => "Python",
            Self::Php => "PHP",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Javascript => ".js",
            Self::Python => ".py",
            Self::Php => ".php",
        }
    }

    /// Composes the stored filename for a validated snippet name.
    pub fn filename(&self, name: &str) -> String {
        format!("{name}{}", self.extension())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct InvalidLanguage(String);

impl FromStr for Language {
    type Err = InvalidLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "javascript" => Self::Javascript,
            "python" => Self::Python,
            "php" => Self::Php,
            _ => return Err(InvalidLanguage(s.to_owned())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions() {
        assert_eq!(Language::Javascript.extension(), ".js");
        assert_eq!(Language::Python.extension(), ".py");
        assert_eq!(Language::Php.extension(), ".php");
    }

    #[test]
    fn filename_appends_extension() {
        assert_eq!(Language::Python.filename("foo"), "foo.py");
        assert_eq!(Language::Javascript.filename("brave-otter"), "brave-otter.js");
        assert_eq!(Language::Php.filename("x"), "x.php");
    }

    #[test]
    fn parse_roundtrip() {
        for language in Language::ALL {
            assert_eq!(language.as_str().parse::<Language>().unwrap(), language);
        }
        assert!("rust".parse::<Language>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Python).unwrap(), "\"python\"");
        let language: Language = serde_json::from_str("\"javascript\"").unwrap();
        assert_eq!(language, Language::Javascript);
    }
}
