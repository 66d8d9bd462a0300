pub mod lang;
pub mod model;
mod user;
pub mod validation;

pub use self::lang::{InvalidLanguage, Language};
pub use self::model::{SnippetSummary, UserSnippetId};
pub use self::user::{InvalidUser, User};
