mod index;
mod user_snippet;

pub use self::index::IndexPage;
pub use self::user_snippet::{UserSnippetPage, UserSnippetPageProps};
