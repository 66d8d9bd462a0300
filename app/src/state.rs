use shared::{Language, SnippetSummary};
use sycamore::prelude::*;
use sycamore::reactive::{provide_context, use_context};

/// The currently visible modal dialog, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    None,
    NewSnippet,
}

/// Application wide state, provided once at the root scope.
///
/// All mutation goes through the methods below, components only ever
/// read the signals.
pub struct AppState {
    pub code: RcSignal<String>,
    pub language: RcSignal<Language>,
    pub snippets: RcSignal<Vec<SnippetSummary>>,
    pub modal: RcSignal<Modal>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            code: create_rc_signal(String::new()),
            language: create_rc_signal(Language::default()),
            snippets: create_rc_signal(Vec::new()),
            modal: create_rc_signal(Modal::None),
        }
    }

    pub fn open_new_snippet(&self) {
        self.modal.set(Modal::NewSnippet);
    }

    pub fn close_modal(&self) {
        self.modal.set(Modal::None);
    }

    /// Merges snippets into the collection, ids already present are kept
    /// as they are.
    pub fn add_snippets(&self, new: Vec<SnippetSummary>) {
        if new.is_empty() {
            return;
        }

        let mut snippets = (*self.snippets.get()).clone();
        for snippet in new {
            if !snippets.iter().any(|s| s.id == snippet.id) {
                snippets.push(snippet);
            }
        }
        self.snippets.set(snippets);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_state(cx: Scope) {
    provide_context(cx, AppState::new());
}

pub fn use_state(cx: Scope) -> &AppState {
    use_context::<AppState>(cx)
}
