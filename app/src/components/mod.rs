mod new_snippet_dialog;

pub use self::new_snippet_dialog::NewSnippetDialog;
