use sycamore::prelude::*;

pub mod api;
mod components;
mod consts;
mod error;
mod names;
mod pages;
mod router;
mod state;
mod svg;
mod utils;

pub use self::error::{Error, ErrorKind, Result};
pub use self::state::{AppState, Modal};

#[component]
pub fn App<G: Html>(cx: Scope) -> View<G> {
    state::provide_state(cx);

    view! { cx,
        router::AppRouter()
    }
}
