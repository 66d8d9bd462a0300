use shared::{User, UserSnippetId};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

use crate::api;

#[derive(Prop)]
pub struct UserSnippetPageProps {
    pub user: String,
    pub id: String,
}

/// Read-only view of a saved snippet, the navigation target after a save.
#[component]
pub fn UserSnippetPage<G: Html>(cx: Scope, props: UserSnippetPageProps) -> View<G> {
    let id = UserSnippetId {
        user: User::new_unchecked(props.user),
        id: props.id,
    };
    let title = id.to_string();

    let content = create_signal(cx, None::<String>);
    let error = create_signal(cx, None::<String>);

    if G::IS_BROWSER {
        spawn_local_scoped(cx, async move {
            match api::get_snippet(&id).await {
                Ok(code) => content.set(Some(code)),
                Err(err) => {
                    tracing::error!("failed to load snippet: {:?}", err);
                    error.set(Some(err.to_string()));
                }
            }
        });
    }

    view! { cx,
        div(class="flex flex-col gap-y-3") {
            h1(class="text-xl dark:text-slate-100 text-slate-900") { (title) }
            (match &*error.get() {
                Some(msg) => {
                    let msg = msg.clone();
                    view! { cx,
                        p(class="text-red-500") { (msg) }
                    }
                }
                None => view! { cx, },
            })
            (match (&*content.get(), &*error.get()) {
                (Some(code), _) => {
                    let code = code.clone();
                    view! { cx,
                        textarea(
                            readonly=true,
                            class="dark:bg-slate-600 bg-slate-200 block w-full py-2 px-3
                                rounded-sm shadow-sm text-sm font-mono resize-none",
                            style="height: 50vh; max-height: 650px",
                            aria-label="Snippet content") {
                            (code)
                        }
                    }
                }
                (None, Some(_)) => view! { cx, },
                (None, None) => view! { cx,
                    p(class="text-slate-500") { "Loading ..." }
                },
            })
        }
    }
}
