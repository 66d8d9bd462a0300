use shared::{validation, User};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

use crate::state::use_state;
use crate::utils::{memo_cond, path_and_query, try_from_ref};
use crate::{api, names, svg, ErrorKind};

/// The mount time profile fetch, tracked explicitly so submission can be
/// gated until the login is known.
enum Profile {
    Loading,
    Ready(User),
    Failed,
}

impl Profile {
    fn user(&self) -> Option<&User> {
        match self {
            Self::Ready(user) => Some(user),
            _ => None,
        }
    }

    fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Modal dialog collecting a name for the current editor content and
/// persisting it as a new snippet.
#[component]
pub fn NewSnippetDialog<G: Html>(cx: Scope) -> View<G> {
    let state = use_state(cx);

    let name = create_signal(cx, names::generate());
    let touched = create_signal(cx, false);
    let submitting = create_signal(cx, false);
    let submit_error = create_signal(cx, None::<String>);
    let profile = create_signal(cx, Profile::Loading);

    if G::IS_BROWSER {
        spawn_local_scoped(cx, async move {
            match api::get_profile().await {
                Ok(resp) => {
                    state.add_snippets(resp.snippets);
                    profile.set(Profile::Ready(resp.current_user));
                }
                Err(err) => {
                    tracing::error!("failed to load user profile: {:?}", err);
                    profile.set(Profile::Failed);
                }
            }
        });
    }

    let input_ref = create_node_ref(cx);
    on_mount(cx, move || {
        if let Some(input) = try_from_ref::<G, web_sys::HtmlInputElement>(input_ref) {
            let _ = input.focus();
        }
    });

    // validation feedback is held back until the field was blurred or a
    // submit was attempted
    let name_error = create_memo(cx, || {
        if !*touched.get() {
            return None;
        }
        validation::user::is_valid_snippet_name(&name.get()).ok().err()
    });

    let on_input = move |_| submit_error.set(None);
    let on_blur = move |_| touched.set(true);

    let close = move |_| state.close_modal();
    let keep_open = |ev: web_sys::Event| ev.stop_propagation();

    let on_submit = move |ev: web_sys::Event| {
        ev.prevent_default();
        touched.set(true);

        if *submitting.get() {
            tracing::info!("can't submit, already submitting");
            return;
        }
        // the save button is disabled until the profile load settles,
        // this also catches a submit via enter key
        let Some(login) = profile.get().user().cloned() else { return };
        if !validation::user::is_valid_snippet_name(&name.get()).is_valid() {
            return;
        }

        let filename = state.language.get().filename(&name.get());
        let code = (*state.code.get()).clone();

        submit_error.set(None);
        submitting.set(true);
        spawn_local_scoped(cx, async move {
            match api::save_snippet(api::SaveSnippet {
                filename: &filename,
                code: &code,
            })
            .await
            {
                Ok(id) => {
                    let link = api::gen_view_snippet_link(&login, &id);
                    sycamore_router::navigate(path_and_query(&link));
                    state.close_modal();
                    submitting.set(false);
                }
                Err(err) => {
                    submitting.set(false);
                    match err.kind() {
                        ErrorKind::Network => tracing::error!("network error: {err}"),
                        ErrorKind::Unknown => tracing::error!("unknown error: {err}"),
                    }
                    submit_error.set(Some(err.to_string()));
                }
            }
        });
    };

    let btn_save_disabled = create_memo(cx, || *submitting.get() || !profile.get().is_ready());
    let btn_save_content = memo_cond!(cx, submitting, svg::SPINNER, "Save");

    let profile_status = create_memo(cx, || match &*profile.get() {
        Profile::Loading => Some("Loading your profile ..."),
        Profile::Failed => Some("Could not load your profile, saving is unavailable"),
        Profile::Ready(_) => None,
    });

    view! { cx,
        div(class="fixed inset-0 z-20 bg-black/60 flex items-center justify-center",
            on:click=close) {
            div(class="dark:bg-slate-800 bg-slate-100 rounded-md shadow-lg w-full max-w-md p-5
                flex flex-col gap-y-4",
                on:click=keep_open) {
                h1(class="text-xl dark:text-slate-100 text-slate-900") { "Name your snippet" }

                form(on:submit=on_submit) {
                    label(class="block text-sm dark:text-slate-300 text-slate-700") {
                        "Snippet name"
                        input(
                            class="input w-full mt-1",
                            type="text",
                            ref=input_ref,
                            bind:value=name,
                            on:input=on_input,
                            on:blur=on_blur,
                            aria-label="Snippet name") {}
                    }

                    (match *name_error.get() {
                        Some(msg) => view! { cx,
                            p(class="text-red-500 text-sm mt-1") { (msg) }
                        },
                        None => view! { cx, },
                    })
                    (match &*submit_error.get() {
                        Some(msg) => {
                            let msg = msg.clone();
                            view! { cx,
                                p(class="text-red-500 text-sm mt-1") { (msg) }
                            }
                        }
                        None => view! { cx, },
                    })
                    (match *profile_status.get() {
                        Some(status) => view! { cx,
                            p(class="text-sm text-slate-500 mt-1") { (status) }
                        },
                        None => view! { cx, },
                    })

                    div(class="flex justify-end gap-x-3 mt-4") {
                        button(
                            type="button",
                            class="btn btn-secondary",
                            on:click=close) { "Cancel" }
                        button(
                            type="submit",
                            class="btn btn-primary min-w-[100px]",
                            disabled=*btn_save_disabled.get(),
                            dangerously_set_inner_html=*btn_save_content.get()) {}
                    }
                }
            }
        }
    }
}
