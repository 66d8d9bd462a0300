use shared::Language;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::NewSnippetDialog;
use crate::state::{use_state, Modal};

/// The editor page, hosts the save dialog.
#[component]
pub fn IndexPage<G: Html>(cx: Scope) -> View<G> {
    let state = use_state(cx);

    let code = create_ref(cx, state.code.clone());
    let modal = create_ref(cx, state.modal.clone());

    let on_code = move |ev: web_sys::Event| {
        let target: web_sys::HtmlTextAreaElement = ev.target().unwrap().unchecked_into();
        code.set(target.value());
    };

    let on_language = move |ev: web_sys::Event| {
        let select: web_sys::HtmlSelectElement = ev.target().unwrap().unchecked_into();
        if let Ok(language) = select.value().parse() {
            state.language.set(language);
        }
    };

    let open_dialog = move |_| state.open_new_snippet();

    let dialog_open = create_memo(cx, move || *modal.get() == Modal::NewSnippet);
    let snippets = create_memo(cx, move || (*state.snippets.get()).clone());
    let current_language = create_memo(cx, move || *state.language.get());

    let options = Language::ALL
        .into_iter()
        .map(|language| {
            let selected = create_memo(cx, move || *current_language.get() == language);
            view! { cx,
                option(value=language.as_str(), selected=*selected.get()) {
                    (language.label())
                }
            }
        })
        .collect::<Vec<_>>();
    let options = View::new_fragment(options);

    view! { cx,
        div(class="flex flex-col gap-y-3") {
            h1(class="text-xl dark:text-slate-100 text-slate-900") { "Editor" }
            textarea(
                on:input=on_code,
                spellcheck=false,
                class="dark:bg-slate-500 bg-slate-200 block w-full mt-1 py-2 px-3
                    rounded-sm shadow-sm focus:outline-none dark:text-slate-300 text-slate-700
                    resize-none text-sm font-mono",
                style="height: 50vh; max-height: 650px",
                aria-label="Editor content") {
                (code.get())
            }
            div(class="flex items-center gap-x-3") {
                select(class="input", on:change=on_language, aria-label="Language") {
                    (options)
                }
                div(class="flex-auto") {}
                button(class="btn btn-primary", on:click=open_dialog) { "Save snippet" }
            }

            h2(class="text-lg dark:text-slate-100 text-slate-900 mt-8 border-b border-solid") {
                "Your snippets"
            }
            ul(class="flex flex-col gap-1") {
                Indexed(
                    iterable=snippets,
                    view=|cx, snippet| {
                        let url = snippet.to_url();
                        view! { cx,
                            li {
                                a(class="text-sky-500 dark:text-sky-400", href=url) {
                                    (snippet.filename)
                                }
                            }
                        }
                    }
                )
            }

            (if *dialog_open.get() {
                view! { cx, NewSnippetDialog() }
            } else {
                view! { cx, }
            })
        }
    }
}
