use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Router};

use crate::pages;

#[derive(Clone, Debug, PartialEq, Eq, sycamore_router::Route)]
pub enum AppRoute {
    #[to("/")]
    Index,
    #[to("/u/<user>/<id>")]
    UserSnippet(String, String),
    #[not_found]
    NotFound,
}

#[component]
pub fn AppRouter<G: Html>(cx: Scope) -> View<G> {
    view! { cx,
        Router(
            integration=HistoryIntegration::new(),
            view=|cx, route: &ReadSignal<AppRoute>| switch(cx, route)
        )
    }
}

fn switch<'a, G: Html>(cx: Scope<'a>, route: &'a ReadSignal<AppRoute>) -> View<G> {
    view! { cx,
        main(class="max-w-screen-xl mx-auto px-5 py-4") {
            (match route.get().as_ref() {
                AppRoute::Index => view! { cx, pages::IndexPage() },
                AppRoute::UserSnippet(user, id) => view! { cx,
                    pages::UserSnippetPage(user=user.clone(), id=id.clone())
                },
                AppRoute::NotFound => view! { cx,
                    "404 Not Found"
                },
            })
        }
    }
}
