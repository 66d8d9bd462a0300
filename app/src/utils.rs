use sycamore::prelude::*;
use wasm_bindgen::JsCast;

macro_rules! memo_cond {
    ($cx:ident, $signal:ident, $if:expr, $else:expr) => {{
        create_memo($cx, move || {
            if *$signal.get() {
                $if
            } else {
                $else
            }
        })
    }};
}
pub(crate) use memo_cond;

/// Casts a node ref to the underlying DOM element.
///
/// Returns `None` until the node is rendered to the DOM.
pub fn try_from_ref<G: GenericNode, T: JsCast>(node_ref: &NodeRef<G>) -> Option<T> {
    node_ref
        .try_get::<DomNode>()
        .map(|node| node.unchecked_into())
}

/// Extracts the path and query from an absolute URL, the host and origin
/// are discarded. Relative URLs pass through unchanged.
pub fn path_and_query(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest.split_once('#').map_or(rest, |(rest, _)| rest);

    match rest.find(['/', '?']) {
        Some(index) => &rest[index..],
        None => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_with_path_and_query() {
        assert_eq!(
            path_and_query("https://snipb.in/u/alice/abc123?lang=python"),
            "/u/alice/abc123?lang=python"
        );
    }

    #[test]
    fn absolute_path_only() {
        assert_eq!(path_and_query("https://snipb.in/u/alice/abc123"), "/u/alice/abc123");
    }

    #[test]
    fn origin_only() {
        assert_eq!(path_and_query("https://snipb.in"), "/");
    }

    #[test]
    fn query_without_path() {
        assert_eq!(path_and_query("https://snipb.in?ref=editor"), "?ref=editor");
    }

    #[test]
    fn fragment_is_discarded() {
        assert_eq!(
            path_and_query("https://snipb.in/u/alice/abc123?x=1#top"),
            "/u/alice/abc123?x=1"
        );
    }

    #[test]
    fn relative_passes_through() {
        assert_eq!(path_and_query("/u/alice/abc123"), "/u/alice/abc123");
    }
}
