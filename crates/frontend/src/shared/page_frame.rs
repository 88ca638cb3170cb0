//! PageFrame: root wrapper for every page in the center area.
//!
//! Sets `id="{key}--{category}"` and `data-page-category` on the root element,
//! e.g. `raw-material--list`, so a page can be found from the DOM inspector.

use leptos::prelude::*;

/// Table of records with search, filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only overview with aggregate counts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    /// Page key, e.g. `"client"` or `"dashboard"`.
    #[prop(into)]
    page_key: String,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=format!("{page_key}--{category}") class=class data-page-category=category>
            {children()}
        </div>
    }
}
