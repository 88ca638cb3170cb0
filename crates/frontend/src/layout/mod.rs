pub mod global_context;
pub mod left;
pub mod registry;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application frame:
///
/// ```text
/// +----------------------------------+
/// |            TopHeader             |
/// +----------------------------------+
/// |  Sidebar  |        Page          |
/// +----------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>
                <div class="app-main" data-zone="center">
                    {center()}
                </div>
            </div>
        </div>
    }
}
