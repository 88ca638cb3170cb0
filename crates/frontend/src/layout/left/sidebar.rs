//! Sidebar: overview link plus collapsible Operations and Master Data groups.

use contracts::domain::common::EntityKind;
use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, DASHBOARD_KEY};
use crate::shared::icons::icon;
use crate::shared::list_page::kind_icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<EntityKind>,
}

fn menu_groups() -> Vec<MenuGroup> {
    let (master, operations): (Vec<EntityKind>, Vec<EntityKind>) =
        EntityKind::ALL.into_iter().partition(|k| k.is_master_data());
    vec![
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "factory",
            items: operations,
        },
        MenuGroup {
            id: "master-data",
            label: "Master Data",
            icon: "layers",
            items: master,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded = RwSignal::new(vec!["operations"]);
    let is_active = move |key: &'static str| ctx.active.with(|a| a == key);

    view! {
        <div class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active(DASHBOARD_KEY)
                on:click=move |_| ctx.open_page(DASHBOARD_KEY)
            >
                <div class="app-sidebar__item-content">
                    {icon("dashboard")}
                    <span>"Overview"</span>
                </div>
            </div>
            {menu_groups()
                .into_iter()
                .map(|group| {
                    let id = group.id;
                    let is_expanded = move || expanded.with(|e| e.contains(&id));
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                on:click=move |_| {
                                    expanded.update(|e| {
                                        if let Some(pos) = e.iter().position(|x| *x == id) {
                                            e.remove(pos);
                                        } else {
                                            e.push(id);
                                        }
                                    })
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .clone()
                                        .into_iter()
                                        .map(|kind| {
                                            let key = kind.path();
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || is_active(key)
                                                    on:click=move |_| ctx.open_page(key)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(kind_icon(kind))}
                                                        <span>{kind.title()}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_cover_every_entity_once() {
        let groups = menu_groups();
        assert_eq!(groups[0].items.len(), 9);
        assert_eq!(groups[1].items.len(), 8);
        assert!(groups[1].items.iter().all(|k| k.is_master_data()));
    }
}
