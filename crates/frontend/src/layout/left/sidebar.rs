//! Sidebar with direct links and collapsible groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// A group without items is a direct link to `link`
    link: Option<Page>,
    items: Vec<(Page, &'static str)>, // (page, icon)
}

impl MenuGroup {
    fn link(page: Page, icon: &'static str) -> Self {
        Self {
            id: page.key(),
            label: page.title(),
            icon,
            link: Some(page),
            items: vec![],
        }
    }

    fn group(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        items: Vec<(Page, &'static str)>,
    ) -> Self {
        Self {
            id,
            label,
            icon,
            link: None,
            items,
        }
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup::link(Page::Dashboard, "dashboard"),
        MenuGroup::link(Page::Bookings, "calendar"),
        MenuGroup::group(
            "packages",
            "Packages",
            "package",
            vec![(Page::PackageList, "list"), (Page::PackageForm, "plus")],
        ),
        MenuGroup::group("rooms", "Rooms", "bed", vec![(Page::RoomList, "list")]),
        MenuGroup::group("agents", "Agent", "users", vec![(Page::AgentList, "list")]),
        MenuGroup::group(
            "room_status",
            "Room Status",
            "calendar-check",
            vec![(Page::RoomStatusList, "list"), (Page::RoomStatusForm, "plus")],
        ),
        MenuGroup::group(
            "non_availability",
            "Non-Availability",
            "calendar-off",
            vec![
                (Page::NonAvailabilityList, "list"),
                (Page::NonAvailabilityForm, "plus"),
            ],
        ),
        MenuGroup::link(Page::Payments, "payments"),
        MenuGroup::link(Page::Inquiries, "inquiry"),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Open the group holding the page restored from the URL
    let initial = ctx.active.get_untracked();
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .into_iter()
            .filter(|g| g.items.iter().any(|(page, _)| *page == initial))
            .map(|g| g.id)
            .collect::<Vec<_>>(),
    );

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let has_children = !group.items.is_empty();
                let link = group.link;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                link.is_some_and(|page| ctx.active.get() == page)
                            }
                            on:click=move |_| {
                                if let Some(page) = link {
                                    ctx.navigate(page);
                                } else {
                                    expanded_groups.update(|ids| toggle_expanded(ids, group_id));
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.get().contains(&group_id)
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&group_id)>
                                    <div class="app-sidebar__children">
                                        {items
                                            .get_value()
                                            .into_iter()
                                            .map(|(page, icon)| child_item(ctx, page, icon))
                                            .collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

fn child_item(ctx: AppGlobalContext, page: Page, icon_name: &'static str) -> impl IntoView {
    view! {
        <div
            class="app-sidebar__item app-sidebar__item--child"
            class:app-sidebar__item--active=move || ctx.active.get() == page
            on:click=move |_| ctx.navigate(page)
        >
            <div class="app-sidebar__item-content">
                {icon(icon_name)}
                <span>{page.title()}</span>
            </div>
        </div>
    }
}

/// Collapse `id` when it is expanded, expand it otherwise
fn toggle_expanded(ids: &mut Vec<&'static str>, id: &'static str) {
    if let Some(pos) = ids.iter().position(|x| *x == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_is_reachable_from_the_menu() {
        let groups = get_menu_groups();
        for page in Page::ALL {
            let reachable = groups
                .iter()
                .any(|g| g.link == Some(page) || g.items.iter().any(|(p, _)| *p == page));
            assert!(reachable, "{:?} missing from sidebar", page);
        }
    }

    #[test]
    fn test_toggle_expanded() {
        let mut ids = vec!["packages"];
        toggle_expanded(&mut ids, "rooms");
        assert_eq!(ids, vec!["packages", "rooms"]);
        toggle_expanded(&mut ids, "packages");
        assert_eq!(ids, vec!["rooms"]);
    }
}
