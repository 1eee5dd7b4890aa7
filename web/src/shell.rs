use dioxus::document;
use dioxus::prelude::*;
use types::Session;

use crate::{NoticeBanner, Route, cache::use_resource_cache, config};

/// Sidebar groups. The open selection is a single optional value, so the
/// "exactly one expanded group" invariant is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavGroup {
    Home,
    Users,
    Courses,
    Support,
    Products,
}

const GROUPS: [NavGroup; 5] = [
    NavGroup::Home,
    NavGroup::Users,
    NavGroup::Courses,
    NavGroup::Support,
    NavGroup::Products,
];

/// Where a sidebar item leads: a typed in-app route, or a page on the
/// member site reached with a plain anchor.
#[derive(Debug, Clone, Copy)]
pub enum NavTarget {
    Internal(fn() -> Route),
    External(&'static str),
}

fn member_href(path: &str) -> String {
    format!("{}{path}", config::member_site_url())
}

impl NavGroup {
    fn title(self) -> &'static str {
        match self {
            NavGroup::Home => "Home",
            NavGroup::Users => "Users",
            NavGroup::Courses => "Courses",
            NavGroup::Support => "Support",
            NavGroup::Products => "Products",
        }
    }

    fn items(self) -> &'static [(&'static str, NavTarget)] {
        use NavTarget::{External, Internal};
        match self {
            NavGroup::Home => &[
                ("Dashboard", Internal(|| Route::Dashboard {})),
                ("Analytics", Internal(|| Route::Analytics {})),
                ("Reports", Internal(|| Route::Reports {})),
            ],
            NavGroup::Users => &[
                ("All Users", Internal(|| Route::Users {})),
                ("Add User", Internal(|| Route::CreateUser {})),
            ],
            NavGroup::Courses => &[
                ("All Courses", External("/courses/all")),
                ("New Courses", External("/courses/new")),
                ("Popular Courses", External("/courses/popular")),
                ("Course Categories", External("/courses/categories")),
                ("Course Reviews", External("/courses/reviews")),
            ],
            NavGroup::Support => &[
                ("Help Center", External("/support/help")),
                ("Contact Us", External("/support/contact")),
                ("Feedback", External("/support/feedback")),
            ],
            NavGroup::Products => &[
                ("All Products", External("/products/all")),
                ("New Arrivals", External("/products/new")),
                ("Best Sellers", External("/products/best")),
                ("Sale", External("/products/sale")),
                ("Revenues", External("/products/revenues")),
            ],
        }
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current: Route = use_route();
    // The edit view highlights the directory entry it was reached from.
    let is_active = current == to
        || matches!((&current, &to), (Route::EditUser { .. }, Route::Users {}));

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
pub fn AppShell(session: Session) -> Element {
    let mut open_group = use_signal(|| None::<NavGroup>);
    let mut cache = use_resource_cache();

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "AMEN" }
                }
                nav { class: "sidebar-nav",
                    for group in GROUPS {
                        {
                            let is_open = open_group() == Some(group);
                            rsx! {
                                button {
                                    class: "nav-group-toggle",
                                    onclick: move |_| {
                                        // expanding one group collapses any other
                                        let next = if open_group() == Some(group) { None } else { Some(group) };
                                        open_group.set(next);
                                    },
                                    span { "{group.title()}" }
                                    span {
                                        class: if is_open { "chevron open" } else { "chevron" },
                                        "▾"
                                    }
                                }
                                if is_open {
                                    div { class: "nav-group-items",
                                        for &(title, target) in group.items() {
                                            match target {
                                                NavTarget::Internal(to) => rsx! {
                                                    NavLink { to: to(), "{title}" }
                                                },
                                                NavTarget::External(path) => rsx! {
                                                    a {
                                                        href: member_href(path),
                                                        rel: "external",
                                                        "{title}"
                                                    }
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    a {
                        class: "nav-flat-item",
                        href: member_href("/settings"),
                        rel: "external",
                        "Settings"
                    }
                }
                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        if let Some(picture) = session.profile_picture.clone() {
                            img { class: "sidebar-avatar", src: "{picture}", alt: "avatar" }
                        } else {
                            div { class: "sidebar-avatar", "{session.initial()}" }
                        }
                        div { class: "sidebar-user-info",
                            div { class: "sidebar-user-name", "{session.username}" }
                            div { class: "sidebar-user-email", "{session.email}" }
                        }
                    }
                    button {
                        class: "sidebar-logout",
                        onclick: move |_| {
                            cache.clear();
                            // full navigation so the next page load starts clean
                            let _ = document::eval("window.location.assign(\"/login\")");
                        },
                        "Log out"
                    }
                }
            }
            main { class: "main-content",
                NoticeBanner {}
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_carries_the_full_group_set() {
        let titles: Vec<&str> = GROUPS.iter().map(|g| g.title()).collect();
        assert_eq!(titles, ["Home", "Users", "Courses", "Support", "Products"]);
    }

    #[test]
    fn home_and_users_items_stay_in_app() {
        for group in [NavGroup::Home, NavGroup::Users] {
            assert!(
                group
                    .items()
                    .iter()
                    .all(|(_, target)| matches!(target, NavTarget::Internal(_)))
            );
        }
    }

    #[test]
    fn external_items_resolve_under_the_member_site() {
        for group in [NavGroup::Courses, NavGroup::Support, NavGroup::Products] {
            assert!(!group.items().is_empty());
            for &(_, target) in group.items() {
                match target {
                    NavTarget::External(path) => {
                        assert!(path.starts_with('/'));
                        assert!(member_href(path).starts_with(config::member_site_url()));
                    }
                    NavTarget::Internal(_) => panic!("{} items lead off-app", group.title()),
                }
            }
        }
    }
}
