use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Welcome to the AMEN admin console." }
                }
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::Users {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Manage Users" }
                    p { class: "dashboard-card-desc",
                        "Browse the member directory, add accounts, and edit profiles."
                    }
                }
                Link {
                    to: Route::Analytics {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Analytics" }
                    p { class: "dashboard-card-desc", "Traffic and engagement overview." }
                }
                Link {
                    to: Route::Reports {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Reports" }
                    p { class: "dashboard-card-desc", "Periodic summaries and exports." }
                }
            }
        }
    }
}

#[component]
pub fn Analytics() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Analytics" }
                    p { class: "page-subtitle", "Traffic and engagement overview." }
                }
            }
            div { class: "card",
                div { class: "card-body",
                    p { class: "text-muted", "Analytics will appear here once the reporting backend is wired up." }
                }
            }
        }
    }
}

#[component]
pub fn Reports() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Reports" }
                    p { class: "page-subtitle", "Periodic summaries and exports." }
                }
            }
            div { class: "card",
                div { class: "card-body",
                    p { class: "text-muted", "No reports have been generated yet." }
                }
            }
        }
    }
}
