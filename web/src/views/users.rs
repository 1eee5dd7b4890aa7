use dioxus::prelude::*;

use crate::{
    Route,
    cache::use_resource_cache,
    table::{Column, PageSize, SortDir, TableState},
    use_backend,
};

#[component]
pub fn Users() -> Element {
    let backend = use_backend();
    let cache = use_resource_cache();
    let users = use_resource(move || {
        let backend = backend.clone();
        async move {
            // subscribing to the collection version re-runs this fetch
            // after an invalidation
            let _version = cache.collection_version();
            backend.list_users().await
        }
    });

    let mut table = use_signal(|| TableState::new(Vec::new()));

    use_effect(move || {
        if let Some(Ok(rows)) = users.read().as_ref() {
            table.write().set_rows(rows.clone());
        }
    });

    match users.read().as_ref() {
        None => rsx! {
            div { class: "loading", "Loading users..." }
        },
        Some(Err(e)) => rsx! {
            div { class: "error-state",
                h2 { "Failed to load users" }
                p { "{e}" }
            }
        },
        Some(Ok(_)) => rsx! {
            div {
                div { class: "page-header",
                    div { class: "page-header-content",
                        h1 { class: "page-title", "Users" }
                        p { class: "page-subtitle", "All registered accounts." }
                    }
                    div { class: "page-header-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let nav = navigator();
                                nav.push(Route::CreateUser {});
                            },
                            "Add New User"
                        }
                    }
                }
                DirectoryTable { table }
            }
        },
    }
}

#[component]
fn DirectoryTable(table: Signal<TableState>) -> Element {
    let (rows, filter, sort, page, page_count, can_prev, can_next, summary, size_value) = {
        let state = table.read();
        (
            state.current_rows(),
            state.filter().to_string(),
            state.sort(),
            state.page(),
            state.page_count(),
            state.can_prev(),
            state.can_next(),
            state.range_summary(),
            state.page_size_value(),
        )
    };

    rsx! {
        div { class: "table-toolbar",
            input {
                class: "form-input table-search",
                r#type: "search",
                placeholder: "Search users...",
                value: "{filter}",
                oninput: move |e| table.write().set_filter(e.value()),
            }
            div { class: "table-pagination",
                span { class: "text-muted", "Rows:" }
                select {
                    class: "form-input page-size-select",
                    value: "{size_value}",
                    onchange: move |e| {
                        let choice = e.value();
                        let size = if choice == "all" {
                            PageSize::All
                        } else {
                            choice.parse().map(PageSize::Limited).unwrap_or(PageSize::Limited(10))
                        };
                        table.write().set_page_size(size);
                    },
                    for size in PageSize::CHOICES {
                        option { value: "{size}", "{size}" }
                    }
                    option { value: "all", "All" }
                }
                span { class: "text-muted", "{summary}" }
            }
        }

        div { class: "table-container",
            table {
                thead {
                    tr {
                        for column in Column::ALL {
                            th {
                                class: "sortable",
                                onclick: move |_| table.write().toggle_sort(column),
                                span { "{column.label()}" }
                                if sort == Some((column, SortDir::Asc)) {
                                    span { class: "sort-indicator", "▲" }
                                }
                                if sort == Some((column, SortDir::Desc)) {
                                    span { class: "sort-indicator", "▼" }
                                }
                            }
                        }
                        th { "Profile Picture" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for user in rows {
                        {
                            let id = user.id.clone();
                            rsx! {
                                tr {
                                    td { "{user.username}" }
                                    td { "{user.email}" }
                                    td {
                                        span { class: "role-badge role-{user.role}", "{user.role.label()}" }
                                    }
                                    td { "{user.mobile_no}" }
                                    td {
                                        img {
                                            class: "row-avatar",
                                            src: "{user.avatar_url()}",
                                            alt: "Profile",
                                        }
                                    }
                                    td {
                                        button {
                                            class: "btn btn-edit",
                                            onclick: move |_| {
                                                let nav = navigator();
                                                nav.push(Route::EditUser { id: id.clone() });
                                            },
                                            "Edit"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        div { class: "table-footer",
            button {
                class: "btn btn-secondary",
                disabled: !can_prev,
                onclick: move |_| table.write().prev_page(),
                "Prev"
            }
            span { "Page {page + 1} of {page_count}" }
            button {
                class: "btn btn-secondary",
                disabled: !can_next,
                onclick: move |_| table.write().next_page(),
                "Next"
            }
        }
    }
}
