use dioxus::prelude::*;
use jiff::Timestamp;
use types::{FormMode, Role, UserDraft, UserRecord, ValidationErrors};

use crate::{InFlight, Route, cache::use_resource_cache, use_backend, use_notices};

#[component]
pub fn CreateUser() -> Element {
    let backend = use_backend();
    let mut notices = use_notices();
    let mut cache = use_resource_cache();
    let draft = use_signal(UserDraft::default);
    let mut errors = use_signal(ValidationErrors::default);
    let mut submitting = use_signal(InFlight::default);

    let submit = move |_| {
        match draft.read().validate(FormMode::Create) {
            Err(validation) => errors.set(validation),
            Ok(()) => {
                errors.set(ValidationErrors::default());
                if !submitting.write().try_begin() {
                    return;
                }
                let payload = draft.read().create_payload();
                let backend = backend.clone();
                spawn(async move {
                    match backend.register(&payload).await {
                        Ok(()) => {
                            notices.success("User created");
                            cache.invalidate_collection();
                            let nav = navigator();
                            nav.push(Route::Users {});
                        }
                        // entered values stay in place for another attempt
                        Err(e) => notices.error(e.to_string()),
                    }
                    submitting.write().finish();
                });
            }
        }
    };

    rsx! {
        div {
            button {
                class: "btn btn-secondary",
                onclick: move |_| {
                    let nav = navigator();
                    nav.push(Route::Users {});
                },
                "Back to Users"
            }
            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Create New User" }
                }
                div { class: "card-body",
                    DraftFields { draft, errors, mode: FormMode::Create }
                }
                div { class: "card-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let nav = navigator();
                            nav.push(Route::Users {});
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: submitting.read().active(),
                        onclick: submit,
                        if submitting.read().active() { "Creating..." } else { "Create User" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EditUser(id: ReadSignal<String>) -> Element {
    let backend = use_backend();
    let cache = use_resource_cache();
    let record = use_resource(move || {
        let backend = backend.clone();
        async move {
            let id = id();
            let _version = cache.record_version(&id);
            backend.get_user(&id).await
        }
    });

    match record.read().as_ref() {
        None => rsx! {
            div { class: "loading", "Loading user..." }
        },
        Some(Err(e)) if e.is_not_found() => rsx! {
            div { class: "error-state",
                h2 { "User not found" }
                p { "No user exists with id {id}." }
                Link { to: Route::Users {}, "Back to Users" }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "error-state",
                h2 { "Failed to load user" }
                p { "{e}" }
            }
        },
        Some(Ok(user)) => rsx! {
            EditForm { user: user.clone() }
        },
    }
}

#[component]
fn EditForm(user: UserRecord) -> Element {
    let backend = use_backend();
    let mut notices = use_notices();
    let mut cache = use_resource_cache();
    let initial = UserDraft::from_record(&user);
    let draft = use_signal(move || initial);
    let mut errors = use_signal(ValidationErrors::default);
    let mut saving = use_signal(InFlight::default);

    let user_id = user.id.clone();
    let submit = move |_| {
        match draft.read().validate(FormMode::Edit) {
            Err(validation) => errors.set(validation),
            Ok(()) => {
                errors.set(ValidationErrors::default());
                if !saving.write().try_begin() {
                    return;
                }
                let payload = draft.read().update_payload();
                let backend = backend.clone();
                let id = user_id.clone();
                spawn(async move {
                    match backend.update_user(&id, &payload).await {
                        Ok(()) => {
                            notices.success("User updated successfully");
                            cache.invalidate_record(&id);
                            cache.invalidate_collection();
                            let nav = navigator();
                            nav.push(Route::Users {});
                        }
                        Err(e) => notices.error(e.to_string()),
                    }
                    saving.write().finish();
                });
            }
        }
    };

    rsx! {
        div {
            div { class: "page-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        let nav = navigator();
                        nav.go_back();
                    },
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving.read().active(),
                    onclick: submit,
                    if saving.read().active() { "Saving..." } else { "Save Changes" }
                }
            }
            div { class: "grid grid-cols-3",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Profile" }
                    }
                    div { class: "card-body",
                        div { class: "profile-summary",
                            img {
                                class: "profile-avatar",
                                src: "{user.avatar_url()}",
                                alt: "avatar",
                            }
                            h3 { class: "profile-name", "{user.username}" }
                            span { class: "role-badge role-{user.role}", "{user.role.label()}" }
                        }
                        div { class: "form-group",
                            span { class: "form-label", "Created At" }
                            div { class: "form-value", "{format_timestamp(user.created_at)}" }
                        }
                        div { class: "form-group",
                            span { class: "form-label", "Last Updated" }
                            div { class: "form-value", "{format_timestamp(user.updated_at)}" }
                        }

                        div { class: "divider" }

                        h3 { class: "section-header", "Saved Courses ({user.saved_courses.len()})" }
                        if user.saved_courses.is_empty() {
                            p { class: "text-muted", "No saved courses" }
                        } else {
                            ul { class: "saved-list",
                                for course in &user.saved_courses {
                                    li { "{course}" }
                                }
                            }
                        }

                        h3 { class: "section-header", "Saved Posts ({user.saved_posts.len()})" }
                        if user.saved_posts.is_empty() {
                            p { class: "text-muted", "No saved posts" }
                        } else {
                            ul { class: "saved-list",
                                for post in &user.saved_posts {
                                    li { "{post}" }
                                }
                            }
                        }
                    }
                }
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Basic Information" }
                    }
                    div { class: "card-body",
                        DraftFields { draft, errors, mode: FormMode::Edit }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldError(errors: Signal<ValidationErrors>, field: &'static str) -> Element {
    let message = errors.read().get(field).map(String::from);
    if let Some(message) = message {
        rsx! {
            p { class: "field-error", "{message}" }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn DraftFields(
    draft: Signal<UserDraft>,
    errors: Signal<ValidationErrors>,
    mode: FormMode,
) -> Element {
    let (password_label, confirm_label, password_placeholder) = match mode {
        FormMode::Create => ("Password", "Confirm Password", "Enter password"),
        FormMode::Edit => ("Change Password", "Confirm Password", "Enter new password"),
    };

    rsx! {
        div { class: "form-grid",
            div { class: "form-group",
                label { class: "form-label", r#for: "username", "Username" }
                input {
                    id: "username",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Enter username",
                    value: "{draft.read().username}",
                    oninput: move |e| draft.write().username = e.value(),
                }
                FieldError { errors, field: "username" }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "email", "Email" }
                input {
                    id: "email",
                    class: "form-input",
                    r#type: "email",
                    placeholder: "Enter email",
                    value: "{draft.read().email}",
                    oninput: move |e| draft.write().email = e.value(),
                }
                FieldError { errors, field: "email" }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "mobile_no", "Mobile Number" }
                input {
                    id: "mobile_no",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Enter mobile number",
                    value: "{draft.read().mobile_no}",
                    oninput: move |e| draft.write().mobile_no = e.value(),
                }
                FieldError { errors, field: "mobile_no" }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "role", "Role" }
                select {
                    id: "role",
                    class: "form-input",
                    value: "{draft.read().role}",
                    onchange: move |e| {
                        if let Some(role) = Role::parse(&e.value()) {
                            draft.write().role = role;
                        }
                    },
                    for role in Role::ALL {
                        option { value: "{role}", "{role.label()}" }
                    }
                }
            }
        }
        div { class: "form-group",
            label { class: "form-label", r#for: "desc", "Description (Optional)" }
            textarea {
                id: "desc",
                class: "form-input form-textarea",
                placeholder: "Enter description",
                value: "{draft.read().desc}",
                oninput: move |e| draft.write().desc = e.value(),
            }
        }
        div { class: "form-grid",
            div { class: "form-group",
                label { class: "form-label", r#for: "password", "{password_label}" }
                input {
                    id: "password",
                    class: "form-input",
                    r#type: "password",
                    placeholder: password_placeholder,
                    value: "{draft.read().password}",
                    oninput: move |e| draft.write().password = e.value(),
                }
                FieldError { errors, field: "password" }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "confirm_password", "{confirm_label}" }
                input {
                    id: "confirm_password",
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: "{draft.read().confirm_password}",
                    oninput: move |e| draft.write().confirm_password = e.value(),
                }
                FieldError { errors, field: "confirm_password" }
            }
        }
    }
}

fn format_timestamp(ts: Timestamp) -> String {
    ts.strftime("%b %d, %Y %H:%M UTC").to_string()
}
