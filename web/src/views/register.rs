use dioxus::prelude::*;
use types::is_valid_email;

use crate::{InFlight, NoticeBanner, Route, use_backend, use_notices};

#[component]
pub fn Register() -> Element {
    let backend = use_backend();
    let mut notices = use_notices();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username_error = use_signal(|| None::<&'static str>);
    let mut email_error = use_signal(|| None::<&'static str>);
    let mut password_error = use_signal(|| None::<&'static str>);
    let mut submitting = use_signal(InFlight::default);

    let mut submit = move || {
        let username_value = username.read().trim().to_string();
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();

        username_error.set(
            (username_value.chars().count() < 2)
                .then_some("Name must be at least 2 characters"),
        );
        email_error.set((!is_valid_email(&email_value)).then_some("Invalid email address"));
        password_error.set(
            (password_value.chars().count() < 6)
                .then_some("Password must be at least 6 characters"),
        );
        if username_error.read().is_some()
            || email_error.read().is_some()
            || password_error.read().is_some()
        {
            return;
        }

        if !submitting.write().try_begin() {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            match backend.register_account(&username_value, &email_value, &password_value).await {
                Ok(()) => {
                    notices.success("Registration successful! Please log in.");
                    let nav = navigator();
                    nav.push(Route::Login {});
                }
                Err(e) => notices.error(e.to_string()),
            }
            submitting.write().finish();
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                NoticeBanner {}
                div { class: "auth-header",
                    h1 { class: "auth-title", "Create New Account" }
                    p { class: "auth-subtitle", "Enter your email below to create your account" }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "username", "Enter Name" }
                    input {
                        id: "username",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "John Doe",
                        value: "{username}",
                        oninput: move |e| username.set(e.value()),
                    }
                    if let Some(message) = username_error() {
                        p { class: "field-error", "{message}" }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "email", "Email" }
                    input {
                        id: "email",
                        class: "form-input",
                        r#type: "email",
                        placeholder: "m@example.com",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    if let Some(message) = email_error() {
                        p { class: "field-error", "{message}" }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Enter password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    if let Some(message) = password_error() {
                        p { class: "field-error", "{message}" }
                    }
                }
                button {
                    class: "btn btn-primary auth-submit",
                    disabled: submitting.read().active(),
                    onclick: move |_| submit(),
                    if submitting.read().active() { "Registering..." } else { "Register" }
                }
                p { class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
