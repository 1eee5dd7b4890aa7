use dioxus::prelude::*;
use types::is_valid_email;

use crate::{InFlight, NoticeBanner, Route, use_backend, use_notices};

#[component]
pub fn Login() -> Element {
    let backend = use_backend();
    let mut notices = use_notices();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| None::<&'static str>);
    let mut password_error = use_signal(|| None::<&'static str>);
    let mut submitting = use_signal(InFlight::default);

    let mut submit = move || {
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();

        email_error.set((!is_valid_email(&email_value)).then_some("Invalid email format"));
        password_error.set(
            (password_value.chars().count() < 6)
                .then_some("Password must be at least 6 characters"),
        );
        if email_error.read().is_some() || password_error.read().is_some() {
            return;
        }

        // latched before the spawn so a second click cannot start another
        if !submitting.write().try_begin() {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            match backend.login(&email_value, &password_value).await {
                Ok(()) => {
                    notices.success("Login successful!");
                    let nav = navigator();
                    nav.push(Route::Dashboard {});
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
                    h1 { class: "auth-title", "Login to your account" }
                    p { class: "auth-subtitle", "Enter your email below to login to your account" }
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
                    if submitting.read().active() { "Logging in..." } else { "Login" }
                }
                p { class: "auth-footer",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
