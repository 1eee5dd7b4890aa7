use dioxus::document;
use dioxus::prelude::*;
use types::{ApiError, Session};

use crate::{Route, config, shell::AppShell, use_backend};

/// Resolution of the session check gating a protected subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// Session check in flight.
    Pending,
    /// Session present and the role is privileged.
    Authorized(Session),
    /// No session, no resolvable identity, or the check failed.
    Unauthorized,
    /// Authenticated, but the role is not privileged.
    Forbidden,
}

pub fn gate(check: Option<&Result<Session, ApiError>>) -> Gate {
    match check {
        None => Gate::Pending,
        Some(Ok(session)) if session.is_admin() => Gate::Authorized(session.clone()),
        Some(Ok(_)) => Gate::Forbidden,
        Some(Err(_)) => Gate::Unauthorized,
    }
}

/// Layout wrapping every privileged route.
///
/// The check re-runs on each mount of the guarded subtree; an in-flight
/// check is dropped with the component, so a late response never touches
/// unmounted state.
#[component]
pub fn Protected() -> Element {
    let backend = use_backend();
    let check = use_resource(move || {
        let backend = backend.clone();
        async move { backend.session().await }
    });

    match gate(check.read().as_ref()) {
        Gate::Pending => rsx! {
            div { class: "loading", "Loading..." }
        },
        Gate::Unauthorized => {
            let nav = navigator();
            nav.push(Route::Login {});
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        Gate::Forbidden => {
            // Non-admin visitors leave the admin application entirely.
            tracing::info!("non-admin session, redirecting to the member site");
            let _ = document::eval(&format!(
                "window.location.assign({:?})",
                config::member_site_url()
            ));
            rsx! {
                div { class: "loading", "Redirecting..." }
            }
        }
        Gate::Authorized(session) => rsx! {
            AppShell { session }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Role;

    fn session(role: Role) -> Session {
        Session {
            id: "abc123".into(),
            username: "jsmith".into(),
            email: "j@example.com".into(),
            role,
            profile_picture: None,
        }
    }

    #[test]
    fn in_flight_check_is_pending() {
        assert_eq!(gate(None), Gate::Pending);
    }

    #[test]
    fn missing_session_redirects_to_login() {
        let check = Err(ApiError::Unauthenticated);
        assert_eq!(gate(Some(&check)), Gate::Unauthorized);
    }

    #[test]
    fn request_failures_also_read_as_unauthorized() {
        let check = Err(ApiError::Network("offline".into()));
        assert_eq!(gate(Some(&check)), Gate::Unauthorized);
    }

    #[test]
    fn non_admin_sessions_are_forbidden() {
        for role in [Role::Student, Role::Staff] {
            let check = Ok(session(role));
            assert_eq!(gate(Some(&check)), Gate::Forbidden);
        }
    }

    #[test]
    fn admin_sessions_render_the_wrapped_content() {
        let check = Ok(session(Role::Admin));
        assert!(matches!(gate(Some(&check)), Gate::Authorized(s) if s.id == "abc123"));
    }
}
