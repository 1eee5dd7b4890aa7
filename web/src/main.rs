use dioxus::prelude::*;

mod cache;
mod config;
mod guard;
mod shell;
mod table;
mod views;

use api::Backend;
use guard::Protected;
use views::{Analytics, CreateUser, Dashboard, EditUser, Login, Register, Reports, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Protected)]
        #[route("/home/dashboard")]
        Dashboard {},
        #[route("/home/analytics")]
        Analytics {},
        #[route("/home/reports")]
        Reports {},
        #[route("/users")]
        Users {},
        #[route("/users/create-new")]
        CreateUser {},
        #[route("/users/edit/:id")]
        EditUser { id: String },
}

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Backend::new(config::backend_url()));
    use_context_provider(|| NoticeState(Signal::new(None)));
    cache::provide();

    rsx! {
        document::Title { "AMEN Admin" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// The shared backend handle provided at the app root.
pub fn use_backend() -> Backend {
    use_context::<Backend>()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, dismissible message. Write failures and confirmations land
/// here; read failures replace the view instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Global notice state - use `use_notices()` to access
#[derive(Clone, Copy)]
pub struct NoticeState(Signal<Option<Notice>>);

impl NoticeState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.0.set(Some(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.0.set(Some(Notice {
            level: NoticeLevel::Error,
            message,
        }));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

pub fn use_notices() -> NoticeState {
    use_context::<NoticeState>()
}

/// One-at-a-time latch for form submissions. `try_begin` flips it
/// synchronously in the event handler, before any future is spawned; only
/// the spawned future clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight(bool);

impl InFlight {
    #[must_use]
    pub fn try_begin(&mut self) -> bool {
        if self.0 {
            return false;
        }
        self.0 = true;
        true
    }

    pub fn finish(&mut self) {
        self.0 = false;
    }

    pub fn active(self) -> bool {
        self.0
    }
}

#[component]
pub fn NoticeBanner() -> Element {
    let mut notices = use_context::<NoticeState>();
    let notice = notices.0.read().clone();

    if let Some(notice) = notice {
        let class = match notice.level {
            NoticeLevel::Success => "notice notice-success",
            NoticeLevel::Error => "notice notice-error",
        };
        rsx! {
            div { class: "{class}",
                span { class: "notice-message", "{notice.message}" }
                button {
                    class: "notice-close",
                    onclick: move |_| notices.clear(),
                    "×"
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submission_is_refused_while_one_is_in_flight() {
        let mut latch = InFlight::default();
        assert!(latch.try_begin());
        assert!(latch.active());
        assert!(!latch.try_begin());

        latch.finish();
        assert!(!latch.active());
        assert!(latch.try_begin());
    }
}
