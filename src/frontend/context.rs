use leptos::prelude::*;

use crate::i18n::{Locale, translate};
use crate::session::Session;

/// Current interface language, shared through context.
#[derive(Clone, Copy)]
pub struct I18n {
    locale: RwSignal<Locale>,
}

impl I18n {
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }

    /// Reactive lookup; call it inside a closure to follow locale changes.
    pub fn t(&self, key: &'static str) -> &'static str {
        translate(self.locale.get(), key)
    }
}

pub fn provide_i18n() -> I18n {
    let i18n = I18n {
        locale: RwSignal::new(Locale::default()),
    };
    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

/// Starts the mock session from the first rendered path so the server and
/// the hydrating client agree on the navbar.
pub fn provide_session(initial_path: &str) -> RwSignal<Session> {
    let mut initial = Session::default();
    initial.observe(initial_path);
    let session = RwSignal::new(initial);
    provide_context(session);
    session
}

pub fn use_session() -> RwSignal<Session> {
    expect_context::<RwSignal<Session>>()
}
