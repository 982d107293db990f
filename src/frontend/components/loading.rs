use leptos::prelude::*;

use crate::frontend::context::use_i18n;

/// Spinner shown while a course or lesson lookup has nothing to render.
/// An unknown id never resolves, so this stays up.
#[component]
pub fn Loading(#[prop(optional)] dark: bool) -> impl IntoView {
    let i18n = use_i18n();
    let background = if dark { "bg-gray-900" } else { "bg-gray-50" };

    view! {
        <div class=format!("min-h-screen flex items-center justify-center {}", background)>
            <div class="text-center">
                <div class="w-16 h-16 border-4 border-teal-600 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
                <p class="text-gray-600">{move || i18n.t("common.loading")}</p>
            </div>
        </div>
    }
}
