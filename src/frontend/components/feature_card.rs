use leptos::prelude::*;

use crate::frontend::context::use_i18n;

/// Landing page feature tile. `title` and `desc` are translation keys.
#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="group p-8 rounded-2xl bg-white shadow-lg border border-gray-100 text-center
                    transition-all duration-300 hover:-translate-y-1 hover:shadow-xl">
            <span class="text-5xl mb-4 block group-hover:scale-110 transition-transform duration-300">
                {icon}
            </span>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{move || i18n.t(title)}</h3>
            <p class="text-gray-600 text-sm leading-relaxed">{move || i18n.t(desc)}</p>
        </div>
    }
}
