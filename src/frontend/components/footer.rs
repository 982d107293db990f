use leptos::prelude::*;

use crate::frontend::context::use_i18n;
use crate::routing::AppRoute;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="max-w-7xl mx-auto px-6 py-12 text-center">
                <p class="text-2xl font-bold text-white mb-2">"Paxora Learning Hub"</p>
                <p class="text-gray-400 mb-6">{move || i18n.t("footer.tagline")}</p>
                <div class="flex justify-center gap-4 text-sm mb-6">
                    <a href=AppRoute::Dashboard.href() class="hover:text-white">
                        {move || i18n.t("nav.dashboard")}
                    </a>
                    <span class="text-gray-600">"|"</span>
                    <a href=AppRoute::Instructor.href() class="hover:text-white">
                        {move || i18n.t("nav.instructor")}
                    </a>
                    <span class="text-gray-600">"|"</span>
                    <a href=AppRoute::Signup.href() class="hover:text-white">
                        {move || i18n.t("nav.signup")}
                    </a>
                </div>
                <p class="text-xs text-gray-500">"© 2025 Paxora Consulting. All rights reserved."</p>
            </div>
        </footer>
    }
}
