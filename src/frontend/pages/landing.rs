use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::frontend::components::{Button, ButtonVariant, CourseCard, FeatureCard};
use crate::frontend::context::use_i18n;
use crate::routing::AppRoute;

const FEATURED_COUNT: usize = 3;

#[component]
pub fn LandingPage() -> impl IntoView {
    let i18n = use_i18n();

    let featured = Catalog::global()
        .courses()
        .iter()
        .take(FEATURED_COUNT)
        .map(|course| view! { <CourseCard course=course/> })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gray-50">
            <section class="bg-gradient-to-br from-teal-600 via-teal-700 to-blue-800 text-white">
                <div class="max-w-7xl mx-auto px-6 py-24 flex flex-col items-center text-center">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6 leading-tight max-w-4xl">
                        {move || i18n.t("landing.hero.title")}
                    </h1>
                    <p class="text-lg md:text-xl text-teal-100 max-w-2xl mb-10">
                        {move || i18n.t("landing.hero.subtitle")}
                    </p>
                    <div class="flex flex-wrap gap-4 justify-center">
                        <Button variant=ButtonVariant::Secondary large=true href=AppRoute::Signup.href()>
                            {move || i18n.t("landing.hero.cta")}
                            <span>"→"</span>
                        </Button>
                        <a
                            href=AppRoute::Login.href()
                            class="inline-flex items-center px-8 py-4 text-lg rounded-xl font-semibold border border-white/40 hover:bg-white/10 transition-colors"
                        >
                            {move || i18n.t("nav.login")}
                        </a>
                    </div>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-6 py-20">
                <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">
                    {move || i18n.t("landing.features.title")}
                </h2>
                <div class="grid md:grid-cols-3 gap-8">
                    <FeatureCard icon="🌍" title="landing.features.anywhere" desc="landing.features.anywhere.desc"/>
                    <FeatureCard icon="🗣" title="landing.features.language" desc="landing.features.language.desc"/>
                    <FeatureCard icon="🎓" title="landing.features.expert" desc="landing.features.expert.desc"/>
                </div>
            </section>

            <section id="courses" class="bg-white py-20">
                <div class="max-w-7xl mx-auto px-6">
                    <div class="flex items-center justify-between mb-10">
                        <h2 class="text-3xl font-bold text-gray-900">{move || i18n.t("landing.featured")}</h2>
                        <a href=AppRoute::Signup.href() class="text-teal-600 hover:text-teal-700 font-medium">
                            {move || i18n.t("common.view_all")}
                            " →"
                        </a>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{featured}</div>
                </div>
            </section>
        </div>
    }
}
