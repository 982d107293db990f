use leptos::prelude::*;

use crate::catalog::{Catalog, CourseFilter, LearnerSummary};
use crate::frontend::components::{CourseCard, ProgressBar, ProgressSize, StatCard};
use crate::frontend::context::use_i18n;
use crate::models::{Course, Level};
use crate::routing::AppRoute;

const CONTINUE_LIMIT: usize = 3;
const MY_COURSES_LIMIT: usize = 3;
const RECOMMENDED_LIMIT: usize = 6;

// Not tracked anywhere yet; shown as-is.
const HOURS_LEARNED: &str = "24.5";
const CERTIFICATES: &str = "3";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_i18n();
    let catalog = Catalog::global();

    let (term, set_term) = signal(String::new());
    let (level, set_level) = signal(None::<Level>);
    let (filters_open, set_filters_open) = signal(false);

    let filter = Memo::new(move |_| CourseFilter {
        term: term.get(),
        level: level.get(),
    });

    let summary = LearnerSummary::from_enrolled(&catalog.enrolled_courses());

    let continue_courses = move || {
        let mut courses = filter.with(|f| f.apply(catalog.continue_courses()));
        courses.truncate(CONTINUE_LIMIT);
        courses
    };

    let section = move |title: &'static str, courses: Vec<&'static Course>| {
        view! {
            <section class="mb-12">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-2xl font-bold text-gray-900">{move || i18n.t(title)}</h2>
                </div>
                {if courses.is_empty() {
                    view! {
                        <p class="text-gray-500 text-center py-8">{move || i18n.t("dashboard.empty")}</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {courses
                                .into_iter()
                                .map(|course| view! { <CourseCard course=course/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </section>
        }
    };

    let chip = move |label: &'static str, value: Option<Level>| {
        view! {
            <button
                type="button"
                class=move || {
                    if level.get() == value {
                        "px-4 py-2 rounded-full text-sm font-medium bg-teal-600 text-white"
                    } else {
                        "px-4 py-2 rounded-full text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200"
                    }
                }
                on:click=move |_| set_level.set(value)
            >
                {move || match value {
                    Some(_) => label,
                    None => i18n.t("common.all"),
                }}
            </button>
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-6 py-10">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">{move || i18n.t("dashboard.welcome")}</h1>
                    <p class="text-gray-600">{move || i18n.t("dashboard.subtitle")}</p>
                </div>

                <div class="flex flex-col sm:flex-row gap-4 mb-4">
                    <div class="relative flex-1">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 text-sm">"🔍"</span>
                        <input
                            type="text"
                            placeholder=move || i18n.t("common.search")
                            prop:value=move || term.get()
                            on:input=move |ev| set_term.set(event_target_value(&ev))
                            class="w-full pl-10 pr-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-teal-500 focus:border-transparent"
                        />
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 px-5 py-3 border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50"
                        on:click=move |_| set_filters_open.update(|o| *o = !*o)
                    >
                        <span>"⚙"</span>
                        <span>{move || i18n.t("common.filter")}</span>
                    </button>
                </div>

                <Show when=move || filters_open.get()>
                    <div class="flex flex-wrap gap-2 mb-6 animate-dropdown">
                        {chip("", None)}
                        {Level::ALL
                            .into_iter()
                            .map(|l| chip(l.as_str(), Some(l)))
                            .collect_view()}
                    </div>
                </Show>

                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6 my-8">
                    <StatCard icon="📚" title="Courses Enrolled" value=summary.enrolled.to_string() color="bg-teal-100"/>
                    <StatCard icon="⏱" title="Hours Learned" value=HOURS_LEARNED color="bg-blue-100"/>
                    <StatCard icon="🏆" title="Certificates" value=CERTIFICATES color="bg-yellow-100"/>
                    <StatCard
                        icon="📈"
                        title="Avg. Progress"
                        value=format!("{}%", summary.average_progress)
                        color="bg-green-100"
                    />
                </div>

                {move || {
                    let courses = continue_courses();
                    (!courses.is_empty()).then(|| view! {
                        <section class="mb-12">
                            <h2 class="text-2xl font-bold text-gray-900 mb-6">{move || i18n.t("dashboard.continue")}</h2>
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {courses
                                    .into_iter()
                                    .map(|course| view! { <ContinueCard course=course/> })
                                    .collect_view()}
                            </div>
                        </section>
                    })
                }}

                {move || {
                    let mut courses = filter.with(|f| f.apply(catalog.enrolled_courses()));
                    courses.truncate(MY_COURSES_LIMIT);
                    section("dashboard.mycourses", courses)
                }}

                {move || {
                    let mut courses = filter.with(|f| f.apply(catalog.recommended_courses()));
                    courses.truncate(RECOMMENDED_LIMIT);
                    section("dashboard.recommended", courses)
                }}
            </div>
        </div>
    }
}

/// Compact row for a course the learner has started but not finished.
#[component]
fn ContinueCard(course: &'static Course) -> impl IntoView {
    let i18n = use_i18n();
    let progress = course.enrolled_progress().unwrap_or(0);

    view! {
        <a
            href=AppRoute::Course(course.id.clone()).href()
            class="flex bg-white rounded-2xl shadow-lg overflow-hidden group transition-transform hover:-translate-y-1"
        >
            <div class="relative w-32 flex-shrink-0">
                <img src=course.thumbnail.as_str() alt=course.title.as_str() class="w-full h-full object-cover"/>
                <div class="absolute inset-0 flex items-center justify-center bg-black/30 opacity-0 group-hover:opacity-100 transition-opacity">
                    <span class="text-white text-2xl">"▶"</span>
                </div>
            </div>
            <div class="p-4 flex-1 min-w-0">
                <h3 class="font-semibold text-gray-900 truncate mb-1">{course.title.as_str()}</h3>
                <p class="text-sm text-gray-500 mb-3">{course.instructor.name.as_str()}</p>
                <p class="text-xs text-gray-500 mb-1">{move || i18n.t("dashboard.progress")}</p>
                <ProgressBar progress=f64::from(progress) size=ProgressSize::Sm/>
            </div>
        </a>
    }
}
