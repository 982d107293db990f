use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog::{Catalog, LessonSequence};
use crate::format;
use crate::frontend::components::{
    Button, ButtonVariant, Loading, ProgressBar, ProgressColor, ProgressSize,
};
use crate::frontend::context::use_i18n;
use crate::models::{Course, Lesson};
use crate::routing::AppRoute;

const REQUIREMENTS: [&str; 3] = [
    "A computer with internet access",
    "Basic computer skills",
    "Willingness to learn and practice",
];

const COURSE_FEATURES: [(&str, &str); 4] = [
    ("▶", "On-demand video"),
    ("📄", "Downloadable resources"),
    ("♾", "Full lifetime access"),
    ("🏆", "Certificate of completion"),
];

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let params = use_params_map();
    let course = Memo::new(move |_| {
        params
            .with(|p| p.get("course_id"))
            .and_then(|id| Catalog::global().course(&id))
    });

    move || match course.get() {
        Some(course) => view! { <CourseOverview course=course/> }.into_any(),
        None => view! { <Loading/> }.into_any(),
    }
}

#[component]
fn CourseOverview(course: &'static Course) -> impl IntoView {
    let i18n = use_i18n();
    let sequence = LessonSequence::for_course(Catalog::global(), &course.id);
    let start_href = sequence
        .first()
        .map(|lesson| AppRoute::Lesson(lesson.id.clone()).href())
        .unwrap_or_default();
    let has_lessons = !sequence.is_empty();
    let action_key = if course.enrolled { "course.continue" } else { "course.start" };

    let curriculum = sequence
        .lessons()
        .iter()
        .enumerate()
        .map(|(index, lesson)| curriculum_row(index, lesson, course.enrolled))
        .collect_view();

    let learn = course
        .tags
        .iter()
        .map(|tag| view! {
            <li class="flex items-start gap-2 text-gray-700">
                <span class="text-green-500">"✓"</span>
                <span>{format!("Master {tag} concepts")}</span>
            </li>
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gray-50">
            <section class="bg-gradient-to-r from-gray-900 to-teal-900 text-white">
                <div class="max-w-7xl mx-auto px-6 py-12 grid lg:grid-cols-3 gap-10">
                    <div class="lg:col-span-2">
                        <div class="flex items-center gap-3 mb-4 text-sm">
                            <span class="px-3 py-1 rounded-full bg-teal-500/20 text-teal-200">{course.category.as_str()}</span>
                            <span class="px-3 py-1 rounded-full bg-white/10">{course.level.as_str()}</span>
                        </div>
                        <h1 class="text-3xl md:text-4xl font-bold mb-4">{course.title.as_str()}</h1>
                        <p class="text-lg text-gray-300 mb-6">{course.description.as_str()}</p>

                        <div class="flex flex-wrap items-center gap-6 text-sm text-gray-300 mb-6">
                            <span>"⭐ " {course.rating.to_string()}</span>
                            <span>
                                "👥 " {format::count(u64::from(course.students_count))} " "
                                {move || i18n.t("course.students")}
                            </span>
                            <span>"⏱ " {course.duration.as_str()}</span>
                            <span>
                                "📚 " {sequence.len()} " " {move || i18n.t("course.lessons")}
                            </span>
                        </div>

                        <div class="flex items-center gap-3">
                            <img src=course.instructor.avatar.as_str() alt=course.instructor.name.as_str() class="w-12 h-12 rounded-full object-cover"/>
                            <div>
                                <p class="text-sm text-gray-400">{move || i18n.t("course.instructor")}</p>
                                <p class="font-semibold">{course.instructor.name.as_str()}</p>
                            </div>
                        </div>
                    </div>

                    <div class="bg-white text-gray-900 rounded-2xl shadow-xl overflow-hidden self-start">
                        <img src=course.thumbnail.as_str() alt=course.title.as_str() class="w-full h-48 object-cover"/>
                        <div class="p-6 space-y-4">
                            {Catalog::global().course_progress(course).map(|progress| view! {
                                <div>
                                    <p class="text-sm text-gray-600 mb-2">{move || i18n.t("dashboard.progress")}</p>
                                    <ProgressBar
                                        progress=f64::from(progress)
                                        size=ProgressSize::Md
                                        color={ if progress >= 100 { ProgressColor::Green } else { ProgressColor::Teal } }
                                    />
                                </div>
                            })}
                            {(!course.enrolled).then(|| view! {
                                <p class="text-3xl font-bold">{format::price(course.price)}</p>
                            })}
                            {if has_lessons {
                                view! {
                                    <Button variant=ButtonVariant::Primary full_width=true large=true href=start_href>
                                        <span>"▶"</span>
                                        {move || i18n.t(action_key)}
                                    </Button>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <Button variant=ButtonVariant::Primary full_width=true large=true disabled=true>
                                        {move || i18n.t(action_key)}
                                    </Button>
                                }
                                .into_any()
                            }}
                        </div>
                    </div>
                </div>
            </section>

            <div class="max-w-7xl mx-auto px-6 py-12 grid lg:grid-cols-3 gap-10">
                <div class="lg:col-span-2 space-y-10">
                    <section class="bg-white rounded-2xl shadow-lg p-8">
                        <h2 class="text-2xl font-bold text-gray-900 mb-6">"What you'll learn"</h2>
                        <ul class="grid md:grid-cols-2 gap-3">{learn}</ul>
                    </section>

                    <section class="bg-white rounded-2xl shadow-lg p-8">
                        <h2 class="text-2xl font-bold text-gray-900 mb-6">"Requirements"</h2>
                        <ul class="space-y-2 list-disc list-inside text-gray-700">
                            {REQUIREMENTS.map(|item| view! { <li>{item}</li> }).collect_view()}
                        </ul>
                    </section>

                    <section class="bg-white rounded-2xl shadow-lg p-8">
                        <div class="flex items-center justify-between mb-6">
                            <h2 class="text-2xl font-bold text-gray-900">"Course Content"</h2>
                            <span class="text-sm text-gray-500">
                                {sequence.len()} " " {move || i18n.t("course.lessons")} " • " {course.duration.as_str()}
                            </span>
                        </div>
                        <div class="divide-y divide-gray-100">{curriculum}</div>
                    </section>
                </div>

                <aside class="space-y-6">
                    <div class="bg-white rounded-2xl shadow-lg p-6">
                        <h3 class="text-lg font-bold text-gray-900 mb-4">{move || i18n.t("course.instructor")}</h3>
                        <div class="flex items-center gap-3 mb-4">
                            <img src=course.instructor.avatar.as_str() alt=course.instructor.name.as_str() class="w-16 h-16 rounded-full object-cover"/>
                            <p class="font-semibold text-gray-900">{course.instructor.name.as_str()}</p>
                        </div>
                        <p class="text-sm text-gray-600 leading-relaxed">{course.instructor.bio.as_str()}</p>
                    </div>

                    <div class="bg-white rounded-2xl shadow-lg p-6">
                        <h3 class="text-lg font-bold text-gray-900 mb-4">"This course includes"</h3>
                        <ul class="space-y-3 text-sm text-gray-700">
                            {COURSE_FEATURES
                                .map(|(icon, label)| view! {
                                    <li class="flex items-center gap-3">
                                        <span>{icon}</span>
                                        <span>{label}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </aside>
            </div>
        </div>
    }
}

/// Completed lessons get a check; open ones are playable when enrolled and
/// locked otherwise. The lock is cosmetic, every row links to the player.
fn curriculum_row(index: usize, lesson: &'static Lesson, enrolled: bool) -> impl IntoView {
    let marker = match (lesson.completed, enrolled) {
        (true, _) => ("✓", "bg-teal-600 text-white"),
        (false, true) => ("▶", "bg-gray-200 text-gray-600"),
        (false, false) => ("🔒", "bg-gray-100 text-gray-400"),
    };

    view! {
        <a
            href=AppRoute::Lesson(lesson.id.clone()).href()
            class="flex items-center gap-4 py-4 hover:bg-gray-50 rounded-lg px-2 transition-colors"
        >
            <span class=format!("w-8 h-8 flex items-center justify-center rounded-full text-sm {}", marker.1)>
                {marker.0}
            </span>
            <div class="flex-1 min-w-0">
                <p class="font-medium text-gray-900 truncate">{format!("{}. {}", index + 1, lesson.title)}</p>
                <p class="text-sm text-gray-500 truncate">{lesson.description.as_str()}</p>
            </div>
            <span class="text-sm text-gray-500">{lesson.duration.as_str()}</span>
        </a>
    }
}
