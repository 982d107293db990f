use leptos::prelude::*;

use super::{ProgressBar, ProgressSize};
use crate::format;
use crate::frontend::context::use_i18n;
use crate::models::Course;
use crate::routing::AppRoute;

#[component]
pub fn CourseCard(course: &'static Course) -> impl IntoView {
    let i18n = use_i18n();
    let enrolled = course.enrolled;
    let action_key = if enrolled { "course.continue" } else { "course.start" };
    let action_classes = if enrolled {
        "bg-teal-600 text-white hover:bg-teal-700"
    } else {
        "bg-teal-100 text-teal-700 hover:bg-teal-200"
    };

    view! {
        <a
            href=AppRoute::Course(course.id.clone()).href()
            class="block bg-white rounded-2xl shadow-lg border border-gray-100 overflow-hidden cursor-pointer group
                   transition-transform duration-300 hover:-translate-y-2"
        >
            <div class="relative overflow-hidden">
                <img
                    src=course.thumbnail.as_str()
                    alt=course.title.as_str()
                    class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-105"
                />
                <div class="absolute inset-0 bg-black/0 group-hover:bg-black/20 transition-all duration-300 flex items-center justify-center">
                    <div class="bg-white rounded-full p-3 shadow-lg opacity-0 scale-90 group-hover:opacity-100 group-hover:scale-100 transition-all">
                        <span class="text-teal-600 text-xl">"▶"</span>
                    </div>
                </div>
                {enrolled.then(|| view! {
                    <div class="absolute top-3 left-3 bg-teal-600 text-white px-2 py-1 rounded-full text-xs font-medium">
                        {move || i18n.t("dashboard.mycourses")}
                    </div>
                })}
            </div>

            <div class="p-6">
                <h3 class="font-semibold text-lg text-gray-900 line-clamp-2 mb-2">{course.title.as_str()}</h3>
                <p class="text-gray-600 text-sm line-clamp-2 mb-3">{course.description.as_str()}</p>

                <div class="flex items-center space-x-3 mb-4">
                    <img
                        src=course.instructor.avatar.as_str()
                        alt=course.instructor.name.as_str()
                        class="w-8 h-8 rounded-full object-cover"
                    />
                    <span class="text-sm text-gray-700 font-medium">{course.instructor.name.as_str()}</span>
                </div>

                <div class="flex items-center space-x-4 text-sm text-gray-500 mb-4">
                    <span>"🕒 "{course.duration.as_str()}</span>
                    <span>"👥 "{format::count(u64::from(course.students_count))}</span>
                    <span>"⭐ "{course.rating}</span>
                </div>

                {course.enrolled_progress().map(|progress| view! {
                    <div class="mb-4">
                        <span class="block text-sm font-medium text-gray-700 mb-2">
                            {move || i18n.t("dashboard.progress")}
                        </span>
                        <ProgressBar progress=f64::from(progress) size=ProgressSize::Sm/>
                    </div>
                })}

                <div class="flex items-center justify-between">
                    <span class="text-2xl font-bold text-gray-900">{format::price(course.price)}</span>
                    <span class=format!("px-4 py-2 rounded-lg font-medium text-sm transition-colors {}", action_classes)>
                        {move || i18n.t(action_key)}
                    </span>
                </div>
            </div>
        </a>
    }
}
