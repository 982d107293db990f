use leptos::prelude::*;

use crate::catalog::{Catalog, InstructorSummary};
use crate::format;
use crate::frontend::components::{
    Button, ButtonVariant, ErrorAlert, StatCard, TextArea, TextInput,
};
use crate::frontend::context::use_i18n;
use crate::models::{COURSE_CATEGORIES, Course, CourseDraft, Level};
use crate::routing::AppRoute;

const SELECT_CLASSES: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 text-gray-900 \
                              focus:outline-none focus:ring-2 focus:ring-teal-500 focus:border-transparent";

#[component]
pub fn InstructorPage() -> impl IntoView {
    let i18n = use_i18n();
    let courses = Catalog::global().instructor_courses();
    let summary = InstructorSummary::from_courses(&courses);
    let (upload_open, set_upload_open) = signal(false);

    let grid = courses
        .into_iter()
        .map(|course| view! { <ManagedCourseCard course=course/> })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-6 py-10">
                <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4 mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">{move || i18n.t("instructor.dashboard")}</h1>
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 px-6 py-3 rounded-lg bg-teal-600 text-white font-semibold
                               hover:bg-teal-700 transition-colors"
                        on:click=move |_| set_upload_open.set(true)
                    >
                        <span>"＋"</span>
                        <span>{move || i18n.t("instructor.upload")}</span>
                    </button>
                </div>

                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-10">
                    <StatCard
                        icon="👥"
                        title="Total Students"
                        value=format::count(summary.total_students)
                        color="bg-teal-100"
                        change="+12%"
                    />
                    <StatCard
                        icon="💰"
                        title="Revenue"
                        value=format::price(summary.gross_revenue)
                        color="bg-green-100"
                        change="+8%"
                    />
                    <StatCard
                        icon="📚"
                        title="Active Courses"
                        value=summary.active_courses.to_string()
                        color="bg-blue-100"
                        change="+2"
                    />
                    <StatCard
                        icon="⭐"
                        title="Avg. Rating"
                        value=format!("{:.1}", summary.average_rating)
                        color="bg-yellow-100"
                        change="+0.2"
                    />
                </div>

                <div class="grid lg:grid-cols-2 gap-6 mb-10">
                    <ChartPlaceholder title="Enrollments" icon="📈"/>
                    <ChartPlaceholder title="Revenue" icon="📊"/>
                </div>

                <section>
                    <h2 class="text-2xl font-bold text-gray-900 mb-6">{move || i18n.t("instructor.mycourses")}</h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{grid}</div>
                </section>
            </div>

            <Show when=move || upload_open.get()>
                <UploadCourseModal set_open=set_upload_open/>
            </Show>
        </div>
    }
}

#[component]
fn ChartPlaceholder(title: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-lg p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">{title}</h3>
            <div class="h-48 flex flex-col items-center justify-center rounded-xl bg-gray-50 border-2 border-dashed border-gray-200 text-gray-400">
                <span class="text-4xl mb-2">{icon}</span>
                <span class="text-sm">"Chart coming soon"</span>
            </div>
        </div>
    }
}

#[component]
fn ManagedCourseCard(course: &'static Course) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-lg overflow-hidden">
            <img src=course.thumbnail.as_str() alt=course.title.as_str() class="w-full h-40 object-cover"/>
            <div class="p-5">
                <h3 class="font-semibold text-gray-900 mb-2 line-clamp-2">{course.title.as_str()}</h3>
                <div class="flex items-center justify-between text-sm text-gray-500 mb-4">
                    <span>{format!("{} students", format::count(u64::from(course.students_count)))}</span>
                    <span>{format!("⭐ {}", course.rating)}</span>
                    <span class="font-semibold text-gray-900">{format::price(course.price)}</span>
                </div>
                <div class="flex gap-2">
                    <a
                        href=AppRoute::Course(course.id.clone()).href()
                        class="flex-1 text-center px-3 py-2 rounded-lg bg-teal-50 text-teal-700 text-sm font-medium hover:bg-teal-100"
                    >
                        "👁 View"
                    </a>
                    <button type="button" class="flex-1 px-3 py-2 rounded-lg bg-gray-100 text-gray-700 text-sm font-medium hover:bg-gray-200">
                        "✎ Edit"
                    </button>
                    <button type="button" class="flex-1 px-3 py-2 rounded-lg bg-red-50 text-red-600 text-sm font-medium hover:bg-red-100">
                        "🗑 Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Upload form. A valid draft is logged and dropped; nothing is stored.
#[component]
fn UploadCourseModal(set_open: WriteSignal<bool>) -> impl IntoView {
    let i18n = use_i18n();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (level, set_level) = signal(Level::default());
    let (price, set_price) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_category.set(String::new());
        set_level.set(Level::default());
        set_price.set(String::new());
        set_error.set(None);
    };

    let close = move || {
        reset();
        set_open.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = CourseDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            level: level.get_untracked(),
            price: price.get_untracked(),
        };
        match draft.validate() {
            Ok(course) => {
                leptos::logging::log!("Course uploaded: {:?}", course);
                close();
            }
            Err(e) => {
                log::warn!("Rejected course draft: {e}");
                set_error.set(Some(e.to_string()));
            }
        }
    };

    let categories = COURSE_CATEGORIES
        .map(|name| view! { <option value=name>{name}</option> })
        .collect_view();

    let levels = Level::ALL
        .map(|l| view! { <option value=l.as_str()>{l.as_str()}</option> })
        .collect_view();

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/50" on:click=move |_| close()></div>
            <div class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto bg-white rounded-2xl shadow-2xl p-8 animate-dropdown">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-2xl font-bold text-gray-900">{move || i18n.t("instructor.upload")}</h2>
                    <button type="button" class="text-gray-400 hover:text-gray-600 text-xl" on:click=move |_| close()>
                        "✕"
                    </button>
                </div>

                {move || error.get().map(|message| view! { <ErrorAlert message=message/> })}

                <form class="space-y-5" on:submit=on_submit>
                    <TextInput
                        label="instructor.title"
                        name="title"
                        placeholder="e.g. Complete Web Development Bootcamp"
                        input_type="text"
                        required=true
                        value=title
                        set_value=set_title
                    />
                    <TextArea
                        label="instructor.description"
                        name="description"
                        placeholder="What will students learn?"
                        required=true
                        value=description
                        set_value=set_description
                    />

                    <div class="grid md:grid-cols-2 gap-5">
                        <div>
                            <label for="category" class="block text-sm font-medium text-gray-700 mb-2">
                                {move || i18n.t("instructor.category")}
                            </label>
                            <select
                                id="category"
                                name="category"
                                required=true
                                class=SELECT_CLASSES
                                prop:value=move || category.get()
                                on:change=move |ev| set_category.set(event_target_value(&ev))
                            >
                                <option value="">"Select a category"</option>
                                {categories}
                            </select>
                        </div>
                        <div>
                            <label for="level" class="block text-sm font-medium text-gray-700 mb-2">
                                {move || i18n.t("instructor.level")}
                            </label>
                            <select
                                id="level"
                                name="level"
                                class=SELECT_CLASSES
                                prop:value=move || level.get().as_str()
                                on:change=move |ev| {
                                    match event_target_value(&ev).parse::<Level>() {
                                        Ok(l) => set_level.set(l),
                                        Err(e) => log::warn!("{e}"),
                                    }
                                }
                            >
                                {levels}
                            </select>
                        </div>
                    </div>

                    <TextInput
                        label="instructor.price"
                        name="price"
                        placeholder="49.99"
                        input_type="number"
                        required=true
                        min="0"
                        step="0.01"
                        value=price
                        set_value=set_price
                    />

                    <div>
                        <p class="block text-sm font-medium text-gray-700 mb-2">{move || i18n.t("instructor.video")}</p>
                        <div class="flex flex-col items-center justify-center h-36 rounded-xl border-2 border-dashed border-gray-300 text-gray-500 hover:border-teal-400 transition-colors">
                            <span class="text-3xl mb-2">"⬆"</span>
                            <span class="text-sm">"Drag and drop a video, or click to browse"</span>
                        </div>
                    </div>

                    <div class="flex justify-end gap-3 pt-2">
                        <button
                            type="button"
                            class="px-6 py-3 rounded-lg border border-gray-300 text-gray-700 font-semibold hover:bg-gray-50"
                            on:click=move |_| close()
                        >
                            {move || i18n.t("instructor.cancel")}
                        </button>
                        <Button variant=ButtonVariant::Primary>
                            {move || i18n.t("instructor.save")}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
