use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::catalog::{Catalog, LessonSequence, progress};
use crate::format;
use crate::frontend::components::{Loading, ProgressBar, ProgressSize};
use crate::frontend::context::use_i18n;
use crate::models::Lesson;
use crate::routing::AppRoute;

/// Used when a lesson's duration label does not parse.
const FALLBACK_DURATION_SECS: u32 = 300;

#[component]
pub fn LessonPlayerPage() -> impl IntoView {
    let params = use_params_map();
    let lesson = Memo::new(move |_| {
        params
            .with(|p| p.get("lesson_id"))
            .and_then(|id| Catalog::global().lesson(&id))
    });

    move || match lesson.get() {
        Some(lesson) => view! { <LessonPlayer lesson=lesson/> }.into_any(),
        None => view! { <Loading dark=true/> }.into_any(),
    }
}

#[component]
fn LessonPlayer(lesson: &'static Lesson) -> impl IntoView {
    let i18n = use_i18n();
    let navigate = use_navigate();
    let sequence = LessonSequence::containing(Catalog::global(), lesson);

    let index = sequence.position(&lesson.id).unwrap_or(0);
    let total = sequence.len();
    let previous = sequence.previous(&lesson.id);
    let next = sequence.next(&lesson.id);
    let completion_target = sequence.completion_target(&lesson.id);
    let course_href = AppRoute::Course(lesson.course_id.clone()).href();
    let course_title = Catalog::global()
        .course(&lesson.course_id)
        .map(|course| course.title.as_str());

    let (playing, set_playing) = signal(false);
    let (volume, set_volume) = signal(1.0_f64);
    let (show_transcript, set_show_transcript) = signal(false);
    let (show_resources, set_show_resources) = signal(false);

    // Playback is not simulated; the clock stays at zero.
    let elapsed = 0_u32;
    let duration = format::parse_duration_label(&lesson.duration).unwrap_or(FALLBACK_DURATION_SECS);
    let played = if duration > 0 {
        f64::from(elapsed) / f64::from(duration) * 100.0
    } else {
        0.0
    };

    let go_to = {
        let navigate = navigate.clone();
        move |target: Option<&'static Lesson>| {
            if let Some(target) = target {
                navigate(&AppRoute::Lesson(target.id.clone()).href(), Default::default());
            }
        }
    };

    let mark_completed = {
        let navigate = navigate.clone();
        move |_| {
            log::info!("lesson {} marked completed, moving to {}", lesson.id, completion_target);
            navigate(&completion_target.href(), Default::default());
        }
    };

    let toggle_play = move |_| set_playing.update(|p| *p = !*p);

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <header class="bg-gray-800 border-b border-gray-700">
                <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                    <div class="flex items-center gap-6 min-w-0">
                        <a href=course_href class="flex items-center gap-2 text-gray-300 hover:text-white transition-colors">
                            <span>"←"</span>
                            <span>{move || i18n.t("lesson.back")}</span>
                        </a>
                        <div class="hidden sm:block min-w-0">
                            <p class="font-semibold truncate">{lesson.title.as_str()}</p>
                            {course_title.map(|title| view! {
                                <p class="text-sm text-gray-400 truncate">{title}</p>
                            })}
                        </div>
                    </div>
                    <span class="text-sm text-gray-400">{format!("{} of {}", index + 1, total)}</span>
                </div>
            </header>

            <div class="max-w-7xl mx-auto px-6 py-8 grid lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-6">
                    <div class="relative rounded-2xl overflow-hidden bg-black aspect-video">
                        <img src=lesson.thumbnail.as_str() alt=lesson.title.as_str() class="w-full h-full object-cover opacity-80"/>
                        <button
                            type="button"
                            class="absolute inset-0 flex items-center justify-center group"
                            on:click=toggle_play
                        >
                            <span class="w-20 h-20 flex items-center justify-center rounded-full bg-teal-600/90 text-3xl
                                         transition-transform group-hover:scale-110">
                                {move || if playing.get() { "⏸" } else { "▶" }}
                            </span>
                        </button>
                    </div>

                    <div class="bg-gray-800 rounded-2xl p-4 space-y-4">
                        <ProgressBar progress=progress::clamp(played) show_percentage=false size=ProgressSize::Sm/>
                        <div class="flex items-center justify-between">
                            <div class="flex items-center gap-3">
                                <button
                                    type="button"
                                    class="p-2 rounded-lg hover:bg-gray-700 disabled:opacity-40 disabled:cursor-not-allowed"
                                    disabled=previous.is_none()
                                    on:click={
                                        let go_to = go_to.clone();
                                        move |_| go_to(previous)
                                    }
                                >
                                    "⏮"
                                </button>
                                <button type="button" class="p-2 rounded-lg hover:bg-gray-700" on:click=toggle_play>
                                    {move || if playing.get() { "⏸" } else { "▶" }}
                                </button>
                                <button
                                    type="button"
                                    class="p-2 rounded-lg hover:bg-gray-700 disabled:opacity-40 disabled:cursor-not-allowed"
                                    disabled=next.is_none()
                                    on:click={
                                        let go_to = go_to.clone();
                                        move |_| go_to(next)
                                    }
                                >
                                    "⏭"
                                </button>
                                <span class="text-sm text-gray-300 font-mono">
                                    {format!("{} / {}", format::timestamp(elapsed), lesson.duration)}
                                </span>
                            </div>
                            <label class="flex items-center gap-2 text-sm text-gray-300">
                                <span>{move || if volume.get() > 0.0 { "🔊" } else { "🔇" }}</span>
                                <input
                                    type="range"
                                    min="0"
                                    max="1"
                                    step="0.1"
                                    class="w-24 accent-teal-500"
                                    prop:value=move || volume.get().to_string()
                                    on:input=move |ev| {
                                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                            set_volume.set(value.clamp(0.0, 1.0));
                                        }
                                    }
                                />
                            </label>
                        </div>
                    </div>

                    <div>
                        <h1 class="text-2xl font-bold mb-2">{lesson.title.as_str()}</h1>
                        <p class="text-gray-400">{lesson.description.as_str()}</p>
                    </div>

                    <div class="flex flex-wrap gap-4">
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-lg bg-teal-600 hover:bg-teal-700 font-semibold transition-colors"
                            on:click=mark_completed
                        >
                            <span>"✓"</span>
                            <span>{move || i18n.t("lesson.completed")}</span>
                        </button>
                        {next.map(|next| {
                            let go_to = go_to.clone();
                            view! {
                                <button
                                    type="button"
                                    class="inline-flex items-center gap-2 px-6 py-3 rounded-lg border border-gray-600 hover:bg-gray-800 font-semibold transition-colors"
                                    on:click=move |_| go_to(Some(next))
                                >
                                    <span>{move || i18n.t("lesson.next")}</span>
                                    <span>"→"</span>
                                </button>
                            }
                        })}
                    </div>
                </div>

                <aside class="space-y-4">
                    <Collapsible
                        title="lesson.transcript"
                        open=show_transcript
                        set_open=set_show_transcript
                    >
                        <p class="text-sm text-gray-300 leading-relaxed whitespace-pre-line">{lesson.transcript.as_str()}</p>
                    </Collapsible>

                    <Collapsible
                        title="lesson.resources"
                        open=show_resources
                        set_open=set_show_resources
                    >
                        <ul class="space-y-2">
                            {lesson
                                .resources
                                .iter()
                                .map(|resource| view! {
                                    <li>
                                        <a
                                            href=resource.url.as_str()
                                            target="_blank"
                                            class="flex items-center gap-3 p-3 rounded-lg bg-gray-700/50 hover:bg-gray-700 transition-colors"
                                        >
                                            <span>{resource.kind.icon()}</span>
                                            <span class="flex-1 text-sm">{resource.title.as_str()}</span>
                                            <span class="text-xs uppercase text-gray-400">{resource.kind.as_str()}</span>
                                        </a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </Collapsible>
                </aside>
            </div>
        </div>
    }
}

/// Side panel with a toggle header. `title` is a translation key.
#[component]
fn Collapsible(
    title: &'static str,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="bg-gray-800 rounded-2xl overflow-hidden">
            <button
                type="button"
                class="w-full flex items-center justify-between px-5 py-4 font-semibold hover:bg-gray-700 transition-colors"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span>{move || i18n.t(title)}</span>
                <span class="text-gray-400">{move || if open.get() { "▴" } else { "▾" }}</span>
            </button>
            <Show when=move || open.get()>
                <div class="px-5 pb-5 animate-dropdown">{children()}</div>
            </Show>
        </div>
    }
}
