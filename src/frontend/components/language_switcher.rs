use leptos::prelude::*;

use crate::frontend::context::use_i18n;
use crate::i18n::Locale;

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();
    let (open, set_open) = signal(false);

    let options = move || {
        Locale::ALL
            .into_iter()
            .map(|locale| {
                let classes = move || {
                    if i18n.locale() == locale {
                        "w-full flex items-center space-x-3 px-4 py-3 text-left bg-teal-50 text-teal-700"
                    } else {
                        "w-full flex items-center space-x-3 px-4 py-3 text-left text-gray-700 hover:bg-gray-50"
                    }
                };
                view! {
                    <button
                        type="button"
                        class=classes
                        on:click=move |_| {
                            i18n.set_locale(locale);
                            set_open.set(false);
                        }
                    >
                        <span class="text-lg">{locale.flag()}</span>
                        <span class="text-sm font-medium">{locale.name()}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="relative">
            <button
                type="button"
                class="flex items-center space-x-2 px-3 py-2 rounded-lg bg-gray-100 hover:bg-gray-200 transition-colors"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="text-gray-600">"🌐"</span>
                <span class="text-sm font-medium text-gray-700">
                    {move || format!("{} {}", i18n.locale().flag(), i18n.locale().name())}
                </span>
                <span class=move || {
                    if open.get() {
                        "text-gray-600 text-xs transition-transform rotate-180"
                    } else {
                        "text-gray-600 text-xs transition-transform"
                    }
                }>"▾"</span>
            </button>

            <Show when=move || open.get()>
                <div class="absolute top-full mt-2 w-48 bg-white rounded-lg shadow-lg border border-gray-200 overflow-hidden z-50 animate-dropdown">
                    {options}
                </div>
                <div class="fixed inset-0 z-40" on:click=move |_| set_open.set(false)></div>
            </Show>
        </div>
    }
}
