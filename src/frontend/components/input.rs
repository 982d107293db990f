use leptos::prelude::*;

use crate::frontend::context::use_i18n;

const FIELD_CLASSES: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 text-gray-900 \
                             placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-teal-500 \
                             focus:border-transparent transition-all";

/// Labelled text field. `label` is a translation key.
#[component]
pub fn TextInput(
    label: &'static str,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] min: String,
    #[prop(optional, into)] step: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let i18n = use_i18n();
    let min = (!min.is_empty()).then_some(min);
    let step = (!step.is_empty()).then_some(step);

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-gray-700 mb-2">
                {move || i18n.t(label)}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                min=min
                step=step
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            />
        </div>
    }
}

#[component]
pub fn EmailInput(value: ReadSignal<String>, set_value: WriteSignal<String>) -> impl IntoView {
    view! {
        <TextInput
            label="auth.email"
            name="email"
            placeholder="you@example.com"
            input_type="email"
            required=true
            value=value
            set_value=set_value
        />
    }
}

#[component]
pub fn PasswordInput(value: ReadSignal<String>, set_value: WriteSignal<String>) -> impl IntoView {
    view! {
        <TextInput
            label="auth.password"
            name="password"
            placeholder="••••••••"
            input_type="password"
            required=true
            value=value
            set_value=set_value
        />
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(default = 4)] rows: u32,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-gray-700 mb-2">
                {move || i18n.t(label)}
            </label>
            <textarea
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            ></textarea>
        </div>
    }
}
