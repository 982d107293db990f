use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Info,
    Error,
}

#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
) -> impl IntoView {
    let (icon, classes) = match variant {
        AlertVariant::Info => ("ℹ", "bg-teal-50 border-teal-200 text-teal-800"),
        AlertVariant::Error => ("✕", "bg-red-50 border-red-200 text-red-700"),
    };

    view! {
        <div class=format!("mb-6 p-4 rounded-lg border text-sm {}", classes) role="alert">
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
        </div>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <Alert message=message variant=AlertVariant::Error />
    }
}
