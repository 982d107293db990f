use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

/// Submit button, or a link styled as one when `href` is set.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] large: bool,
    #[prop(optional, into)] href: String,
) -> impl IntoView {
    let size_classes = if large {
        "px-8 py-4 text-lg rounded-xl"
    } else {
        "px-6 py-3 text-base rounded-lg"
    };

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-teal-600 text-white hover:bg-teal-700 focus:ring-teal-500",
        ButtonVariant::Secondary => "bg-white text-teal-700 hover:bg-teal-50 focus:ring-white",
        ButtonVariant::Outline => "border border-gray-300 text-gray-700 hover:bg-gray-50 focus:ring-gray-400",
    };

    let classes = format!(
        "inline-flex items-center justify-center gap-2 font-semibold transition-all duration-200 \
         hover:scale-105 active:scale-95 focus:outline-none focus:ring-2 focus:ring-offset-2 \
         disabled:opacity-50 disabled:cursor-not-allowed disabled:hover:scale-100 {} {}{}",
        size_classes,
        variant_classes,
        if full_width { " w-full" } else { "" }
    );

    if href.is_empty() {
        view! {
            <button type="submit" class=classes disabled=disabled>
                {children()}
            </button>
        }
        .into_any()
    } else {
        view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any()
    }
}
