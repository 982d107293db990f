use leptos::prelude::*;

use crate::catalog::progress;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ProgressSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ProgressSize {
    fn bar_class(&self) -> &'static str {
        match self {
            Self::Sm => "h-2",
            Self::Md => "h-3",
            Self::Lg => "h-4",
        }
    }

    fn text_class(&self) -> &'static str {
        match self {
            Self::Sm => "text-xs",
            Self::Md => "text-sm",
            Self::Lg => "text-base",
        }
    }
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ProgressColor {
    #[default]
    Teal,
    Blue,
    Green,
}

impl ProgressColor {
    fn fill_class(&self) -> &'static str {
        match self {
            Self::Teal => "bg-teal-500",
            Self::Blue => "bg-blue-500",
            Self::Green => "bg-green-500",
        }
    }
}

/// Horizontal bar; values outside `[0, 100]` are clamped for display.
#[component]
pub fn ProgressBar(
    progress: f64,
    #[prop(default = true)] show_percentage: bool,
    #[prop(optional)] size: ProgressSize,
    #[prop(optional)] color: ProgressColor,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let width = progress::clamp(progress);

    view! {
        <div class=format!("flex items-center space-x-3 {}", class)>
            <div class=format!("flex-1 bg-gray-200 rounded-full overflow-hidden {}", size.bar_class())>
                <div
                    class=format!(
                        "{} {} rounded-full animate-progress transition-all duration-700 ease-out",
                        size.bar_class(),
                        color.fill_class(),
                    )
                    style=format!("width: {width}%")
                ></div>
            </div>
            {show_percentage.then(|| view! {
                <span class=format!("{} font-medium text-gray-600 min-w-[3rem] text-right", size.text_class())>
                    {format!("{}%", width.round())}
                </span>
            })}
        </div>
    }
}
