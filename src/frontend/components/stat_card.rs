use leptos::prelude::*;

#[component]
pub fn StatCard(
    icon: &'static str,
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    color: &'static str,
    #[prop(optional, into)] change: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-lg p-6 transition-transform hover:scale-[1.02]">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-gray-600 text-sm font-medium mb-1">{title}</p>
                    <p class="text-2xl font-bold text-gray-900">{value}</p>
                </div>
                <div class=format!("{} p-3 rounded-xl text-2xl", color)>{icon}</div>
            </div>
            {change.map(|change| view! {
                <p class="mt-3 text-green-600 text-sm font-medium">{change}</p>
            })}
        </div>
    }
}
