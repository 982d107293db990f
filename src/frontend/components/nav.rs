use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::LanguageSwitcher;
use crate::frontend::context::{use_i18n, use_session};
use crate::routing::AppRoute;

const LOGO_URL: &str = "https://res.cloudinary.com/drvfzwgjm/image/upload/v1761166728/719f89c9-1a3b-4e05-b1a9-4e5865dea83b_nvqqvg.jpg";

struct NavItem {
    key: &'static str,
    href: &'static str,
    requires_auth: bool,
}

static NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        key: "nav.courses",
        href: "/courses",
        requires_auth: false,
    },
    NavItem {
        key: "nav.dashboard",
        href: "/dashboard",
        requires_auth: true,
    },
    NavItem {
        key: "nav.instructor",
        href: "/instructor",
        requires_auth: false,
    },
];

fn link_classes(active: bool, mobile: bool) -> &'static str {
    match (active, mobile) {
        (true, false) => "px-3 py-2 rounded-lg text-sm font-medium transition-colors text-teal-600 bg-teal-50",
        (false, false) => "px-3 py-2 rounded-lg text-sm font-medium transition-colors text-gray-700 hover:text-teal-600 hover:bg-gray-50",
        (true, true) => "block px-3 py-2 rounded-lg text-base font-medium text-teal-600 bg-teal-50",
        (false, true) => "block px-3 py-2 rounded-lg text-base font-medium text-gray-700 hover:text-teal-600 hover:bg-gray-50",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let session = use_session();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let (mobile_open, set_mobile_open) = signal(false);
    let (user_menu_open, set_user_menu_open) = signal(false);

    let logged_in = move || session.with(|s| s.logged_in);

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .filter(|item| !item.requires_auth || logged_in())
            .map(move |item| {
                let href = item.href;
                let key = item.key;
                view! {
                    <a
                        href=href
                        class=move || link_classes(pathname.get() == href, mobile)
                        on:click=move |_| set_mobile_open.set(false)
                    >
                        {move || i18n.t(key)}
                    </a>
                }
            })
            .collect_view()
    };

    let logout = move |_: leptos::ev::MouseEvent| {
        session.update(|s| s.logout());
        set_user_menu_open.set(false);
        navigate(&AppRoute::Landing.href(), Default::default());
    };

    let user_menu = move || {
        let user = session.with(|s| s.current_user().copied())?;
        let home = session.with(|s| s.home_route());
        let home_key = match home {
            AppRoute::Instructor => "nav.instructor",
            _ => "nav.dashboard",
        };
        let home = home.href();
        let logout = logout.clone();

        Some(view! {
            <button type="button" class="relative p-2 text-gray-400 hover:text-gray-500 transition-transform hover:scale-105">
                <span class="text-lg">"🔔"</span>
                <span class="absolute top-0 right-0 block h-2 w-2 rounded-full bg-red-400"></span>
            </button>

            <div class="relative">
                <button
                    type="button"
                    class="flex items-center space-x-1 sm:space-x-2 p-1 sm:p-2 rounded-lg hover:bg-gray-50"
                    on:click=move |_| set_user_menu_open.update(|o| *o = !*o)
                >
                    <img src=user.avatar alt=user.name class="w-8 h-8 rounded-full object-cover"/>
                    <span class="hidden md:block text-sm font-medium text-gray-700">{user.name}</span>
                    <span class="text-gray-400 text-xs hidden sm:block">"▾"</span>
                </button>

                <Show when=move || user_menu_open.get()>
                    <div class="absolute right-0 mt-2 w-48 bg-white rounded-lg shadow-lg border border-gray-200 overflow-hidden z-50 animate-dropdown">
                        <a
                            href=home.clone()
                            class="flex items-center space-x-2 px-4 py-3 text-sm text-gray-700 hover:bg-gray-50"
                            on:click=move |_| set_user_menu_open.set(false)
                        >
                            <span>"👤"</span>
                            <span>{move || i18n.t(home_key)}</span>
                        </a>
                        <hr class="border-gray-200"/>
                        <button
                            type="button"
                            class="flex items-center space-x-2 px-4 py-3 text-sm text-gray-700 hover:bg-gray-50 w-full text-left"
                            on:click=logout.clone()
                        >
                            <span>"↪"</span>
                            <span>{move || i18n.t("nav.logout")}</span>
                        </button>
                    </div>
                </Show>
            </div>
        })
    };

    view! {
        <nav class="bg-white shadow-lg border-b border-gray-100 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="flex items-center space-x-2 flex-shrink-0 transition-transform hover:scale-105">
                        <img src=LOGO_URL alt="Paxora Learning Hub" class="w-8 h-8 sm:w-10 sm:h-10 rounded-lg object-cover"/>
                        <span class="text-lg sm:text-xl font-bold text-gray-900 hidden sm:block">"Paxora Learning Hub"</span>
                        <span class="text-lg font-bold text-gray-900 sm:hidden">"Paxora"</span>
                    </a>

                    <div class="hidden md:flex items-center space-x-8">
                        {move || links(false)}
                    </div>

                    <Show when=logged_in>
                        <div class="hidden lg:flex flex-1 max-w-lg mx-4 xl:mx-8">
                            <div class="relative w-full">
                                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 text-sm">"🔍"</span>
                                <input
                                    type="text"
                                    placeholder=move || i18n.t("common.search")
                                    class="w-full pl-10 pr-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-teal-500 focus:border-transparent"
                                />
                            </div>
                        </div>
                    </Show>

                    <div class="flex items-center space-x-2 sm:space-x-4">
                        <div class="hidden sm:block">
                            <LanguageSwitcher/>
                        </div>

                        {move || match user_menu() {
                            Some(menu) => menu.into_any(),
                            None => view! {
                                <div class="flex items-center space-x-3">
                                    <a href=AppRoute::Login.href() class="text-gray-700 hover:text-teal-600 px-3 py-2 text-sm font-medium">
                                        {move || i18n.t("nav.login")}
                                    </a>
                                    <a
                                        href=AppRoute::Signup.href()
                                        class="bg-teal-600 text-white hover:bg-teal-700 px-4 py-2 rounded-lg text-sm font-medium transition-colors"
                                    >
                                        {move || i18n.t("nav.signup")}
                                    </a>
                                </div>
                            }
                            .into_any(),
                        }}

                        <button
                            type="button"
                            class="md:hidden p-2 rounded-lg text-gray-400 hover:text-gray-500 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|o| *o = !*o)
                        >
                            {move || if mobile_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=move || mobile_open.get()>
                    <div class="md:hidden border-t border-gray-200 animate-dropdown">
                        <div class="px-2 pt-2 pb-3 space-y-1">
                            {move || links(true)}
                            <div class="px-3 py-2 sm:hidden">
                                <LanguageSwitcher/>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>

            <Show when=move || user_menu_open.get()>
                <div class="fixed inset-0 z-40" on:click=move |_| set_user_menu_open.set(false)></div>
            </Show>
        </nav>
    }
}
