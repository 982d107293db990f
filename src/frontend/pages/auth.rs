use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::frontend::components::{
    Alert, Button, ButtonVariant, EmailInput, PasswordInput, TextInput,
};
use crate::frontend::context::use_i18n;
use crate::routing::AppRoute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            Self::Login => "auth.signin.title",
            Self::Signup => "auth.signup.title",
        }
    }

    fn subtitle(&self) -> &'static str {
        match self {
            Self::Login => "auth.signin.subtitle",
            Self::Signup => "auth.signup.subtitle",
        }
    }

    fn submit(&self) -> &'static str {
        match self {
            Self::Login => "auth.login",
            Self::Signup => "auth.signup",
        }
    }

    /// Prompt and link target for the other form.
    fn switch(&self) -> (&'static str, &'static str, AppRoute) {
        match self {
            Self::Login => ("auth.no_account", "auth.signup", AppRoute::Signup),
            Self::Signup => ("auth.have_account", "auth.login", AppRoute::Login),
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Login/> }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Signup/> }
}

/// Both forms accept anything and go straight to the dashboard.
#[component]
fn AuthForm(mode: AuthMode) -> impl IntoView {
    let i18n = use_i18n();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let enter = move || {
        log::debug!("{mode:?} form submitted, entering dashboard");
        navigate(&AppRoute::Dashboard.href(), Default::default());
    };

    let on_submit = {
        let enter = enter.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            enter();
        }
    };

    let social = move |provider: &'static str| {
        let enter = enter.clone();
        view! {
            <button
                type="button"
                class="w-full flex items-center justify-center gap-2 px-4 py-3 border border-gray-300 rounded-lg
                       text-gray-700 font-medium hover:bg-gray-50 transition-colors"
                on:click=move |_| enter()
            >
                {move || i18n.t(provider)}
            </button>
        }
    };

    let (prompt, link_key, link_route) = mode.switch();

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gradient-to-br from-teal-50 via-white to-blue-50">
            <div class="w-full max-w-md">
                <div class="bg-white rounded-2xl shadow-xl border border-gray-100 p-8">
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold text-gray-900">{move || i18n.t(mode.title())}</h1>
                        <p class="text-gray-600 mt-2">{move || i18n.t(mode.subtitle())}</p>
                    </div>

                    <Alert message="Demo mode: any email and password will sign you in."/>

                    <div class="space-y-3 mb-6">
                        {social.clone()("auth.google")}
                        {social("auth.facebook")}
                    </div>

                    <div class="flex items-center gap-3 mb-6">
                        <hr class="flex-1 border-gray-200"/>
                        <span class="text-sm text-gray-500">{move || i18n.t("auth.or")}</span>
                        <hr class="flex-1 border-gray-200"/>
                    </div>

                    <form class="space-y-5" on:submit=on_submit>
                        {(mode == AuthMode::Signup).then(|| view! {
                            <TextInput
                                label="auth.name"
                                name="name"
                                placeholder="John Doe"
                                input_type="text"
                                required=true
                                value=name
                                set_value=set_name
                            />
                        })}
                        <EmailInput value=email set_value=set_email/>
                        <PasswordInput value=password set_value=set_password/>
                        <Button variant=ButtonVariant::Primary full_width=true large=true>
                            {move || i18n.t(mode.submit())}
                        </Button>
                    </form>

                    <p class="text-center text-gray-600 mt-6 text-sm">
                        {move || i18n.t(prompt)}
                        " "
                        <a href=link_route.href() class="text-teal-600 hover:text-teal-700 font-medium">
                            {move || i18n.t(link_key)}
                        </a>
                    </p>
                </div>

                <a href=AppRoute::Landing.href() class="block text-center text-gray-500 hover:text-gray-700 mt-6 text-sm transition-colors">
                    "← Back to home"
                </a>
            </div>
        </div>
    }
}
