pub mod components;
pub mod context;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use components::{Footer, Navbar};
use context::{provide_i18n, provide_session};
use pages::{
    CourseDetailPage, DashboardPage, InstructorPage, LandingPage, LessonPlayerPage, LoginPage,
    SignupPage,
};

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_i18n();

    view! {
        <Stylesheet id="leptos" href="/pkg/paxora.css"/>
        <Title text="Paxora Learning Hub"/>
        <Meta name="description" content="Learn anything, anywhere, with expert instructors in your language"/>

        <Router>
            <Layout/>
        </Router>
    }
}

/// Navbar, routed content and footer. Lives inside the router so the mock
/// session can follow the location.
#[component]
fn Layout() -> impl IntoView {
    let location = use_location();
    let session = provide_session(&location.pathname.get_untracked());

    Effect::new(move |_| {
        let path = location.pathname.get();
        session.update(|s| s.observe(&path));
    });

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Navbar/>
            <main class="flex-grow">
                <Routes fallback=|| view! { <LandingPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/signup") view=SignupPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/course/:course_id") view=CourseDetailPage/>
                    <Route path=path!("/lesson/:lesson_id") view=LessonPlayerPage/>
                    <Route path=path!("/instructor") view=InstructorPage/>
                    <Route path=path!("/*any") view=LandingPage/>
                </Routes>
            </main>
            <Footer/>
        </div>
    }
}
