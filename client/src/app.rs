//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::components::protected::Protected;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    about::AboutPage, ai_writer::AiWriterPage, become_creator::BecomeCreatorPage,
    contact::ContactPage, creator_dashboard::CreatorDashboardPage, dashboard::DashboardPage,
    homepage::HomePage, invoice_builder::InvoiceBuilderPage, letter_builder::LetterBuilderPage,
    login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
    resume_builder::ResumeBuilderPage, template_detail::TemplateDetailPage,
    templates::TemplatesPage, user_profile::UserProfilePage,
};
use crate::state::session::{Role, SessionSnapshot};
use crate::state::toast::ToastState;
use crate::util::session_store;

/// Role set for creator-only routes.
const CREATOR_ONLY: &[Role] = &[Role::Creator];

/// HTML shell rendered on the server for SSR + hydration.
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

/// Root application component.
///
/// Provides the session and toast contexts and sets up client-side routing.
/// The session signal is seeded from storage so a returning visitor is
/// recognized on first render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session_store::load());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/docai.css"/>
        <Title text="DocAi"/>

        <Router>
            <Navigation/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("templates") view=TemplatesPage/>
                    <Route
                        path=(StaticSegment("templates"), ParamSegment("id"))
                        view=TemplateDetailPage
                    />
                    <Route path=StaticSegment("ai-writer") view=AiWriterPage/>
                    <Route path=StaticSegment("resume-builder") view=ResumeBuilderPage/>
                    <Route path=StaticSegment("invoice-builder") view=InvoiceBuilderPage/>
                    <Route path=StaticSegment("letter-builder") view=LetterBuilderPage/>
                    <Route path=StaticSegment("become-creator") view=BecomeCreatorPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <Protected>
                                    <DashboardPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("creator-dashboard")
                        view=|| {
                            view! {
                                <Protected roles=CREATOR_ONLY>
                                    <CreatorDashboardPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <Protected>
                                    <UserProfilePage/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
