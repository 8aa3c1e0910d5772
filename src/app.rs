//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{layout::Layout, not_found::NotFound};
use crate::net::backend::HttpBackend;
use crate::net::http::ApiClient;
use crate::pages::{
    answer::AnswerPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, question_sets::QuestionSetsPage,
    questions::QuestionsPage, signup::SignupPage,
};
use crate::routes::{PrivateRoute, PublicRoute, SessionReady};
use crate::state::auth::{self, AuthState};
use crate::state::questions::{QuestionState, QuestionStore};
use crate::util::storage::BrowserStorage;
use crate::util::task::spawn_browser;

/// Question store as provided to pages.
pub type QuestionContext = QuestionStore<RwSignal<QuestionState>, HttpBackend>;

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
/// Provides auth state, the question store and the HTTP backend, restores
/// the session from browser storage, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = HttpBackend::new(ApiClient::default());
    let auth = RwSignal::new(AuthState::default());
    let ready = RwSignal::new(false);
    let questions: QuestionContext = QuestionStore::new(RwSignal::new(QuestionState::default()), backend.clone());

    provide_context(auth);
    provide_context(SessionReady(ready));
    provide_context(questions);
    provide_context(backend.clone());

    // Browser only: pick up the stored token, then confirm it with the backend.
    Effect::new(move || {
        auth.set(AuthState::from_storage(&BrowserStorage));
        ready.set(true);
        let backend = backend.clone();
        spawn_browser(async move { auth::restore_session(&auth, &BrowserStorage, &backend).await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/prepmentor.css"/>
        <Title text="PrepMentor AI"/>

        <Router>
            <Layout>
                <Routes fallback=NotFound>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }/>
                    <Route path=StaticSegment("signup") view=|| view! { <PublicRoute><SignupPage/></PublicRoute> }/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <PrivateRoute><DashboardPage/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("question-sets")
                        view=|| view! { <PrivateRoute><QuestionSetsPage/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("questions")
                        view=|| view! { <PrivateRoute><QuestionsPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("answer"), ParamSegment("questionId"))
                        view=|| view! { <PrivateRoute><AnswerPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("answer"), ParamSegment("questionId"), ParamSegment("answerId"))
                        view=|| view! { <PrivateRoute><AnswerPage/></PrivateRoute> }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}
