//! Route guards for authenticated and auth-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards read the token from `AuthState`, not the user, so a reload with a
//! stored token stays on the page while the profile is still loading.
//!
//! The token lives in browser storage, which server renders cannot see.
//! Guards render nothing until `SessionReady` flips after hydration, so the
//! server and the first client render agree.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;

/// Set once the browser has loaded the stored token into `AuthState`.
#[derive(Clone, Copy, Debug)]
pub struct SessionReady(pub RwSignal<bool>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Requires a token; otherwise go to `/login`.
    Private,
    /// Only for signed-out users; otherwise go to `/dashboard`.
    Public,
}

/// Where a guard sends the user, or `None` to render the page.
pub fn guard_redirect(kind: GuardKind, has_token: bool) -> Option<&'static str> {
    match (kind, has_token) {
        (GuardKind::Private, false) => Some("/login"),
        (GuardKind::Public, true) => Some("/dashboard"),
        _ => None,
    }
}

#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Private, children)
}

#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Public, children)
}

fn guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let SessionReady(ready) = expect_context::<SessionReady>();
    move || {
        if !ready.get() {
            return EitherOf3::A(());
        }
        match guard_redirect(kind, auth.with(AuthState::is_authenticated)) {
            Some(path) => EitherOf3::B(view! { <Redirect path=path/> }),
            None => EitherOf3::C(children()),
        }
    }
}
