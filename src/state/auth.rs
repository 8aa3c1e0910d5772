//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the navbar read this state; the login page and navbar
//! logout are the only writers besides session restore on startup.
//!
//! ERROR HANDLING
//! ==============
//! A failed profile fetch during restore is not surfaced: the session is
//! dropped and the stored token removed, so the guards send the user to
//! `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::StateCell;
use crate::net::backend::Backend;
use crate::net::types::{LoginSession, User};
use crate::util::storage::{TokenStorage, clear_token, load_token, save_token};

/// Current user, bearer token and whether the profile fetch is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// State at startup: the stored token is visible immediately so guards
    /// do not bounce a reload to `/login` while the profile loads.
    pub fn from_storage<S: TokenStorage + ?Sized>(storage: &S) -> Self {
        let token = load_token(storage);
        Self {
            loading: token.is_some(),
            token,
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}

/// Store the session and persist its token.
pub fn login<C, S>(cell: &C, storage: &S, session: LoginSession)
where
    C: StateCell<AuthState>,
    S: TokenStorage + ?Sized,
{
    save_token(storage, &session.token);
    log::info!("signed in as {}", session.user.email);
    cell.modify(|state| {
        state.user = Some(session.user);
        state.token = Some(session.token);
        state.loading = false;
    });
}

/// Drop the session and the persisted token.
pub fn logout<C, S>(cell: &C, storage: &S)
where
    C: StateCell<AuthState>,
    S: TokenStorage + ?Sized,
{
    clear_token(storage);
    cell.modify(|state| *state = AuthState::default());
}

/// Re-populate the user from a persisted token with one profile fetch.
pub async fn restore_session<C, S, B>(cell: &C, storage: &S, backend: &B)
where
    C: StateCell<AuthState>,
    S: TokenStorage + ?Sized,
    B: Backend,
{
    let Some(token) = load_token(storage) else {
        cell.modify(|state| *state = AuthState::default());
        return;
    };
    cell.modify(|state| {
        state.token = Some(token.clone());
        state.loading = true;
    });

    match backend.profile(&token).await {
        // Ignore a profile that arrives after the user signed out.
        Ok(user) => cell.modify(|state| {
            if state.token.as_deref() == Some(token.as_str()) {
                state.user = Some(user);
                state.loading = false;
            }
        }),
        // A rejection only demotes the session that owns the checked token.
        Err(e) => {
            if cell.snapshot().token.as_deref() != Some(token.as_str()) {
                log::info!("ignoring profile failure for a replaced session: {e}");
                return;
            }
            if e.is_unauthorized() {
                log::warn!("stored token rejected, signing out: {e}");
            } else {
                log::warn!("session restore failed, signing out: {e}");
            }
            logout(cell, storage);
        }
    }
}
