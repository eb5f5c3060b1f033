//! Navigation guards over the auth slice.
//!
//! A guard answers "may the user enter this route?"; on refusal it
//! redirects through the navigator and returns `false`. Guards never
//! dispatch actions.

use formkit_model::UserRole;
use formkit_platform::Navigator;

use crate::selectors;
use crate::store::Store;

/// Gate a route on being signed in.
///
/// Unauthenticated users are redirected to `/login` with the attempted
/// url carried as `returnUrl`.
pub fn auth_guard(store: &Store, navigator: &dyn Navigator, attempted_url: &str) -> bool {
    if store.select(selectors::is_authenticated) {
        return true;
    }
    navigator.navigate_to(&format!("/login?returnUrl={attempted_url}"));
    false
}

/// Gate a route on holding one of `allowed_roles`.
///
/// Signed-out users go to `/login`; signed-in users lacking the role go
/// to `/unauthorized`.
pub fn role_guard(
    store: &Store,
    navigator: &dyn Navigator,
    attempted_url: &str,
    allowed_roles: &[UserRole],
) -> bool {
    match store.select(selectors::current_user) {
        None => {
            navigator.navigate_to(&format!("/login?returnUrl={attempted_url}"));
            false
        }
        Some(user) if allowed_roles.contains(&user.role) => true,
        Some(user) => {
            tracing::debug!(user = %user.username, attempted_url, "role refused");
            navigator.navigate_to("/unauthorized");
            false
        }
    }
}

/// Gate a route on the admin role.
pub fn admin_guard(store: &Store, navigator: &dyn Navigator, attempted_url: &str) -> bool {
    role_guard(store, navigator, attempted_url, &[UserRole::Admin])
}
