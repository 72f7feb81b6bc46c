use tracing::debug;

use super::routes::{Route, LOGIN_PATH};
use crate::auth::Session;
use crate::messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(String),
}

/// Decide whether `route` may be entered.
///
/// Denial stages the login-required message on the session before
/// redirecting to the login route.
pub fn guard(route: &Route, session: &Session) -> GuardDecision {
    if route.requires_auth && !session.is_logged_in() {
        debug!(route = %route.name, "Route requires login, redirecting");
        session.stage_message(messages::LOGIN_REQUIRED);
        return GuardDecision::Redirect(LOGIN_PATH.to_string());
    }
    GuardDecision::Proceed
}
