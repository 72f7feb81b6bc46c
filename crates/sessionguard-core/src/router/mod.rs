//! Client-side routing with an authentication guard.
//!
//! The `Router` resolves a location against the `RouteTable`, runs the
//! guard before entering it and records where navigation ended up.
//! Redirects issued from outside the router go through the `Navigator`
//! trait so non-browser front ends can supply their own mechanism.

pub mod guard;
pub mod routes;

use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tracing::{debug, warn};

pub use guard::{guard, GuardDecision};
pub use routes::{Route, RouteTable, LOGIN_PATH};

use crate::auth::Session;

/// Guarded routes only ever redirect to open ones, but a custom table
/// could loop; bail out after this many hops.
const MAX_REDIRECTS: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("Too many redirects navigating to {0}")]
    RedirectLoop(String),
}

/// Full navigation to a path, replacing whatever the user was looking at.
pub trait Navigator: Send + Sync {
    fn redirect_to(&self, path: &str);
}

pub struct Router {
    routes: RouteTable,
    session: Arc<Session>,
    current: Mutex<Option<Route>>,
}

impl Router {
    pub fn new(routes: RouteTable, session: Arc<Session>) -> Self {
        Self {
            routes,
            session,
            current: Mutex::new(None),
        }
    }

    /// Router over the web app's route table.
    pub fn with_app_routes(session: Arc<Session>) -> Self {
        Self::new(RouteTable::app_routes(), session)
    }

    /// Navigate to `location`, returning the route actually entered.
    pub fn navigate(&self, location: &str) -> Result<Route, RouteError> {
        let mut target = location.to_string();
        for _ in 0..=MAX_REDIRECTS {
            let route = self
                .routes
                .resolve(&target)
                .ok_or_else(|| RouteError::NotFound(target.clone()))?;

            match guard(route, &self.session) {
                GuardDecision::Proceed => {
                    debug!(route = %route.name, "Navigated");
                    let route = route.clone();
                    *self.current.lock().unwrap_or_else(PoisonError::into_inner) =
                        Some(route.clone());
                    return Ok(route);
                }
                GuardDecision::Redirect(path) => target = path,
            }
        }
        Err(RouteError::RedirectLoop(location.to_string()))
    }

    pub fn current(&self) -> Option<Route> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

impl Navigator for Router {
    fn redirect_to(&self, path: &str) {
        if let Err(e) = self.navigate(path) {
            warn!(path, error = %e, "Redirect failed");
        }
    }
}

/// Navigator that only records where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<String> {
        self.history().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to(&self, path: &str) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
