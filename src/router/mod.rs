//! # Navigation
//!
//! A static route table plus the session guard. Every call to [`Router::navigate`]
//! consults the guard exactly once and tells the caller which view to show.

pub mod guard;

pub use guard::{check, GuardDecision};

use crate::session::SessionStore;
use tracing::info;

/// The views a route can lead to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Products,
    Login,
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

/// Ordered list of routes plus the login entry point used for redirects.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    login_path: &'static str,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>, login_path: &'static str) -> Self {
        Self { routes, login_path }
    }

    /// `/` and `/products` behind login, `/login` open.
    pub fn standard() -> Self {
        Self::new(
            vec![
                Route {
                    path: "/",
                    name: "dashboard",
                    view: View::Dashboard,
                    requires_auth: true,
                },
                Route {
                    path: "/products",
                    name: "products",
                    view: View::Products,
                    requires_auth: true,
                },
                Route {
                    path: "/login",
                    name: "login",
                    view: View::Login,
                    requires_auth: false,
                },
            ],
            "/login",
        )
    }

    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn login_path(&self) -> &'static str {
        self.login_path
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Enter(Route),
    Redirect { to: &'static str },
    NotFound { path: String },
}

/// Resolves paths against the route table, guarded by the session.
#[derive(Clone)]
pub struct Router {
    table: RouteTable,
    session: SessionStore,
}

impl Router {
    pub fn new(table: RouteTable, session: SessionStore) -> Self {
        Self { table, session }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        let Some(route) = self.table.find(path) else {
            info!(path, "No such route");
            return Navigation::NotFound {
                path: path.to_string(),
            };
        };

        match check(route, &self.session) {
            GuardDecision::Proceed => {
                info!(path, view = ?route.view, "Navigate");
                Navigation::Enter(route.clone())
            }
            GuardDecision::RedirectToLogin => {
                info!(path, to = self.table.login_path, "Redirect");
                Navigation::Redirect {
                    to: self.table.login_path,
                }
            }
        }
    }
}
