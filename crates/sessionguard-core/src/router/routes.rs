use serde::Serialize;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PROBLEM_PATH: &str = "/problem";
pub const CHECK_PATH: &str = "/check";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub name: String,
    pub path: String,
    pub requires_auth: bool,
}

impl Route {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            requires_auth: false,
        }
    }

    pub fn requiring_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The web app's routes. `/problem` and `/check` need a login.
    pub fn app_routes() -> Self {
        Self::new(vec![
            Route::new("home", HOME_PATH),
            Route::new("login", LOGIN_PATH),
            Route::new("register", REGISTER_PATH),
            Route::new("problem", PROBLEM_PATH).requiring_auth(),
            Route::new("check", CHECK_PATH).requiring_auth(),
        ])
    }

    /// Match a location against the table, ignoring query, fragment and
    /// a trailing slash.
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let path = normalize(location);
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    match path.trim_end_matches('/') {
        "" => HOME_PATH,
        trimmed => trimmed,
    }
}
