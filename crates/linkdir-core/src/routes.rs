// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Route table
//
// Four static routes, clean (history-mode) URLs, no parameters.

/// A navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    ManageLinks,
    ManageCategories,
}

impl Route {
    /// Every route, in table order
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Login,
        Route::ManageLinks,
        Route::ManageCategories,
    ];

    /// Path relative to the router base
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::ManageLinks => "/manage",
            Self::ManageCategories => "/manage-category",
        }
    }

    /// Stable route name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::ManageLinks => "manage",
            Self::ManageCategories => "manage-category",
        }
    }

    /// Exact path lookup
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

/// Maps browser URLs to routes under an optional base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    /// Normalised base: "" for the site root, otherwise "/prefix" without a trailing slash
    base: String,
}

impl Router {
    /// Create a router serving from `base` (for example "/" or "/links/")
    pub fn new(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        let base = if base.is_empty() || base.starts_with('/') {
            base.to_string()
        } else {
            format!("/{}", base)
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        if self.base.is_empty() {
            "/"
        } else {
            &self.base
        }
    }

    /// Resolve a URL path (query and fragment allowed) to a route
    pub fn resolve(&self, url_path: &str) -> Option<Route> {
        let path = url_path
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();

        let relative = if self.base.is_empty() {
            path
        } else {
            let rest = path.strip_prefix(self.base.as_str())?;
            // "/base" alone is the home page; "/basement" is not under "/base"
            if rest.is_empty() {
                "/"
            } else if rest.starts_with('/') {
                rest
            } else {
                return None;
            }
        };

        let relative = match relative.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => relative,
        };

        let route = Route::from_path(relative);
        if route.is_none() {
            tracing::debug!("No route matches {:?}", url_path);
        }
        route
    }

    /// Full URL path for a route, including the base
    pub fn href(&self, route: Route) -> String {
        match route {
            Route::Home if !self.base.is_empty() => format!("{}/", self.base),
            _ => format!("{}{}", self.base, route.path()),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}
