use serde::{Deserialize, Serialize};

/// Every view the navigator can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Explore,
    Dashboard,
    Organisms,
    About,
}

impl Route {
    /// Header order
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Dashboard,
        Route::Explore,
        Route::Organisms,
        Route::About,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Explore => "/explore",
            Route::Dashboard => "/dashboard",
            Route::Organisms => "/organisms",
            Route::About => "/about",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Explore => "Explore",
            Route::Dashboard => "Dashboard",
            Route::Organisms => "Organisms",
            Route::About => "About",
        }
    }

    /// Path for this route carrying a search query, e.g. `/dashboard?q=yeast`
    pub fn with_query(&self, query: &str) -> String {
        let query = query.trim();
        if query.is_empty() {
            self.path().to_string()
        } else {
            format!("{}?q={}", self.path(), urlencoding::encode(query))
        }
    }

    /// Next link in header order, wrapping around
    pub fn next(&self) -> Route {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous link in header order, wrapping around
    pub fn previous(&self) -> Route {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Map a path to its route. Total: anything unrecognised is `Home`.
///
/// Only the pathname counts; query string and fragment are ignored.
pub fn resolve_route(path: &str) -> Route {
    match pathname(path) {
        "/explore" => Route::Explore,
        "/dashboard" => Route::Dashboard,
        "/organisms" => Route::Organisms,
        "/about" => Route::About,
        _ => Route::Home,
    }
}

/// The part of a path before any `?` or `#`
pub fn pathname(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// URL-decoded value of a query parameter, if present
pub fn query_param(path: &str, key: &str) -> Option<String> {
    let without_fragment = path.split('#').next().unwrap_or_default();
    let (_, query) = without_fragment.split_once('?')?;

    query
        .split('&')
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then_some(v)
        })
        .next()
        .map(|v| {
            // Form-encoded spaces arrive as '+'
            let v = v.replace('+', " ");
            urlencoding::decode(&v)
                .map(|s| s.into_owned())
                .unwrap_or(v)
        })
}
