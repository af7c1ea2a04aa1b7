//! Route constants shared between the views and the navigation callback.
//!
//! Navigation is dependency-injected: the root component owns the current
//! route and hands the pages a callback, so no component reads or writes a
//! global location.

/// The small set of views the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Bills,
    NewBill,
}

impl Route {
    /// Stable path string for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "/bills",
            Route::NewBill => "/bills/new",
        }
    }

    /// Parse a path back into a route. Unknown paths fall back to Login.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/bills" => Route::Bills,
            "/bills/new" => Route::NewBill,
            _ => Route::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [Route::Login, Route::Bills, Route::NewBill] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_login() {
        assert_eq!(Route::from_path("/nope"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
    }
}
