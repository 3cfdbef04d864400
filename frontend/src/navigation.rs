//! yew-router binding for the gate's redirect.

use crate::Route;
use shared::Router;
use yew_router::prelude::*;

/// Route for a path, falling back to the home page for unknown paths
pub fn route_for(path: &str) -> Route {
    Route::recognize(path).unwrap_or(Route::Home)
}

/// [`Router`] backed by the yew-router navigator.
///
/// Redirects use `replace`, so the protected page does not stay in history.
pub struct NavigatorRouter {
    navigator: Option<Navigator>,
}

impl NavigatorRouter {
    pub fn new(navigator: Option<Navigator>) -> Self {
        Self { navigator }
    }
}

impl Router for NavigatorRouter {
    fn replace_navigation(&self, path: &str) {
        match &self.navigator {
            Some(navigator) => navigator.replace(&route_for(path)),
            None => log::error!("No router in context, cannot redirect to {}", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_for() {
        assert_eq!(route_for("/"), Route::Home);
        assert_eq!(route_for("/dashboard"), Route::Dashboard);
    }
}
