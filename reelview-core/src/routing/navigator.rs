use tracing::debug;

use super::route::Route;

/// In-memory history stack.
///
/// Dismissing an overlay is the same operation as navigating back: exactly
/// one entry is popped, never a jump to a parent path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    root: Route,
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::home())
    }
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            root: initial,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Number of entries including the initial route.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn can_go_back(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn push(&mut self, route: Route) {
        debug!(route = %route, depth = self.depth() + 1, "navigate");
        self.stack.push(route);
    }

    /// Pop one entry. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            debug!("navigate back ignored at history root");
            return false;
        }
        let left = self.stack.pop();
        debug!(
            left = ?left.as_ref().map(Route::path),
            route = %self.current(),
            "navigate back"
        );
        true
    }
}
