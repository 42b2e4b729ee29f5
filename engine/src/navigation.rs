//! Two-route stack navigator.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Initial route: the meditation catalog.
    Catalog,
    /// Presented modally over the catalog.
    Paywall,
}

impl Route {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Route::Catalog => "Catalog",
            Route::Paywall => "Paywall",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Pushed,
    /// The route was already on the stack; everything above it was popped.
    PoppedTo,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    /// Never empty; the bottom entry is always [`Route::Catalog`].
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Catalog],
        }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Catalog)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Navigate to `route`, reusing an existing stack entry when there is one.
    pub fn navigate(&mut self, route: Route) -> NavOutcome {
        if self.current() == route {
            return NavOutcome::Unchanged;
        }
        let outcome = if let Some(pos) = self.stack.iter().position(|r| *r == route) {
            self.stack.truncate(pos + 1);
            NavOutcome::PoppedTo
        } else {
            self.stack.push(route);
            NavOutcome::Pushed
        };
        tracing::debug!(route = route.name(), ?outcome, "Navigated");
        outcome
    }

    /// Pop the top route. The root is never popped.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let popped = self.stack.pop();
        tracing::debug!(
            from = popped.map(Route::name),
            to = self.current().name(),
            "Navigated back"
        );
        true
    }
}
