//! Navigation capability
//!
//! The host router is abstracted as something that knows the current path and
//! can move to a new one. Language switches always replace the current
//! history entry.

/// Options for a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl NavigateOptions {
    pub const REPLACE: NavigateOptions = NavigateOptions { replace: true };
    pub const PUSH: NavigateOptions = NavigateOptions { replace: false };
}

/// Router seen from the locale engine
pub trait Navigator {
    /// Path currently shown
    fn current_path(&self) -> String;

    /// Move to `path`
    fn navigate(&mut self, path: &str, options: NavigateOptions);
}

/// Navigation request recorded by [`MemoryNavigator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRecord {
    pub path: String,
    pub options: NavigateOptions,
}

/// In-memory history stack
///
/// Used by headless hosts and tests. Every request is recorded in order.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    history: Vec<String>,
    requests: Vec<NavigationRecord>,
}

impl MemoryNavigator {
    pub fn new(initial_path: &str) -> Self {
        Self {
            history: vec![initial_path.to_string()],
            requests: Vec::new(),
        }
    }

    /// History entries, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Navigation requests received, oldest first
    pub fn requests(&self) -> &[NavigationRecord] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&NavigationRecord> {
        self.requests.last()
    }

    /// Drop the newest entry, as a browser back button would
    ///
    /// Returns the path now shown, or `None` when already at the first entry.
    pub fn back(&mut self) -> Option<String> {
        if self.history.len() > 1 {
            self.history.pop();
            self.history.last().cloned()
        } else {
            None
        }
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.history.last().cloned().unwrap_or_default()
    }

    fn navigate(&mut self, path: &str, options: NavigateOptions) {
        if options.replace {
            match self.history.last_mut() {
                Some(current) => *current = path.to_string(),
                None => self.history.push(path.to_string()),
            }
        } else {
            self.history.push(path.to_string());
        }

        self.requests.push(NavigationRecord {
            path: path.to_string(),
            options,
        });
    }
}
