//! Container stack
//!
//!     The menus currently open, from the root to the deepest submenu. Its length mirrors the
//!     indentation: a line at level `n` belongs to the container at index `n`. Dedenting is a
//!     truncation of the stack.

use super::error::ParseErrorKind;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ContainerStack<C> {
    open: Vec<C>,
}

impl<C> ContainerStack<C> {
    /// Start with only the root container open.
    pub fn new(root: C) -> Self {
        Self { open: vec![root] }
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// The container new nodes are added to.
    pub fn top(&self) -> &C {
        // The root is never popped: align() truncates to at least one element
        &self.open[self.open.len() - 1]
    }

    pub fn push(&mut self, container: C) {
        self.open.push(container);
        debug!(depth = self.open.len(), "opened submenu");
    }

    /// Make the stack match a node line at `level`.
    ///
    /// Returns how many containers were closed. A line may only go deeper by entering a
    /// submenu, so a level past the innermost open container is rejected.
    pub fn align(&mut self, level: usize) -> Result<usize, ParseErrorKind> {
        let wanted = level + 1;
        if wanted > self.open.len() {
            return Err(ParseErrorKind::OverIndent {
                level,
                max_level: self.open.len() - 1,
            });
        }
        let closed = self.open.len() - wanted;
        if closed > 0 {
            self.open.truncate(wanted);
            debug!(closed, depth = wanted, "closed submenus");
        }
        Ok(closed)
    }
}
