//! Stack of active menus

use std::sync::Arc;

use tracing::{debug, trace};

use crate::menu::Menu;

/// Tracks which menu is active. The top-level menu is the floor of the
/// stack and is never removed, so there is always a menu to display.
pub struct MenuSession {
    top_level_menu: Arc<dyn Menu>,
    stack: Vec<Arc<dyn Menu>>,
    closed: bool,
}

impl MenuSession {
    pub fn new(top_level_menu: Arc<dyn Menu>) -> Self {
        Self {
            top_level_menu,
            stack: Vec::new(),
            closed: false,
        }
    }

    pub fn top_level_menu(&self) -> Arc<dyn Menu> {
        Arc::clone(&self.top_level_menu)
    }

    /// Make `menu` current. No depth limit is enforced.
    pub fn push(&mut self, menu: Arc<dyn Menu>) {
        self.stack.push(menu);
        trace!(depth = self.stack.len(), "Pushed menu");
    }

    /// Remove and return the current menu. On an empty stack the top-level
    /// menu is returned and nothing changes.
    pub fn pop(&mut self) -> Arc<dyn Menu> {
        match self.stack.pop() {
            Some(menu) => {
                trace!(depth = self.stack.len(), "Popped menu");
                menu
            }
            None => self.top_level_menu(),
        }
    }

    /// # Panics
    /// If the session has been closed.
    pub fn current(&self) -> Arc<dyn Menu> {
        assert!(!self.closed, "attempt to use menu session after closing");
        self.stack
            .last()
            .map(Arc::clone)
            .unwrap_or_else(|| self.top_level_menu())
    }

    /// Number of menus above the top-level menu
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_at_top_level(&self) -> bool {
        self.stack.is_empty()
    }

    /// Disable [`current`](Self::current). Idempotent; the stack is kept.
    pub fn close(&mut self) {
        if !self.closed {
            debug!(depth = self.stack.len(), "Closing menu session");
        }
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::StaticMenu;

    fn menu(name: &str) -> Arc<dyn Menu> {
        StaticMenu::builder().header(name).build_arc()
    }

    fn header_of(menu: &Arc<dyn Menu>) -> String {
        menu.header().unwrap_or_default()
    }

    #[test]
    fn test_current_defaults_to_top_level() {
        let session = MenuSession::new(menu("top"));
        assert_eq!(header_of(&session.current()), "top");
        assert!(session.is_at_top_level());
    }

    #[test]
    fn test_push_and_pop() {
        let mut session = MenuSession::new(menu("top"));
        session.push(menu("a"));
        session.push(menu("b"));
        assert_eq!(header_of(&session.current()), "b");
        assert_eq!(header_of(&session.pop()), "b");
        assert_eq!(header_of(&session.current()), "a");
        assert_eq!(header_of(&session.pop()), "a");
        assert!(session.is_at_top_level());
    }

    #[test]
    fn test_pop_on_empty_stack_is_idempotent_floor() {
        let mut session = MenuSession::new(menu("top"));
        for _ in 0..3 {
            assert_eq!(header_of(&session.pop()), "top");
            assert_eq!(session.depth(), 0);
        }
        assert_eq!(header_of(&session.current()), "top");
    }

    #[test]
    fn test_close_is_idempotent_and_keeps_stack() {
        let mut session = MenuSession::new(menu("top"));
        session.push(menu("a"));
        session.close();
        session.close();
        assert!(session.is_closed());
        assert_eq!(session.depth(), 1);
    }

    #[test]
    #[should_panic(expected = "after closing")]
    fn test_current_after_close_panics() {
        let mut session = MenuSession::new(menu("top"));
        session.close();
        session.current();
    }
}
