//! How a cancellation unwinds the menu stack

use tracing::debug;

use crate::app::session::MenuSession;

/// Number of menus discarded when a cancellation reaches the application loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelHandler {
    /// Redisplay the current menu
    #[default]
    TryAgainAtMostRecentMenu,
    /// Pop the current menu
    PopMostRecentMenu,
    /// Pop this many menus. The top-level menu is never popped.
    PopMenus(usize),
}

impl CancelHandler {
    pub fn menus_to_pop(&self) -> usize {
        match self {
            CancelHandler::TryAgainAtMostRecentMenu => 0,
            CancelHandler::PopMostRecentMenu => 1,
            CancelHandler::PopMenus(count) => *count,
        }
    }

    /// Unwind `session`. Pops at most what is on the stack and never fails.
    pub fn apply(&self, session: &mut MenuSession) {
        let count = self.menus_to_pop();
        debug!(handler = ?self, depth = session.depth(), "Unwinding menu stack");
        for _ in 0..count {
            session.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Menu, StaticMenu};
    use std::sync::Arc;

    fn menu(name: &str) -> Arc<dyn Menu> {
        StaticMenu::builder().header(name).build_arc()
    }

    fn session_with_depth(depth: usize) -> MenuSession {
        let mut session = MenuSession::new(menu("top"));
        for level in 0..depth {
            session.push(menu(&format!("level {level}")));
        }
        session
    }

    #[test]
    fn test_try_again_keeps_stack() {
        let mut session = session_with_depth(2);
        CancelHandler::TryAgainAtMostRecentMenu.apply(&mut session);
        assert_eq!(session.depth(), 2);
    }

    #[test]
    fn test_pop_most_recent() {
        let mut session = session_with_depth(2);
        CancelHandler::PopMostRecentMenu.apply(&mut session);
        assert_eq!(session.depth(), 1);
        assert_eq!(session.current().header().as_deref(), Some("level 0"));
    }

    #[test]
    fn test_pop_menus_exactly_n() {
        let mut session = session_with_depth(3);
        CancelHandler::PopMenus(2).apply(&mut session);
        assert_eq!(session.depth(), 1);
    }

    #[test]
    fn test_pop_menus_stops_at_floor() {
        for depth in [0, 1] {
            let mut session = session_with_depth(depth);
            CancelHandler::PopMenus(2).apply(&mut session);
            assert_eq!(session.depth(), 0);
            assert_eq!(session.current().header().as_deref(), Some("top"));
        }
    }

    #[test]
    fn test_pop_zero_is_no_op() {
        let mut session = session_with_depth(1);
        CancelHandler::PopMenus(0).apply(&mut session);
        assert_eq!(session.depth(), 1);
    }
}
