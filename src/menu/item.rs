//! Menu items and the common item factories

use std::fmt;
use std::sync::Arc;

use crate::app::session::MenuSession;
use crate::error::{MenuError, Result, DEFAULT_QUIT_MESSAGE};
use crate::menu::Menu;

/// Longest shortcut a menu item may carry
pub const MAX_SHORTCUT_LEN: usize = 2;

/// Action run when an item is selected. It may push or pop menus, or
/// raise a cancel or quit signal.
pub type MenuItemAction = Arc<dyn Fn(&mut MenuSession) -> Result<()> + Send + Sync>;

/// Text shown for an item
#[derive(Clone)]
pub enum Label {
    Static(String),
    /// Re-evaluated every time the item is displayed
    Dynamic(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Label {
    pub fn dynamic(generator: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Label::Dynamic(Arc::new(generator))
    }

    pub fn text(&self) -> String {
        match self {
            Label::Static(text) => text.clone(),
            Label::Dynamic(generator) => generator(),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Static(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Static(text)
    }
}

/// A single selectable entry of a menu. Immutable once built.
#[derive(Clone)]
pub struct MenuItem {
    label: Label,
    shortcut: Option<String>,
    action: MenuItemAction,
}

impl MenuItem {
    /// # Panics
    /// If `shortcut` is longer than two characters.
    pub fn new(
        label: impl Into<Label>,
        shortcut: Option<&str>,
        action: impl Fn(&mut MenuSession) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        if let Some(shortcut) = shortcut {
            assert!(
                shortcut.chars().count() <= MAX_SHORTCUT_LEN,
                "menu item shortcut '{shortcut}' is longer than {MAX_SHORTCUT_LEN} characters"
            );
        }
        Self {
            label: label.into(),
            shortcut: shortcut.map(str::to_string),
            action: Arc::new(action),
        }
    }

    pub fn label(&self) -> String {
        self.label.text()
    }

    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }

    /// Run the action against the session
    pub fn invoke(&self, session: &mut MenuSession) -> Result<()> {
        (self.action)(session)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shortcut {
            Some(shortcut) => write!(f, "{} ({})", self.label(), shortcut),
            None => write!(f, "{}", self.label()),
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label())
            .field("shortcut", &self.shortcut)
            .finish_non_exhaustive()
    }
}

pub fn item(
    label: impl Into<Label>,
    shortcut: Option<&str>,
    action: impl Fn(&mut MenuSession) -> Result<()> + Send + Sync + 'static,
) -> MenuItem {
    MenuItem::new(label, shortcut, action)
}

/// Run `intermediate` and stay on the current menu
pub fn take_action(
    label: impl Into<Label>,
    shortcut: Option<&str>,
    intermediate: impl Fn() -> Result<()> + Send + Sync + 'static,
) -> MenuItem {
    item(label, shortcut, move |_session| intermediate())
}

/// Run `intermediate`, then push whatever menu `to` maps its value to
pub fn take_action_and_push<T>(
    label: impl Into<Label>,
    shortcut: Option<&str>,
    intermediate: impl Fn() -> Result<T> + Send + Sync + 'static,
    to: impl Fn(T) -> Option<Arc<dyn Menu>> + Send + Sync + 'static,
) -> MenuItem {
    item(label, shortcut, move |session| {
        let value = intermediate()?;
        if let Some(menu) = to(value) {
            session.push(menu);
        }
        Ok(())
    })
}

/// Push the menu produced by `to`
pub fn push_menu(
    label: impl Into<Label>,
    shortcut: Option<&str>,
    to: impl Fn() -> Arc<dyn Menu> + Send + Sync + 'static,
) -> MenuItem {
    item(label, shortcut, move |session| {
        session.push(to());
        Ok(())
    })
}

/// Pop the session, then run `intermediate`
pub fn pop_menu_item(
    label: impl Into<Label>,
    shortcut: Option<&str>,
    intermediate: impl Fn() -> Result<()> + Send + Sync + 'static,
) -> MenuItem {
    item(label, shortcut, move |session| {
        session.pop();
        intermediate()
    })
}

/// "Back (b)"
pub fn back_item() -> MenuItem {
    pop_menu_item("Back", Some("b"), || Ok(()))
}

/// "Quit (q)" with the default farewell
pub fn quit_item() -> MenuItem {
    quit_item_with(DEFAULT_QUIT_MESSAGE)
}

/// "Quit (q)" raising the quit signal with `message`
pub fn quit_item_with(message: impl Into<String>) -> MenuItem {
    let message = message.into();
    item("Quit", Some("q"), move |_session| {
        Err(MenuError::Quit(message.clone()))
    })
}
