//! Menus: ordered, numbered lists of actions with optional shortcuts
//!
//! A menu renders as an optional header line, one `"%2d. <item>"` line per
//! item and then the prompt text with no trailing newline. The caller maps
//! the next line of input back to an item with [`Menu::select`].

pub mod item;
pub mod multi_select;
pub mod scrolling;

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::error::Result;
use crate::io::OutPrinter;

pub use item::{
    back_item, item, pop_menu_item, push_menu, quit_item, quit_item_with, take_action,
    take_action_and_push, Label, MenuItem, MenuItemAction,
};
pub use multi_select::MultiSelection;
pub use scrolling::{
    list_fetcher, PageFetcher, PageStrategy, ScrollingMenu, SingleSelection, DEFAULT_PAGE_SIZE,
};

/// Prompt shown under every menu unless overridden
pub const DEFAULT_PROMPT: &str = "Enter selection: ";

/// Generates optional header text
pub type HeaderFn = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Shortcut lookup table of a menu
#[derive(Debug, Clone, Default)]
pub struct ShortcutMap(HashMap<String, MenuItem>);

impl ShortcutMap {
    /// # Panics
    /// If two items share a shortcut.
    pub fn from_items(items: &[MenuItem]) -> Self {
        let mut map = Self::default();
        for item in items {
            map.insert(item);
        }
        map
    }

    /// # Panics
    /// If the item's shortcut is already taken.
    pub fn insert(&mut self, item: &MenuItem) {
        if let Some(shortcut) = item.shortcut() {
            let previous = self.0.insert(shortcut.to_string(), item.clone());
            assert!(
                previous.is_none(),
                "shortcut '{shortcut}' is used by more than one menu item"
            );
        }
    }

    pub fn get(&self, shortcut: &str) -> Option<&MenuItem> {
        self.0.get(shortcut)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A renderable, selectable list of actions
pub trait Menu: Send + Sync {
    fn header(&self) -> Option<String> {
        None
    }

    fn prompt(&self) -> String {
        DEFAULT_PROMPT.to_string()
    }

    /// The complete item list. Called on every render so content may change.
    fn items(&self) -> Vec<MenuItem>;

    /// Shortcut table for the items just rendered
    fn shortcuts(&self, rendered: &[MenuItem]) -> ShortcutMap {
        ShortcutMap::from_items(rendered)
    }

    /// Write the menu and return the items in display order
    fn render(&self, output: &dyn OutPrinter) -> Result<Vec<MenuItem>> {
        let items = self.items();
        output.print(&format_menu(self.header().as_deref(), &items))?;
        output.print(&self.prompt())?;
        Ok(items)
    }

    /// Resolve `input` against the items just rendered: shortcut first,
    /// then a 1-based index. Anything else selects nothing.
    fn select(&self, rendered: &[MenuItem], input: &str) -> Option<MenuItem> {
        if let Some(item) = self.shortcuts(rendered).get(input) {
            return Some(item.clone());
        }
        input
            .parse::<usize>()
            .ok()
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| rendered.get(index))
            .cloned()
    }
}

/// Header line plus numbered items, without the prompt
pub fn format_menu<T: std::fmt::Display>(header: Option<&str>, items: &[T]) -> String {
    let mut text = String::new();
    if let Some(header) = header {
        text.push_str(header);
        text.push('\n');
    }
    for (index, item) in items.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = writeln!(text, "{:2}. {}", index + 1, item);
    }
    text
}

/// A menu with a fixed item list
pub struct StaticMenu {
    header: HeaderFn,
    prompt: String,
    items: Vec<MenuItem>,
    shortcut_map: ShortcutMap,
}

impl StaticMenu {
    pub fn builder() -> StaticMenuBuilder {
        StaticMenuBuilder::default()
    }
}

impl Menu for StaticMenu {
    fn header(&self) -> Option<String> {
        (self.header)()
    }

    fn prompt(&self) -> String {
        self.prompt.clone()
    }

    fn items(&self) -> Vec<MenuItem> {
        self.items.clone()
    }

    fn shortcuts(&self, _rendered: &[MenuItem]) -> ShortcutMap {
        self.shortcut_map.clone()
    }
}

/// Builder for [`StaticMenu`]
pub struct StaticMenuBuilder {
    header: HeaderFn,
    prompt: String,
    items: Vec<MenuItem>,
    shortcut_map: ShortcutMap,
}

impl Default for StaticMenuBuilder {
    fn default() -> Self {
        Self {
            header: Arc::new(|| None),
            prompt: DEFAULT_PROMPT.to_string(),
            items: Vec::new(),
            shortcut_map: ShortcutMap::default(),
        }
    }
}

impl StaticMenuBuilder {
    pub fn header(self, header: impl Into<String>) -> Self {
        let header = header.into();
        self.header_with(move || Some(header.clone()))
    }

    pub fn header_with(mut self, header: impl Fn() -> Option<String> + Send + Sync + 'static) -> Self {
        self.header = Arc::new(header);
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// # Panics
    /// If the item's shortcut is already used in this menu.
    pub fn add(mut self, item: MenuItem) -> Self {
        self.shortcut_map.insert(&item);
        self.items.push(item);
        self
    }

    pub fn build(self) -> StaticMenu {
        StaticMenu {
            header: self.header,
            prompt: self.prompt,
            items: self.items,
            shortcut_map: self.shortcut_map,
        }
    }

    pub fn build_arc(self) -> Arc<dyn Menu> {
        Arc::new(self.build())
    }
}
