//! Paged menus over a list of values
//!
//! A [`ScrollingMenu`] shows at most `limit` values starting at `offset`.
//! What each value turns into is decided by a [`PageStrategy`]: a plain
//! [`SingleSelection`] or a [`MultiSelection`](super::MultiSelection).
//! Navigation items are added in a fixed order: "Next Items" when the page
//! is full, "Previous Items" when `offset > 0`, the strategy's own items,
//! caller-supplied extras, then "Back" and "Quit".

use std::fmt;
use std::sync::Arc;

use crate::app::session::MenuSession;
use crate::error::{Result, DEFAULT_QUIT_MESSAGE};
use crate::menu::item::{back_item, item, quit_item_with, MenuItem};
use crate::menu::{HeaderFn, Menu, ShortcutMap, DEFAULT_PROMPT};

/// Shortcuts of the navigation items every page may show
const NAVIGATION_SHORTCUTS: [&str; 4] = ["n", "p", "b", "q"];

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Fetches up to `limit` values starting at `offset`
pub type PageFetcher<T> = Arc<dyn Fn(usize, usize) -> Vec<T> + Send + Sync>;

/// Turns a page of values into selectable items
pub trait PageStrategy<T>: Send + Sync {
    fn header(&self) -> Option<String>;

    fn page_items(&self, page: Vec<T>) -> Vec<MenuItem>;

    /// Items placed after the paging controls and before the caller's extras
    fn strategy_items(&self) -> Vec<MenuItem> {
        Vec::new()
    }
}

/// Fetcher that pages through a fixed list
pub fn list_fetcher<T>(values: Vec<T>) -> PageFetcher<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(move |limit, offset| {
        values
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    })
}

/// One page of a paged menu
pub struct ScrollingMenu<T> {
    prompt: String,
    quit_message: String,
    limit: usize,
    offset: usize,
    fetch: PageFetcher<T>,
    extra_items: Vec<MenuItem>,
    strategy: Arc<dyn PageStrategy<T>>,
}

impl<T> Clone for ScrollingMenu<T> {
    fn clone(&self) -> Self {
        Self {
            prompt: self.prompt.clone(),
            quit_message: self.quit_message.clone(),
            limit: self.limit,
            offset: self.offset,
            fetch: Arc::clone(&self.fetch),
            extra_items: self.extra_items.clone(),
            strategy: Arc::clone(&self.strategy),
        }
    }
}

impl<T: 'static> ScrollingMenu<T> {
    /// # Panics
    /// If `limit` is zero.
    pub fn new(
        limit: usize,
        fetch: PageFetcher<T>,
        strategy: impl PageStrategy<T> + 'static,
    ) -> Self {
        assert!(limit > 0, "limit must be > 0");
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            quit_message: DEFAULT_QUIT_MESSAGE.to_string(),
            limit,
            offset: 0,
            fetch,
            extra_items: Vec::new(),
            strategy: Arc::new(strategy),
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Farewell carried by the "Quit" item of this page and the pages after it
    pub fn quit_message(mut self, message: impl Into<String>) -> Self {
        self.quit_message = message.into();
        self
    }

    /// Items shown after the selection controls and before "Back"
    ///
    /// # Panics
    /// If an extra item reuses a navigation or strategy shortcut, or two
    /// extras share one.
    pub fn extra_items(mut self, items: Vec<MenuItem>) -> Self {
        let strategy_items = self.strategy.strategy_items();
        let mut reserved: Vec<&str> = NAVIGATION_SHORTCUTS.to_vec();
        reserved.extend(strategy_items.iter().filter_map(|control| control.shortcut()));
        for extra in &items {
            if let Some(shortcut) = extra.shortcut() {
                assert!(
                    !reserved.contains(&shortcut),
                    "shortcut '{shortcut}' of extra item '{}' is reserved by the paged menu",
                    extra.label()
                );
            }
        }
        ShortcutMap::from_items(&items);
        self.extra_items = items;
        self
    }

    pub fn limit_value(&self) -> usize {
        self.limit
    }

    pub fn offset_value(&self) -> usize {
        self.offset
    }

    /// The page after this one
    pub fn next_page(&self) -> Self {
        self.clone().offset(self.offset + self.limit)
    }

    /// The page before this one, clamped at the first page
    pub fn previous_page(&self) -> Self {
        self.clone().offset(self.offset.saturating_sub(self.limit))
    }

    fn replace_with(page: ScrollingMenu<T>) -> impl Fn(&mut MenuSession) -> Result<()> {
        move |session: &mut MenuSession| {
            session.pop();
            session.push(Arc::new(page.clone()));
            Ok(())
        }
    }
}

impl<T: 'static> Menu for ScrollingMenu<T> {
    fn header(&self) -> Option<String> {
        self.strategy.header()
    }

    fn prompt(&self) -> String {
        self.prompt.clone()
    }

    fn items(&self) -> Vec<MenuItem> {
        let page = (self.fetch)(self.limit, self.offset);
        let mut items = self.strategy.page_items(page);
        if items.len() == self.limit {
            items.push(item(
                "Next Items",
                Some("n"),
                Self::replace_with(self.next_page()),
            ));
        }
        if self.offset > 0 {
            items.push(item(
                "Previous Items",
                Some("p"),
                Self::replace_with(self.previous_page()),
            ));
        }
        items.extend(self.strategy.strategy_items());
        items.extend(self.extra_items.iter().cloned());
        items.push(back_item());
        items.push(quit_item_with(self.quit_message.clone()));
        items
    }
}

/// Runs an action on the one value the user picks
pub struct SingleSelection<T> {
    header: HeaderFn,
    label: Arc<dyn Fn(&T) -> String + Send + Sync>,
    act: Arc<dyn Fn(&mut MenuSession, &T) -> Result<()> + Send + Sync>,
}

impl<T: fmt::Display + 'static> SingleSelection<T> {
    /// Values are labeled with their `Display` text
    pub fn new(
        act: impl Fn(&mut MenuSession, &T) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self::with_label(|value: &T| value.to_string(), act)
    }
}

impl<T> SingleSelection<T> {
    pub fn with_label(
        label: impl Fn(&T) -> String + Send + Sync + 'static,
        act: impl Fn(&mut MenuSession, &T) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: Arc::new(|| None),
            label: Arc::new(label),
            act: Arc::new(act),
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        let header = header.into();
        self.header = Arc::new(move || Some(header.clone()));
        self
    }
}

impl<T: Send + Sync + 'static> PageStrategy<T> for SingleSelection<T> {
    fn header(&self) -> Option<String> {
        (self.header)()
    }

    fn page_items(&self, page: Vec<T>) -> Vec<MenuItem> {
        page.into_iter()
            .map(|value| {
                let label = (self.label)(&value);
                let act = Arc::clone(&self.act);
                item(label, None, move |session| act(session, &value))
            })
            .collect()
    }
}
