//! Selecting several values across pages
//!
//! The selection set is shared by every page produced from the same
//! [`MultiSelection`], so picks survive "Next Items" and "Previous Items".
//! Membership is by equality, not by position.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::app::session::MenuSession;
use crate::error::Result;
use crate::menu::item::{item, Label, MenuItem};
use crate::menu::scrolling::{PageFetcher, PageStrategy, ScrollingMenu};

type SelectedAction<T> = Arc<dyn Fn(&mut MenuSession, Vec<T>) -> Result<()> + Send + Sync>;

/// Toggles values in and out of a shared selection
pub struct MultiSelection<T> {
    selected: Arc<Mutex<Vec<T>>>,
    fetch: PageFetcher<T>,
    label: Arc<dyn Fn(&T) -> String + Send + Sync>,
    action_label: Label,
    act_on_selected: SelectedAction<T>,
}

impl<T> MultiSelection<T>
where
    T: fmt::Display + Clone + PartialEq + Send + Sync + 'static,
{
    /// `fetch` also backs "Select All", which requests every value at once
    pub fn new(
        fetch: PageFetcher<T>,
        act_on_selected: impl Fn(&mut MenuSession, Vec<T>) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            selected: Arc::new(Mutex::new(Vec::new())),
            fetch,
            label: Arc::new(|value: &T| value.to_string()),
            action_label: Label::from("Take Action"),
            act_on_selected: Arc::new(act_on_selected),
        }
    }

    pub fn label_with(mut self, label: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.label = Arc::new(label);
        self
    }

    pub fn action_label(mut self, label: impl Into<Label>) -> Self {
        self.action_label = label.into();
        self
    }

    /// Wrap in a paged menu starting at the first page
    pub fn into_menu(self, limit: usize) -> ScrollingMenu<T> {
        let fetch = Arc::clone(&self.fetch);
        ScrollingMenu::new(limit, fetch, self)
    }

    /// Snapshot of the current selection in selection order
    pub fn selected(&self) -> Vec<T> {
        lock(&self.selected).clone()
    }

    /// Handle to the shared selection
    pub fn selection(&self) -> Arc<Mutex<Vec<T>>> {
        Arc::clone(&self.selected)
    }
}

fn lock<T>(selected: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    selected.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T> PageStrategy<T> for MultiSelection<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn header(&self) -> Option<String> {
        Some(format!("Selected Items: ({})", lock(&self.selected).len()))
    }

    fn page_items(&self, page: Vec<T>) -> Vec<MenuItem> {
        let chosen = lock(&self.selected).clone();
        page.into_iter()
            .map(|value| {
                let mark = if chosen.contains(&value) { "x" } else { " " };
                let label = format!("[{}] {}", mark, (self.label)(&value));
                let selected = Arc::clone(&self.selected);
                item(label, None, move |_session| {
                    let mut selected = lock(&selected);
                    match selected.iter().position(|v| *v == value) {
                        Some(index) => {
                            selected.remove(index);
                        }
                        None => selected.push(value.clone()),
                    }
                    trace!(count = selected.len(), "Toggled selection");
                    Ok(())
                })
            })
            .collect()
    }

    fn strategy_items(&self) -> Vec<MenuItem> {
        let take = {
            let selected = Arc::clone(&self.selected);
            let act = Arc::clone(&self.act_on_selected);
            item(self.action_label.clone(), None, move |session| {
                let chosen = lock(&selected).clone();
                act(session, chosen)
            })
        };
        let select_all = {
            let selected = Arc::clone(&self.selected);
            let fetch = Arc::clone(&self.fetch);
            item("Select All", Some("s"), move |_session| {
                let everything = fetch(usize::MAX, 0);
                let mut selected = lock(&selected);
                for value in everything {
                    if !selected.contains(&value) {
                        selected.push(value);
                    }
                }
                Ok(())
            })
        };
        let deselect_all = {
            let selected = Arc::clone(&self.selected);
            item("Deselect All", Some("d"), move |_session| {
                lock(&selected).clear();
                Ok(())
            })
        };
        vec![take, select_all, deselect_all]
    }
}
