//! Name filtering
//!
//! Filters produce a new view of a collection; the collection itself is never
//! touched. Matching is a literal, case-sensitive substring test on the name,
//! and an empty needle matches everything.

use crate::argocd::{Application, ResourceNode};
use crate::tui::registry::HelpEntry;

/// Anything that can be filtered by name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Application {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ResourceNode {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for HelpEntry {
    fn name(&self) -> &str {
        &self.description
    }
}

/// Items whose name contains `needle`, in their original order
pub fn filter_by_name<T: Named + Clone>(items: &[T], needle: &str) -> Vec<T> {
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.name().contains(needle))
        .cloned()
        .collect()
}

/// Surfaces that carry their own filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTarget {
    AppTable,
    MainTable,
    Help,
}

impl FilterTarget {
    pub fn label(&self) -> &'static str {
        match self {
            FilterTarget::AppTable => "applications",
            FilterTarget::MainTable => "resources",
            FilterTarget::Help => "help",
        }
    }
}

/// Current filter of each filterable surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    apps: String,
    main: String,
    help: String,
}

impl FilterState {
    pub fn get(&self, target: FilterTarget) -> &str {
        match target {
            FilterTarget::AppTable => &self.apps,
            FilterTarget::MainTable => &self.main,
            FilterTarget::Help => &self.help,
        }
    }

    pub fn set(&mut self, target: FilterTarget, value: impl Into<String>) {
        *self.slot(target) = value.into();
    }

    /// Clear a filter; returns whether one was active
    pub fn clear(&mut self, target: FilterTarget) -> bool {
        let slot = self.slot(target);
        let was_active = !slot.is_empty();
        slot.clear();
        was_active
    }

    pub fn is_active(&self, target: FilterTarget) -> bool {
        !self.get(target).is_empty()
    }

    fn slot(&mut self, target: FilterTarget) -> &mut String {
        match target {
            FilterTarget::AppTable => &mut self.apps,
            FilterTarget::MainTable => &mut self.main,
            FilterTarget::Help => &mut self.help,
        }
    }
}
