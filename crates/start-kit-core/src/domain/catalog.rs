//! The template catalog.
//!
//! A [`TemplateCatalog`] is assembled once at startup (built-in entries plus
//! any configured extras) and then shared read-only. There is no API to
//! mutate a catalog after construction.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// One catalog entry: where a template lives and how to present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    /// Short identifier used on the command line (`--template start-kit`).
    pub key: String,
    #[serde(rename = "name")]
    pub display_name: String,
    /// Remote repository address handed to `git clone`.
    #[serde(rename = "repo")]
    pub source_location: String,
    #[serde(default)]
    pub description: String,
}

impl TemplateDescriptor {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        source_location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            source_location: source_location.into(),
            description: description.into(),
        }
    }

    /// Label shown in the template selection prompt.
    pub fn label(&self) -> String {
        format!("{} - {}", self.display_name, self.description)
    }
}

/// Immutable, ordered key → descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    entries: Vec<TemplateDescriptor>,
}

impl TemplateCatalog {
    /// Build a catalog from entries in presentation order.
    ///
    /// A later entry with an already-seen key replaces the earlier one in
    /// place, so configured templates can override built-ins without
    /// reordering the prompt.
    pub fn new(entries: impl IntoIterator<Item = TemplateDescriptor>) -> Result<Self, DomainError> {
        let mut merged: Vec<TemplateDescriptor> = Vec::new();
        for entry in entries {
            match merged.iter_mut().find(|existing| existing.key == entry.key) {
                Some(existing) => *existing = entry,
                None => merged.push(entry),
            }
        }

        if merged.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        Ok(Self { entries: merged })
    }

    pub fn get(&self, key: &str) -> Option<&TemplateDescriptor> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Like [`Self::get`], but a miss is a [`DomainError::TemplateNotFound`].
    pub fn resolve(&self, key: &str) -> Result<&TemplateDescriptor, DomainError> {
        self.get(key).ok_or_else(|| DomainError::TemplateNotFound {
            key: key.to_string(),
            available: self.keys().map(str::to_string).collect(),
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateCatalog {
    type Item = &'a TemplateDescriptor;
    type IntoIter = std::slice::Iter<'a, TemplateDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
