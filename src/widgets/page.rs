//! Markup buffer with named containers

use std::collections::HashMap;

use super::MarkupSink;

/// A page reduced to its containers and their current markup
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: HashMap<String, String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with empty containers for each id
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            containers: ids.into_iter().map(|id| (id.into(), String::new())).collect(),
        }
    }

    pub fn add_container(&mut self, id: impl Into<String>) {
        self.containers.entry(id.into()).or_default();
    }

    pub fn contents(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }
}

impl MarkupSink for Page {
    fn replace_contents(&mut self, container_id: &str, markup: &str) -> bool {
        match self.containers.get_mut(container_id) {
            Some(contents) => {
                contents.clear();
                contents.push_str(markup);
                true
            }
            None => false,
        }
    }
}
