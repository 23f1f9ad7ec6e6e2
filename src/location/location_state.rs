//! Location state
//!
//! The status bar's answer to a browser location: the page source name plus
//! the current fragment. The hash is written after a scroll animation
//! settles (deferred) or by a default jump (immediate); nothing else
//! mutates it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationState {
    /// Display name of the page source (file name or "stdin")
    pub source: String,
    /// Current raw hash including the leading `#`, if any
    hash: Option<String>,
}

impl LocationState {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            hash: None,
        }
    }

    /// Replace the visible fragment with the given raw hash
    pub fn set_hash(&mut self, hash: impl Into<String>) {
        self.hash = Some(hash.into());
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Status bar text: `source` or `source#fragment`
    pub fn display(&self) -> String {
        match &self.hash {
            Some(hash) => format!("{}{}", self.source, hash),
            None => self.source.clone(),
        }
    }
}

#[cfg(test)]
#[path = "location_state_tests.rs"]
mod location_state_tests;
