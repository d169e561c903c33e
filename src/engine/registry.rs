use std::collections::BTreeMap;

/// Name-to-handle table for loaded assets.
#[derive(Clone, Debug)]
pub struct Registry<H> {
    entries: BTreeMap<String, H>,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<H: Copy> Registry<H> {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` under `name`, returning the handle it replaced.
    pub fn insert(&mut self, name: impl Into<String>, handle: H) -> Option<H> {
        self.entries.insert(name.into(), handle)
    }

    /// Handle registered under `name`.
    pub fn get(&self, name: &str) -> Option<H> {
        self.entries.get(name).copied()
    }

    /// Forget `name`.
    pub fn remove(&mut self, name: &str) -> Option<H> {
        self.entries.remove(name)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Nothing registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Textures by name.
pub type TextureRegistry = Registry<crate::foundation::ids::TextureHandle>;

/// Sounds by name.
pub type SoundRegistry = Registry<crate::foundation::ids::SoundHandle>;
