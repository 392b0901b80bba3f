/// Name-keyed binding layouts
///
/// A `KeyedBindingLayout` stores reflected resources (buffers, sampled images)
/// by their unique shader name. Entries keep insertion order for stable
/// iteration, and a duplicate name is reported as an error instead of
/// overwriting the existing entry.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::engine_error;
use super::{AttributeLayout, BindingKey, ShaderStageFlags};

/// Name-keyed collection of binding records
#[derive(Debug, Clone)]
pub struct KeyedBindingLayout<T> {
    /// Entries stored by index, in insertion order
    entries: Vec<(String, T)>,
    /// Name to index mapping
    names: FxHashMap<String, usize>,
}

impl<T> Default for KeyedBindingLayout<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            names: FxHashMap::default(),
        }
    }
}

impl<T> KeyedBindingLayout<T> {
    /// Create an empty layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a binding with this name exists
    pub fn exists(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Get a binding by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.names.get(name).map(|&index| &self.entries[index].1)
    }

    /// Get a mutable binding by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let index = *self.names.get(name)?;
        Some(&mut self.entries[index].1)
    }

    /// Insert a new binding
    ///
    /// # Errors
    ///
    /// Returns `DuplicateBindingName` if a binding with the same name already
    /// exists. The stored binding is left unchanged.
    pub fn emplace(&mut self, name: impl Into<String>, value: T) -> Result<()> {
        let name = name.into();
        if self.names.contains_key(&name) {
            engine_error!("galaxy3d::KeyedBindingLayout",
                "Already have a binding layout called '{}'", name);
            return Err(Error::DuplicateBindingName(name));
        }

        self.names.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
        Ok(())
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, binding)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Binding names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// Full description of one uniform or storage buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpuBufferLayout {
    /// Where the buffer binds
    pub binding_key: BindingKey,
    /// Buffer members, in declaration order
    pub layout: AttributeLayout,
    /// Stages referencing the buffer
    pub stage_mask: ShaderStageFlags,
}

impl GpuBufferLayout {
    pub fn new(binding_key: BindingKey, layout: AttributeLayout, stage_mask: ShaderStageFlags) -> Self {
        Self {
            binding_key,
            layout,
            stage_mask,
        }
    }

    /// Size in bytes of the buffer contents
    pub fn size_bytes(&self) -> u32 {
        self.layout.total_size_bytes()
    }
}

#[cfg(test)]
#[path = "binding_layout_tests.rs"]
mod tests;
