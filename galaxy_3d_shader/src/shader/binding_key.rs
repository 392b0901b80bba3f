/// (descriptor set, binding slot) addressing
///
/// `BindingKey` stores both coordinates explicitly. The engine's historical
/// packed form `set * 10 + binding` is still available for serialized data and
/// older tooling, but it only round-trips for binding slots 0..=9.

use std::fmt;
use crate::error::{Error, Result};
use crate::engine_error;

/// Largest binding slot the packed encoding can represent
pub const MAX_PACKED_BINDING_SLOT: u32 = 9;

const PACKED_SET_STRIDE: u32 = MAX_PACKED_BINDING_SLOT + 1;

/// Encode a (set, binding) pair into the packed key
///
/// Total: a binding slot above 9 silently bleeds into the set index, and a
/// key past `u32::MAX` wraps around. Use `BindingKey::try_packed` when the
/// pair is not known to be in range.
pub fn encode_binding_key(set: u32, binding: u32) -> u32 {
    set.wrapping_mul(PACKED_SET_STRIDE).wrapping_add(binding)
}

/// Descriptor set index of a packed key
pub fn decode_set(key: u32) -> u32 {
    key / PACKED_SET_STRIDE
}

/// Binding slot of a packed key
pub fn decode_binding(key: u32) -> u32 {
    key % PACKED_SET_STRIDE
}

/// Where a shader-visible resource is bound
///
/// Ordered by set first, then binding, which is the order GPU binding tables
/// expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BindingKey {
    /// Descriptor set index (`layout(set = N)`)
    pub set: u32,
    /// Binding slot within the set (`layout(binding = N)`)
    pub binding: u32,
}

impl BindingKey {
    pub const fn new(set: u32, binding: u32) -> Self {
        Self { set, binding }
    }

    /// Decode a packed `set * 10 + binding` key
    pub fn from_packed(key: u32) -> Self {
        Self {
            set: decode_set(key),
            binding: decode_binding(key),
        }
    }

    /// Packed `set * 10 + binding` form
    ///
    /// Lossy when `fits_packed()` is false; see `try_packed`.
    pub fn packed(&self) -> u32 {
        encode_binding_key(self.set, self.binding)
    }

    /// Packed form, rejecting keys the encoding cannot represent
    ///
    /// # Errors
    ///
    /// `InvalidBindingSlot` if the binding slot is above
    /// `MAX_PACKED_BINDING_SLOT` or the packed value overflows a `u32`.
    pub fn try_packed(&self) -> Result<u32> {
        match self.checked_packed() {
            Some(key) => Ok(key),
            None => {
                engine_error!("galaxy3d::BindingKey",
                    "Key {} does not fit the packed form (binding slot limit {}, u32 range)",
                    self, MAX_PACKED_BINDING_SLOT);
                Err(Error::InvalidBindingSlot(*self))
            }
        }
    }

    /// Whether `packed()` round-trips for this key
    pub fn fits_packed(&self) -> bool {
        self.checked_packed().is_some()
    }

    fn checked_packed(&self) -> Option<u32> {
        if self.binding > MAX_PACKED_BINDING_SLOT {
            return None;
        }
        self.set.checked_mul(PACKED_SET_STRIDE)?.checked_add(self.binding)
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(set={}, binding={})", self.set, self.binding)
    }
}

#[cfg(test)]
#[path = "binding_key_tests.rs"]
mod tests;
