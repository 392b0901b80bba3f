/// Binding group layout descriptors
///
/// A binding group is Galaxy3D's abstraction over a GPU descriptor set. The
/// layouts here are derived from shader reflection; the backend creates the
/// actual GPU layout object from them.

use crate::shader::{BindingKey, ShaderStageFlags};

/// Type of resource bound at a given slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingType {
    /// Uniform buffer (read-only structured data)
    UniformBuffer,
    /// Combined image sampler (texture + sampler in one binding)
    CombinedImageSampler,
    /// Storage buffer (read/write structured data)
    StorageBuffer,
}

/// Description of a single binding slot within a binding group layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSlotDesc {
    /// Resource name in the shader
    pub name: String,
    /// Binding number (corresponds to `layout(binding = N)` in GLSL)
    pub binding: u32,
    /// Type of resource at this binding
    pub binding_type: BindingType,
    /// Number of descriptors at this binding (>1 for arrays)
    pub count: u32,
    /// Shader stages that access this binding
    pub stage_flags: ShaderStageFlags,
}

/// Layout of one descriptor set, entries sorted by binding number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingGroupLayoutDesc {
    /// Descriptor set index (corresponds to `layout(set = N)` in GLSL)
    pub set: u32,
    /// Binding slot descriptions, ascending by binding
    pub entries: Vec<BindingSlotDesc>,
}

impl BindingGroupLayoutDesc {
    /// Entry at a binding number
    pub fn entry(&self, binding: u32) -> Option<&BindingSlotDesc> {
        self.entries.iter().find(|entry| entry.binding == binding)
    }

    /// Entry addressed by a full key, if it belongs to this set
    pub fn entry_for_key(&self, key: BindingKey) -> Option<&BindingSlotDesc> {
        if key.set != self.set {
            return None;
        }
        self.entry(key.binding)
    }
}

/// Push constant range descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushConstantRange {
    /// Shader stages that can access these push constants
    pub stages: ShaderStageFlags,
    /// Offset in bytes
    pub offset: u32,
    /// Size in bytes
    pub size: u32,
}
