/// Pipeline layout export
///
/// Turns the reflection data of a `Shader` into the API-agnostic descriptors a
/// backend needs to build its pipeline: vertex input layout, push constant
/// ranges and per-set binding group layouts. Sets are listed in ascending
/// order and each set's entries are sorted by binding number, which is the
/// order GPU binding tables expect.

use std::collections::BTreeMap;
use crate::error::Result;
use crate::{engine_bail, engine_trace};
use crate::shader::{BindingKey, BufferKind, Shader, ShaderStage, ShaderStageFlags};
use super::{
    BindingGroupLayoutDesc, BindingSlotDesc, BindingType, PushConstantRange,
    VertexAttribute, VertexBinding, VertexInputRate, VertexLayout,
};

/// Everything a backend needs to create a pipeline layout for a shader
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineLayoutDesc {
    /// One layout per referenced set, ascending by set index
    pub binding_groups: Vec<BindingGroupLayoutDesc>,
    /// Push constant ranges, in stage order
    pub push_constant_ranges: Vec<PushConstantRange>,
}

impl PipelineLayoutDesc {
    /// Build the layout description of a shader
    ///
    /// Resources with the same name, type and key in several stages are merged
    /// into one entry with combined stage flags.
    ///
    /// # Errors
    ///
    /// `BindingConflict` if two different resources share a (set, binding) pair.
    pub fn from_shader(shader: &Shader) -> Result<Self> {
        let mut slots: BTreeMap<BindingKey, BindingSlotDesc> = BTreeMap::new();

        for (kind, binding_type) in [
            (BufferKind::Uniform, BindingType::UniformBuffer),
            (BufferKind::Storage, BindingType::StorageBuffer),
        ] {
            for (name, buffer) in shader.buffers(kind).iter() {
                insert_slot(&mut slots, name, buffer.binding_key, binding_type, buffer.stage_mask)?;
            }
        }

        for stage in shader.stages() {
            for (name, key) in shader.sampled_images(stage).iter() {
                insert_slot(&mut slots, name, *key, BindingType::CombinedImageSampler, stage.flag())?;
            }
        }

        let mut binding_groups: Vec<BindingGroupLayoutDesc> = Vec::new();
        for (key, slot) in slots {
            match binding_groups.last_mut() {
                Some(group) if group.set == key.set => group.entries.push(slot),
                _ => binding_groups.push(BindingGroupLayoutDesc {
                    set: key.set,
                    entries: vec![slot],
                }),
            }
        }

        engine_trace!("galaxy3d::PipelineLayout",
            "Exported {} binding groups for stages {:?}", binding_groups.len(), shader.stage_flags());

        Ok(Self {
            binding_groups,
            push_constant_ranges: shader.push_constant_ranges(),
        })
    }

    /// Layout of one set, if the shader references it
    pub fn binding_group(&self, set: u32) -> Option<&BindingGroupLayoutDesc> {
        self.binding_groups.iter().find(|group| group.set == set)
    }

    /// Number of set layouts a pipeline layout must declare, unused sets in between included
    pub fn set_layout_count(&self) -> u32 {
        self.binding_groups.last().map_or(0, |group| group.set + 1)
    }
}

fn insert_slot(
    slots: &mut BTreeMap<BindingKey, BindingSlotDesc>,
    name: &str,
    key: BindingKey,
    binding_type: BindingType,
    stage_flags: ShaderStageFlags,
) -> Result<()> {
    if let Some(existing) = slots.get_mut(&key) {
        if existing.name != name || existing.binding_type != binding_type {
            engine_bail!("galaxy3d::PipelineLayout", BindingConflict =>
                "'{}' ({:?}) and '{}' ({:?}) are both bound at {}",
                existing.name, existing.binding_type, name, binding_type, key);
        }
        existing.stage_flags |= stage_flags;
        return Ok(());
    }

    slots.insert(key, BindingSlotDesc {
        name: name.to_string(),
        binding: key.binding,
        binding_type,
        count: 1,
        stage_flags,
    });
    Ok(())
}

impl Shader {
    /// Vertex input layout for a single interleaved vertex buffer
    ///
    /// Attribute locations follow declaration order and the stride is the
    /// input layout's total size. A shader without vertex inputs yields an
    /// empty layout.
    ///
    /// # Errors
    ///
    /// `InvalidLayout` if an input has a type with no vertex format (matrices, bool).
    pub fn vertex_layout(&self, binding: u32, input_rate: VertexInputRate) -> Result<VertexLayout> {
        let inputs = self.input_layout(ShaderStage::Vertex);
        if inputs.is_empty() {
            return Ok(VertexLayout::default());
        }

        let mut attributes = Vec::with_capacity(inputs.count());
        for (location, element) in inputs.iter().enumerate() {
            let Some(format) = element.data_type().buffer_format() else {
                engine_bail!("galaxy3d::PipelineLayout",
                    "Vertex input '{}' has type {:?} which has no vertex format",
                    element.name(), element.data_type());
            };
            attributes.push(VertexAttribute {
                location: location as u32,
                binding,
                format,
                offset: element.offset_bytes(),
            });
        }

        Ok(VertexLayout {
            bindings: vec![VertexBinding {
                binding,
                stride: inputs.total_size_bytes(),
                input_rate,
            }],
            attributes,
        })
    }

    /// One push constant range per stage that declares push constants
    pub fn push_constant_ranges(&self) -> Vec<PushConstantRange> {
        self.stages()
            .filter_map(|stage| {
                let layout = self.push_constant_layout(stage);
                if layout.is_empty() {
                    return None;
                }
                Some(PushConstantRange {
                    stages: stage.flag(),
                    offset: 0,
                    size: layout.total_size_bytes(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "pipeline_layout_tests.rs"]
mod tests;
