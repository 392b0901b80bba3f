/// Shader aggregate: compiled stages plus their reflected binding layouts
///
/// A `Shader` is filled by the shader compiler stage by stage, handed read-only
/// to pipeline creation (typically behind an `Arc`), and finally has its
/// binaries released once the device owns equivalent copies. Layout metadata
/// stays valid for the whole lifetime of the object.

use std::collections::BTreeSet;
use std::sync::LazyLock;
use crate::error::{Error, Result};
use crate::{engine_bail, engine_debug, engine_error, engine_warn};
use super::{
    AttributeLayout, BindingKey, GpuBufferLayout, KeyedBindingLayout,
    ShaderDataType, ShaderStage, ShaderStageFlags, NUM_SHADER_STAGES,
};

/// Answer for queries on stages that were never populated
static EMPTY_STAGE: LazyLock<StageRecord> = LazyLock::new(StageRecord::default);

// ===== SHADER LANGUAGE =====

/// Source shading language (informational only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShaderLanguage {
    #[default]
    Glsl,
    Hlsl,
    Metal,
    /// Unrecognized language tag
    Unknown,
}

impl ShaderLanguage {
    /// Parse a language tag such as "glsl", "hlsl" or "metal"
    ///
    /// Unrecognized tags are logged and yield `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        Self::try_from_tag(tag).unwrap_or(ShaderLanguage::Unknown)
    }

    /// Parse a language tag, failing with `UnsupportedFormat` on unknown tags
    pub fn try_from_tag(tag: &str) -> Result<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "glsl" => Ok(ShaderLanguage::Glsl),
            "hlsl" => Ok(ShaderLanguage::Hlsl),
            "metal" | "msl" => Ok(ShaderLanguage::Metal),
            _ => {
                engine_bail!("galaxy3d::Shader", UnsupportedFormat =>
                    "Unsupported shader language: '{}'", tag);
            }
        }
    }
}

// ===== CONFIG =====

/// Shader construction settings
#[derive(Debug, Clone)]
pub struct ShaderConfig {
    /// Entry point function name shared by all stages
    pub entry_point: String,
    /// Source shading language
    pub language: ShaderLanguage,
    /// Log a warning when a stage-specific query hits the wrong stage
    pub warn_on_stage_misuse: bool,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            entry_point: "main".to_string(),
            language: ShaderLanguage::Glsl,
            warn_on_stage_misuse: true,
        }
    }
}

// ===== STAGE RECORD =====

/// Compiled binary and reflected layouts of one shader stage
#[derive(Debug, Clone, Default)]
pub struct StageRecord {
    name: String,
    binary: Vec<u8>,
    input_layout: AttributeLayout,
    push_constant_layout: AttributeLayout,
    sampled_images: KeyedBindingLayout<BindingKey>,
}

impl StageRecord {
    fn new(name: String, binary: Vec<u8>) -> Self {
        Self {
            name,
            binary,
            ..Self::default()
        }
    }

    /// Stage name given by the compiler (usually the source file)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compiled bytes; empty after `Shader::release_binaries`
    pub fn binary(&self) -> &[u8] {
        &self.binary
    }

    /// Vertex inputs (only populated on the vertex stage)
    pub fn input_layout(&self) -> &AttributeLayout {
        &self.input_layout
    }

    /// Push constant block fields
    pub fn push_constant_layout(&self) -> &AttributeLayout {
        &self.push_constant_layout
    }

    /// Sampled images referenced by this stage
    pub fn sampled_images(&self) -> &KeyedBindingLayout<BindingKey> {
        &self.sampled_images
    }
}

// ===== BUFFER KIND =====

/// Program-wide buffer binding categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    Uniform,
    Storage,
}

// ===== SHADER =====

/// Multi-stage compiled shader program with reflection data
#[derive(Debug, Clone, Default)]
pub struct Shader {
    stages: [Option<StageRecord>; NUM_SHADER_STAGES],
    uniform_buffers: KeyedBindingLayout<GpuBufferLayout>,
    storage_buffers: KeyedBindingLayout<GpuBufferLayout>,
    set_indices: BTreeSet<u32>,
    config: ShaderConfig,
    binaries_released: bool,
}

impl Shader {
    /// Create an empty shader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shader with explicit settings
    pub fn with_config(config: ShaderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ===== ASSEMBLY =====

    /// Add the compiled binary of one stage
    ///
    /// # Errors
    ///
    /// - `DuplicateStage` if the stage already has a record
    /// - `InvalidLayout` if the binaries were already released
    pub fn add_stage(&mut self, stage: ShaderStage, name: impl Into<String>, binary: Vec<u8>) -> Result<()> {
        if self.binaries_released {
            engine_bail!("galaxy3d::Shader",
                "Cannot add {} stage after the binaries were released", stage);
        }
        let slot = &mut self.stages[stage.index()];
        if slot.is_some() {
            engine_error!("galaxy3d::Shader", "Shader already has a {} stage", stage);
            return Err(Error::DuplicateStage(stage));
        }

        let name = name.into();
        engine_debug!("galaxy3d::Shader",
            "Added {} stage '{}' ({} bytes)", stage, name, binary.len());
        *slot = Some(StageRecord::new(name, binary));
        Ok(())
    }

    /// Append one vertex input attribute, in location order
    ///
    /// # Errors
    ///
    /// `MisusedStageQuery` if `stage` is not the vertex stage or was never added.
    pub fn append_input_attribute(
        &mut self,
        stage: ShaderStage,
        data_type: ShaderDataType,
        name: impl Into<String>,
    ) -> Result<()> {
        if stage != ShaderStage::Vertex {
            engine_bail!("galaxy3d::Shader", MisusedStageQuery =>
                "Only vertex stage input attributes are collected, got {} stage", stage);
        }
        self.stage_record_mut(stage)?.input_layout.append(data_type, name);
        Ok(())
    }

    /// Append one push constant field of a stage, in declaration order
    pub fn append_push_constant(
        &mut self,
        stage: ShaderStage,
        data_type: ShaderDataType,
        name: impl Into<String>,
    ) -> Result<()> {
        self.stage_record_mut(stage)?.push_constant_layout.append(data_type, name);
        Ok(())
    }

    /// Register a sampled image used by a stage
    ///
    /// # Errors
    ///
    /// - `MisusedStageQuery` if the stage was never added
    /// - `DuplicateBindingName` if the stage already samples an image with this name
    pub fn add_sampled_image(&mut self, stage: ShaderStage, name: impl Into<String>, key: BindingKey) -> Result<()> {
        self.stage_record_mut(stage)?.sampled_images.emplace(name, key)?;
        self.set_indices.insert(key.set);
        Ok(())
    }

    /// Register a uniform or storage buffer
    ///
    /// # Errors
    ///
    /// `DuplicateBindingName` if a buffer of the same kind already has this name.
    pub fn add_buffer(&mut self, kind: BufferKind, name: impl Into<String>, buffer: GpuBufferLayout) -> Result<()> {
        let set = buffer.binding_key.set;
        self.buffers_mut(kind).emplace(name, buffer)?;
        self.set_indices.insert(set);
        Ok(())
    }

    /// Mark an existing buffer as referenced by one more stage
    ///
    /// # Errors
    ///
    /// - `MisusedStageQuery` if the stage was never added
    /// - `InvalidLayout` if no buffer of that kind has this name
    pub fn add_buffer_stage(&mut self, kind: BufferKind, name: &str, stage: ShaderStage) -> Result<()> {
        if !self.has_stage(stage) {
            engine_bail!("galaxy3d::Shader", MisusedStageQuery =>
                "Shader has no {} stage, add it before its bindings", stage);
        }
        match self.buffers_mut(kind).get_mut(name) {
            Some(buffer) => {
                buffer.stage_mask |= stage.flag();
                Ok(())
            }
            None => {
                engine_bail!("galaxy3d::Shader", "No {:?} buffer called '{}'", kind, name);
            }
        }
    }

    /// Release every stage's compiled binary
    ///
    /// Irreversible. Layout metadata remains queryable.
    pub fn release_binaries(&mut self) {
        let mut released = 0usize;
        for record in self.stages.iter_mut().flatten() {
            released += record.binary.len();
            record.binary = Vec::new();
        }
        self.binaries_released = true;
        engine_debug!("galaxy3d::Shader", "Released {} bytes of shader binaries", released);
    }

    // ===== STAGE QUERIES =====

    /// Record of a stage, if it was populated
    pub fn stage(&self, stage: ShaderStage) -> Option<&StageRecord> {
        self.stages[stage.index()].as_ref()
    }

    pub fn has_stage(&self, stage: ShaderStage) -> bool {
        self.stage(stage).is_some()
    }

    /// Populated stages, in pipeline order
    pub fn stages(&self) -> impl Iterator<Item = ShaderStage> + '_ {
        ShaderStage::ALL.into_iter().filter(move |stage| self.has_stage(*stage))
    }

    /// Mask of all populated stages
    pub fn stage_flags(&self) -> ShaderStageFlags {
        self.stages().fold(ShaderStageFlags::empty(), |flags, stage| flags | stage.flag())
    }

    /// Stage name, empty for stages never populated
    pub fn stage_name(&self, stage: ShaderStage) -> &str {
        self.stage_or_empty(stage).name()
    }

    /// Compiled bytes of a stage, empty if absent or released
    pub fn binary(&self, stage: ShaderStage) -> &[u8] {
        self.stage_or_empty(stage).binary()
    }

    /// Size in bytes of a stage's compiled binary
    pub fn binary_size(&self, stage: ShaderStage) -> usize {
        self.binary(stage).len()
    }

    /// Vertex input layout
    ///
    /// Only the vertex stage collects input attributes; other stages get an
    /// empty layout and a warning. Use `try_input_layout` to get an error instead.
    pub fn input_layout(&self, stage: ShaderStage) -> &AttributeLayout {
        match self.try_input_layout(stage) {
            Ok(layout) => layout,
            Err(_) => &EMPTY_STAGE.input_layout,
        }
    }

    /// Vertex input layout, rejecting non-vertex stages
    ///
    /// # Errors
    ///
    /// `MisusedStageQuery` if `stage` is not the vertex stage.
    pub fn try_input_layout(&self, stage: ShaderStage) -> Result<&AttributeLayout> {
        if stage != ShaderStage::Vertex {
            if self.config.warn_on_stage_misuse {
                engine_warn!("galaxy3d::Shader",
                    "Only vertex stage input attributes are collected, got {} stage", stage);
            }
            return Err(Error::MisusedStageQuery(format!(
                "input layout requested for {} stage", stage
            )));
        }
        Ok(self.stage_or_empty(stage).input_layout())
    }

    /// Push constant layout of a stage, empty if absent
    pub fn push_constant_layout(&self, stage: ShaderStage) -> &AttributeLayout {
        self.stage_or_empty(stage).push_constant_layout()
    }

    /// Sampled images of a stage, empty if absent
    pub fn sampled_images(&self, stage: ShaderStage) -> &KeyedBindingLayout<BindingKey> {
        self.stage_or_empty(stage).sampled_images()
    }

    // ===== PROGRAM-WIDE QUERIES =====

    /// Buffers of one kind
    pub fn buffers(&self, kind: BufferKind) -> &KeyedBindingLayout<GpuBufferLayout> {
        match kind {
            BufferKind::Uniform => &self.uniform_buffers,
            BufferKind::Storage => &self.storage_buffers,
        }
    }

    pub fn uniform_buffers(&self) -> &KeyedBindingLayout<GpuBufferLayout> {
        &self.uniform_buffers
    }

    pub fn storage_buffers(&self) -> &KeyedBindingLayout<GpuBufferLayout> {
        &self.storage_buffers
    }

    /// Every descriptor set index referenced by a binding, ascending
    pub fn set_indices(&self) -> &BTreeSet<u32> {
        &self.set_indices
    }

    pub fn entry_point(&self) -> &str {
        &self.config.entry_point
    }

    pub fn language(&self) -> ShaderLanguage {
        self.config.language
    }

    /// Whether `release_binaries` was called
    pub fn binaries_released(&self) -> bool {
        self.binaries_released
    }

    // ===== INTERNAL =====

    fn stage_or_empty(&self, stage: ShaderStage) -> &StageRecord {
        self.stage(stage).unwrap_or(&EMPTY_STAGE)
    }

    fn stage_record_mut(&mut self, stage: ShaderStage) -> Result<&mut StageRecord> {
        match self.stages[stage.index()].as_mut() {
            Some(record) => Ok(record),
            None => {
                engine_bail!("galaxy3d::Shader", MisusedStageQuery =>
                    "Shader has no {} stage, add it before its bindings", stage);
            }
        }
    }

    fn buffers_mut(&mut self, kind: BufferKind) -> &mut KeyedBindingLayout<GpuBufferLayout> {
        match kind {
            BufferKind::Uniform => &mut self.uniform_buffers,
            BufferKind::Storage => &mut self.storage_buffers,
        }
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
