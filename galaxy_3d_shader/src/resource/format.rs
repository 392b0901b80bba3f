//! Resource format detection from file names
//!
//! Each resource category owns a table mapping file suffixes to formats. New
//! categories or suffixes are added by registering table entries on a
//! `FormatRegistry`; lookups of unknown suffixes are logged and answered with
//! `ResourceFormat::Unknown`.

use rustc_hash::FxHashMap;
use crate::engine_bail;
use crate::error::Result;
use crate::shader::ShaderLanguage;

/// Broad kind of resource a loader handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    Texture,
    Mesh,
    Shader,
}

/// Texture file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureType {
    Png,
    Jpg,
    Dds,
    Ktx,
}

/// Mesh file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshType {
    Obj,
    Gltf,
}

/// Detected resource format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceFormat {
    Texture(TextureType),
    Mesh(MeshType),
    Shader(ShaderLanguage),
    /// Suffix not registered for the requested category
    Unknown,
}

/// Suffix tables per resource category
///
/// Explicitly constructed and owned by the loaders that use it.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    tables: FxHashMap<ResourceCategory, FxHashMap<String, ResourceFormat>>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();

        registry.register(ResourceCategory::Texture, "png", ResourceFormat::Texture(TextureType::Png));
        registry.register(ResourceCategory::Texture, "jpg", ResourceFormat::Texture(TextureType::Jpg));
        registry.register(ResourceCategory::Texture, "jpeg", ResourceFormat::Texture(TextureType::Jpg));
        registry.register(ResourceCategory::Texture, "dds", ResourceFormat::Texture(TextureType::Dds));
        registry.register(ResourceCategory::Texture, "ktx", ResourceFormat::Texture(TextureType::Ktx));

        registry.register(ResourceCategory::Mesh, "obj", ResourceFormat::Mesh(MeshType::Obj));
        registry.register(ResourceCategory::Mesh, "gltf", ResourceFormat::Mesh(MeshType::Gltf));

        for suffix in ["glsl", "vert", "tesc", "tese", "geom", "frag", "comp"] {
            registry.register(ResourceCategory::Shader, suffix, ResourceFormat::Shader(ShaderLanguage::Glsl));
        }
        registry.register(ResourceCategory::Shader, "hlsl", ResourceFormat::Shader(ShaderLanguage::Hlsl));
        registry.register(ResourceCategory::Shader, "metal", ResourceFormat::Shader(ShaderLanguage::Metal));

        registry
    }
}

impl FormatRegistry {
    /// Registry with the engine's built-in formats
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry without any format
    pub fn empty() -> Self {
        Self {
            tables: FxHashMap::default(),
        }
    }

    /// Map a suffix (without the dot, case-insensitive) to a format
    ///
    /// Replaces any previous mapping of the suffix in this category.
    pub fn register(&mut self, category: ResourceCategory, suffix: &str, format: ResourceFormat) {
        self.tables
            .entry(category)
            .or_default()
            .insert(suffix.to_ascii_lowercase(), format);
    }

    /// Format of a file, detected from its suffix
    ///
    /// Unknown or missing suffixes are logged and yield `ResourceFormat::Unknown`.
    pub fn resource_format(&self, category: ResourceCategory, filename: &str) -> ResourceFormat {
        self.try_resource_format(category, filename)
            .unwrap_or(ResourceFormat::Unknown)
    }

    /// Format of a file, failing on unknown suffixes
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` if the file has no suffix or the suffix is not
    /// registered for `category`.
    pub fn try_resource_format(&self, category: ResourceCategory, filename: &str) -> Result<ResourceFormat> {
        let suffix = file_name_suffix(filename).map(|s| s.to_ascii_lowercase());
        let format = suffix.as_deref().and_then(|suffix| {
            self.tables.get(&category).and_then(|table| table.get(suffix)).copied()
        });

        match format {
            Some(format) => Ok(format),
            None => {
                engine_bail!("galaxy3d::FormatRegistry", UnsupportedFormat =>
                    "Unsupported {:?} format: '{}'", category, suffix.as_deref().unwrap_or(filename));
            }
        }
    }

    /// Whether a category has any registered suffix
    pub fn has_category(&self, category: ResourceCategory) -> bool {
        self.tables.get(&category).is_some_and(|table| !table.is_empty())
    }
}

/// Text after the last '.' of the file name, ignoring directories
fn file_name_suffix(filename: &str) -> Option<&str> {
    let file_name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match file_name.rsplit_once('.') {
        Some((_, suffix)) if !suffix.is_empty() => Some(suffix),
        _ => None,
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
