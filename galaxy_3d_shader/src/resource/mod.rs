//! Resource module
//!
//! Format detection shared by the texture, mesh and shader loaders.

pub mod format;

pub use format::{
    FormatRegistry, ResourceCategory, ResourceFormat,
    TextureType, MeshType,
};
