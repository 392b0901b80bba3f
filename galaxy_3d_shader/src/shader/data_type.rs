/// Shader data types and their packed byte sizes
///
/// Vector and matrix sizes are taken from the matching `glam` types, so a
/// `Float3` is exactly as large as the `glam::Vec3` a CPU-side struct would use.

use std::mem::size_of;
use glam::{IVec2, IVec3, IVec4, Mat3, Mat4, UVec4, Vec2, Vec3, Vec4};
use crate::pipeline::BufferFormat;
use crate::engine_error;

/// Abstract scalar/vector/matrix type tag produced by shader reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum ShaderDataType {
    /// Unknown or not yet resolved
    #[default]
    Undefined = 0,
    Float,
    Float2,
    Float3,
    Float4,
    Mat3,
    Mat4,
    Int,
    Int2,
    Int3,
    Int4,
    /// Four 8-bit normalized lanes packed in one 32-bit word
    Unorm4,
    UInt4,
    Bool,
}

impl ShaderDataType {
    /// Every tag, in raw value order
    pub const ALL: [ShaderDataType; 14] = [
        ShaderDataType::Undefined,
        ShaderDataType::Float,
        ShaderDataType::Float2,
        ShaderDataType::Float3,
        ShaderDataType::Float4,
        ShaderDataType::Mat3,
        ShaderDataType::Mat4,
        ShaderDataType::Int,
        ShaderDataType::Int2,
        ShaderDataType::Int3,
        ShaderDataType::Int4,
        ShaderDataType::Unorm4,
        ShaderDataType::UInt4,
        ShaderDataType::Bool,
    ];

    /// Returns the packed size in bytes of this type
    ///
    /// `Undefined` is 0; callers must treat 0 as "unusable".
    pub fn size_bytes(&self) -> u32 {
        let size = match self {
            ShaderDataType::Undefined => 0,
            ShaderDataType::Float => size_of::<f32>(),
            ShaderDataType::Float2 => size_of::<Vec2>(),
            ShaderDataType::Float3 => size_of::<Vec3>(),
            ShaderDataType::Float4 => size_of::<Vec4>(),
            ShaderDataType::Mat3 => size_of::<Mat3>(),
            ShaderDataType::Mat4 => size_of::<Mat4>(),
            ShaderDataType::Int => size_of::<i32>(),
            ShaderDataType::Int2 => size_of::<IVec2>(),
            ShaderDataType::Int3 => size_of::<IVec3>(),
            ShaderDataType::Int4 => size_of::<IVec4>(),
            ShaderDataType::Unorm4 => size_of::<u32>(),
            ShaderDataType::UInt4 => size_of::<UVec4>(),
            ShaderDataType::Bool => size_of::<bool>(),
        };
        size as u32
    }

    /// Decode a raw tag value coming from the compiler
    ///
    /// Unrecognized values are logged and mapped to `Undefined`.
    pub fn from_raw(raw: u32) -> Self {
        match Self::ALL.get(raw as usize) {
            Some(data_type) => *data_type,
            None => {
                engine_error!("galaxy3d::ShaderDataType", "Unknown shader data type: {}", raw);
                ShaderDataType::Undefined
            }
        }
    }

    /// Decode a reflection type name (GLSL and HLSL spellings)
    ///
    /// Unrecognized names are logged and mapped to `Undefined`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "float" => ShaderDataType::Float,
            "vec2" | "float2" => ShaderDataType::Float2,
            "vec3" | "float3" => ShaderDataType::Float3,
            "vec4" | "float4" => ShaderDataType::Float4,
            "mat3" | "float3x3" => ShaderDataType::Mat3,
            "mat4" | "float4x4" => ShaderDataType::Mat4,
            "int" => ShaderDataType::Int,
            "ivec2" | "int2" => ShaderDataType::Int2,
            "ivec3" | "int3" => ShaderDataType::Int3,
            "ivec4" | "int4" => ShaderDataType::Int4,
            "unorm4" => ShaderDataType::Unorm4,
            "uvec4" | "uint4" => ShaderDataType::UInt4,
            "bool" => ShaderDataType::Bool,
            _ => {
                engine_error!("galaxy3d::ShaderDataType", "Unknown shader data type: '{}'", tag);
                ShaderDataType::Undefined
            }
        }
    }

    /// Vertex attribute format for this type, if it can feed a vertex input
    pub fn buffer_format(&self) -> Option<BufferFormat> {
        match self {
            ShaderDataType::Float => Some(BufferFormat::R32_SFLOAT),
            ShaderDataType::Float2 => Some(BufferFormat::R32G32_SFLOAT),
            ShaderDataType::Float3 => Some(BufferFormat::R32G32B32_SFLOAT),
            ShaderDataType::Float4 => Some(BufferFormat::R32G32B32A32_SFLOAT),
            ShaderDataType::Int => Some(BufferFormat::R32_SINT),
            ShaderDataType::Int2 => Some(BufferFormat::R32G32_SINT),
            ShaderDataType::Int3 => Some(BufferFormat::R32G32B32_SINT),
            ShaderDataType::Int4 => Some(BufferFormat::R32G32B32A32_SINT),
            ShaderDataType::Unorm4 => Some(BufferFormat::R8G8B8A8_UNORM),
            ShaderDataType::UInt4 => Some(BufferFormat::R32G32B32A32_UINT),
            ShaderDataType::Undefined
            | ShaderDataType::Mat3
            | ShaderDataType::Mat4
            | ShaderDataType::Bool => None,
        }
    }
}

/// Size in bytes of a raw data type tag
///
/// Total: unknown tags are logged and yield 0.
pub fn shader_data_type_to_size(raw: u32) -> u32 {
    ShaderDataType::from_raw(raw).size_bytes()
}

#[cfg(test)]
#[path = "data_type_tests.rs"]
mod tests;
