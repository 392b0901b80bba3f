/*!
# Galaxy 3D Shader

Shader reflection records and layout descriptions for the Galaxy 3D rendering engine.

A `Shader` gathers up to six compiled stages together with the data reflected
from them: vertex input attributes, push constants, sampled images and the
uniform/storage buffers shared between stages. The layouts computed here are
handed to pipeline creation as backend-agnostic descriptors.

## Architecture

- **ShaderDataType**: Scalar/vector/matrix types with their byte sizes
- **AttributeLayout**: Ordered elements with computed offsets and total size
- **BindingKey**: (set, binding) slot, with the legacy packed `set * 10 + binding` codec
- **KeyedBindingLayout**: Name-keyed collections rejecting duplicate names
- **Shader**: Per-stage records plus shared buffer layouts
- **PipelineLayoutDesc**: Binding groups and push constant ranges derived from a shader
- **FormatRegistry**: File suffix to resource format tables
*/

// Internal modules
mod error;
pub mod log;
pub mod shader;
pub mod pipeline;
pub mod resource;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Shader assembly entry point
    pub use crate::shader::Shader;

    // Logging sub-module (types and registration, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger,
        };
    }

    // Shader sub-module with reflection types
    pub mod shader {
        pub use crate::shader::*;
    }

    // Pipeline sub-module with layout descriptors
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

// Re-export math library at crate root
pub use glam;
