/// Shader module - compiled stages and their reflected layouts

pub mod data_type;
pub mod layout;
pub mod binding_key;
pub mod binding_layout;
pub mod stage;
pub mod shader;

pub use data_type::*;
pub use layout::*;
pub use binding_key::*;
pub use binding_layout::*;
pub use stage::*;
pub use shader::*;
