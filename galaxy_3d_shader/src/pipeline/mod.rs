/// Pipeline module - descriptors handed to pipeline creation

pub mod vertex;
pub mod binding_group;
pub mod pipeline_layout;

pub use vertex::*;
pub use binding_group::*;
pub use pipeline_layout::*;
