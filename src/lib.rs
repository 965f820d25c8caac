pub mod frame;
pub mod logging;
pub mod program_info;
pub mod quad;
pub mod shaders;
pub mod transform;

pub use frame::build_frame;
pub use program_info::{ProgramInfo, ProgramInfoError};
pub use quad::{QuadBindings, QuadBuffers};
