pub mod buffer;
pub mod command;
pub mod program;
pub mod renderer;
pub mod vertex_array;

pub use command::{Command, DepthFunc, DrawMode};
