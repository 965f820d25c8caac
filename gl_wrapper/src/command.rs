/// Renderer-agnostic GL command stream.
///
/// Handles are raw GL names, so a stream can be built and inspected without a
/// live context and replayed later by [`crate::renderer::GlRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ClearColor([f32; 4]),
    ClearDepth(f32),
    EnableDepthTest(DepthFunc),
    Clear { color: bool, depth: bool },
    BindAttribute(AttributeBinding),
    UseProgram(u32),
    /// Column major, uploaded without transposing.
    UniformMatrix4 { location: i32, value: [f32; 16] },
    DrawArrays { mode: DrawMode, first: i32, count: i32 },
}

/// Tightly packed `f32` attribute read from the start of `buffer`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttributeBinding {
    pub location: u32,
    pub buffer: u32,
    pub components: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DepthFunc {
    Less,
    LessOrEqual,
    Always,
}

impl DepthFunc {
    pub fn gl_enum(&self) -> u32 {
        match self {
            DepthFunc::Less => gl::LESS,
            DepthFunc::LessOrEqual => gl::LEQUAL,
            DepthFunc::Always => gl::ALWAYS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawMode {
    Triangles,
    TriangleStrip,
}

impl DrawMode {
    pub fn gl_enum(&self) -> u32 {
        match self {
            DrawMode::Triangles => gl::TRIANGLES,
            DrawMode::TriangleStrip => gl::TRIANGLE_STRIP,
        }
    }
}
