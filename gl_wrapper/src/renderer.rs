use std::ffi::c_void;

use crate::command::{AttributeBinding, Command};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Width over height, `1.0` for a degenerate viewport.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width <= 0 || self.height <= 0 {
            return 1.0;
        }

        self.width as f32 / self.height as f32
    }
}

pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    pub fn viewport(&self) -> Viewport {
        let mut v = [0_i32; 4];

        unsafe {
            gl::GetIntegerv(gl::VIEWPORT, v.as_mut_ptr());
        }

        Viewport {
            x: v[0],
            y: v[1],
            width: v[2],
            height: v[3],
        }
    }

    pub fn execute(&mut self, commands: &[Command]) {
        for command in commands {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: &Command) {
        unsafe {
            match command {
                Command::ClearColor([r, g, b, a]) => gl::ClearColor(*r, *g, *b, *a),
                Command::ClearDepth(depth) => gl::ClearDepthf(*depth),
                Command::EnableDepthTest(func) => {
                    gl::Enable(gl::DEPTH_TEST);
                    gl::DepthFunc(func.gl_enum());
                }
                Command::Clear { color, depth } => {
                    let mut mask = 0;
                    if *color {
                        mask |= gl::COLOR_BUFFER_BIT;
                    }
                    if *depth {
                        mask |= gl::DEPTH_BUFFER_BIT;
                    }
                    gl::Clear(mask);
                }
                Command::BindAttribute(binding) => bind_attribute(binding),
                Command::UseProgram(program) => {
                    if self.current_program != *program {
                        gl::UseProgram(*program);
                        self.current_program = *program;
                    }
                }
                Command::UniformMatrix4 { location, value } => {
                    gl::UniformMatrix4fv(*location, 1, gl::FALSE, value.as_ptr());
                }
                Command::DrawArrays { mode, first, count } => {
                    gl::DrawArrays(mode.gl_enum(), *first, *count);
                }
            }
        }
    }
}

unsafe fn bind_attribute(binding: &AttributeBinding) {
    gl::BindBuffer(gl::ARRAY_BUFFER, binding.buffer);
    gl::VertexAttribPointer(
        binding.location,
        binding.components as i32,
        gl::FLOAT,
        gl::FALSE,
        0,
        std::ptr::null::<c_void>(),
    );
    gl::EnableVertexAttribArray(binding.location);
    gl::BindBuffer(gl::ARRAY_BUFFER, 0);
}
