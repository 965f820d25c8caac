use gl_wrapper::buffer::{BufferError, VertexAttribute, VertexBuffer};
use gl_wrapper::command::AttributeBinding;
use gl_wrapper::vertex_array::VertexArray;

/// Corner positions in triangle strip order.
#[rustfmt::skip]
pub const POSITIONS: [f32; 8] = [
    1.0, 1.0,
    -1.0, 1.0,
    1.0, -1.0,
    -1.0, -1.0,
];

/// Per-corner RGBA, matching [`POSITIONS`].
#[rustfmt::skip]
pub const COLORS: [f32; 16] = [
    1.0, 1.0, 1.0, 1.0, // white
    1.0, 0.0, 0.0, 1.0, // red
    0.0, 1.0, 0.0, 1.0, // green
    0.0, 0.0, 1.0, 1.0, // blue
];

pub const VERTEX_COUNT: usize = 4;

/// Static position and color buffers of the quad.
pub struct QuadBuffers {
    position: VertexBuffer,
    color: VertexBuffer,
    // bound for as long as the buffers live
    _vao: VertexArray,
}

impl QuadBuffers {
    pub fn new() -> Result<Self, BufferError> {
        let vao = VertexArray::new();
        vao.bind();

        let position = VertexBuffer::new(&POSITIONS, VertexAttribute::Vec2)?;
        let color = VertexBuffer::new(&COLORS, VertexAttribute::Vec4)?;

        log::debug!(
            "uploaded quad buffers (position {}, color {})",
            position.id(),
            color.id()
        );

        Ok(Self {
            position,
            color,
            _vao: vao,
        })
    }

    pub fn bindings(&self) -> QuadBindings {
        QuadBindings {
            position: BufferBinding {
                buffer: self.position.id(),
                components: self.position.components(),
            },
            color: BufferBinding {
                buffer: self.color.id(),
                components: self.color.components(),
            },
            vertices: self.position.vertices(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BufferBinding {
    pub buffer: u32,
    pub components: usize,
}

impl BufferBinding {
    pub fn at(&self, location: u32) -> AttributeBinding {
        AttributeBinding {
            location,
            buffer: self.buffer,
            components: self.components,
        }
    }
}

/// GL names and layouts of [`QuadBuffers`], detached from their lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadBindings {
    pub position: BufferBinding,
    pub color: BufferBinding,
    pub vertices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_wrapper::buffer::vertex_count;

    #[test]
    fn positions_test() {
        assert_eq!(POSITIONS, [1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn colors_test() {
        let corners: Vec<&[f32]> = COLORS.chunks(4).collect();

        assert_eq!(
            corners,
            [
                &[1.0, 1.0, 1.0, 1.0][..],
                &[1.0, 0.0, 0.0, 1.0][..],
                &[0.0, 1.0, 0.0, 1.0][..],
                &[0.0, 0.0, 1.0, 1.0][..],
            ]
        );
    }

    #[test]
    fn layouts_agree_on_vertex_count() {
        assert_eq!(vertex_count(&POSITIONS, VertexAttribute::Vec2), Ok(VERTEX_COUNT));
        assert_eq!(vertex_count(&COLORS, VertexAttribute::Vec4), Ok(VERTEX_COUNT));
    }

    #[test]
    fn binding_at_location() {
        let binding = BufferBinding {
            buffer: 7,
            components: 4,
        };

        assert_eq!(
            binding.at(1),
            AttributeBinding {
                location: 1,
                buffer: 7,
                components: 4,
            }
        );
    }
}
