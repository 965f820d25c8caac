use std::ffi::c_void;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexAttribute {
    Vec2,
    Vec4,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec4 => 4,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("Invalid data length for given attribute")]
    InvalidDataLength,
    #[error("Vertex data is empty")]
    Empty,
}

/// Checks `data` against the attribute layout and returns the vertex count.
pub fn vertex_count(data: &[f32], attr: VertexAttribute) -> Result<usize, BufferError> {
    if data.is_empty() {
        return Err(BufferError::Empty);
    }

    if data.len() % attr.size() != 0 {
        return Err(BufferError::InvalidDataLength);
    }

    Ok(data.len() / attr.size())
}

/// Array buffer holding one tightly packed attribute, uploaded once as static data.
pub struct VertexBuffer {
    id: u32,
    attribute: VertexAttribute,
    vertices: usize,
}

impl VertexBuffer {
    pub fn new(data: &[f32], attribute: VertexAttribute) -> Result<Self, BufferError> {
        let vertices = vertex_count(data, attribute)?;

        let mut id = 0;

        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                std::mem::size_of_val(data) as isize,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        Ok(Self {
            id,
            attribute,
            vertices,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn components(&self) -> usize {
        self.attribute.size()
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
