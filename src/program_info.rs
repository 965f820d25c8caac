use gl_wrapper::program::Program;
use thiserror::Error;

use crate::shaders::{MODEL_VIEW_MATRIX, PROJECTION_MATRIX, VERTEX_COLOR, VERTEX_POSITION};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttribLocations {
    pub vertex_position: u32,
    pub vertex_color: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UniformLocations {
    pub projection_matrix: i32,
    pub model_view_matrix: i32,
}

/// Linked program together with the locations of its interface, resolved once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProgramInfo {
    pub program: u32,
    pub attrib_locations: AttribLocations,
    pub uniform_locations: UniformLocations,
}

impl ProgramInfo {
    pub fn from_program(program: &Program) -> Result<Self, ProgramInfoError> {
        Self::resolve(
            program.get_id(),
            |name| program.attrib_location(name),
            |name| program.uniform_location(name),
        )
    }

    pub fn resolve(
        program: u32,
        attrib_lookup: impl Fn(&str) -> Option<u32>,
        uniform_lookup: impl Fn(&str) -> Option<i32>,
    ) -> Result<Self, ProgramInfoError> {
        let attrib = |name: &'static str| {
            attrib_lookup(name).ok_or(ProgramInfoError::MissingAttribute(name))
        };
        let uniform = |name: &'static str| {
            uniform_lookup(name).ok_or(ProgramInfoError::MissingUniform(name))
        };

        Ok(Self {
            program,
            attrib_locations: AttribLocations {
                vertex_position: attrib(VERTEX_POSITION)?,
                vertex_color: attrib(VERTEX_COLOR)?,
            },
            uniform_locations: UniformLocations {
                projection_matrix: uniform(PROJECTION_MATRIX)?,
                model_view_matrix: uniform(MODEL_VIEW_MATRIX)?,
            },
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgramInfoError {
    #[error("attribute {0} is not active in the shader program")]
    MissingAttribute(&'static str),
    #[error("uniform {0} is not active in the shader program")]
    MissingUniform(&'static str),
}
