use gl_wrapper::renderer::Viewport;
use gl_wrapper::{Command, DepthFunc, DrawMode};

use crate::program_info::ProgramInfo;
use crate::quad::QuadBindings;
use crate::transform::{model_view_matrix, projection_matrix, to_columns};

/// Black at half alpha.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
pub const CLEAR_DEPTH: f32 = 1.0;

/// Builds the command stream of one frame of the quad.
///
/// The projection follows the aspect ratio of `viewport`, everything else is fixed.
pub fn build_frame(program: &ProgramInfo, buffers: QuadBindings, viewport: Viewport) -> Vec<Command> {
    let projection = projection_matrix(viewport.aspect_ratio());
    let model_view = model_view_matrix();

    vec![
        Command::ClearColor(CLEAR_COLOR),
        Command::ClearDepth(CLEAR_DEPTH),
        Command::EnableDepthTest(DepthFunc::LessOrEqual),
        Command::Clear {
            color: true,
            depth: true,
        },
        Command::BindAttribute(
            buffers
                .position
                .at(program.attrib_locations.vertex_position),
        ),
        Command::BindAttribute(buffers.color.at(program.attrib_locations.vertex_color)),
        Command::UseProgram(program.program),
        Command::UniformMatrix4 {
            location: program.uniform_locations.projection_matrix,
            value: to_columns(&projection),
        },
        Command::UniformMatrix4 {
            location: program.uniform_locations.model_view_matrix,
            value: to_columns(&model_view),
        },
        Command::DrawArrays {
            mode: DrawMode::TriangleStrip,
            first: 0,
            count: buffers.vertices as i32,
        },
    ]
}
