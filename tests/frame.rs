use gl_wrapper::renderer::Viewport;
use gl_wrapper::{Command, DepthFunc, DrawMode};

use gradient_quad::program_info::{AttribLocations, UniformLocations};
use gradient_quad::quad::{BufferBinding, VERTEX_COUNT};
use gradient_quad::transform::{projection_matrix, to_columns};
use gradient_quad::{build_frame, ProgramInfo, QuadBindings};

fn program_info() -> ProgramInfo {
    ProgramInfo {
        program: 3,
        attrib_locations: AttribLocations {
            vertex_position: 0,
            vertex_color: 1,
        },
        uniform_locations: UniformLocations {
            projection_matrix: 0,
            model_view_matrix: 1,
        },
    }
}

fn bindings() -> QuadBindings {
    QuadBindings {
        position: BufferBinding {
            buffer: 1,
            components: 2,
        },
        color: BufferBinding {
            buffer: 2,
            components: 4,
        },
        vertices: VERTEX_COUNT,
    }
}

#[test]
fn single_strip_draw() {
    let frame = build_frame(&program_info(), bindings(), Viewport::new(640, 480));

    let draws: Vec<&Command> = frame
        .iter()
        .filter(|c| matches!(c, Command::DrawArrays { .. }))
        .collect();

    assert_eq!(
        draws,
        [&Command::DrawArrays {
            mode: DrawMode::TriangleStrip,
            first: 0,
            count: 4,
        }]
    );
}

#[test]
fn depth_test_active_at_draw() {
    let frame = build_frame(&program_info(), bindings(), Viewport::new(640, 480));

    let depth = frame
        .iter()
        .position(|c| *c == Command::EnableDepthTest(DepthFunc::LessOrEqual))
        .expect("depth test never enabled");
    let draw = frame
        .iter()
        .position(|c| matches!(c, Command::DrawArrays { .. }))
        .unwrap();

    assert!(depth < draw);
    assert!(!frame[depth + 1..draw]
        .iter()
        .any(|c| matches!(c, Command::EnableDepthTest(_))));
}

#[test]
fn program_in_use_before_uniforms() {
    let frame = build_frame(&program_info(), bindings(), Viewport::new(640, 480));

    let use_program = frame
        .iter()
        .position(|c| *c == Command::UseProgram(3))
        .unwrap();
    let first_uniform = frame
        .iter()
        .position(|c| matches!(c, Command::UniformMatrix4 { .. }))
        .unwrap();

    assert!(use_program < first_uniform);
}

#[test]
fn projection_follows_viewport() {
    let projection_of = |viewport| {
        build_frame(&program_info(), bindings(), viewport)
            .into_iter()
            .find_map(|c| match c {
                Command::UniformMatrix4 { location: 0, value } => Some(value),
                _ => None,
            })
            .unwrap()
    };

    let wide = projection_of(Viewport::new(1280, 720));
    let narrow = projection_of(Viewport::new(480, 640));

    assert_ne!(wide, narrow);
    assert_eq!(wide, projection_of(Viewport::new(1280, 720)));
    assert_eq!(wide, to_columns(&projection_matrix(1280.0 / 720.0)));
}
