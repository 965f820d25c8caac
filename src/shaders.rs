//! GLSL ES 3.00 sources for the gradient quad and the names of their interface.

pub const VERTEX_POSITION: &str = "aVertexPosition";
pub const VERTEX_COLOR: &str = "aVertexColor";
pub const PROJECTION_MATRIX: &str = "uProjectionMatrix";
pub const MODEL_VIEW_MATRIX: &str = "uModelViewMatrix";

pub const VERTEX_SHADER: &str = r#"#version 300 es
in vec4 aVertexPosition;
in vec4 aVertexColor;

uniform mat4 uProjectionMatrix;
uniform mat4 uModelViewMatrix;

out lowp vec4 fColor;

void main()
{
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
    fColor = aVertexColor;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;

in vec4 fColor;
out vec4 finalColor;

void main()
{
    finalColor = fColor;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_start_with_version() {
        assert!(VERTEX_SHADER.starts_with("#version 300 es\n"));
        assert!(FRAGMENT_SHADER.starts_with("#version 300 es\n"));
    }

    #[test]
    fn vertex_shader_declares_interface() {
        for name in [
            VERTEX_POSITION,
            VERTEX_COLOR,
            PROJECTION_MATRIX,
            MODEL_VIEW_MATRIX,
        ] {
            assert!(VERTEX_SHADER.contains(name), "{name} missing");
        }
    }

    #[test]
    fn color_is_passed_through() {
        assert!(VERTEX_SHADER.contains("out lowp vec4 fColor;"));
        assert!(FRAGMENT_SHADER.contains("in vec4 fColor;"));
    }
}
