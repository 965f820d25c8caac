use cgmath::{perspective, Deg, Matrix4, Vector3};

pub const FIELD_OF_VIEW: Deg<f32> = Deg(45.0);
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
pub const MODEL_TRANSLATION: [f32; 3] = [0.0, 0.0, -7.0];

/// Perspective projection with clip space depth in `-1..1`.
pub fn projection_matrix(aspect: f32) -> Matrix4<f32> {
    perspective(FIELD_OF_VIEW, aspect, Z_NEAR, Z_FAR)
}

pub fn model_view_matrix() -> Matrix4<f32> {
    Matrix4::from_translation(Vector3::from(MODEL_TRANSLATION))
}

/// Column major elements in the layout `glUniformMatrix4fv` expects.
pub fn to_columns(m: &Matrix4<f32>) -> [f32; 16] {
    *AsRef::<[f32; 16]>::as_ref(m)
}
