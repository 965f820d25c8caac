/// Vertex array object holding attribute bindings.
///
/// ES 3.0 has a default vertex array, core profiles do not, so one is always created.
pub struct VertexArray {
    id: u32,
}

impl VertexArray {
    pub fn new() -> Self {
        let mut id = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }

        Self { id }
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
