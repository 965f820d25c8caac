use gl::types::{GLenum, GLint, GLuint};
use std::ffi::{c_char, CString};
use std::fmt;
use thiserror::Error;

const INFO_LOG_LEN: usize = 1024;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_type(&self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    /// Compiles both stages and links them into a program.
    ///
    /// Shader objects are released on every path, the program object is
    /// released when linking fails.
    pub fn build(self) -> Result<Program, PBError> {
        let vert = Shader::compile(ShaderStage::Vertex, self.vert)?;
        let frag = Shader::compile(ShaderStage::Fragment, self.frag)?;

        let mut success: GLint = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert.id);
            gl::AttachShader(program, frag.id);
            gl::LinkProgram(program);

            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != gl::TRUE as GLint {
                let mut buf = [0_u8; INFO_LOG_LEN];

                gl::GetProgramInfoLog(
                    program,
                    INFO_LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(PBError::Linking(info_log_to_string(&buf)));
            }

            gl::DetachShader(program, vert.id);
            gl::DetachShader(program, frag.id);

            log::debug!("linked shader program {program}");

            Ok(Program { id: program })
        }
    }
}

struct Shader {
    id: GLuint,
}

impl Shader {
    fn compile(stage: ShaderStage, src: &str) -> Result<Self, PBError> {
        let src = CString::new(src).map_err(|_| PBError::InvalidSource(stage))?;
        let mut success: GLint = 0;

        unsafe {
            let shader = Self {
                id: gl::CreateShader(stage.gl_type()),
            };

            gl::ShaderSource(shader.id, 1, &src.as_ptr(), std::ptr::null());
            gl::CompileShader(shader.id);

            gl::GetShaderiv(shader.id, gl::COMPILE_STATUS, &mut success);
            if success != gl::TRUE as GLint {
                let mut buf = [0_u8; INFO_LOG_LEN];

                gl::GetShaderInfoLog(
                    shader.id,
                    INFO_LOG_LEN as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );

                return Err(PBError::Compilation {
                    stage,
                    log: info_log_to_string(&buf),
                });
            }

            Ok(shader)
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.id) }
    }
}

/// Decodes a driver info log, which is NUL terminated when shorter than the buffer.
fn info_log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_owned()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{stage} shader failed to compile: {log}")]
    Compilation { stage: ShaderStage, log: String },
    #[error("shader program failed to link: {0}")]
    Linking(String),
    #[error("{0} shader source contains a NUL byte")]
    InvalidSource(ShaderStage),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    /// Location of an active vertex attribute, `None` if the linker dropped or never saw it.
    pub fn attrib_location(&self, name: &str) -> Option<u32> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetAttribLocation(self.id, name.as_ptr()) };

        u32::try_from(location).ok()
    }

    pub fn uniform_location(&self, name: &str) -> Option<i32> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) };

        (location >= 0).then_some(location)
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_nul() {
        let mut buf = [0_u8; 32];
        buf[..11].copy_from_slice(b"0:3: error\n");

        assert_eq!(info_log_to_string(&buf), "0:3: error");
    }

    #[test]
    fn info_log_without_terminator() {
        assert_eq!(info_log_to_string(b"full buffer"), "full buffer");
    }

    #[test]
    fn info_log_empty() {
        assert_eq!(info_log_to_string(&[0; 8]), "");
    }

    #[test]
    fn compilation_error_names_stage() {
        let err = PBError::Compilation {
            stage: ShaderStage::Fragment,
            log: "0:4: 'finalColor' : undeclared identifier".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "fragment shader failed to compile: 0:4: 'finalColor' : undeclared identifier"
        );
    }

    #[test]
    fn nul_in_source_is_rejected_before_touching_gl() {
        let err = Shader::compile(ShaderStage::Vertex, "void main() {}\0").err();

        assert!(matches!(
            err,
            Some(PBError::InvalidSource(ShaderStage::Vertex))
        ));
    }
}
