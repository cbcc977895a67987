/// Shader program interface - named-parameter contract

/// Kind of a named shader parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Single f32
    Float,
    /// Single i32 (also used for sampler unit indices)
    Int,
    /// 2-component vector
    Vec2,
    /// 3-component vector
    Vec3,
    /// 4x4 matrix
    Mat4,
    /// Fixed-length f32 array
    FloatArray(usize),
    /// Fixed-length vec2 array
    Vec2Array(usize),
}

/// Declared parameter of a shader program
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Parameter name as it appears in shader source
    pub name: &'static str,
    /// Parameter kind
    pub kind: ParamKind,
}

/// Shader program descriptor
#[derive(Debug, Clone)]
pub struct ProgramDesc {
    /// Program name (used for lookup and debug output)
    pub name: &'static str,
    /// Vertex shader source
    pub vertex_source: &'static str,
    /// Fragment shader source
    pub fragment_source: &'static str,
    /// Declared named parameters
    pub params: &'static [ParamSpec],
}

/// Compiled shader program
///
/// Parameter setters are lenient: a name the program does not declare is
/// silently ignored, so callers can share upload code across programs
/// that accept different parameter subsets.
pub trait GpuProgram: Send + Sync {
    /// Program name
    fn name(&self) -> &str;

    /// Whether this program declares a parameter with the given name and kind
    fn accepts(&self, name: &str, kind: ParamKind) -> bool;

    /// Set a float parameter
    fn set_float(&self, name: &str, value: f32);

    /// Set an integer parameter
    fn set_int(&self, name: &str, value: i32);

    /// Set a vec2 parameter
    fn set_vec2(&self, name: &str, value: glam::Vec2);

    /// Set a vec3 parameter
    fn set_vec3(&self, name: &str, value: glam::Vec3);

    /// Set a mat4 parameter
    fn set_mat4(&self, name: &str, value: &glam::Mat4);

    /// Set a float array parameter
    fn set_float_array(&self, name: &str, values: &[f32]);

    /// Set a vec2 array parameter
    fn set_vec2_array(&self, name: &str, values: &[glam::Vec2]);
}
