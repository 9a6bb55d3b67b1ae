use glam::{Mat4, Vec3};

pub const VIEW_UNIFORM: &str = "view";
pub const PROJECTION_UNIFORM: &str = "projection";
pub const VIEW_POSITION_UNIFORM: &str = "viewPosition";

/// Receiver of named shader parameters
pub trait UniformSink {
    /// Set a 4x4 matrix uniform
    fn set_mat4(&mut self, name: &str, value: Mat4);

    /// Set a 3-component vector uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);
}

/// GPU layout of the per-frame camera uniforms
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_position: [f32; 3],
    pub _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_position: [0.0; 3],
            _pad: 0.0,
        }
    }
}

impl UniformSink for CameraUniform {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        match name {
            VIEW_UNIFORM => self.view = value.to_cols_array_2d(),
            PROJECTION_UNIFORM => self.projection = value.to_cols_array_2d(),
            _ => log::debug!("Ignoring unknown mat4 uniform '{}'", name),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        match name {
            VIEW_POSITION_UNIFORM => self.view_position = value.to_array(),
            _ => log::debug!("Ignoring unknown vec3 uniform '{}'", name),
        }
    }
}
