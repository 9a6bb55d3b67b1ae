pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod projection;
pub mod scene;
pub mod shader;
pub mod view_manager;
pub mod window;

pub use camera::Camera;
pub use config::ViewConfig;
pub use projection::ProjectionMode;
pub use shader::UniformSink;
pub use view_manager::ViewManager;
