mod clock;
mod controller;
mod gpu_context;
mod input_adapter;
mod scene_renderer;

pub use clock::Clock;
pub use controller::{Button, Controller};
pub use gpu_context::GpuContext;
pub use input_adapter::{scroll_lines, WinitController};
pub use scene_renderer::SceneRenderer;
