use std::sync::Arc;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::config::ViewConfig;

/// Create the main display window sized from `config`.
///
/// Failure is logged and reported as `None`; the caller is expected to abort
/// startup.
pub fn create_display_window(event_loop: &ActiveEventLoop, config: &ViewConfig) -> Option<Arc<Window>> {
    let attributes = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height));

    match event_loop.create_window(attributes) {
        Ok(window) => {
            log::info!("Created window '{}' ({}x{})", config.title, config.width, config.height);
            Some(Arc::new(window))
        }
        Err(e) => {
            log::error!("Failed to create window: {}", e);
            None
        }
    }
}
