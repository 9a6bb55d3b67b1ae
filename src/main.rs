use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use fly_camera::cli::Cli;
use fly_camera::core::{scroll_lines, GpuContext, SceneRenderer, WinitController};
use fly_camera::window::create_display_window;
use fly_camera::{ViewConfig, ViewManager};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

struct App {
    config: ViewConfig,
    view: ViewManager,
    controller: WinitController,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<SceneRenderer>,
}

impl App {
    fn new(config: ViewConfig) -> Self {
        Self {
            view: ViewManager::new(config.clone()),
            config,
            controller: WinitController::new(),
            window: None,
            gpu: None,
            renderer: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let sink = self.renderer.as_mut().map(SceneRenderer::uniforms_mut);
        self.view.prepare_scene_view(&self.controller, sink);

        if self.view.close_requested() {
            event_loop.exit();
            return;
        }

        if let (Some(renderer), Some(gpu)) = (&self.renderer, &mut self.gpu) {
            if let Err(e) = renderer.render(gpu) {
                log::error!("Render error: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let Some(window) = create_display_window(event_loop, &self.config) else {
            event_loop.exit();
            return;
        };

        let gpu = match pollster::block_on(GpuContext::new(window.clone())) {
            Ok(gpu) => gpu,
            Err(e) => {
                log::error!("Failed to initialize GPU: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.view.resize(size.width, size.height);
        self.renderer = Some(SceneRenderer::new(&gpu));
        self.gpu = Some(gpu);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                self.view.on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = scroll_lines(&delta);
                self.view.on_scroll(x, y);
            }
            WindowEvent::CursorEntered { .. } | WindowEvent::Focused(true) => {
                self.view.reset_mouse();
            }
            WindowEvent::Resized(size) => {
                self.view.resize(size.width, size.height);
                if let (Some(gpu), Some(renderer)) = (&mut self.gpu, &mut self.renderer) {
                    gpu.resize(size.width, size.height);
                    renderer.resize(gpu);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.view_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!("Controls: mouse to look, WASD/QE to move, scroll for speed, O/P projection, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
