use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::config::ViewConfig;
use crate::core::{Button, Clock, Controller};
use crate::projection::ProjectionMode;
use crate::shader::{UniformSink, PROJECTION_UNIFORM, VIEW_POSITION_UNIFORM, VIEW_UNIFORM};

/// Cursor tracking for mouse-look
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseLook {
    last: Option<(f32, f32)>,
}

impl MouseLook {
    /// Offsets since the previous sample, y flipped so moving up is positive.
    /// The first sample after `reset` only seeds the position and yields `None`.
    pub fn sample(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let offsets = self.last.map(|(last_x, last_y)| (x - last_x, last_y - y));
        self.last = Some((x, y));
        offsets
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn is_seeded(&self) -> bool {
        self.last.is_some()
    }
}

/// Camera navigation and per-frame view/projection composer.
///
/// Owns the camera plus all input and timing state. Input handlers may run
/// between frames; `prepare_scene_view` runs once per rendered frame.
#[derive(Debug)]
pub struct ViewManager {
    config: ViewConfig,
    camera: Camera,
    mouse: MouseLook,
    speed_multiplier: f32,
    projection_mode: ProjectionMode,
    clock: Clock,
    delta_time: f32,
    close_requested: bool,
}

impl ViewManager {
    pub fn new(config: ViewConfig) -> Self {
        Self::with_camera(config, Camera::default())
    }

    pub fn with_camera(config: ViewConfig, camera: Camera) -> Self {
        Self {
            config,
            camera,
            mouse: MouseLook::default(),
            speed_multiplier: 1.0,
            projection_mode: ProjectionMode::default(),
            clock: Clock::new(),
            delta_time: 0.0,
            close_requested: false,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Seconds between the last two composed frames
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Re-arm first-sample seeding, e.g. when the cursor re-enters the window
    pub fn reset_mouse(&mut self) {
        self.mouse.reset();
    }

    /// Follow a viewport resize. Zero-sized (minimised) viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
    }

    /// Cursor moved to window coordinates `(x, y)`
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let Some((x_offset, y_offset)) = self.mouse.sample(x, y) else {
            return;
        };

        let sensitivity = self.config.mouse_sensitivity;
        let (x_offset, y_offset) = (x_offset * sensitivity, y_offset * sensitivity);
        self.camera.process_mouse_movement(x_offset, y_offset);

        if self.config.cursor_adjusts_speed {
            self.adjust_speed_multiplier(y_offset);
        }
    }

    /// Scroll wheel moved by `y_offset` notches
    pub fn on_scroll(&mut self, _x_offset: f32, y_offset: f32) {
        self.adjust_speed_multiplier(y_offset);
    }

    fn adjust_speed_multiplier(&mut self, amount: f32) {
        let previous = self.speed_multiplier;
        self.speed_multiplier = (self.speed_multiplier + amount * self.config.scroll_step).clamp(
            self.config.min_speed_multiplier,
            self.config.max_speed_multiplier,
        );
        if self.speed_multiplier != previous {
            log::debug!("Camera speed multiplier: {:.2}", self.speed_multiplier);
        }
    }

    /// Apply held movement keys for a frame lasting `delta_time` seconds
    pub fn process_keyboard(&mut self, controller: &dyn Controller, delta_time: f32) {
        let speed = delta_time * self.config.base_speed * self.speed_multiplier;
        let front = self.camera.front();
        let up = self.camera.up();
        let strafe = front.cross(up).normalize();

        let moves: [(Button, Vec3, f32); 6] = [
            (Button::KeyW, front, 1.0),
            (Button::KeyS, front, -1.0),
            (Button::KeyA, strafe, -1.0),
            (Button::KeyD, strafe, 1.0),
            (Button::KeyQ, up, 1.0),
            (Button::KeyE, up, -1.0),
        ];
        for (button, direction, sign) in moves {
            if controller.is_down(button) {
                self.camera.translate(direction, sign * speed);
            }
        }

        if controller.is_down(Button::Escape) && !self.close_requested {
            log::info!("Escape pressed, closing window");
            self.close_requested = true;
        }
    }

    fn update_projection_mode(&mut self, controller: &dyn Controller) {
        // P wins when both are held
        let next = if controller.is_down(Button::KeyP) {
            ProjectionMode::Perspective
        } else if controller.is_down(Button::KeyO) {
            ProjectionMode::Orthographic
        } else {
            return;
        };
        if next != self.projection_mode {
            log::debug!("Projection mode: {:?}", next);
            self.projection_mode = next;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_mode
            .matrix(self.camera.zoom, self.config.aspect_ratio(), &self.config)
    }

    /// Per-frame entry point: advance the clock, then compose the frame
    pub fn prepare_scene_view(
        &mut self,
        controller: &dyn Controller,
        sink: Option<&mut dyn UniformSink>,
    ) {
        let delta_time = self.clock.tick();
        self.compose_frame(delta_time, controller, sink);
    }

    /// Movement, projection selection and publishing for a frame of `delta_time` seconds.
    ///
    /// Without a sink the publish step is skipped.
    pub fn compose_frame(
        &mut self,
        delta_time: f32,
        controller: &dyn Controller,
        sink: Option<&mut dyn UniformSink>,
    ) {
        self.delta_time = delta_time.max(0.0);
        self.process_keyboard(controller, self.delta_time);
        self.update_projection_mode(controller);

        let view = self.view_matrix();
        let projection = self.projection_matrix();

        if let Some(sink) = sink {
            sink.set_mat4(VIEW_UNIFORM, view);
            sink.set_mat4(PROJECTION_UNIFORM, projection);
            sink.set_vec3(VIEW_POSITION_UNIFORM, self.camera.position);
        }
    }
}
