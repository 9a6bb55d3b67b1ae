use glam::{Mat4, Vec3};

/// Degrees of rotation per unit of (already sensitivity-scaled) mouse offset
pub const LOOK_SCALE: f32 = 0.1;
pub const PITCH_LIMIT: f32 = 89.0;
pub const DEFAULT_ZOOM: f32 = 80.0;
pub const WORLD_UP: Vec3 = Vec3::Y;

const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 5.0, 12.0);
const INITIAL_FRONT: Vec3 = Vec3::new(0.0, -0.5, -2.0);

/// Fly camera with a yaw/pitch driven orthonormal basis.
///
/// `front`, `right` and `up` are derived from `yaw`/`pitch` after every
/// rotation, so they cannot drift away from each other over time.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Camera {
    /// Camera at `position` looking along `direction`.
    ///
    /// A zero `direction` falls back to looking down -Z.
    pub fn looking_along(position: Vec3, direction: Vec3, zoom: f32) -> Self {
        let dir = direction.try_normalize().unwrap_or(Vec3::NEG_Z);
        let yaw = dir.z.atan2(dir.x).to_degrees();
        let pitch = dir.y.clamp(-1.0, 1.0).asin().to_degrees();

        let mut camera = Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: WORLD_UP,
            zoom,
        };
        camera.update_vectors();
        camera
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Rotate by mouse offsets: x turns yaw, y turns pitch.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * LOOK_SCALE;
        self.pitch = (self.pitch + y_offset * LOOK_SCALE).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Move `distance` world units along `direction`
    pub fn translate(&mut self, direction: Vec3, distance: f32) {
        self.position += direction * distance;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::looking_along(INITIAL_POSITION, INITIAL_FRONT, DEFAULT_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < EPS, "front not unit: {f}");
        assert!((r.length() - 1.0).abs() < EPS, "right not unit: {r}");
        assert!((u.length() - 1.0).abs() < EPS, "up not unit: {u}");
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    #[test]
    fn test_default_pose() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 5.0, 12.0));
        assert_eq!(camera.zoom, 80.0);

        let expected = INITIAL_FRONT.normalize();
        assert!(camera.front().abs_diff_eq(expected, EPS));
        assert!((camera.yaw() + 90.0).abs() < EPS);
        assert!(camera.up().y > 0.9);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_default_up_tilts_with_pitch() {
        let camera = Camera::default();
        // up stays perpendicular to the downward-looking front, not world +Y
        let expected_up = Vec3::new(0.0, 2.0, -0.5).normalize();
        assert!(camera.up().abs_diff_eq(expected_up, EPS));
        assert!(camera.up().dot(camera.front()).abs() < EPS);

        let tilt = camera.up().angle_between(WORLD_UP).to_degrees();
        assert!((tilt + camera.pitch()).abs() < 1e-2, "tilt {tilt}");
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn test_looking_along_zero_direction() {
        let camera = Camera::looking_along(Vec3::ZERO, Vec3::ZERO, 45.0);
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn test_pitch_clamped_up_and_down() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        assert_orthonormal(&camera);

        camera.process_mouse_movement(0.0, -50_000.0);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_pitch_stays_in_range_over_sequence() {
        let mut camera = Camera::default();
        let offsets = [300.0, -45.0, 900.0, -2000.0, 17.5, 0.0, 1234.0, -1.0];
        for (i, y) in offsets.iter().cycle().take(200).enumerate() {
            camera.process_mouse_movement(i as f32 * 3.0, *y);
            assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&camera.pitch()));
        }
    }

    #[test]
    fn test_basis_orthonormal_across_angles() {
        let mut camera = Camera::default();
        for step in 0..720 {
            camera.process_mouse_movement(37.0, if step % 2 == 0 { 23.0 } else { -41.0 });
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn test_yaw_turns_right() {
        let mut camera = Camera::looking_along(Vec3::ZERO, Vec3::NEG_Z, 45.0);
        camera.process_mouse_movement(900.0, 0.0);
        // +90 degrees of yaw from -Z faces +X
        assert!(camera.front().abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn test_view_matrix_maps_position_to_origin() {
        let camera = Camera::default();
        let eye = camera.view_matrix().transform_point3(camera.position);
        assert!(eye.abs_diff_eq(Vec3::ZERO, EPS));

        // a point straight ahead lands on -Z in view space
        let ahead = camera.view_matrix().transform_point3(camera.position + camera.front() * 3.0);
        assert!(ahead.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), EPS));
    }

    #[test]
    fn test_translate() {
        let mut camera = Camera::default();
        camera.translate(Vec3::X, 2.0);
        assert_eq!(camera.position, Vec3::new(2.0, 5.0, 12.0));
    }
}
