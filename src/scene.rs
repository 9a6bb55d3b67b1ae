use glam::Vec3;

/// Vertex layout shared with `scene.wgsl`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const FLOOR_HALF_SIZE: i32 = 10;
const FLOOR_DARK: [f32; 4] = [0.25, 0.27, 0.3, 1.0];
const FLOOR_LIGHT: [f32; 4] = [0.55, 0.57, 0.6, 1.0];

/// Two triangles for the quad `a b c d` (counter-clockwise seen from `normal`)
fn push_quad(out: &mut Vec<Vertex>, corners: [Vec3; 4], normal: Vec3, color: [f32; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, a, c, d] {
        out.push(Vertex {
            position: p.to_array(),
            normal: normal.to_array(),
            color,
        });
    }
}

/// Axis-aligned box spanning `min..max`
pub fn push_box(out: &mut Vec<Vertex>, min: Vec3, max: Vec3, color: [f32; 4]) {
    let corner = |x: bool, y: bool, z: bool| {
        Vec3::new(
            if x { max.x } else { min.x },
            if y { max.y } else { min.y },
            if z { max.z } else { min.z },
        )
    };
    let (f, t) = (false, true);

    push_quad(out, [corner(t, f, f), corner(t, t, f), corner(t, t, t), corner(t, f, t)], Vec3::X, color);
    push_quad(out, [corner(f, f, t), corner(f, t, t), corner(f, t, f), corner(f, f, f)], Vec3::NEG_X, color);
    push_quad(out, [corner(f, t, f), corner(f, t, t), corner(t, t, t), corner(t, t, f)], Vec3::Y, color);
    push_quad(out, [corner(f, f, t), corner(f, f, f), corner(t, f, f), corner(t, f, t)], Vec3::NEG_Y, color);
    push_quad(out, [corner(f, f, t), corner(t, f, t), corner(t, t, t), corner(f, t, t)], Vec3::Z, color);
    push_quad(out, [corner(t, f, f), corner(f, f, f), corner(f, t, f), corner(t, t, f)], Vec3::NEG_Z, color);
}

/// Checkerboard floor, a ring of pillars and a translucent pane.
///
/// Opaque geometry comes first so the blended pane draws over it.
pub fn create_reference_scene() -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for x in -FLOOR_HALF_SIZE..FLOOR_HALF_SIZE {
        for z in -FLOOR_HALF_SIZE..FLOOR_HALF_SIZE {
            let color = if (x + z) % 2 == 0 { FLOOR_DARK } else { FLOOR_LIGHT };
            let (x0, z0) = (x as f32, z as f32);
            push_quad(
                &mut vertices,
                [
                    Vec3::new(x0, 0.0, z0 + 1.0),
                    Vec3::new(x0 + 1.0, 0.0, z0 + 1.0),
                    Vec3::new(x0 + 1.0, 0.0, z0),
                    Vec3::new(x0, 0.0, z0),
                ],
                Vec3::Y,
                color,
            );
        }
    }

    let pillars = 8;
    for i in 0..pillars {
        let angle = i as f32 / pillars as f32 * std::f32::consts::TAU;
        let center = Vec3::new(angle.cos() * 5.0, 0.0, angle.sin() * 5.0);
        let height = 1.0 + (i % 3) as f32;
        let color = [
            0.5 + 0.5 * angle.cos(),
            0.4 + 0.3 * (i % 2) as f32,
            0.5 + 0.5 * angle.sin(),
            1.0,
        ];
        push_box(
            &mut vertices,
            center - Vec3::new(0.5, 0.0, 0.5),
            center + Vec3::new(0.5, height, 0.5),
            color,
        );
    }

    push_box(
        &mut vertices,
        Vec3::new(-3.0, 0.0, 2.0),
        Vec3::new(3.0, 3.0, 2.1),
        [0.3, 0.6, 0.9, 0.35],
    );

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 40);
        assert_eq!(Vertex::layout().array_stride, 40);
    }

    #[test]
    fn test_box_has_twelve_triangles_inside_bounds() {
        let mut vertices = Vec::new();
        push_box(&mut vertices, Vec3::splat(-1.0), Vec3::new(1.0, 2.0, 3.0), [1.0; 4]);
        assert_eq!(vertices.len(), 36);
        for v in &vertices {
            let p = Vec3::from_array(v.position);
            assert!(p.cmpge(Vec3::splat(-1.0)).all() && p.cmple(Vec3::new(1.0, 2.0, 3.0)).all());
        }
    }

    #[test]
    fn test_box_faces_wind_towards_their_normal() {
        let mut vertices = Vec::new();
        push_box(&mut vertices, Vec3::ZERO, Vec3::ONE, [1.0; 4]);
        for tri in vertices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| Vec3::from_array(v.position));
            let face_normal = (b - a).cross(c - a).normalize();
            assert!(face_normal.abs_diff_eq(Vec3::from_array(tri[0].normal), 1e-5));
        }
    }

    #[test]
    fn test_reference_scene_layout() {
        let vertices = create_reference_scene();
        assert_eq!(vertices.len() % 3, 0);

        let floor_vertices = (2 * FLOOR_HALF_SIZE * 2 * FLOOR_HALF_SIZE * 6) as usize;
        assert!(vertices[..floor_vertices].iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
        // translucent pane is drawn last
        assert!(vertices[vertices.len() - 36..].iter().all(|v| v.color[3] < 1.0));
        assert!(vertices[..vertices.len() - 36].iter().all(|v| v.color[3] == 1.0));
    }
}
