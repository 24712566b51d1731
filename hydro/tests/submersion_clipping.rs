use hydro::{builtins::box_hull, classify, clip_triangle, FlatWater, HeightField, HullPose, Triangle, Vec3f};

// Vertical triangle in the XY plane; depth equals y when the water sits at 0.
fn tri_at_heights(h: [f32; 3]) -> ([Vec3f; 3], [f32; 3]) {
    (
        [
            Vec3f::new(0.0, h[0], 0.0),
            Vec3f::new(2.0, h[1], 0.0),
            Vec3f::new(1.0, h[2], 0.0),
        ],
        h,
    )
}

fn clipped(vertices: [Vec3f; 3], depths: [f32; 3]) -> Vec<Triangle> {
    let mut out = Vec::new();
    clip_triangle(vertices, depths, &mut out);
    out
}

fn total_area(tris: &[Triangle]) -> f32 {
    tris.iter().map(Triangle::area).sum()
}

#[test]
fn fully_submerged_triangle_is_emitted_unchanged() {
    let (v, h) = tri_at_heights([-0.5, -2.0, 0.0]);
    let out = clipped(v, h);
    assert_eq!(out, vec![Triangle::new(v[0], v[1], v[2])]);
}

#[test]
fn fully_dry_triangle_is_dropped() {
    let (v, h) = tri_at_heights([0.5, 2.0, 1e-6]);
    assert!(clipped(v, h).is_empty());
}

#[test]
fn one_dry_vertex_clips_into_two_smaller_pieces() {
    // high = +2, right = −1, left = −1
    let v = [
        Vec3f::new(0.0, 2.0, 0.0),
        Vec3f::new(1.0, -1.0, 0.0),
        Vec3f::new(-1.0, -1.0, 0.0),
    ];
    let h = [2.0, -1.0, -1.0];
    let parent = Triangle::new(v[0], v[1], v[2]).area();
    let out = clipped(v, h);
    assert_eq!(out.len(), 2);
    let area = total_area(&out);
    assert!(area > 0.0 && area < parent, "area {area} vs parent {parent}");
    // Crossings sit a third of the way down from the dry apex.
    let expected = parent * (1.0 - (2.0f32 / 3.0).powi(2));
    assert!((area - expected).abs() < 1e-5, "area {area}, expected {expected}");
    for t in &out {
        for p in t.vertices() {
            assert!(p.y <= 1e-6, "piece above water: {t:?}");
        }
    }
}

#[test]
fn pieces_keep_parent_winding() {
    for h in [[1.0, -1.0, -0.5], [-1.0, 1.0, 0.5], [0.3, 0.8, -1.2], [-0.2, -0.4, 0.9]] {
        let (v, h) = tri_at_heights(h);
        let parent = Triangle::new(v[0], v[1], v[2]).normal();
        assert_ne!(parent, Vec3f::ZERO);
        for piece in clipped(v, h) {
            assert!(
                piece.normal().dot(parent) > 0.999,
                "flipped piece {piece:?} for heights {h:?}"
            );
        }
    }
}

#[test]
fn submerged_area_is_continuous_as_a_vertex_crosses_the_surface() {
    for moving in 0..3 {
        let mut prev: Option<f32> = None;
        let steps = 400;
        for k in 0..=steps {
            let y = -1.0 + 2.0 * k as f32 / steps as f32;
            let mut h = [-0.3, 0.6, -0.8];
            h[moving] = y;
            let (v, h) = tri_at_heights(h);
            let area = total_area(&clipped(v, h));
            if let Some(p) = prev {
                assert!(
                    (area - p).abs() < 0.05,
                    "area jumped from {p} to {area} at y={y} (vertex {moving})"
                );
            }
            prev = Some(area);
        }
    }
}

#[test]
fn area_shrinks_smoothly_to_zero_through_one_wet_vertex() {
    // Last vertex alone under water; as it rises the piece vanishes.
    let mut last = f32::INFINITY;
    for y in [-1.0, -0.5, -0.1, -1e-3, 0.0, 1e-3] {
        let (v, h) = tri_at_heights([1.0, 1.0, y]);
        let area = total_area(&clipped(v, h));
        assert!(area <= last);
        last = area;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn classify_box_straddling_flat_water() {
    let mesh = box_hull(Vec3f::new(2.0, 1.0, 2.0)).unwrap();
    let pose = HullPose::default();
    let water = FlatWater::new(0.0);
    let hf = HeightField::sample(Vec3f::new(-1.0, -0.5, -1.0), Vec3f::new(1.0, 0.5, 1.0), &water);
    let set = classify(&mesh, &pose, &hf);

    assert_eq!(set.depths.len(), 8);
    assert_eq!(set.submerged_vertex_count(), 4);
    // Bottom (2 × 2) plus four side strips 2 wide and 0.5 deep.
    assert!((set.area() - 8.0).abs() < 1e-4, "area {}", set.area());
    // Two bottom triangles, three pieces per side face.
    assert_eq!(set.triangles.len(), 2 + 4 * 3);
    for t in &set.triangles {
        for p in t.vertices() {
            assert!(p.y <= 1e-6);
        }
    }
}

#[test]
fn coincident_pieces_are_not_merged() {
    let mut out = Vec::new();
    let (v, h) = tri_at_heights([-1.0, -2.0, -0.5]);
    clip_triangle(v, h, &mut out);
    clip_triangle(v, h, &mut out);
    assert_eq!(out.len(), 2);
}
