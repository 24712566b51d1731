use hydro::builtins::{box_hull, wedge_hull};
use hydro::{
    net_force, net_force_of, net_torque_of, presets, step_hydrodynamics, step_hydrodynamics_dbg,
    FlatWater, ForceKind, ForceSample, HullMesh, HullPose, HydroParams, MotionState, Quatf,
    SineSwell, StepDebug, StepInput, Vec3f, WaterParams,
};

const RHO_G: f32 = 1029.0 * 9.81;

struct Scene {
    mesh: HullMesh,
    pose: HullPose,
    motion: MotionState,
    params: HydroParams,
}

impl Scene {
    fn floating_box(size: Vec3f) -> Self {
        Self {
            mesh: box_hull(size).unwrap(),
            pose: HullPose::default(),
            motion: MotionState::at_rest(Vec3f::ZERO),
            params: HydroParams::new(presets::workboat()),
        }
    }

    fn input(&self) -> StepInput<'_> {
        StepInput {
            mesh: &self.mesh,
            pose: &self.pose,
            motion: &self.motion,
            params: &self.params,
        }
    }
}

fn assert_close(actual: f32, expected: f32, rel: f32) {
    assert!(
        (actual - expected).abs() <= rel * expected.abs().max(1.0),
        "{actual} vs {expected}"
    );
}

#[test]
fn half_submerged_box_displaces_its_volume() {
    let scene = Scene::floating_box(Vec3f::new(2.0, 1.0, 2.0));
    let samples = step_hydrodynamics(scene.input(), &FlatWater::new(0.0));

    let buoyancy = net_force_of(&samples, ForceKind::Buoyancy);
    // 2 × 0.5 × 2 m³ under water.
    assert_close(buoyancy.y, RHO_G * 2.0, 1e-4);
    assert!(buoyancy.x.abs() < 0.1 && buoyancy.z.abs() < 0.1, "{buoyancy:?}");
    // At rest, nothing but buoyancy.
    assert_eq!(net_force(&samples), buoyancy);
}

#[test]
fn sinking_deeper_adds_displacement() {
    let mut scene = Scene::floating_box(Vec3f::new(2.0, 1.0, 2.0));
    scene.pose = HullPose::from_translation(Vec3f::new(0.0, -0.25, 0.0));
    let samples = step_hydrodynamics(scene.input(), &FlatWater::new(0.0));
    assert_close(net_force_of(&samples, ForceKind::Buoyancy).y, RHO_G * 3.0, 1e-4);
}

#[test]
fn raising_the_water_matches_lowering_the_hull() {
    let scene = Scene::floating_box(Vec3f::new(2.0, 1.0, 2.0));
    let samples = step_hydrodynamics(scene.input(), &FlatWater::new(0.25));
    assert_close(net_force_of(&samples, ForceKind::Buoyancy).y, RHO_G * 3.0, 1e-4);
}

#[test]
fn dry_hull_produces_no_samples() {
    let mut scene = Scene::floating_box(Vec3f::splat(1.0));
    // Bottom face just clear of the water.
    scene.pose = HullPose::from_translation(Vec3f::new(0.0, 1.0, 0.0));
    scene.motion.linear_velocity = Vec3f::new(3.0, 0.0, 0.0);
    let mut dbg = StepDebug::default();
    let samples = step_hydrodynamics_dbg(scene.input(), &FlatWater::new(0.0), Some(&mut dbg), None);
    assert!(samples.is_empty());
    assert_eq!(dbg.submerged_triangles, 0);
    assert_eq!(dbg.submerged_vertices, 0);
    assert_eq!(dbg.total_force(), Vec3f::ZERO);
}

#[test]
fn hovering_hull_feels_nothing() {
    let mut scene = Scene::floating_box(Vec3f::splat(1.0));
    let water = FlatWater::new(0.0);
    for y in [3.9f32, 5.0, 10.0, 50.0] {
        scene.pose = HullPose::from_translation(Vec3f::new(0.0, y, 0.0));
        let mut dbg = StepDebug::default();
        let samples = step_hydrodynamics_dbg(scene.input(), &water, Some(&mut dbg), None);
        assert!(samples.is_empty(), "hull at y = {y} got {} samples", samples.len());
        assert_eq!(dbg.submerged_triangles, 0, "y = {y}");
        assert_eq!(net_force_of(&samples, ForceKind::Buoyancy), Vec3f::ZERO);
    }
}

#[test]
fn heeled_box_rights_itself() {
    // Wide and shallow: positive metacentric height about Z.
    let mut scene = Scene::floating_box(Vec3f::new(4.0, 1.0, 2.0));
    let water = FlatWater::new(0.0);
    for angle in [0.2f32, -0.2] {
        scene.pose = HullPose::default().with_rotation(Quatf::from_rotation_z(angle));
        let samples = step_hydrodynamics(scene.input(), &water);
        // Flat water keeps the displaced volume at 4 m³ whatever the heel.
        assert_close(net_force_of(&samples, ForceKind::Buoyancy).y, RHO_G * 4.0, 1e-4);
        let torque = net_torque_of(&samples, ForceKind::Buoyancy, scene.motion.center_of_mass);
        assert!(
            torque.z * angle < 0.0,
            "heel {angle} gave torque {torque:?}"
        );
    }
}

#[test]
fn output_is_grouped_by_model() {
    let mut scene = Scene::floating_box(Vec3f::new(2.0, 1.0, 2.0));
    scene.motion.linear_velocity = Vec3f::new(1.5, 0.0, 0.5);
    let samples = step_hydrodynamics(scene.input(), &FlatWater::new(0.0));
    assert_eq!(samples.len() % 3, 0);
    let n = samples.len() / 3;
    assert!(n > 0);
    for (i, s) in samples.iter().enumerate() {
        assert_eq!(s.kind, ForceKind::ALL[i / n], "sample {i}");
    }
    // Same submerged triangle at the same index of every group.
    for i in 0..n {
        assert_eq!(samples[i].origin, samples[n + i].origin);
        assert_eq!(samples[i].origin, samples[2 * n + i].origin);
    }
}

#[test]
fn moving_box_feels_drag_against_its_motion() {
    let mut scene = Scene::floating_box(Vec3f::new(2.0, 1.0, 2.0));
    scene.motion.linear_velocity = Vec3f::new(2.0, 0.0, 0.0);
    let samples = step_hydrodynamics(scene.input(), &FlatWater::new(0.0));
    let viscous = net_force_of(&samples, ForceKind::ViscousResistance);
    assert!(viscous.x < 0.0, "{viscous:?}");
}

#[test]
fn debug_and_observer_see_the_whole_step() {
    let mut scene = Scene::floating_box(Vec3f::new(2.0, 1.0, 2.0));
    scene.motion.linear_velocity = Vec3f::new(1.0, 0.0, 0.0);
    let mut dbg = StepDebug::default();
    let mut seen: Vec<ForceSample> = Vec::new();
    let mut observer = |s: &ForceSample| seen.push(*s);
    let samples = step_hydrodynamics_dbg(
        scene.input(),
        &FlatWater::new(0.0),
        Some(&mut dbg),
        Some(&mut observer),
    );

    assert_eq!(seen, samples);
    assert_eq!(dbg.hull_vertices, 8);
    assert_eq!(dbg.hull_triangles, 12);
    assert_eq!(dbg.submerged_vertices, 4);
    assert_eq!(dbg.submerged_triangles, 14);
    assert_eq!(samples.len(), 3 * dbg.submerged_triangles);
    assert!((dbg.submerged_area - 8.0).abs() < 1e-4);
    assert_eq!((dbg.grid_width, dbg.grid_length), (2, 2));
    assert_eq!(dbg.grid_top_y, 1.0);
    assert!(dbg.height_queries > 0);
    assert!(dbg.resistance_coefficient > 0.0);

    let total = net_force(&samples);
    assert!((dbg.total_force() - total).length() < 1.0);
}

#[test]
fn wedge_in_a_swell_stays_finite() {
    let mesh = wedge_hull(6.0, 2.0, 1.0).unwrap();
    let pose = HullPose::from_translation(Vec3f::new(0.3, 0.2, -0.7));
    let motion = MotionState {
        linear_velocity: Vec3f::new(0.0, -0.2, 3.0),
        angular_velocity: Vec3f::new(0.1, 0.0, -0.05),
        center_of_mass: Vec3f::new(0.3, -0.1, -0.7),
        mass: 2000.0,
    };
    let params = HydroParams {
        water: WaterParams::default(),
        pressure_drag: presets::workboat(),
    };
    let input = StepInput {
        mesh: &mesh,
        pose: &pose,
        motion: &motion,
        params: &params,
    };
    for t in 0..8 {
        let swell = SineSwell::default().at_time(t as f32 * 0.25);
        let samples = step_hydrodynamics(input, &swell);
        assert!(!samples.is_empty());
        for s in &samples {
            assert!(s.force.is_finite() && s.origin.is_finite(), "{s:?}");
        }
        assert!(net_force_of(&samples, ForceKind::Buoyancy).y > 0.0);
    }
}
