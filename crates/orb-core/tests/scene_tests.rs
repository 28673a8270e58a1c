// Host-side tests for the scene tick: event drain, geometry regeneration,
// and the two-part spin composition.

use orb_core::{
    EventQueue, OrbScene, Role, SessionEvent, BASE_RADIUS, FRAME_SPIN_RATE, LINE_STEPS, MAX_RADIUS,
    NUM_LINES, RADIUS_REBUILD_THRESHOLD, SPIN_TARGET_STEP,
};

#[test]
fn scene_starts_with_the_full_line_set() {
    let (scene, _sender) = OrbScene::new(1);
    assert_eq!(scene.lines().len(), NUM_LINES);
    for line in scene.lines() {
        assert_eq!(line.points().len(), LINE_STEPS + 1);
    }
}

#[test]
fn meridian_angles_are_fixed_by_index() {
    let (mut scene, _sender) = OrbScene::new(1);
    let expected_first = 0.0;
    let expected_last = (NUM_LINES as f32 - 1.0) / NUM_LINES as f32 * std::f32::consts::PI;
    assert_eq!(scene.lines()[0].angle(), expected_first);
    assert!((scene.lines()[NUM_LINES - 1].angle() - expected_last).abs() < 1e-6);

    for _ in 0..100 {
        scene.tick();
    }
    assert_eq!(scene.lines()[0].angle(), expected_first);
    assert!((scene.lines()[NUM_LINES - 1].angle() - expected_last).abs() < 1e-6);
}

#[test]
fn initial_points_lie_on_the_base_sphere() {
    let (scene, _sender) = OrbScene::new(1);
    // amplitude is zero at startup, so every point sits at BASE_RADIUS
    for line in scene.lines() {
        for p in line.points() {
            assert!((p.length() - BASE_RADIUS).abs() < 1e-2, "|p| = {}", p.length());
        }
    }
}

#[test]
fn point_formula_matches_spherical_conversion() {
    let (scene, _sender) = OrbScene::new(1);
    let line = &scene.lines()[5];
    let angle = line.angle();
    for (i, p) in line.points().iter().enumerate() {
        let lat = i as f32 / LINE_STEPS as f32 * std::f32::consts::TAU;
        let expected_x = BASE_RADIUS * lat.cos() * angle.sin();
        let expected_y = BASE_RADIUS * lat.sin() * angle.sin();
        let expected_z = BASE_RADIUS * angle.cos();
        assert!((p.x - expected_x).abs() < 1e-2);
        assert!((p.y - expected_y).abs() < 1e-2);
        assert!((p.z - expected_z).abs() < 1e-2);
    }
}

#[test]
fn points_are_stable_while_radius_is_converged() {
    let (mut scene, _sender) = OrbScene::new(1);
    // no events: radius equals its target from the start
    let before: Vec<_> = scene.lines()[3].points().to_vec();
    for _ in 0..10 {
        scene.tick();
    }
    assert_eq!(before, scene.lines()[3].points().to_vec());
}

#[test]
fn points_rebuild_while_radius_moves_then_freeze() {
    let (mut scene, sender) = OrbScene::new(1);
    sender.send(SessionEvent::ModeChange { speaking: true });

    scene.tick();
    let early: Vec<_> = scene.lines()[0].points().to_vec();
    scene.tick();
    let later: Vec<_> = scene.lines()[0].points().to_vec();
    assert_ne!(early, later, "points should rebuild while the radius moves");

    // run until well past convergence
    for _ in 0..300 {
        scene.tick();
    }
    assert!(
        (scene.params.target_radius - scene.params.radius).abs() <= RADIUS_REBUILD_THRESHOLD
    );
    let frozen: Vec<_> = scene.lines()[0].points().to_vec();
    for _ in 0..10 {
        scene.tick();
    }
    assert_eq!(frozen, scene.lines()[0].points().to_vec());
}

#[test]
fn queued_events_apply_in_arrival_order() {
    let (mut scene, sender) = OrbScene::new(1);
    sender.send(SessionEvent::ModeChange { speaking: true });
    sender.send(SessionEvent::Message { role: Role::User });
    scene.tick();
    // the later user message wins the amplitude/radius targets, but the
    // earlier mode change already raised the tilt target
    assert_eq!(scene.params.target_amplitude, 0.0);
    assert_eq!(scene.params.target_radius, BASE_RADIUS);
    assert!(scene.params.target_rotation.x > 0.0);
}

#[test]
fn event_queue_drains_in_order() {
    let (queue, sender) = EventQueue::new();
    sender.send(SessionEvent::Disconnected);
    sender.send(SessionEvent::Error {
        message: "boom".into(),
    });
    sender.send(SessionEvent::Message {
        role: Role::Assistant,
    });
    let mut out = Vec::new();
    queue.drain(&mut out);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], SessionEvent::Disconnected);
    assert!(matches!(out[1], SessionEvent::Error { .. }));
    assert_eq!(
        out[2],
        SessionEvent::Message {
            role: Role::Assistant
        }
    );
    out.clear();
    queue.drain(&mut out);
    assert!(out.is_empty(), "second drain should find nothing");
}

#[test]
fn sender_survives_cross_thread_posting() {
    let (mut scene, sender) = OrbScene::new(1);
    let handle = std::thread::spawn(move || {
        sender.send(SessionEvent::ModeChange { speaking: true });
    });
    handle.join().unwrap();
    scene.tick();
    assert_eq!(scene.params.target_radius, MAX_RADIUS);
}

#[test]
fn spin_target_grows_by_a_fixed_step_each_tick() {
    let (mut scene, _sender) = OrbScene::new(1);
    for _ in 0..100 {
        scene.tick();
    }
    assert!(
        (scene.params.target_rotation.y - 100.0 * SPIN_TARGET_STEP).abs() < 1e-4,
        "yaw target was {}",
        scene.params.target_rotation.y
    );
    // the smoothed yaw chases but never catches the creeping target
    assert!(scene.params.rotation.y > 0.0);
    assert!(scene.params.rotation.y < scene.params.target_rotation.y);
}

#[test]
fn yaw_sums_smoothed_spin_and_frame_rotation() {
    let (mut scene, _sender) = OrbScene::new(1);
    for _ in 0..10 {
        scene.tick();
    }
    let expected = scene.params.rotation.y + scene.frame_count() as f32 * FRAME_SPIN_RATE;
    assert_eq!(scene.yaw(), expected);
    assert_eq!(scene.frame_count(), 10);
}

#[test]
fn stroke_width_tracks_amplitude() {
    let (mut scene, sender) = OrbScene::new(1);
    assert_eq!(scene.stroke_width(), 2.0);
    sender.send(SessionEvent::ModeChange { speaking: true });
    for _ in 0..100 {
        scene.tick();
    }
    assert!((scene.stroke_width() - 3.0).abs() < 0.01);
}

#[test]
fn model_matrix_rotates_x_then_y() {
    let (mut scene, sender) = OrbScene::new(1);
    sender.send(SessionEvent::ModeChange { speaking: true });
    for _ in 0..50 {
        scene.tick();
    }
    let m = scene.model_matrix();
    let expected = glam::Mat4::from_rotation_x(scene.params.rotation.x)
        * glam::Mat4::from_rotation_y(scene.yaw());
    assert!(m.abs_diff_eq(expected, 1e-6));
}
