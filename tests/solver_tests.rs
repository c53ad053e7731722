use tether::{
    Anchor, Body, BodyResponse, PointMass, RopeConfig, RopeConstraint, Tension, Vec2, Vec3,
};

fn scenario_rope() -> RopeConstraint<f32> {
    let config = RopeConfig::new()
        .with_length_bounds(2.0, 15.0)
        .with_rest_length(5.0)
        .with_spring_force(50.0);
    RopeConstraint::new(&config).unwrap()
}

#[test]
fn stretched_dynamic_end_gets_spring_force() {
    let rope = scenario_rope();
    let mut start = Anchor::new(Vec3::new(0.0, 0.0, 0.0));
    let mut end = PointMass::new(Vec3::new(10.0, 0.0, 0.0), 1.0);

    let outcome = rope
        .solve(Some(&Body::Kinematic(&mut start)), Some(&mut Body::Dynamic(&mut end)))
        .unwrap();

    assert!((outcome.distance - 10.0).abs() < 1e-6);
    match outcome.tension {
        Tension::Stretched { excess, response } => {
            assert!((excess - 5.0).abs() < 1e-6);
            assert_eq!(response, BodyResponse::Force(Vec2::new(-250.0, 0.0)));
        }
        other => panic!("expected stretched rope, got {:?}", other),
    }
    assert!((end.force.x + 250.0).abs() < 1e-4, "force.x = {}", end.force.x);
    assert!(end.force.y.abs() < 1e-6);
    // A force does not move the body until it integrates.
    assert_eq!(end.pos, Vec3::new(10.0, 0.0, 0.0));
}

#[test]
fn stretched_kinematic_end_is_displaced_to_rest_length() {
    let rope = scenario_rope();
    let mut start = Anchor::new(Vec3::new(0.0, 0.0, 0.0));
    let mut end = Anchor::new(Vec3::new(10.0, 0.0, 0.0));

    rope.solve(Some(&Body::Kinematic(&mut start)), Some(&mut Body::Kinematic(&mut end)))
        .unwrap();

    assert!((end.pos.x - 5.0).abs() < 1e-5, "end.x = {}", end.pos.x);
    assert!(end.pos.y.abs() < 1e-6);
}

#[test]
fn slack_rope_changes_nothing() {
    let rope = scenario_rope();
    let mut start = PointMass::new(Vec3::new(0.0, 0.0, 0.0), 1.0);
    let mut end = PointMass::new(Vec3::new(3.0, 0.0, 0.0), 1.0);

    let outcome = rope
        .solve(Some(&Body::Dynamic(&mut start)), Some(&mut Body::Dynamic(&mut end)))
        .unwrap();

    assert_eq!(outcome.tension, Tension::Slack);
    assert_eq!(start.pos, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(end.pos, Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(start.force, Vec2::new(0.0, 0.0));
    assert_eq!(end.force, Vec2::new(0.0, 0.0));
}

#[test]
fn exactly_at_rest_length_is_slack() {
    let rope = scenario_rope();
    let mut start = Anchor::new(Vec3::new(0.0, 0.0, 0.0));
    let mut end = Anchor::new(Vec3::new(0.0, 5.0, 0.0));

    let outcome = rope
        .solve(Some(&Body::Kinematic(&mut start)), Some(&mut Body::Kinematic(&mut end)))
        .unwrap();
    assert_eq!(outcome.tension, Tension::Slack);
    assert_eq!(end.pos, Vec3::new(0.0, 5.0, 0.0));
}

#[test]
fn correction_points_toward_start() {
    let rope = scenario_rope();
    let offsets = [
        Vec2::new(9.0, 4.0),
        Vec2::new(-12.0, 3.0),
        Vec2::new(0.5, -20.0),
        Vec2::new(-6.0, -6.0),
    ];

    for offset in offsets {
        let start_pos = Vec3::new(1.0, 2.0, 0.0);
        let end_pos = Vec3::new(1.0 + offset.x, 2.0 + offset.y, 0.0);
        let mut start = Anchor::new(start_pos);
        let mut end = PointMass::new(end_pos, 1.0);

        rope.solve(Some(&Body::Kinematic(&mut start)), Some(&mut Body::Dynamic(&mut end)))
            .unwrap();

        let to_start = Vec2::new(start_pos.x - end_pos.x, start_pos.y - end_pos.y);
        let dot = end.force.x * to_start.x + end.force.y * to_start.y;
        assert!(dot > 0.0, "correction {:?} should point toward start", end.force);
    }
}

#[test]
fn start_body_is_never_corrected() {
    let rope = scenario_rope();
    let mut start = PointMass::new(Vec3::new(0.0, 0.0, 0.0), 1.0);
    let mut end = PointMass::new(Vec3::new(0.0, 12.0, 0.0), 1.0);

    rope.solve(Some(&Body::Dynamic(&mut start)), Some(&mut Body::Dynamic(&mut end)))
        .unwrap();

    assert_eq!(start.force, Vec2::new(0.0, 0.0));
    assert!(end.force.y < 0.0);
}

#[test]
fn coincident_endpoints_skip_correction() {
    let rope = scenario_rope();
    let mut start = Anchor::new(Vec3::new(5.0, 5.0, 0.0));
    let mut end = PointMass::new(Vec3::new(5.0, 5.0, 0.0), 1.0);

    let outcome = rope
        .solve(Some(&Body::Kinematic(&mut start)), Some(&mut Body::Dynamic(&mut end)))
        .unwrap();

    assert_eq!(outcome.tension, Tension::Degenerate);
    assert_eq!(end.force, Vec2::new(0.0, 0.0));
    assert_eq!(end.pos, Vec3::new(5.0, 5.0, 0.0));
}

#[test]
fn missing_body_is_a_silent_no_op() {
    let rope = scenario_rope();
    let mut end = Anchor::new(Vec3::new(10.0, 0.0, 0.0));

    assert!(rope.solve(None, Some(&mut Body::Kinematic(&mut end))).is_none());
    assert_eq!(end.pos, Vec3::new(10.0, 0.0, 0.0));

    let mut start = Anchor::new(Vec3::new(0.0, 0.0, 0.0));
    assert!(rope.solve(Some(&Body::Kinematic(&mut start)), None).is_none());
}

#[test]
fn locked_axis_is_ignored_and_projected() {
    let rope = RopeConstraint::new(
        &RopeConfig::<f32>::new().with_rest_length(5.0).with_anchor_depth(1.5),
    )
    .unwrap();
    // Planar distance 3, large depth difference: still slack.
    let mut start = Anchor::new(Vec3::new(0.0, 0.0, -40.0));
    let mut end = Anchor::new(Vec3::new(3.0, 0.0, 80.0));

    let outcome = rope
        .solve(Some(&Body::Kinematic(&mut start)), Some(&mut Body::Kinematic(&mut end)))
        .unwrap();

    assert_eq!(outcome.tension, Tension::Slack);
    assert_eq!(outcome.endpoints.start, Vec3::new(0.0, 0.0, 1.5));
    assert_eq!(outcome.endpoints.end, Vec3::new(3.0, 0.0, 1.5));
}

#[test]
fn endpoints_report_pre_correction_positions() {
    let rope = scenario_rope();
    let mut start = Anchor::new(Vec3::new(0.0, 0.0, 0.0));
    let mut end = Anchor::new(Vec3::new(10.0, 0.0, 0.0));

    let outcome = rope
        .solve(Some(&Body::Kinematic(&mut start)), Some(&mut Body::Kinematic(&mut end)))
        .unwrap();

    assert_eq!(outcome.endpoints.end, Vec3::new(10.0, 0.0, 0.0));
    assert!((end.pos.x - 5.0).abs() < 1e-5);
}
