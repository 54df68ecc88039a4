use diffdrive_odometry::{
    format_snapshot, parse_tick_log, replay, Command, DistancePolicy, OutputFormat, Pose, Session,
    SimulatorConfig, WheelGeometry,
};

#[test]
fn test_recorded_log_drives_session() {
    let log = "\
# square-ish loop with a slip
forward
forward
10 10 slip
A
A
curve-right
-10 -10
";
    let entries = parse_tick_log(log).unwrap();
    let mut session = Session::from_config(&SimulatorConfig::default()).unwrap();

    let report = replay(&mut session, &entries);

    assert_eq!(report.applied, 7);
    assert_eq!(report.rejected, 0);
    assert_eq!(session.engine().trail().len(), 8);

    let heading = session.pose().heading_deg;
    assert!((0.0..360.0).contains(&heading));
    assert!(session.traveled_distance_cm() > 0.0);

    let text = format_snapshot(&session.snapshot(), OutputFormat::Text).unwrap();
    assert!(text.contains("Trail: 8 points"));
}

#[test]
fn test_keyboard_session_matches_raw_ticks() {
    let config = SimulatorConfig::default().with_distance_policy(DistancePolicy::CommandedTranslation);
    let mut by_command = Session::from_config(&config).unwrap();
    let mut by_ticks = Session::from_config(&config).unwrap();

    for key in "WWQEDP".chars() {
        let command = Command::from_key(key).unwrap();
        by_command.dispatch(command);

        let ticks = command.ticks().unwrap();
        by_ticks.apply_encoder_ticks(ticks.left_ticks, ticks.right_ticks, ticks.simulate_slip);
    }

    assert_eq!(by_command.snapshot(), by_ticks.snapshot());
}

#[test]
fn test_wall_blocks_then_reset_recovers() {
    let config = SimulatorConfig::default()
        .with_geometry(WheelGeometry::new(6.5, 6.5, 13.0, 360).unwrap())
        .with_workspace(50.0, 50.0)
        .with_initial_pose(45.0, 25.0, 0.0);
    let mut session = Session::from_config(&config).unwrap();

    let mut accepted = 0;
    while session.dispatch(Command::Forward).is_success() {
        accepted += 1;
        assert!(accepted < 100, "robot never reached the wall");
    }

    let blocked = session.snapshot();
    assert!(blocked.pose.x < 50.0);
    assert!(!session.dispatch(Command::Forward).is_success());
    assert_eq!(session.snapshot(), blocked);

    session.dispatch(Command::Reset);
    assert_eq!(session.pose(), Pose::new(45.0, 25.0, 0.0));
    assert_eq!(session.traveled_distance_cm(), 0.0);
    assert_eq!(session.engine().trail().len(), 1);
}
