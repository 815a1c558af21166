//! Navigation scenarios driven through the library with a scripted view

use subway::{
    AppConfig, Controller, MockView, ScreenRegistry, ScreenType, SubwayError, SubwayMap,
    ValidationError,
};

fn controller<'a>(
    registry: &'a ScreenRegistry,
    config: &'a AppConfig,
    inputs: &[&str],
) -> Controller<'a, MockView> {
    Controller::new(
        registry,
        config,
        MockView::with_inputs(inputs.iter().copied()),
        SubwayMap::seeded().unwrap(),
    )
    .unwrap()
}

#[test]
fn depth_tracks_pushes_and_pops() {
    let registry = ScreenRegistry::standard().unwrap();
    let config = AppConfig::default();

    // each MANAGE choice from MAIN pushes one screen, each B pops it again
    for command in ["1", "2", "3"] {
        let mut controller = controller(&registry, &config, &[command, "B"]);
        controller.step().unwrap();
        assert_eq!(controller.stack().depth(), 2);
        controller.step().unwrap();
        assert_eq!(controller.stack().as_slice(), &[ScreenType::Main]);
    }
}

#[test]
fn unknown_commands_never_move_the_stack() {
    let registry = ScreenRegistry::standard().unwrap();
    let config = AppConfig::default();
    let junk = ["0", "5", "q", "b", "1 ", "Q\t", "B", "quit"];

    let mut controller = controller(&registry, &config, &junk);
    while let Ok(true) = controller.step() {}

    assert_eq!(controller.stack().as_slice(), &[ScreenType::Main]);
    assert_eq!(controller.view().errors().len(), junk.len());
    assert!(controller
        .view()
        .errors()
        .iter()
        .all(|e| matches!(e, ValidationError::InvalidCommand { .. })));
}

#[test]
fn full_session_builds_a_line() {
    let registry = ScreenRegistry::standard().unwrap();
    let config = AppConfig::default();
    let script = [
        "1", "1", "Sinsa", "B", // register station
        "2", "1", "Line 9", "Sinsa", "Gangnam", "B", // register line
        "3", "1", "Line 9", "Yangjae", "1", "B", // insert section in the middle
        "Q",
    ];

    let mut controller = controller(&registry, &config, &script);
    controller.run().unwrap();

    assert!(controller.stack().is_empty());
    assert!(controller.view().errors().is_empty());
    assert_eq!(
        controller.map().line("Line 9").unwrap().route,
        vec!["Sinsa", "Yangjae", "Gangnam"]
    );
}

#[test]
fn failed_action_keeps_user_on_screen() {
    let registry = ScreenRegistry::standard().unwrap();
    let config = AppConfig::default();
    let script = ["3", "2", "Line 2", "Sinsa", "B", "Q"];

    let mut controller = controller(&registry, &config, &script);
    controller.run().unwrap();

    let view = controller.view();
    assert!(matches!(
        view.errors(),
        [ValidationError::StationNotInRoute { .. }]
    ));
    assert_eq!(
        view.screens(),
        &[
            ScreenType::Main,
            ScreenType::RouteManagement,
            ScreenType::RouteManagement,
            ScreenType::Main
        ]
    );
}

#[test]
fn exhausted_input_surfaces_as_io_error() {
    let registry = ScreenRegistry::standard().unwrap();
    let config = AppConfig::default();
    let mut controller = controller(&registry, &config, &["2"]);
    assert!(matches!(controller.run(), Err(SubwayError::Io(_))));
}
