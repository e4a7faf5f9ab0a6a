use super::*;
use crate::runner::fake::FakeRunner;

const LIST: &str = "colima list --json";
const CONTEXT_LS: &str = "docker context ls | grep '*' | grep colima";

const THREE: &str = concat!(
    r#"{"name":"default","status":"Running","arch":"x86_64"}"#,
    "\n",
    r#"{"name":"X","status":"Stopped","arch":"aarch64"}"#,
    "\n",
    r#"{"name":"Y","status":"Stopped","arch":"x86_64"}"#,
    "\n",
);

const TWO: &str = concat!(
    r#"{"name":"default","status":"Running","arch":"x86_64"}"#,
    "\n",
    r#"{"name":"arm64","status":"Stopped","arch":"aarch64"}"#,
    "\n",
);

fn controller(runner: FakeRunner) -> MenuController<FakeRunner> {
    MenuController::new(runner, Config::default())
}

#[test]
fn test_new_controller_is_idle_with_placeholder() {
    let c = controller(FakeRunner::new());
    assert_eq!(c.state(), ControllerState::Idle);
    assert_eq!(c.title(), "(~)");
    assert!(c.instances().is_empty());
}

#[test]
fn test_start_sets_title_from_active_context() {
    let runner = FakeRunner::new()
        .with_output(LIST, TWO)
        .with_output(CONTEXT_LS, "colima-arm64 *   moby\n");
    let mut c = controller(runner);

    let active = c.start();

    assert_eq!(active.map(|i| i.name), Some("arm64".to_string()));
    assert_eq!(c.title(), "aarch64");
    assert_eq!(c.state(), ControllerState::Displaying);
    assert_eq!(c.runner().calls(), vec![LIST, CONTEXT_LS]);
}

#[test]
fn test_start_without_active_context_keeps_placeholder() {
    let runner = FakeRunner::new()
        .with_output(LIST, TWO)
        .with_failure(CONTEXT_LS, 1);
    let mut c = controller(runner);

    assert!(c.start().is_none());
    assert_eq!(c.title(), "(~)");
    assert_eq!(c.instances().len(), 2);
}

#[test]
fn test_start_with_unknown_context_keeps_placeholder() {
    let runner = FakeRunner::new()
        .with_output(LIST, TWO)
        .with_output(CONTEXT_LS, "colima-gone *  moby\n");
    let mut c = controller(runner);

    assert!(c.start().is_none());
    assert_eq!(c.title(), "(~)");
}

#[test]
fn test_menu_entries_follow_list_order() {
    let mut c = controller(FakeRunner::new().with_output(LIST, THREE));
    c.refresh();

    let entries = c.menu_entries();
    let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["instance:default", "instance:X", "instance:Y"]);
    assert_eq!(entries[1].label, "X\taarch64\t\tStopped");
}

#[test]
fn test_refresh_overwrites_list() {
    let mut c = controller(FakeRunner::new().with_output(LIST, THREE));
    c.refresh();
    assert_eq!(c.instances().len(), 3);

    c.runner = FakeRunner::new().with_failure(LIST, 1);
    c.refresh();
    assert!(c.instances().is_empty());
    assert!(c.menu_entries().is_empty());
}

#[test]
fn test_select_stops_others_and_starts_selected_in_list_order() {
    let mut c = controller(FakeRunner::new().with_output(LIST, THREE));
    c.refresh();
    c.runner().clear_calls();

    let selected = c.select("X", |_| {});

    assert_eq!(selected.map(|i| i.name), Some("X".to_string()));
    assert_eq!(
        c.runner().calls(),
        vec![
            "colima stop -p default",
            "colima start -p X",
            "colima stop -p Y",
            "docker context use colima-X",
        ]
    );
}

#[test]
fn test_select_default_targets_base_context() {
    let mut c = controller(FakeRunner::new().with_output(LIST, THREE));
    c.refresh();
    c.runner().clear_calls();

    c.select("default", |_| {});

    let calls = c.runner().calls();
    assert_eq!(calls.last().map(String::as_str), Some("docker context use colima"));
    assert_eq!(calls[0], "colima start -p default");
}

#[test]
fn test_select_reports_title_transitions() {
    let mut c = controller(FakeRunner::new().with_output(LIST, TWO));
    c.refresh();

    let mut titles = Vec::new();
    c.select("arm64", |title| titles.push(title.to_string()));

    assert_eq!(titles, vec!["...", "aarch64"]);
    assert_eq!(c.title(), "aarch64");
    assert_eq!(c.state(), ControllerState::Displaying);
}

#[test]
fn test_select_does_not_relist() {
    let mut c = controller(FakeRunner::new().with_output(LIST, TWO));
    c.refresh();
    c.runner().clear_calls();

    c.select("arm64", |_| {});

    assert!(!c.runner().calls().iter().any(|call| call == LIST));
    assert_eq!(c.instances().len(), 2);
}

#[test]
fn test_select_ignores_command_failures() {
    let runner = FakeRunner::new()
        .with_output(LIST, TWO)
        .with_failure("colima stop -p default", 1)
        .with_failure("colima start -p arm64", 1)
        .with_failure("docker context use colima-arm64", 1);
    let mut c = controller(runner);
    c.refresh();
    c.runner().clear_calls();

    let selected = c.select("arm64", |_| {});

    assert!(selected.is_some());
    assert_eq!(c.runner().calls().len(), 3);
    assert_eq!(c.title(), "aarch64");
}

#[test]
fn test_select_unknown_instance_runs_nothing() {
    let mut c = controller(FakeRunner::new().with_output(LIST, TWO));
    c.refresh();
    c.runner().clear_calls();

    let mut titles = Vec::new();
    assert!(c.select("ghost", |t| titles.push(t.to_string())).is_none());
    assert!(c.runner().calls().is_empty());
    assert!(titles.is_empty());
    assert_eq!(c.title(), "(~)");
}

#[test]
fn test_end_to_end_switch() {
    let mut c = controller(FakeRunner::new().with_output(LIST, TWO));
    c.refresh();
    c.runner().clear_calls();

    let action = MenuAction::from_id(&c.menu_entries()[1].id).unwrap();
    let outcome = c.handle(&action, |_| {});

    assert_eq!(outcome, Outcome::Redraw);
    assert_eq!(
        c.runner().calls(),
        vec![
            "colima stop -p default",
            "colima start -p arm64",
            "docker context use colima-arm64",
        ]
    );
    assert_eq!(c.title(), "aarch64");
}

#[test]
fn test_handle_quit() {
    let mut c = controller(FakeRunner::new());
    assert_eq!(c.handle(&MenuAction::Quit, |_| {}), Outcome::Quit);
    assert!(c.runner().calls().is_empty());
}

#[test]
fn test_handle_stale_selection_is_ignored() {
    let mut c = controller(FakeRunner::new());
    let outcome = c.handle(&MenuAction::Select("arm64".to_string()), |_| {});
    assert_eq!(outcome, Outcome::Ignored);
}

#[test]
fn test_menu_action_ids() {
    assert_eq!(MenuAction::from_id("quit"), Some(MenuAction::Quit));
    assert_eq!(
        MenuAction::from_id("instance:arm64"),
        Some(MenuAction::Select("arm64".to_string()))
    );
    assert_eq!(MenuAction::from_id("instance:"), None);
    assert_eq!(MenuAction::from_id("1042"), None);
    assert_eq!(MenuAction::Select("dev".to_string()).id(), "instance:dev");
    assert_eq!(MenuAction::Quit.id(), QUIT_ID);
}

#[test]
fn test_custom_titles_from_config() {
    let config = Config {
        placeholder_title: "colima".to_string(),
        switching_title: "⏳".to_string(),
        ..Config::default()
    };
    let mut c = MenuController::new(FakeRunner::new().with_output(LIST, TWO), config);
    assert_eq!(c.title(), "colima");
    c.refresh();

    let mut titles = Vec::new();
    c.select("default", |t| titles.push(t.to_string()));
    assert_eq!(titles, vec!["⏳", "x86_64"]);
}
