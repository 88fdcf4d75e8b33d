/// Integration tests for the freelancer CLI
///
/// These tests drive the commands end-to-end against a file-backed store in
/// a temporary directory:
/// - Demo seeding and session handling
/// - Dashboard summary and client listing
/// - Kanban board and task moves
/// - Error cases and exit codes

mod common;

use common::TestContext;
use freelancer_cli::CliError;
use freelancer_shared::auth::AuthError;
use serde_json::Value;

#[test]
fn test_commands_require_sign_in() {
    let ctx = TestContext::new();

    let commands: [&[&str]; 4] = [&["summary"], &["board"], &["clients"], &["whoami"]];
    for args in commands {
        let err = ctx.run(args).unwrap_err();
        assert!(matches!(err, CliError::NotSignedIn), "{:?}", args);
        assert_eq!(err.exit_code(), 1);
    }
}

#[test]
fn test_demo_then_whoami() {
    let ctx = TestContext::new();

    let output = ctx.ok(&["demo"]);
    assert!(output.contains("demo@freelancerpro.com"));

    let whoami = ctx.ok(&["whoami"]);
    assert!(whoami.contains("Demo User"));
    assert!(ctx.dir.path().join("freelancer_app_data.json").exists());
    assert!(ctx.dir.path().join("current_user.json").exists());
}

#[test]
fn test_summary_json() {
    let ctx = TestContext::new();
    ctx.ok(&["demo"]);

    let summary: Value = serde_json::from_str(&ctx.ok(&["summary", "--json"])).unwrap();

    assert_eq!(summary["totalProjects"], 3);
    assert_eq!(summary["activeClients"], 2);
    assert_eq!(summary["totalRevenue"], 18500.0);
    assert_eq!(summary["recentProjects"][0]["id"], "project-2");
    assert_eq!(summary["urgentTasks"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_summary_text_resolves_client_names() {
    let ctx = TestContext::new();
    ctx.ok(&["demo"]);

    let output = ctx.ok(&["summary"]);
    assert!(output.contains("Revenue:  $18500.00"));
    assert!(output.contains("Restaurant Website"));
    assert!(output.contains("Maria Gonzalez"));
}

#[test]
fn test_clients_filters() {
    let ctx = TestContext::new();
    ctx.ok(&["demo"]);

    let active = ctx.ok(&["clients", "--status", "active"]);
    assert_eq!(active.lines().count(), 2);

    let kitchen = ctx.ok(&["clients", "--query", "KITCHEN"]);
    assert_eq!(kitchen.lines().count(), 1);
    assert!(kitchen.contains("client-2"));

    let none = ctx.ok(&["clients", "--query", "nobody"]);
    assert_eq!(none.trim(), "No clients found");
}

#[test]
fn test_move_task_updates_board() {
    let ctx = TestContext::new();
    ctx.ok(&["demo"]);

    let moved = ctx.ok(&["move-task", "task-3", "in_progress"]);
    assert_eq!(moved.trim(), "Food photography: pending -> in_progress");

    let board: Value = serde_json::from_str(&ctx.ok(&["board", "--json"])).unwrap();
    assert_eq!(board["in_progress"].as_array().map(Vec::len), Some(2));
    assert_eq!(board["pending"].as_array().map(Vec::len), Some(1));

    // Dropping on the same column changes nothing
    let again = ctx.ok(&["move-task", "task-3", "in-progress"]);
    assert_eq!(again.trim(), "Food photography: in_progress -> in_progress");
}

#[test]
fn test_move_unknown_task() {
    let ctx = TestContext::new();
    ctx.ok(&["demo"]);

    let err = ctx.run(&["move-task", "task-99", "completed"]).unwrap_err();
    assert!(matches!(err, CliError::NotFound { kind: "task", .. }));
}

#[test]
fn test_register_login_logout() {
    let ctx = TestContext::new();

    ctx.ok(&["register", "-e", "fran@example.com", "-n", "Fran", "-p", "hunter22"]);
    ctx.ok(&["logout"]);
    assert!(matches!(ctx.run(&["whoami"]), Err(CliError::NotSignedIn)));

    let err = ctx
        .run(&["login", "-e", "fran@example.com", "-p", "wrong-password"])
        .unwrap_err();
    assert!(matches!(err, CliError::Auth(AuthError::InvalidPassword)));

    let output = ctx.ok(&["login", "-e", "fran@example.com", "-p", "hunter22"]);
    assert!(output.contains("Signed in as Fran <fran@example.com>"));

    // A fresh account has an empty board
    let board = ctx.ok(&["board"]);
    assert!(board.contains("pending (0)"));
}

#[test]
fn test_register_duplicate_email() {
    let ctx = TestContext::new();
    ctx.ok(&["demo"]);

    let err = ctx
        .run(&["register", "-e", "demo@freelancerpro.com", "-n", "Dup", "-p", "secret1"])
        .unwrap_err();
    assert!(matches!(err, CliError::Auth(AuthError::UserAlreadyExists)));
}
