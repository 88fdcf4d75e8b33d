/// Integration tests for the flows built on the store: sign-up and login,
/// demo seeding, the dashboard and the Kanban board.
///
/// Run with: cargo test --test workflow_tests

use freelancer_shared::auth::{AuthError, Authenticator, Session};
use freelancer_shared::dashboard::DashboardSummary;
use freelancer_shared::demo::{load_demo_data, DEMO_EMAIL, DEMO_PASSWORD};
use freelancer_shared::filter::{ListFilter, TaskFilter};
use freelancer_shared::ids::{ClientId, TaskId, UserId};
use freelancer_shared::kanban::KanbanBoard;
use freelancer_shared::models::client::{Client, ClientStatus};
use freelancer_shared::models::task::{Task, TaskPriority, TaskStatus};
use freelancer_shared::refs::{Resolver, UNKNOWN};
use freelancer_shared::store::DataStore;

/// Helper to seed a store with the demo workspace
fn demo_store() -> (DataStore, UserId) {
    let store = DataStore::in_memory();
    let session = Session::new(store.backend());
    let user = load_demo_data(&store, &session).expect("Demo seeding should succeed");
    (store, user.id)
}

#[test]
fn test_register_then_login_then_logout() {
    let store = DataStore::in_memory();
    let auth = Authenticator::new(&store);

    let registered = auth
        .register("freelancer@example.com", "hunter22", "Fran")
        .unwrap();
    assert_eq!(auth.current_user().unwrap().id, registered.id);

    auth.logout().unwrap();
    assert!(auth.current_user().is_none());

    let logged_in = auth.login("FREELANCER@example.com", "hunter22").unwrap();
    assert_eq!(logged_in.id, registered.id);
    assert!(logged_in.password.is_empty());

    // The marker is visible to a second authenticator over the same backend
    assert_eq!(Authenticator::new(&store).current_user().unwrap().id, registered.id);
}

#[test]
fn test_demo_login_works() {
    let (store, demo_user) = demo_store();
    let auth = Authenticator::new(&store);
    auth.logout().unwrap();

    let user = auth.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    assert_eq!(user.id, demo_user);

    assert!(matches!(
        auth.login(DEMO_EMAIL, "password123"),
        Err(AuthError::InvalidPassword)
    ));
}

#[test]
fn test_demo_dashboard() {
    let (store, user) = demo_store();
    let summary = DashboardSummary::for_user(&store, &user).unwrap();

    assert_eq!(summary.total_projects, 3);
    assert_eq!(summary.active_projects, 2);
    assert_eq!(summary.total_clients, 3);
    assert_eq!(summary.active_clients, 2);
    assert_eq!(summary.total_tasks, 4);
    assert_eq!(summary.pending_tasks, 2);
    assert_eq!(summary.total_revenue, 18500.0);

    let recent: Vec<_> = summary.recent_projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(recent, ["project-2", "project-1", "project-3"]);

    let urgent: Vec<_> = summary.urgent_tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(urgent, ["task-2", "task-3", "task-4"]);
}

#[test]
fn test_demo_board_and_drag_and_drop() {
    let (store, user) = demo_store();

    let board = KanbanBoard::for_user(&store, &user).unwrap();
    assert_eq!(board.count(TaskStatus::Pending), 2);
    assert_eq!(board.count(TaskStatus::InProgress), 1);
    assert_eq!(board.count(TaskStatus::Completed), 1);

    Task::move_to(&store, &TaskId::new("task-3"), TaskStatus::InProgress).unwrap();
    Task::move_to(&store, &TaskId::new("task-1"), TaskStatus::Pending).unwrap();

    let board = KanbanBoard::for_user(&store, &user).unwrap();
    let in_progress: Vec<_> = board
        .column(TaskStatus::InProgress)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(in_progress, ["task-2", "task-3"]);
    assert_eq!(board.count(TaskStatus::Completed), 0);
    assert_eq!(board.len(), 4);
}

#[test]
fn test_deleting_client_leaves_projects_dangling() {
    let (store, user) = demo_store();

    assert!(Client::delete(&store, &ClientId::new("client-1")).unwrap());

    let document = store.load();
    assert_eq!(document.projects.len(), 3);
    let resolver = Resolver::new(&document);
    let labels: Vec<_> = document
        .projects
        .iter()
        .map(|p| resolver.client(p.client_id.as_ref()).label(UNKNOWN).to_string())
        .collect();
    assert_eq!(labels, [UNKNOWN, "Maria Gonzalez", UNKNOWN]);

    let summary = DashboardSummary::for_user(&store, &user).unwrap();
    assert_eq!(summary.total_clients, 2);
}

#[test]
fn test_filters_over_demo_lists() {
    let (store, user) = demo_store();

    let clients = Client::list_by_user(&store, &user).unwrap();
    let prospects = ListFilter::new()
        .status(ClientStatus::Prospect)
        .apply(clients.clone());
    assert_eq!(prospects.len(), 1);
    assert_eq!(prospects[0].name, "Carlos Mendoza");

    let kitchen = ListFilter::<ClientStatus>::new().query("kitchen").apply(clients);
    assert_eq!(kitchen.len(), 1);

    let high = TaskFilter {
        priority: Some(TaskPriority::High),
        ..Default::default()
    }
    .apply(Task::list_by_user(&store, &user).unwrap());
    assert_eq!(high.len(), 2);
}

#[test]
fn test_other_users_see_nothing_of_the_demo() {
    let (store, _) = demo_store();
    let auth = Authenticator::new(&store);
    let other = auth.register("other@example.com", "secret99", "Other").unwrap();

    let summary = DashboardSummary::for_user(&store, &other.id).unwrap();
    assert_eq!(summary.total_projects, 0);
    assert_eq!(summary.total_revenue, 0.0);
    assert!(KanbanBoard::for_user(&store, &other.id).unwrap().is_empty());
    assert_eq!(store.load().users.len(), 2);
}
