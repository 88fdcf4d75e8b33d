//! Kanban board
//!
//! The board shows a user's tasks in one column per [`TaskStatus`]. Moving a
//! card between columns is [`Task::move_to`].

use crate::ids::UserId;
use crate::models::task::{Task, TaskStatus};
use crate::store::{DataStore, StoreResult};

/// A user's tasks grouped by status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KanbanBoard {
    columns: [Vec<Task>; 4],
}

impl KanbanBoard {
    /// Loads the board of `user_id`
    ///
    /// Within a column, tasks keep storage order.
    pub fn for_user(store: &DataStore, user_id: &UserId) -> StoreResult<Self> {
        Ok(Self::from_tasks(Task::list_by_user(store, user_id)?))
    }

    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.columns[Self::slot(task.status)].push(task);
        }
        board
    }

    pub fn column(&self, status: TaskStatus) -> &[Task] {
        &self.columns[Self::slot(status)]
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.column(status).len()
    }

    /// Columns in board order
    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Cancelled => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::CreateTask;

    fn add(store: &DataStore, title: &str, status: TaskStatus, user: &str) -> Task {
        Task::create(
            store,
            CreateTask {
                title: title.to_string(),
                status,
                user_id: UserId::new(user),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_board_groups_by_status_in_storage_order() {
        let store = DataStore::in_memory();
        let a = add(&store, "A", TaskStatus::Pending, "u1");
        let b = add(&store, "B", TaskStatus::Completed, "u1");
        let c = add(&store, "C", TaskStatus::Pending, "u1");
        add(&store, "other", TaskStatus::Pending, "u2");

        let board = KanbanBoard::for_user(&store, &UserId::new("u1")).unwrap();

        assert_eq!(board.column(TaskStatus::Pending), &[a, c][..]);
        assert_eq!(board.column(TaskStatus::Completed), &[b][..]);
        assert_eq!(board.count(TaskStatus::Cancelled), 0);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_columns_follow_status_order() {
        let board = KanbanBoard::default();
        let order: Vec<_> = board.columns().map(|(status, _)| status).collect();
        assert_eq!(order, TaskStatus::ALL.to_vec());
        assert!(board.is_empty());
    }

    #[test]
    fn test_drop_moves_card_between_columns() {
        let store = DataStore::in_memory();
        let user = UserId::new("u1");
        let first = add(&store, "A", TaskStatus::Pending, "u1");
        add(&store, "B", TaskStatus::InProgress, "u1");

        Task::move_to(&store, &first.id, TaskStatus::InProgress).unwrap();

        let board = KanbanBoard::for_user(&store, &user).unwrap();
        assert_eq!(board.count(TaskStatus::InProgress), 2);
        assert_eq!(board.count(TaskStatus::Pending), 0);
    }
}
