use anyhow::bail;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::task::Task;

/// Owns the authoritative task collection (insertion-ordered) and the
/// single "being edited" selection. Mutations go through the methods
/// below or, from a UI dispatch path, through [`TaskStore::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    editing: Option<Task>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    Add(Task),
    Update { id: Uuid, task: Task },
    Delete(Uuid),
    SetEditing(Option<Task>),
}

impl TaskStore {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    /// Appends the task. A duplicate id would make update/delete
    /// targeting ambiguous, so it is rejected and the collection is
    /// left untouched.
    #[tracing::instrument(skip(self, task), fields(id = %task.id))]
    pub fn add_task(&mut self, task: Task) -> anyhow::Result<()> {
        if self.tasks.iter().any(|existing| existing.id == task.id) {
            bail!("duplicate task id: {}", task.id);
        }

        self.tasks.push(task);
        debug!(count = self.tasks.len(), "task added");
        Ok(())
    }

    /// Replaces the matching task in place; position is preserved.
    /// A missing id degrades to a no-op.
    #[tracing::instrument(skip(self, task), fields(%id))]
    pub fn update_task(&mut self, id: Uuid, task: Task) {
        match self.tasks.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => {
                *slot = task;
                debug!("task replaced");
            }
            None => warn!("update targeted an id that is not in the collection"),
        }
    }

    /// Removes the matching task. A missing id degrades to a no-op.
    #[tracing::instrument(skip(self), fields(%id))]
    pub fn delete_task(&mut self, id: Uuid) {
        let before = self.tasks.len();
        self.tasks.retain(|existing| existing.id != id);

        if self.tasks.len() == before {
            warn!("delete targeted an id that is not in the collection");
        } else {
            debug!(count = self.tasks.len(), "task deleted");
        }
    }

    pub fn set_editing_task(&mut self, task: Option<Task>) {
        self.editing = task;
    }

    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::Add(task) => {
                if let Err(err) = self.add_task(task) {
                    error!(error = %err, "rejected task insertion");
                }
            }
            StoreAction::Update { id, task } => self.update_task(id, task),
            StoreAction::Delete(id) => self.delete_task(id),
            StoreAction::SetEditing(task) => self.set_editing_task(task),
        }
    }
}
