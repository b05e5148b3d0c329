use crate::error::InputError;
use crate::models::Task;

/// Ordered tasks of one session. Never holds an empty task.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Append a task. Empty tasks are refused; returns whether it was added.
    pub fn add(&mut self, task: Task) -> bool {
        if task.is_empty() {
            return false;
        }
        self.tasks.push(task);
        true
    }

    /// Resolve a 1-based task number typed by the user into a list index
    pub fn parse_number(&self, input: &str) -> Result<usize, InputError> {
        let number: usize = input
            .to_lowercase()
            .parse()
            .map_err(|_| InputError::InvalidTaskNumber)?;
        if number == 0 || number > self.tasks.len() {
            return Err(InputError::InvalidTaskNumber);
        }
        Ok(number - 1)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }
}
