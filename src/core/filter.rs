use crate::core::task::Task;

/// The horizontal filter row above the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Done,
    Pending,
}

impl TaskFilter {
    /// Every filter, in display order.
    pub const ALL: [TaskFilter; 3] = [Self::All, Self::Done, Self::Pending];

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Done => "Done",
            Self::Pending => "Pending",
        }
    }

    /// Project the store's ordering through this filter. Pure: the input is
    /// never reordered or mutated.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        match self {
            Self::All => tasks.iter().collect(),
            Self::Done => tasks.iter().filter(|t| t.is_complete).collect(),
            Self::Pending => tasks.iter().filter(|t| !t.is_complete).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::sample_tasks;

    #[test]
    fn all_returns_everything_in_order() {
        let tasks = sample_tasks();
        let all = TaskFilter::All.apply(&tasks);
        assert_eq!(all.len(), tasks.len());
        for (seen, expected) in all.iter().zip(&tasks) {
            assert_eq!(seen.id, expected.id);
        }
    }

    #[test]
    fn done_and_pending_partition_all() {
        let tasks = sample_tasks();
        let done = TaskFilter::Done.apply(&tasks);
        let pending = TaskFilter::Pending.apply(&tasks);

        assert_eq!(done.len() + pending.len(), tasks.len());
        assert!(done.iter().all(|t| t.is_complete));
        assert!(pending.iter().all(|t| !t.is_complete));
        assert!(!done.iter().any(|d| pending.iter().any(|p| p.id == d.id)));
    }

    #[test]
    fn filters_preserve_relative_order() {
        let tasks = sample_tasks();
        let pending = TaskFilter::Pending.apply(&tasks);
        let expected: Vec<_> = tasks.iter().filter(|t| !t.is_complete).collect();
        assert_eq!(
            pending.iter().map(|t| t.id).collect::<Vec<_>>(),
            expected.iter().map(|t| t.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn labels() {
        let labels: Vec<&str> = TaskFilter::ALL.iter().map(|f| f.as_label()).collect();
        assert_eq!(labels, ["All", "Done", "Pending"]);
    }
}
