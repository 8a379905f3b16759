use chrono::NaiveDateTime;

use crate::core::task::Task;

/// Aggregate counts for the progress card. Derived on every read; nothing
/// here is cached or stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
    /// Done over total, `0.0` for an empty list.
    pub ratio: f64,
}

impl Summary {
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let done = tasks.iter().filter(|t| t.is_complete).count();
        let ratio = if total == 0 {
            0.0
        } else {
            done as f64 / total as f64
        };
        Self {
            total,
            done,
            pending: total - done,
            ratio,
        }
    }

    /// Whole-number percentage for the center of the progress ring.
    pub fn percent(&self) -> u32 {
        (self.ratio * 100.0) as u32
    }
}

/// Tasks whose completion stamp falls within the seven days before `now`,
/// for the card's footer line.
pub fn completed_this_week(tasks: &[Task], now: NaiveDateTime) -> usize {
    let cutoff = now - chrono::Duration::days(7);
    tasks
        .iter()
        .filter(|t| t.completed.is_some_and(|c| c > cutoff && c <= now))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::core::task::{NewTask, sample_tasks};

    #[test]
    fn empty_list_is_all_zero() {
        let summary = Summary::of(&[]);
        assert_eq!(
            summary,
            Summary {
                total: 0,
                done: 0,
                pending: 0,
                ratio: 0.0
            }
        );
        assert_eq!(summary.percent(), 0);
    }

    #[test]
    fn counts_and_ratio() {
        let mut tasks = vec![
            Task::new(NewTask::default()),
            Task::new(NewTask::default()),
            Task::new(NewTask::default()),
        ];
        tasks[1].complete();

        let summary = Summary::of(&tasks);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.done, 1);
        assert_eq!(summary.pending, 2);
        assert!((summary.ratio - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.percent(), 33);
    }

    #[test]
    fn sample_data_summary() {
        let summary = Summary::of(&sample_tasks());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.done, 1);
        assert_eq!(summary.pending, 3);
        assert_eq!(summary.percent(), 25);
    }

    #[test]
    fn week_counter_uses_completion_stamps() {
        let day = |d: u32| {
            NaiveDate::from_ymd_opt(2026, 3, d)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        };

        let mut recent = Task::new(NewTask::default());
        recent.is_complete = true;
        recent.completed = Some(day(10));

        let mut stale = Task::new(NewTask::default());
        stale.is_complete = true;
        stale.completed = Some(day(1));

        let open = Task::new(NewTask::default());

        let tasks = vec![recent, stale, open];
        assert_eq!(completed_this_week(&tasks, day(12)), 1);
    }
}
