use chrono::{DateTime, Duration, Utc};
use tracing::trace;

use crate::datetime::due_instant;
use crate::task::{Priority, Task};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    pub fn all() -> [Self; 4] {
        [Self::All, Self::Low, Self::Medium, Self::High]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Self::All),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    fn keeps(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Low => priority == Priority::Low,
            Self::Medium => priority == Priority::Medium,
            Self::High => priority == Priority::High,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueFilter {
    #[default]
    All,
    Overdue,
    Next7,
}

impl DueFilter {
    pub fn all() -> [Self; 3] {
        [Self::All, Self::Overdue, Self::Next7]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Overdue => "overdue",
            Self::Next7 => "next7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Overdue => "Overdue",
            Self::Next7 => "Next 7 Days",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Self::All),
            "overdue" => Some(Self::Overdue),
            "next7" => Some(Self::Next7),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    None,
    Priority,
    DueDate,
}

impl SortBy {
    pub fn all() -> [Self; 3] {
        [Self::None, Self::Priority, Self::DueDate]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Priority => "priority",
            Self::DueDate => "due_date",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Priority => "Priority",
            Self::DueDate => "Due Date",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "none" => Some(Self::None),
            "priority" => Some(Self::Priority),
            "due_date" => Some(Self::DueDate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn all() -> [Self; 2] {
        [Self::Asc, Self::Desc]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Asc => "Ascending",
            Self::Desc => "Descending",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Pure derivation of the visible rows: narrow by priority, then by
/// the due-date window, then sort a copy. The source order is never
/// touched; equal sort keys keep their relative input order.
pub fn visible_tasks(
    tasks: &[Task],
    priority: PriorityFilter,
    due: DueFilter,
    sort_by: SortBy,
    order: SortOrder,
    now: DateTime<Utc>,
) -> Vec<Task> {
    let horizon = now + Duration::days(7);

    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| {
            let keep = priority.keeps(task.priority)
                && match due {
                    DueFilter::All => true,
                    DueFilter::Overdue => due_instant(task.due) < now,
                    DueFilter::Next7 => {
                        let instant = due_instant(task.due);
                        instant >= now && instant <= horizon
                    }
                };
            trace!(id = %task.id, keep, "view filter evaluation");
            keep
        })
        .cloned()
        .collect();

    match sort_by {
        SortBy::None => {}
        SortBy::Priority => visible.sort_by(|a, b| {
            let by_rank = a.priority.rank().cmp(&b.priority.rank());
            match order {
                SortOrder::Asc => by_rank,
                SortOrder::Desc => by_rank.reverse(),
            }
        }),
        SortBy::DueDate => visible.sort_by(|a, b| {
            let by_due = a.due.cmp(&b.due);
            match order {
                SortOrder::Asc => by_due,
                SortOrder::Desc => by_due.reverse(),
            }
        }),
    }

    visible
}
