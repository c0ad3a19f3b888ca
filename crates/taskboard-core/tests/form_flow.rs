use chrono::{Duration, TimeZone, Utc};
use taskboard_core::datetime;
use taskboard_core::store::{StoreAction, TaskStore};
use taskboard_core::task::{Priority, Task};
use taskboard_core::validate::{FieldErrors, FieldPatch, validate};
use taskboard_core::view::{DueFilter, PriorityFilter, SortBy, SortOrder, visible_tasks};

#[test]
fn form_session_from_draft_to_visible_list() {
    let now = Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap();
    let today = now.date_naive();

    // First submit attempt: short name, no due date, no priority.
    let draft = FieldPatch {
        name: Some("ab".to_string()),
        due_date: Some(String::new()),
        priority: Some(String::new()),
        description: Some(String::new()),
    };
    let errors = validate(&draft, &FieldErrors::default(), today);
    assert!(!errors.is_clear());

    // Corrected draft passes and the prior messages are cleared.
    let draft = FieldPatch {
        name: Some("  Write the report  ".to_string()),
        due_date: Some(datetime::format_due(today + Duration::days(2))),
        priority: Some("high".to_string()),
        description: Some("Quarterly numbers".to_string()),
    };
    let errors = validate(&draft, &errors, today);
    assert!(errors.is_clear());

    let mut store = TaskStore::default();
    let report = Task::new(
        "Write the report".to_string(),
        today + Duration::days(2),
        Priority::High,
        "Quarterly numbers".to_string(),
    );
    let groceries = Task::new(
        "Buy groceries".to_string(),
        today - Duration::days(1),
        Priority::Low,
        String::new(),
    );
    let review = Task::new(
        "Review the branch".to_string(),
        today + Duration::days(5),
        Priority::Medium,
        String::new(),
    );

    store.apply(StoreAction::Add(report.clone()));
    store.apply(StoreAction::Add(groceries.clone()));
    store.apply(StoreAction::Add(review.clone()));
    assert_eq!(store.tasks().len(), 3);

    // Edit the middle task; its slot must not move.
    store.apply(StoreAction::SetEditing(Some(groceries.clone())));
    let edited = Task {
        priority: Priority::High,
        ..groceries.clone()
    };
    store.apply(StoreAction::Update {
        id: groceries.id,
        task: edited.clone(),
    });
    store.apply(StoreAction::SetEditing(None));
    assert_eq!(store.editing(), None);
    assert_eq!(store.tasks()[1], edited);

    // High-priority view, soonest first.
    let high_soonest = visible_tasks(
        store.tasks(),
        PriorityFilter::High,
        DueFilter::All,
        SortBy::DueDate,
        SortOrder::Asc,
        now,
    );
    let names: Vec<&str> = high_soonest.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, ["Buy groceries", "Write the report"]);

    // The derived view never reorders the source collection.
    let stored: Vec<&str> = store.tasks().iter().map(|task| task.name.as_str()).collect();
    assert_eq!(stored, ["Write the report", "Buy groceries", "Review the branch"]);

    // Only the yesterday task is overdue at this instant.
    let overdue = visible_tasks(
        store.tasks(),
        PriorityFilter::All,
        DueFilter::Overdue,
        SortBy::None,
        SortOrder::Asc,
        now,
    );
    let names: Vec<&str> = overdue.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, ["Buy groceries"]);

    store.apply(StoreAction::Delete(groceries.id));
    let empty = visible_tasks(
        store.tasks(),
        PriorityFilter::All,
        DueFilter::Overdue,
        SortBy::None,
        SortOrder::Asc,
        now,
    );
    assert!(empty.is_empty());
}
