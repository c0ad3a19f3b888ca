use chrono::NaiveDate;

use crate::datetime;

/// Subset of form fields to evaluate. `None` means "leave this
/// field's prior verdict alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
}

impl FieldPatch {
    pub fn name(value: &str) -> Self {
        Self {
            name: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn due_date(value: &str) -> Self {
        Self {
            due_date: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn priority(value: &str) -> Self {
        Self {
            priority: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn description(value: &str) -> Self {
        Self {
            description: Some(value.to_string()),
            ..Self::default()
        }
    }
}

/// Per-field messages; the empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: String,
    pub due_date: String,
    pub priority: String,
    pub description: String,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_empty()
            && self.due_date.is_empty()
            && self.priority.is_empty()
            && self.description.is_empty()
    }
}

/// Re-evaluates exactly the fields present in `patch`; everything
/// else keeps its message from `prior`. Total over any input.
pub fn validate(patch: &FieldPatch, prior: &FieldErrors, today: NaiveDate) -> FieldErrors {
    let mut next = prior.clone();

    if let Some(name) = &patch.name {
        next.name = if name.trim().chars().count() >= 3 {
            String::new()
        } else {
            "Task Name must be at least 3 characters.".to_string()
        };
    }

    if let Some(due_date) = &patch.due_date {
        next.due_date = if due_date.is_empty() {
            "Due Date is required.".to_string()
        } else {
            match datetime::parse_due(due_date) {
                Some(due) if due < today => "Due date cannot be in the past.".to_string(),
                Some(_) => String::new(),
                // The date control only ever produces "" or a fixed-width
                // ISO date; anything else is treated as missing.
                None => "Due Date is required.".to_string(),
            }
        };
    }

    if let Some(priority) = &patch.priority {
        next.priority = if priority.is_empty() {
            "Priority is required.".to_string()
        } else {
            String::new()
        };
    }

    if let Some(description) = &patch.description {
        next.description = if description.chars().count() <= 200 {
            String::new()
        } else {
            "Description cannot exceed 200 characters.".to_string()
        };
    }

    next
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::{FieldErrors, FieldPatch, validate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn only_patched_fields_are_reevaluated() {
        let prior = FieldErrors {
            name: "Task Name must be at least 3 characters.".to_string(),
            ..FieldErrors::default()
        };

        let next = validate(&FieldPatch::description("fine"), &prior, today());

        assert_eq!(next.name, "Task Name must be at least 3 characters.");
        assert_eq!(next.description, "");
        assert_eq!(next.due_date, "");
        assert_eq!(next.priority, "");
    }

    #[test]
    fn name_requires_three_trimmed_characters() {
        let errors = validate(&FieldPatch::name("ab"), &FieldErrors::default(), today());
        assert_eq!(errors.name, "Task Name must be at least 3 characters.");

        let errors = validate(&FieldPatch::name("abc"), &FieldErrors::default(), today());
        assert_eq!(errors.name, "");

        let errors = validate(&FieldPatch::name("  abc  "), &FieldErrors::default(), today());
        assert_eq!(errors.name, "");

        let errors = validate(&FieldPatch::name(" ab "), &FieldErrors::default(), today());
        assert_eq!(errors.name, "Task Name must be at least 3 characters.");
    }

    #[test]
    fn due_date_must_be_present_and_not_past() {
        let errors = validate(&FieldPatch::due_date(""), &FieldErrors::default(), today());
        assert_eq!(errors.due_date, "Due Date is required.");

        let yesterday = (today() - Duration::days(1)).format("%Y-%m-%d").to_string();
        let errors = validate(
            &FieldPatch::due_date(&yesterday),
            &FieldErrors::default(),
            today(),
        );
        assert_eq!(errors.due_date, "Due date cannot be in the past.");

        let errors = validate(
            &FieldPatch::due_date("2026-08-07"),
            &FieldErrors::default(),
            today(),
        );
        assert_eq!(errors.due_date, "");

        let errors = validate(
            &FieldPatch::due_date("2026-08-08"),
            &FieldErrors::default(),
            today(),
        );
        assert_eq!(errors.due_date, "");
    }

    #[test]
    fn unparseable_due_date_is_treated_as_missing() {
        let errors = validate(
            &FieldPatch::due_date("next tuesday"),
            &FieldErrors::default(),
            today(),
        );
        assert_eq!(errors.due_date, "Due Date is required.");
    }

    #[test]
    fn priority_must_be_selected() {
        let errors = validate(&FieldPatch::priority(""), &FieldErrors::default(), today());
        assert_eq!(errors.priority, "Priority is required.");

        let errors = validate(&FieldPatch::priority("low"), &FieldErrors::default(), today());
        assert_eq!(errors.priority, "");
    }

    #[test]
    fn description_is_capped_at_200_characters() {
        let exactly = "d".repeat(200);
        let errors = validate(
            &FieldPatch::description(&exactly),
            &FieldErrors::default(),
            today(),
        );
        assert_eq!(errors.description, "");

        let over = "d".repeat(201);
        let errors = validate(
            &FieldPatch::description(&over),
            &FieldErrors::default(),
            today(),
        );
        assert_eq!(errors.description, "Description cannot exceed 200 characters.");

        let errors = validate(&FieldPatch::description(""), &FieldErrors::default(), today());
        assert_eq!(errors.description, "");
    }

    #[test]
    fn empty_patch_returns_prior_verdicts_unchanged() {
        let prior = FieldErrors {
            due_date: "Due Date is required.".to_string(),
            priority: "Priority is required.".to_string(),
            ..FieldErrors::default()
        };

        let next = validate(&FieldPatch::default(), &prior, today());
        assert_eq!(next, prior);
    }

    #[test]
    fn is_clear_reflects_every_field() {
        assert!(FieldErrors::default().is_clear());
        assert!(
            !FieldErrors {
                priority: "Priority is required.".to_string(),
                ..FieldErrors::default()
            }
            .is_clear()
        );
    }
}
