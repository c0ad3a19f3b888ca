use taskboard_core::datetime;
use taskboard_core::store::StoreAction;
use taskboard_core::task::{Priority, Task};
use taskboard_core::validate::{FieldErrors, FieldPatch, validate};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{
    Callback, Html, TargetCast, function_component, html, use_context, use_effect_with, use_state,
};

use crate::state::BoardHandle;

#[derive(Clone, Default, PartialEq)]
struct Touched {
    name: bool,
    due_date: bool,
    priority: bool,
    description: bool,
}

impl Touched {
    fn all() -> Self {
        Self {
            name: true,
            due_date: true,
            priority: true,
            description: true,
        }
    }
}

/// The form-local draft: in-progress values, touched flags, and the
/// current per-field messages. Discarded on successful submit.
#[derive(Clone, Default, PartialEq)]
struct Draft {
    name: String,
    due_date: String,
    priority: String,
    description: String,
    touched: Touched,
    errors: FieldErrors,
}

impl Draft {
    fn from_task(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            due_date: datetime::format_due(task.due),
            priority: task.priority.as_key().to_string(),
            description: task.description.clone(),
            touched: Touched::all(),
            errors: FieldErrors::default(),
        }
    }

    fn full_patch(&self) -> FieldPatch {
        FieldPatch {
            name: Some(self.name.clone()),
            due_date: Some(self.due_date.clone()),
            priority: Some(self.priority.clone()),
            description: Some(self.description.clone()),
        }
    }
}

fn field_error(message: &str, touched: bool) -> Html {
    if touched && !message.is_empty() {
        html! { <div class="error">{ message }</div> }
    } else {
        html! {}
    }
}

#[function_component(TaskForm)]
pub fn task_form() -> Html {
    let board = use_context::<BoardHandle>().expect("board context not provided");
    let draft = use_state(Draft::default);
    let submitted = use_state(|| false);

    let editing = board.store.editing().cloned();

    {
        let draft = draft.clone();
        let submitted = submitted.clone();
        use_effect_with(editing.clone(), move |editing| {
            if let Some(task) = editing {
                tracing::debug!(id = %task.id, "loading task into the form");
                draft.set(Draft::from_task(task));
                submitted.set(false);
            }
            || ()
        });
    }

    let on_name_input = {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.name = input.value();
            if next.touched.name {
                next.errors = validate(
                    &FieldPatch::name(&next.name),
                    &next.errors,
                    datetime::today_utc(),
                );
            }
            draft.set(next);
        })
    };

    let on_name_blur = {
        let draft = draft.clone();
        Callback::from(move |_: web_sys::FocusEvent| {
            let mut next = (*draft).clone();
            next.touched.name = true;
            next.errors = validate(
                &FieldPatch::name(&next.name),
                &next.errors,
                datetime::today_utc(),
            );
            draft.set(next);
        })
    };

    let on_due_input = {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.due_date = input.value();
            if next.touched.due_date {
                next.errors = validate(
                    &FieldPatch::due_date(&next.due_date),
                    &next.errors,
                    datetime::today_utc(),
                );
            }
            draft.set(next);
        })
    };

    let on_due_blur = {
        let draft = draft.clone();
        Callback::from(move |_: web_sys::FocusEvent| {
            let mut next = (*draft).clone();
            next.touched.due_date = true;
            next.errors = validate(
                &FieldPatch::due_date(&next.due_date),
                &next.errors,
                datetime::today_utc(),
            );
            draft.set(next);
        })
    };

    let on_priority_change = {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*draft).clone();
                next.priority = select.value();
                if next.touched.priority {
                    next.errors = validate(
                        &FieldPatch::priority(&next.priority),
                        &next.errors,
                        datetime::today_utc(),
                    );
                }
                draft.set(next);
            } else {
                tracing::warn!("priority change event had non-select target");
            }
        })
    };

    let on_priority_blur = {
        let draft = draft.clone();
        Callback::from(move |_: web_sys::FocusEvent| {
            let mut next = (*draft).clone();
            next.touched.priority = true;
            next.errors = validate(
                &FieldPatch::priority(&next.priority),
                &next.errors,
                datetime::today_utc(),
            );
            draft.set(next);
        })
    };

    let on_description_input = {
        let draft = draft.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = input.value();
            if next.touched.description {
                next.errors = validate(
                    &FieldPatch::description(&next.description),
                    &next.errors,
                    datetime::today_utc(),
                );
            }
            draft.set(next);
        })
    };

    let on_description_blur = {
        let draft = draft.clone();
        Callback::from(move |_: web_sys::FocusEvent| {
            let mut next = (*draft).clone();
            next.touched.description = true;
            next.errors = validate(
                &FieldPatch::description(&next.description),
                &next.errors,
                datetime::today_utc(),
            );
            draft.set(next);
        })
    };

    let is_valid = validate(&draft.full_patch(), &draft.errors, datetime::today_utc()).is_clear();

    let on_submit = {
        let board = board.clone();
        let draft = draft.clone();
        let submitted = submitted.clone();
        let editing = editing.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();

            let today = datetime::today_utc();
            let mut next = (*draft).clone();
            next.touched = Touched::all();
            next.errors = validate(&next.full_patch(), &next.errors, today);

            if !next.errors.is_clear() {
                tracing::debug!("submit blocked by validation");
                draft.set(next);
                return;
            }

            let Some(due) = datetime::parse_due(&next.due_date) else {
                tracing::warn!(value = %next.due_date, "valid submit carried an unparseable due date");
                draft.set(next);
                return;
            };
            let Some(priority) = Priority::from_key(&next.priority) else {
                tracing::warn!(value = %next.priority, "valid submit carried an unknown priority key");
                draft.set(next);
                return;
            };

            match &editing {
                Some(task) => {
                    let replacement = Task {
                        id: task.id,
                        name: next.name.trim().to_string(),
                        due,
                        priority,
                        description: next.description.trim().to_string(),
                    };
                    tracing::info!(id = %task.id, "saving edited task");
                    board.dispatch(StoreAction::Update {
                        id: task.id,
                        task: replacement,
                    });
                    board.dispatch(StoreAction::SetEditing(None));
                }
                None => {
                    let task = Task::new(
                        next.name.trim().to_string(),
                        due,
                        priority,
                        next.description.trim().to_string(),
                    );
                    tracing::info!(id = %task.id, "adding task");
                    board.dispatch(StoreAction::Add(task));
                    submitted.set(true);
                }
            }

            draft.set(Draft::default());
        })
    };

    if *submitted && editing.is_none() {
        let on_reset = {
            let submitted = submitted.clone();
            Callback::from(move |_| submitted.set(false))
        };
        return html! {
            <div class="form-container">
                <h3>{ "Task Added Successfully!" }</h3>
                <button onclick={on_reset}>{ "Add Another Task" }</button>
            </div>
        };
    }

    html! {
        <form class="task-form" onsubmit={on_submit}>
            <h2>{ if editing.is_some() { "Edit Task" } else { "Add New Task" } }</h2>

            <div class="form-group">
                <label for="name">{ "Task Name :" }</label>
                <input
                    type="text"
                    id="name"
                    value={draft.name.clone()}
                    placeholder="Enter task name"
                    autocomplete="off"
                    oninput={on_name_input}
                    onblur={on_name_blur}
                />
                { field_error(&draft.errors.name, draft.touched.name) }
            </div>

            <div class="form-group">
                <label for="due-date">{ "Due Date :" }</label>
                <input
                    type="date"
                    id="due-date"
                    value={draft.due_date.clone()}
                    oninput={on_due_input}
                    onblur={on_due_blur}
                />
                { field_error(&draft.errors.due_date, draft.touched.due_date) }
            </div>

            <div class="form-group">
                <label for="priority">{ "Priority :" }</label>
                <select
                    id="priority"
                    value={draft.priority.clone()}
                    onchange={on_priority_change}
                    onblur={on_priority_blur}
                >
                    <option value="">{ "-- Select Priority --" }</option>
                    {
                        for Priority::all().into_iter().map(|priority| html! {
                            <option value={priority.as_key()}>{ priority.label() }</option>
                        })
                    }
                </select>
                { field_error(&draft.errors.priority, draft.touched.priority) }
            </div>

            <div class="form-group">
                <label for="description">{ "Description (optional):" }</label>
                <textarea
                    id="description"
                    value={draft.description.clone()}
                    placeholder="Enter description (max 200 chars)"
                    oninput={on_description_input}
                    onblur={on_description_blur}
                />
                { field_error(&draft.errors.description, draft.touched.description) }
            </div>

            <button type="submit" disabled={!is_valid}>
                { if editing.is_some() { "Save Changes" } else { "Add Task" } }
            </button>
        </form>
    }
}
