use chrono::Utc;
use taskboard_core::store::StoreAction;
use taskboard_core::task::Task;
use taskboard_core::view::{self, DueFilter, PriorityFilter, SortBy, SortOrder};
use uuid::Uuid;
use web_sys::HtmlSelectElement;
use yew::{Callback, Html, TargetCast, function_component, html, use_context, use_state};

use super::TaskListRow;
use crate::state::BoardHandle;

#[function_component(TaskList)]
pub fn task_list() -> Html {
    let board = use_context::<BoardHandle>().expect("board context not provided");
    let filter_priority = use_state(PriorityFilter::default);
    let filter_due = use_state(DueFilter::default);
    let sort_by = use_state(SortBy::default);
    let sort_order = use_state(SortOrder::default);

    // Recomputed on every render from the latest collection and the
    // current control values.
    let visible = view::visible_tasks(
        board.store.tasks(),
        *filter_priority,
        *filter_due,
        *sort_by,
        *sort_order,
        Utc::now(),
    );

    let on_filter_priority_change = {
        let filter_priority = filter_priority.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                match PriorityFilter::from_key(&select.value()) {
                    Some(choice) => filter_priority.set(choice),
                    None => tracing::warn!(value = %select.value(), "unknown priority filter key"),
                }
            } else {
                tracing::warn!("priority filter event had non-select target");
            }
        })
    };

    let on_filter_due_change = {
        let filter_due = filter_due.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                match DueFilter::from_key(&select.value()) {
                    Some(choice) => filter_due.set(choice),
                    None => tracing::warn!(value = %select.value(), "unknown due filter key"),
                }
            } else {
                tracing::warn!("due filter event had non-select target");
            }
        })
    };

    let on_sort_by_change = {
        let sort_by = sort_by.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                match SortBy::from_key(&select.value()) {
                    Some(choice) => sort_by.set(choice),
                    None => tracing::warn!(value = %select.value(), "unknown sort key"),
                }
            } else {
                tracing::warn!("sort-by event had non-select target");
            }
        })
    };

    let on_sort_order_change = {
        let sort_order = sort_order.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                match SortOrder::from_key(&select.value()) {
                    Some(choice) => sort_order.set(choice),
                    None => tracing::warn!(value = %select.value(), "unknown sort order key"),
                }
            } else {
                tracing::warn!("sort-order event had non-select target");
            }
        })
    };

    let on_edit = {
        let board = board.clone();
        Callback::from(move |task: Task| {
            tracing::debug!(id = %task.id, "entering edit mode");
            board.dispatch(StoreAction::SetEditing(Some(task)));
        })
    };

    let on_delete = {
        let board = board.clone();
        Callback::from(move |id: Uuid| {
            tracing::info!(%id, "deleting task");
            board.dispatch(StoreAction::Delete(id));
        })
    };

    html! {
        <div class="task-list">
            <h2>{ "Task List" }</h2>

            <div class="filters">
                <label for="filter-priority">{ "Filter by Priority " }</label>
                <select
                    id="filter-priority"
                    value={filter_priority.as_key()}
                    onchange={on_filter_priority_change}
                >
                    {
                        for PriorityFilter::all().into_iter().map(|choice| html! {
                            <option value={choice.as_key()}>{ choice.label() }</option>
                        })
                    }
                </select>

                <label for="filter-due">{ "Filter by Due Date " }</label>
                <select
                    id="filter-due"
                    value={filter_due.as_key()}
                    onchange={on_filter_due_change}
                >
                    {
                        for DueFilter::all().into_iter().map(|choice| html! {
                            <option value={choice.as_key()}>{ choice.label() }</option>
                        })
                    }
                </select>
            </div>

            <div class="sorting">
                <label for="sort-by">{ "Sort By " }</label>
                <select id="sort-by" value={sort_by.as_key()} onchange={on_sort_by_change}>
                    {
                        for SortBy::all().into_iter().map(|choice| html! {
                            <option value={choice.as_key()}>{ choice.label() }</option>
                        })
                    }
                </select>

                <label for="sort-order">{ "Order " }</label>
                <select id="sort-order" value={sort_order.as_key()} onchange={on_sort_order_change}>
                    {
                        for SortOrder::all().into_iter().map(|choice| html! {
                            <option value={choice.as_key()}>{ choice.label() }</option>
                        })
                    }
                </select>
            </div>

            <table>
                <thead>
                    <tr>
                        <th>{ "Task Name" }</th>
                        <th>{ "Due Date" }</th>
                        <th>{ "Priority" }</th>
                        <th>{ "Description" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        if visible.is_empty() {
                            html! { <tr><td colspan="5">{ "No tasks to display." }</td></tr> }
                        } else {
                            html! {
                                <>
                                    {
                                        for visible.into_iter().map(|task| html! {
                                            <TaskListRow
                                                task={task}
                                                on_edit={on_edit.clone()}
                                                on_delete={on_delete.clone()}
                                            />
                                        })
                                    }
                                </>
                            }
                        }
                    }
                </tbody>
            </table>
        </div>
    }
}
