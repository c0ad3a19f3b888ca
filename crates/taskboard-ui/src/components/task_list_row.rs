use taskboard_core::datetime;
use taskboard_core::task::Task;
use uuid::Uuid;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
    pub task: Task,
    pub on_edit: Callback<Task>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(TaskListRow)]
pub fn task_list_row(props: &TaskListRowProps) -> Html {
    let id = props.task.id;
    let on_edit = props.on_edit.clone();
    let on_delete = props.on_delete.clone();
    let task_for_edit = props.task.clone();

    html! {
        <tr>
            <td>{ &props.task.name }</td>
            <td>{ datetime::format_due(props.task.due) }</td>
            <td>{ props.task.priority.label() }</td>
            <td>{ &props.task.description }</td>
            <td>
                <button onclick={move |_| on_edit.emit(task_for_edit.clone())}>{ "Edit" }</button>
                <button onclick={move |_| on_delete.emit(id)}>{ "Delete" }</button>
            </td>
        </tr>
    }
}
