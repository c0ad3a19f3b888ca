use yew::{ContextProvider, Html, function_component, html, use_reducer};

use crate::components::{TaskForm, TaskList};
use crate::state::{Board, BoardHandle};

#[function_component(App)]
pub fn app() -> Html {
    let board = use_reducer(Board::default);

    html! {
        <ContextProvider<BoardHandle> context={board}>
            <div class="app">
                <h1>{ "Task Management System" }</h1>
                <div class="app-content">
                    <TaskForm />
                    <TaskList />
                </div>
            </div>
        </ContextProvider<BoardHandle>>
    }
}
