use std::rc::Rc;

use taskboard_core::store::{StoreAction, TaskStore};
use yew::{Reducible, UseReducerHandle};

/// Shared application state: the task store behind a reducer handle,
/// injected into components through a `ContextProvider`. Every
/// dispatched [`StoreAction`] produces a new snapshot, so every
/// consumer re-derives its view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub store: TaskStore,
}

impl Reducible for Board {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.store.apply(action);
        Rc::new(next)
    }
}

pub type BoardHandle = UseReducerHandle<Board>;
