//! Browser-independent roster logic: view model, form values, controller
//! state and the async workflows behind each action.

pub mod form;
pub mod route;
pub mod state;
pub mod view_model;
pub mod workflow;

#[cfg(test)]
pub mod testing;
