#[path = "core/actions.rs"]
mod actions;


#[path = "core/task_manager.rs"]
mod task_manager;
