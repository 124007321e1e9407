pub mod config;
pub mod error;
pub mod model;
pub mod task_list;
pub mod text;
