//! Core library modules: the task model, configuration, messaging, console
//! rendering and export.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod view;
