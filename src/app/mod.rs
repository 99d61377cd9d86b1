pub mod action;
pub mod command;
pub mod controller;
pub mod dispatcher;
pub mod features;
pub mod format;
pub mod handler;
pub mod history;
pub mod input;
pub mod keymap;
pub mod listener;
pub mod r#loop;
pub mod reducer;
pub mod scheduler;
pub mod state;
pub mod ui;
