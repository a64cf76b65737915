// Terminal front end for the Space Biology Navigator

pub mod about_ui;
pub mod app;
pub mod dashboard_ui;
pub mod explore_ui;
pub mod home_ui;
pub mod input;
pub mod runner;
pub mod ui;

pub use app::{App, AppEvent, Command, DashboardTab, InputMode};
pub use runner::run_tui;
