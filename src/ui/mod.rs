pub mod app;
pub mod board_model;
pub mod board_view;
pub mod console_view;
pub mod i18n;
pub mod launcher;
pub mod settings;
pub mod settings_io;
