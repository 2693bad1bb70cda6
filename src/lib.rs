pub mod api;
pub mod app;
pub mod config;
pub mod form;
pub mod model;
pub mod notice;
pub mod route;
pub mod table;
pub mod ui;
pub mod utils;
