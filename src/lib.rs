pub mod app;
pub mod components;
pub mod connection;
pub mod error;
pub mod models;
pub mod state;
pub mod views;
