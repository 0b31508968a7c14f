pub mod config;
pub mod models;
pub mod repl;
pub mod routes;
pub mod services;
pub mod view;
