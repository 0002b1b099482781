#![doc = "The `taskline` library crate."]
#![doc = ""]
#![doc = "Signup, login, and scheduled-task storage for the Taskline backend."]
#![doc = "Contains the authentication mechanisms, the date/time normalizer,"]
#![doc = "the storage layer, routing configuration, and error handling used"]
#![doc = "by the main binary (`main.rs`)."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod schedule;
