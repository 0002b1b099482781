pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::web;

/// The full route table. Paths are the wire contract with the existing
/// frontend, quirks included (`/Signup`, `/Addtask`, login at `/`).
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(auth::signup)
        .service(tasks::add_task)
        .service(tasks::task_list)
        .service(health::health);
}
