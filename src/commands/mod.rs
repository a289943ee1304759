pub mod check;
pub mod config;
mod context;
pub mod init;

pub use check::{run_check, run_check_impl};
pub use config::run_config;
pub use init::{generate_config_template, run_init, run_init_impl};
