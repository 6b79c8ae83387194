pub mod app;
pub mod config;
pub mod date;
pub mod errors;
pub mod fortune;
pub mod handlers;
pub mod models;
pub mod panels;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_data;
