use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::calendar_page))
        .route("/checkin", get(handlers::checkin_page).post(handlers::checkin_form))
        .route("/fortune", get(handlers::fortune_page))
        .route("/api/data", get(handlers::get_data))
        .route("/api/checkin", post(handlers::check_in))
        .route("/api/checkins/:date", get(handlers::get_check_in))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/settings", get(handlers::get_settings).put(handlers::update_settings))
        .route("/api/fortune", get(handlers::get_fortune))
        .route("/api/moods", get(handlers::get_moods))
        .route("/api/commands/:command", post(handlers::run_command))
        .route("/api/panels/:kind", delete(handlers::close_panel))
        .with_state(state)
}
