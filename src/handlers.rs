use crate::date::CalendarDate;
use crate::errors::AppError;
use crate::fortune::{FortuneReading, fortune_for, random_fortune};
use crate::models::{
    CheckInRecord, CheckInRequest, DataSnapshot, FortuneQuery, Mood, MoodOption, Settings,
    UserStats,
};
use crate::panels::{Command, PanelHandle, PanelKind, PanelOpened};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::{render_calendar, render_checkin, render_fortune};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use chrono::Utc;
use tracing::info;

pub async fn calendar_page(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_calendar(&store.snapshot(CalendarDate::today())))
}

pub async fn checkin_page(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_checkin(CalendarDate::today(), store.today_check_in().as_ref()))
}

pub async fn fortune_page() -> Html<String> {
    Html(render_fortune(&fortune_for(CalendarDate::today())))
}

pub async fn get_data(State(state): State<AppState>) -> Json<DataSnapshot> {
    let store = state.store.lock().await;
    Json(store.snapshot(CalendarDate::today()))
}

pub async fn check_in(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<DataSnapshot>, AppError> {
    let snapshot = apply_check_in(&state, payload).await?;
    Ok(Json(snapshot))
}

pub async fn checkin_form(
    State(state): State<AppState>,
    Form(payload): Form<CheckInRequest>,
) -> Result<Redirect, AppError> {
    apply_check_in(&state, payload).await?;
    state.panels.lock().await.close(PanelKind::CheckIn);
    Ok(Redirect::to("/"))
}

pub async fn get_check_in(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<CheckInRecord>, AppError> {
    let date: CalendarDate = date
        .parse()
        .map_err(|err: crate::date::ParseDateError| AppError::bad_request(err.to_string()))?;
    let store = state.store.lock().await;
    store
        .get_check_in(date)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("no check-in on {date}")))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<UserStats> {
    let store = state.store.lock().await;
    Json(store.get_stats())
}

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let store = state.store.lock().await;
    Json(store.get_settings())
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<Settings>,
) -> Result<Json<Settings>, AppError> {
    let mut store = state.store.lock().await;
    store.update_settings(&settings)?;
    persist_data(&state.data_path, store.backend()).await?;
    info!(
        theme = %settings.theme,
        notifications = settings.enable_notifications,
        "settings updated"
    );
    Ok(Json(store.get_settings()))
}

pub async fn get_fortune(Query(query): Query<FortuneQuery>) -> Json<FortuneReading> {
    let today = CalendarDate::today();
    let reading = if query.refresh {
        random_fortune(today, &mut rand::thread_rng())
    } else {
        fortune_for(today)
    };
    Json(reading)
}

pub async fn get_moods() -> Json<Vec<MoodOption>> {
    Json(Mood::ALL.into_iter().map(MoodOption::from).collect())
}

pub async fn run_command(
    State(state): State<AppState>,
    Path(command): Path<String>,
) -> Result<Json<PanelOpened>, AppError> {
    let command = Command::from_id(&command)
        .ok_or_else(|| AppError::not_found(format!("unknown command '{command}'")))?;
    let opened = state.panels.lock().await.open(command.panel());
    info!(
        command = command.id(),
        panel = opened.panel.id,
        created = opened.created,
        "command executed"
    );
    Ok(Json(opened))
}

pub async fn close_panel(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<PanelHandle>, AppError> {
    let kind: PanelKind = kind
        .parse()
        .map_err(|_| AppError::not_found(format!("unknown panel '{kind}'")))?;
    state
        .panels
        .lock()
        .await
        .close(kind)
        .map(Json)
        .ok_or_else(|| AppError::not_found("panel is not open"))
}

async fn apply_check_in(state: &AppState, payload: CheckInRequest) -> Result<DataSnapshot, AppError> {
    let mood = payload.mood.trim();
    if mood.is_empty() {
        return Err(AppError::bad_request("pick a mood before checking in"));
    }
    if Mood::from_symbol(mood).is_none() {
        return Err(AppError::bad_request(format!("unknown mood '{mood}'")));
    }

    let today = CalendarDate::today();
    let record = CheckInRecord {
        date: today,
        mood: mood.to_string(),
        note: payload.note,
        timestamp: Utc::now().timestamp_millis(),
    };

    let mut store = state.store.lock().await;
    let stats = store.upsert_at(today, record)?;
    persist_data(&state.data_path, store.backend()).await?;
    info!(
        date = %today,
        mood,
        streak = stats.current_streak,
        "checked in"
    );

    Ok(store.snapshot(today))
}
