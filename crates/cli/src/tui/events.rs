use crossterm::event::{KeyCode, KeyEvent};

use crate::api::{ApiError, LoadedData};

use super::controller::Screen;
use super::draw::ThemeKind;
use super::filter;
use super::state::{AppEvent, AppState, MaintenanceForm, OVERLAY_TTL_MS};

/// Processes one event to completion. Returns true when the app should quit.
pub async fn handle_event(app: &mut AppState, evt: AppEvent) -> anyhow::Result<bool> {
    match evt {
        AppEvent::Tick => {
            if let Some((at, _)) = &app.overlay_msg {
                if at.elapsed().as_millis() > OVERLAY_TTL_MS {
                    app.overlay_msg = None;
                }
            }
        }
        AppEvent::DataLoaded(res) => on_data_loaded(app, res),
        AppEvent::PredictionReady(res) => {
            app.predict_pending = false;
            // the result is transient Detail state; navigating away discards it
            if app.controller.screen() == Screen::Detail {
                match res {
                    Ok(p) => app.prediction = Some(p),
                    Err(e) => app.predict_error = Some(e.to_string()),
                }
            }
        }
        AppEvent::ViewDetails(id) => {
            if !app.loading {
                select(app, &id);
            }
        }
        AppEvent::Key(key) => return on_key(app, key),
    }
    Ok(false)
}

fn on_data_loaded(app: &mut AppState, res: Result<LoadedData, ApiError>) {
    app.loading = false;
    match res {
        Ok(data) => {
            let summary = data.summary;
            match app.repo.load(data.assets) {
                Ok(()) => {
                    app.summary = summary;
                    app.last_error = None;
                    if app.controller.map_ready() {
                        app.map.render(app.repo.all());
                    }
                    let n = app.repo.len();
                    app.notify(format!("{n} assets loaded"));
                }
                Err(e) => {
                    // previous contents stay readable; only the banner changes
                    tracing::warn!("rejected asset batch: {e}");
                    app.last_error = Some(format!("load failed: {e} (press R to retry)"));
                }
            }
        }
        Err(e) => {
            tracing::warn!("remote load failed: {e}");
            app.last_error = Some(format!("load failed: {e} (press R to retry)"));
        }
    }
}

fn on_key(app: &mut AppState, key: KeyEvent) -> anyhow::Result<bool> {
    // until the initial load settles, nothing data-dependent is reachable
    if app.loading {
        return Ok(matches!(key.code, KeyCode::Char('q')));
    }

    if app.search_input && app.controller.screen() == Screen::Transformers {
        match key.code {
            KeyCode::Esc => {
                app.search_input = false;
                app.criteria.search.clear();
            }
            KeyCode::Enter => app.search_input = false,
            KeyCode::Backspace => {
                app.criteria.search.pop();
            }
            KeyCode::Char(c) => app.criteria.search.push(c),
            _ => {}
        }
        return Ok(false);
    }

    if app.controller.screen() == Screen::MaintenanceForm {
        on_form_key(app, key);
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('t') => {
            app.theme = match app.theme {
                ThemeKind::Dark => ThemeKind::Light,
                ThemeKind::Light => ThemeKind::Dark,
            };
            return Ok(false);
        }
        KeyCode::Char('R') => {
            reload(app);
            return Ok(false);
        }
        KeyCode::Char('1') => {
            goto(app, Screen::Dashboard);
            return Ok(false);
        }
        KeyCode::Char('2') => {
            goto(app, Screen::Transformers);
            return Ok(false);
        }
        KeyCode::Char('3') => {
            goto(app, Screen::ActiveFaults);
            return Ok(false);
        }
        KeyCode::Char('4') => {
            goto(app, Screen::Settings);
            return Ok(false);
        }
        _ => {}
    }

    match app.controller.screen() {
        Screen::Dashboard => match key.code {
            KeyCode::Left | KeyCode::Char('h') => app.map.prev_marker(),
            KeyCode::Right | KeyCode::Char('l') => app.map.next_marker(),
            KeyCode::Enter => app.map.open_popup(),
            KeyCode::Esc => app.map.close_popup(),
            KeyCode::Char('v') => app.map.confirm_view_details(),
            _ => {}
        },
        Screen::Transformers => match key.code {
            KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
            KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
            KeyCode::Enter => {
                let id = {
                    let visible = filter::apply(app.repo.all(), &app.criteria);
                    app.assets_table
                        .selected()
                        .and_then(|i| visible.get(i))
                        .map(|a| a.id.clone())
                };
                if let Some(id) = id {
                    select(app, &id);
                }
            }
            KeyCode::Char('/') => app.search_input = true,
            KeyCode::Char('r') => app.criteria.cycle_region(),
            KeyCode::Char('s') => app.criteria.cycle_status(),
            KeyCode::Char('c') => app.criteria.clear(),
            _ => {}
        },
        Screen::ActiveFaults => match key.code {
            KeyCode::Up | KeyCode::Char('k') => move_faults_selection(app, -1),
            KeyCode::Down | KeyCode::Char('j') => move_faults_selection(app, 1),
            KeyCode::Enter => {
                let id = {
                    let visible = app.active_faults();
                    app.faults_table
                        .selected()
                        .and_then(|i| visible.get(i))
                        .map(|a| a.id.clone())
                };
                if let Some(id) = id {
                    select(app, &id);
                }
            }
            _ => {}
        },
        Screen::Detail => match key.code {
            KeyCode::Char('m') => {
                let form = app.focused_asset().map(MaintenanceForm::prefill);
                if let Some(form) = form {
                    if app.controller.open_maintenance_form() {
                        app.form = Some(form);
                        app.form_error = None;
                        app.prediction = None;
                        app.predict_error = None;
                    }
                }
            }
            KeyCode::Char('y') => {
                if app.controller.open_history() {
                    app.prediction = None;
                    app.predict_error = None;
                }
            }
            KeyCode::Char('p') => start_prediction(app),
            KeyCode::Esc => goto(app, Screen::Transformers),
            _ => {}
        },
        Screen::MaintenanceHistory => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('b')) {
                app.controller.back();
            }
        }
        Screen::Settings | Screen::MaintenanceForm => {}
    }
    Ok(false)
}

fn on_form_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if app.controller.cancel_form() {
                app.form = None;
                app.form_error = None;
            }
        }
        KeyCode::Enter => submit_form(app),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = &mut app.form {
                form.next_field();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = &mut app.form {
                form.prev_field();
            }
        }
        KeyCode::Left | KeyCode::Right => {
            if let Some(form) = &mut app.form {
                if form.field == 2 {
                    form.priority = form.priority.next();
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.form {
                if let Some(buf) = form.active_buffer() {
                    buf.pop();
                }
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = &mut app.form {
                if form.field == 2 {
                    if c == ' ' {
                        form.priority = form.priority.next();
                    }
                } else if let Some(buf) = form.active_buffer() {
                    buf.push(c);
                }
            }
        }
        _ => {}
    }
}

fn submit_form(app: &mut AppState) {
    let Some(form) = &app.form else { return };
    if let Err(e) = form.validate() {
        app.form_error = Some(e);
        return;
    }
    let priority = form.priority.label();
    if app.controller.submit_form() {
        let id = app.controller.focused().unwrap_or("asset").to_string();
        app.notify(format!("maintenance order recorded for {id} ({priority} priority)"));
        app.form = None;
        app.form_error = None;
    }
}

/// Number-key navigation; transient Detail state never outlives the screen
/// it was produced on.
fn goto(app: &mut AppState, screen: Screen) {
    app.search_input = false;
    app.form = None;
    app.form_error = None;
    app.prediction = None;
    app.predict_error = None;
    app.controller.navigate(screen);
    if screen == Screen::Dashboard {
        // revisit clears and re-places markers from current data
        app.map.render(app.repo.all());
    }
}

fn select(app: &mut AppState, id: &str) {
    app.prediction = None;
    app.predict_error = None;
    let _ = app.controller.select_entity(&app.repo, id);
}

fn start_prediction(app: &mut AppState) {
    if app.predict_pending {
        // at most one outstanding prediction request
        return;
    }
    app.prediction = None;
    app.predict_error = None;
    let plant = app.focused_asset().and_then(|a| a.plant_id.clone());
    match (app.api.clone(), plant) {
        (None, _) => {
            app.predict_error = Some("prediction needs the remote API (running offline)".into());
        }
        (Some(_), None) => {
            app.predict_error = Some("no plant is linked to this asset".into());
        }
        (Some(client), Some(plant_id)) => {
            app.predict_pending = true;
            let tx = app.tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(AppEvent::PredictionReady(
                    client.predict(&plant_id, None, None).await,
                ));
            });
        }
    }
}

fn reload(app: &mut AppState) {
    if app.offline {
        match app.repo.load(common::fixture::assets()) {
            Ok(()) => {
                app.last_error = None;
                let n = app.repo.len();
                app.notify(format!("{n} assets loaded from the built-in dataset"));
            }
            Err(e) => app.last_error = Some(format!("load failed: {e}")),
        }
        if app.controller.map_ready() {
            app.map.render(app.repo.all());
        }
    } else if let Some(client) = app.api.clone() {
        app.loading = true;
        let tx = app.tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppEvent::DataLoaded(client.load_assets().await));
        });
    }
}

fn move_selection(app: &mut AppState, delta: i64) {
    let len = filter::apply(app.repo.all(), &app.criteria).len();
    step_table(&mut app.assets_table, len, delta);
}

fn move_faults_selection(app: &mut AppState, delta: i64) {
    let len = app.active_faults().len();
    step_table(&mut app.faults_table, len, delta);
}

fn step_table(state: &mut ratatui::widgets::TableState, len: usize, delta: i64) {
    if len == 0 {
        state.select(None);
        return;
    }
    let cur = state.selected().unwrap_or(0) as i64;
    let next = (cur + delta).clamp(0, len as i64 - 1) as usize;
    state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use common::fixture;
    use tokio::sync::mpsc;

    fn offline_app() -> AppState {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::new(tx, true, None);
        app.repo.load(fixture::assets()).unwrap();
        app.controller.navigate(Screen::Dashboard);
        app.map.render(app.repo.all());
        app
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::from(code))
    }

    #[tokio::test]
    async fn navigation_is_ignored_while_loading() {
        let mut app = offline_app();
        app.loading = true;
        handle_event(&mut app, key(KeyCode::Char('2'))).await.unwrap();
        assert_eq!(app.controller.screen(), Screen::Dashboard);
        // quitting stays possible
        assert!(handle_event(&mut app, key(KeyCode::Char('q'))).await.unwrap());
    }

    #[tokio::test]
    async fn load_failure_keeps_previous_data_and_raises_a_banner() {
        let mut app = offline_app();
        let before = app.repo.len();
        app.loading = true;

        handle_event(&mut app, AppEvent::DataLoaded(Err(ApiError::Status(500))))
            .await
            .unwrap();

        assert!(!app.loading);
        assert_eq!(app.repo.len(), before, "repository must stay untouched");
        assert!(app.repo.get("TX-101").is_some());
        let banner = app.last_error.as_deref().unwrap();
        assert!(banner.contains("500"));
    }

    #[tokio::test]
    async fn invalid_batch_is_a_load_failure_not_a_wipe() {
        let mut app = offline_app();
        let before = app.repo.len();

        let mut bad = fixture::assets();
        bad[0].failure_probability.clear();
        handle_event(
            &mut app,
            AppEvent::DataLoaded(Ok(LoadedData { assets: bad, summary: None })),
        )
        .await
        .unwrap();

        assert_eq!(app.repo.len(), before);
        assert!(app.last_error.is_some());
    }

    #[tokio::test]
    async fn view_details_event_lands_on_detail_with_focus() {
        let mut app = offline_app();
        handle_event(&mut app, AppEvent::ViewDetails("TX-201".into()))
            .await
            .unwrap();
        assert_eq!(app.controller.screen(), Screen::Detail);
        assert_eq!(app.controller.focused(), Some("TX-201"));
    }

    #[tokio::test]
    async fn unknown_id_renders_the_default_asset() {
        let mut app = offline_app();
        handle_event(&mut app, AppEvent::ViewDetails("T-9999".into()))
            .await
            .unwrap();
        assert_eq!(app.controller.screen(), Screen::Detail);
        assert_eq!(app.controller.focused(), Some("TX-101"));
        assert!(app.focused_asset().is_some());
    }

    #[tokio::test]
    async fn form_submit_validates_and_returns_to_detail_with_focus() {
        let mut app = offline_app();
        handle_event(&mut app, AppEvent::ViewDetails("TX-102".into()))
            .await
            .unwrap();
        handle_event(&mut app, key(KeyCode::Char('m'))).await.unwrap();
        assert_eq!(app.controller.screen(), Screen::MaintenanceForm);
        let form = app.form.as_ref().unwrap();
        assert!(!form.notes.is_empty(), "notes prefill from the recommendation");

        // technician is required; submit is blocked inline
        handle_event(&mut app, key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.controller.screen(), Screen::MaintenanceForm);
        assert!(app.form_error.is_some());

        app.form.as_mut().unwrap().technician = "A. Rehman".into();
        handle_event(&mut app, key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.controller.screen(), Screen::Detail);
        assert_eq!(app.controller.focused(), Some("TX-102"));
        assert!(app.form.is_none());
        assert!(app.overlay_msg.is_some(), "submit leaves only a confirmation");
    }

    #[tokio::test]
    async fn form_cancel_discards_state() {
        let mut app = offline_app();
        handle_event(&mut app, AppEvent::ViewDetails("TX-102".into()))
            .await
            .unwrap();
        handle_event(&mut app, key(KeyCode::Char('m'))).await.unwrap();
        handle_event(&mut app, key(KeyCode::Char('x'))).await.unwrap();
        handle_event(&mut app, key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.controller.screen(), Screen::Detail);
        assert!(app.form.is_none());
        assert_eq!(app.controller.focused(), Some("TX-102"));
    }

    #[tokio::test]
    async fn predict_without_a_linked_plant_fails_inline() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let client = ApiClient::new("http://127.0.0.1:9".into()).unwrap();
        let mut app = AppState::new(tx, false, Some(client));
        app.repo.load(fixture::assets()).unwrap();

        // TX-101 has no plant linkage
        handle_event(&mut app, AppEvent::ViewDetails("TX-101".into()))
            .await
            .unwrap();
        handle_event(&mut app, key(KeyCode::Char('p'))).await.unwrap();
        assert!(!app.predict_pending, "validation must not issue a request");
        assert_eq!(
            app.predict_error.as_deref(),
            Some("no plant is linked to this asset")
        );
    }

    #[tokio::test]
    async fn prediction_result_is_discarded_after_navigating_away() {
        let mut app = offline_app();
        handle_event(&mut app, AppEvent::ViewDetails("PLANT_01".into()))
            .await
            .unwrap();
        handle_event(&mut app, key(KeyCode::Char('2'))).await.unwrap();
        assert_eq!(app.controller.screen(), Screen::Transformers);

        let prediction: common::Prediction = serde_json::from_str(
            r#"{
                "plant": {"id": "PLANT_01", "name": "Korangi Grid Station",
                          "area": "Korangi", "risk_level": "Extreme"},
                "conditions": {"temperature": 32.5, "wind_speed": 15.0},
                "predictions": {"fault_type": "Leak", "fault_icon": "droplet-fill",
                                "restoration_hours": 2.0, "restoration_formatted": "2h"},
                "response": {"nearest_center": "Korangi Service Center",
                             "distance_km": 3.4, "travel_time_min": 14,
                             "total_eta_formatted": "2h 14m"}
            }"#,
        )
        .unwrap();
        handle_event(&mut app, AppEvent::PredictionReady(Ok(prediction)))
            .await
            .unwrap();
        assert!(app.prediction.is_none(), "stale result must not resurface");
    }

    #[tokio::test]
    async fn search_edits_criteria_live_and_escape_clears() {
        let mut app = offline_app();
        handle_event(&mut app, key(KeyCode::Char('2'))).await.unwrap();
        handle_event(&mut app, key(KeyCode::Char('/'))).await.unwrap();
        for c in "dha".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).await.unwrap();
        }
        assert_eq!(app.criteria.search, "dha");
        let visible = filter::apply(app.repo.all(), &app.criteria);
        assert!(visible.iter().all(|a| filter::row_text(a).to_lowercase().contains("dha")));

        handle_event(&mut app, key(KeyCode::Esc)).await.unwrap();
        assert!(app.criteria.search.is_empty());
        assert!(!app.search_input);
    }

    #[tokio::test]
    async fn dashboard_revisit_rerenders_a_single_marker_set() {
        let mut app = offline_app();
        let count = app.map.markers().len();
        handle_event(&mut app, key(KeyCode::Char('2'))).await.unwrap();
        handle_event(&mut app, key(KeyCode::Char('1'))).await.unwrap();
        handle_event(&mut app, key(KeyCode::Char('1'))).await.unwrap();
        assert_eq!(app.map.markers().len(), count);
    }

    #[tokio::test]
    async fn marker_popup_then_confirm_is_the_only_map_navigation_path() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::new(tx, true, None);
        app.repo.load(fixture::assets()).unwrap();
        app.controller.navigate(Screen::Dashboard);
        app.map.render(app.repo.all());

        // activation opens the popup only
        handle_event(&mut app, key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.controller.screen(), Screen::Dashboard);
        assert!(app.map.popup_open());
        assert!(rx.try_recv().is_err());

        // the confirm press emits the view-details event
        handle_event(&mut app, key(KeyCode::Char('v'))).await.unwrap();
        let evt = rx.try_recv().expect("confirm must emit ViewDetails");
        let AppEvent::ViewDetails(id) = evt else {
            panic!("unexpected event");
        };
        handle_event(&mut app, AppEvent::ViewDetails(id)).await.unwrap();
        assert_eq!(app.controller.screen(), Screen::Detail);
    }
}
