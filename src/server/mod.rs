//! Web server for the day page.
//!
//! Serves the navigable page at `/`, the stylesheet, and, when content is a
//! local directory, the raw day documents under `/content/`.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::content::ContentSource;
use crate::models::{Clock, SystemClock};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    pub clock: Arc<dyn Clock>,
    /// Directory served at `/content`, if any.
    pub content_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self {
            source: settings.open_source()?,
            clock: Arc::new(SystemClock),
            content_dir: settings.content.directory().map(|d| d.to_path_buf()),
        })
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use tempfile::tempdir;
    use tower::ServiceExt;

    use crate::content::DirContentSource;
    use crate::models::FixedClock;

    fn setup_test_app() -> (axum::Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("10-18.json"),
            r#"{"hebrew_date":"ז' בחשוון","literary_events":[{"title":"Today event","type":"israeli","description":"d"}]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("03-07.json"),
            r##"{"literary_events":[{"title":"<script>alert(1)</script>","year":1925,"description":"x"}],"post_suggestions":[{"title":"Post","description":"p","hashtags":["#books"]}]}"##,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("02-28.json"),
            r#"{"literary_events":[{"title":"End of February","description":"d"}]}"#,
        )
        .unwrap();

        let state = AppState {
            source: Arc::new(DirContentSource::new(dir.path())),
            clock: Arc::new(FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())),
            content_dir: Some(dir.path().to_path_buf()),
        };

        (create_router(state), dir)
    }

    async fn get_body(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_shows_today() {
        let (app, _dir) = setup_test_app();
        let (status, body) = get_body(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"value="2026-10-18""#));
        assert!(body.contains("Today event"));
        assert!(body.contains(r#"<div class="event-card israeli">"#));
        assert!(body.contains(r#"<div id="content" class="panel">"#));
        assert!(body.contains(r#"<div id="error" class="panel hidden">"#));
        assert!(body.contains(r#"<div id="loading" class="panel hidden">"#));
    }

    #[tokio::test]
    async fn test_date_param_selects_day_and_escapes_content() {
        let (app, _dir) = setup_test_app();
        let (status, body) = get_body(app, "/?date=03-07").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"value="2026-03-07""#));
        assert!(!body.contains("<script>alert(1)</script>"));
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(body.contains(r#"<span class="event-year">(1925)</span>"#));
        assert!(body.contains(r#"<span class="hashtag">#books</span>"#));
    }

    #[tokio::test]
    async fn test_invalid_date_param_falls_back_to_today() {
        let (app, _dir) = setup_test_app();
        let (_, body) = get_body(app, "/?date=13-01").await;
        assert!(body.contains(r#"value="2026-10-18""#));
        assert!(body.contains("Today event"));
    }

    #[tokio::test]
    async fn test_missing_day_shows_error_panel() {
        let (app, _dir) = setup_test_app();
        let (status, body) = get_body(app, "/?date=02-30").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<div id="error" class="panel">"#));
        assert!(body.contains(r#"<div id="content" class="panel hidden">"#));
        assert!(body.contains(r#"<div id="events-list"></div>"#));
        assert!(body.contains(r#"<div id="suggestions-list"></div>"#));
        assert!(body.contains(r#"data-state="error""#));
    }

    #[tokio::test]
    async fn test_prev_button_crosses_month() {
        let (app, _dir) = setup_test_app();
        let (_, body) = get_body(app, "/?pick=2026-03-01&nav=prev").await;
        assert!(body.contains(r#"value="2026-02-28""#));
        assert!(body.contains("End of February"));
    }

    #[tokio::test]
    async fn test_today_button_ignores_pick() {
        let (app, _dir) = setup_test_app();
        let (_, body) = get_body(app, "/?pick=2026-03-07&nav=today").await;
        assert!(body.contains(r#"value="2026-10-18""#));
    }

    #[tokio::test]
    async fn test_form_carries_current_date() {
        let (app, _dir) = setup_test_app();
        let (_, body) = get_body(app, "/?date=03-07").await;
        assert!(body.contains(r#"name="current" value="2026-03-07""#));
    }

    #[tokio::test]
    async fn test_empty_pick_keeps_date_param() {
        let (app, _dir) = setup_test_app();
        let (_, body) = get_body(app, "/?date=03-07&pick=").await;
        assert!(body.contains(r#"id="date-picker" name="pick" value="2026-03-07""#));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_empty_pick_keeps_current_date() {
        let (app, _dir) = setup_test_app();
        let (_, body) = get_body(app, "/?current=2026-03-07&pick=").await;
        assert!(body.contains(r#"value="2026-03-07""#));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_nav_with_empty_pick_moves_from_current_date() {
        let (app, _dir) = setup_test_app();
        let (_, body) = get_body(app, "/?current=2026-03-01&pick=&nav=prev").await;
        assert!(body.contains(r#"id="date-picker" name="pick" value="2026-02-28""#));
        assert!(body.contains("End of February"));
    }

    #[tokio::test]
    async fn test_pick_wins_over_current_date() {
        let (app, _dir) = setup_test_app();
        let (_, body) = get_body(app, "/?current=2026-10-18&pick=2026-03-07").await;
        assert!(body.contains(r#"id="date-picker" name="pick" value="2026-03-07""#));
    }

    #[tokio::test]
    async fn test_raw_content_is_served() {
        let (app, _dir) = setup_test_app();
        let (status, body) = get_body(app, "/content/03-07.json").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["literary_events"][0]["year"], 1925);
    }

    #[tokio::test]
    async fn test_stylesheet() {
        let (app, _dir) = setup_test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/css");
    }
}
