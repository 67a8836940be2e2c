// src/routes/mod.rs

use axum::{
    http::{HeaderValue, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, reports::Report, AppState};

pub mod analytics;
pub mod health;
pub mod index;

// Common error mapper
pub fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
}

/// Open by default; restricted to the configured origins when a list is given.
pub fn cors_layer(cfg: &Config) -> CorsLayer {
    let origin = match &cfg.cors_allow_origins {
        None => AllowOrigin::any(),
        Some(list) => {
            let parsed: Vec<HeaderValue> = list
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(parsed)
        }
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn app(state: AppState, cfg: &Config) -> Router {
    // each report is registered exactly once, straight off the catalog
    let reports = Report::ALL
        .into_iter()
        .fold(Router::new(), |r, report| {
            r.route(&report.path(), analytics::handler(report))
        });

    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health))
        .route("/health/db", get(health::health_db))
        .merge(reports)
        .with_state(state)
        .layer(cors_layer(cfg))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_config(origins: Option<Vec<String>>) -> Config {
        Config {
            database_url: "postgres://postgres@127.0.0.1:1/unreachable".into(),
            bind_host: "127.0.0.1".into(),
            port: 0,
            db_max_connections: 1,
            db_acquire_timeout: Duration::from_millis(500),
            cors_allow_origins: origins,
        }
    }

    // Nothing listens on port 1, so any handler touching the pool fails.
    fn test_app(origins: Option<Vec<String>>) -> Router {
        let cfg = test_config(origins);
        let pool = PgPoolOptions::new()
            .max_connections(cfg.db_max_connections)
            .acquire_timeout(cfg.db_acquire_timeout)
            .connect_lazy(&cfg.database_url)
            .unwrap();
        app(AppState { pool }, &cfg)
    }

    async fn body_string(res: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_does_not_touch_the_database() {
        let res = test_app(None).oneshot(get_req("/health")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let v: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(v["status"], "ok");
        assert_eq!(v["version"], "v1");
        assert!(v["checked_at"].is_string());
    }

    #[tokio::test]
    async fn index_lists_every_report_once() {
        let res = test_app(None).oneshot(get_req("/")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let v: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
        let listed: Vec<&str> = v["reports"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p.as_str().unwrap())
            .collect();
        assert_eq!(
            listed,
            [
                "/api/peak_hours",
                "/api/departmental_workload",
                "/api/no_show_analysis",
                "/api/processing_times",
                "/api/overview",
            ]
        );
    }

    #[tokio::test]
    async fn unreachable_store_is_a_500_for_every_report() {
        let app = test_app(None);
        for report in Report::ALL {
            let res = app.clone().oneshot(get_req(&report.path())).await.unwrap();
            assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", report.name());
            let body = body_string(res).await;
            assert!(body.starts_with("internal error:"), "{body}");
            assert!(body.contains(report.name()), "{body}");
        }
    }

    #[tokio::test]
    async fn db_health_reports_failure() {
        let res = test_app(None).oneshot(get_req("/health/db")).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_path_is_404_and_reports_are_get_only() {
        let app = test_app(None);
        let res = app.clone().oneshot(get_req("/api/appointment_trends")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let post = Request::builder()
            .method("POST")
            .uri("/api/overview")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(post).await.unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn cors_is_open_by_default() {
        let req = Request::builder()
            .uri("/health")
            .header("origin", "http://dashboard.example")
            .body(Body::empty())
            .unwrap();
        let res = test_app(None).oneshot(req).await.unwrap();
        assert_eq!(res.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn cors_allow_list_echoes_only_listed_origins() {
        let app = test_app(Some(vec!["http://localhost:5173".into()]));

        let allowed = Request::builder()
            .uri("/health")
            .header("origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let res = app.clone().oneshot(allowed).await.unwrap();
        assert_eq!(res.headers()["access-control-allow-origin"], "http://localhost:5173");

        let other = Request::builder()
            .uri("/health")
            .header("origin", "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(other).await.unwrap();
        assert!(res.headers().get("access-control-allow-origin").is_none());
    }
}
