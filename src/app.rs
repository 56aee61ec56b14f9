/*
 * Responsibility
 * - tracing 初期化 → Config 読み込み → 依存生成 (Go IAM client) → Router 組み立て
 * - Middleware の適用 (access / http / security headers)
 * - axum::serve() で起動 (bind 失敗は起動失敗)
 */
use std::{panic, process};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware;
use crate::services::identity::build_identity_resolver;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,guarded_server=debug,goiam=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development では即落として気付けるようにする
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env().context("failed to load configuration")?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting guarded server in {:?} mode on {}",
        config.app_env,
        config.addr
    );
    tracing::info!(iam = %config.iam_base_url, "make sure Go IAM is reachable");

    let identity =
        build_identity_resolver(&config).context("failed to build Go IAM client")?;
    let state = AppState::new(identity);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = middleware::auth::access::apply(api::routes(), state.clone()).with_state(state);
    let router = middleware::http::apply(router, config.request_timeout);
    middleware::security_headers::apply(router)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use tower::ServiceExt;
    use wiremock::matchers::{bearer_token, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::identity::testing::StaticResolver;

    fn test_config(iam_base_url: &str) -> Config {
        let vars = [
            ("GO_IAM_BASE_URL", iam_base_url.to_string()),
            ("GO_IAM_CLIENT_ID", "abcdef1234567890".to_string()),
            ("GO_IAM_CLIENT_SECRET", "secret".to_string()),
            ("GO_IAM_TIMEOUT_SECONDS", "2".to_string()),
        ];
        Config::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        })
        .unwrap()
    }

    fn static_app() -> Router {
        let resolver = Arc::new(StaticResolver::new().with_user("alice-token", "Alice"));
        build_router(AppState::new(resolver), &test_config("http://localhost:3000"))
    }

    fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), 64 * 1024)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn greets_resolved_user() {
        let res = static_app()
            .oneshot(get("/", Some("Bearer alice-token")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(
            res.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(body_string(res).await, "Hello, Alice!");
    }

    #[tokio::test]
    async fn every_route_requires_a_token() {
        for uri in ["/", "/health", "/profile", "/api/info", "/does-not-exist"] {
            let res = static_app().oneshot(get(uri, None)).await.unwrap();
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(body_string(res).await, "Unauthorized");
        }
    }

    #[tokio::test]
    async fn unknown_route_is_404_once_authenticated() {
        let res = static_app()
            .oneshot(get("/nope", Some("Bearer alice-token")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(body["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn health_reports_user() {
        let res = static_app()
            .oneshot(get("/health", Some("Bearer alice-token")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["user"], "Alice");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn profile_returns_user_object() {
        let res = static_app()
            .oneshot(get("/profile", Some("Bearer alice-token")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(body["profile"]["name"], "Alice");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn api_info_describes_service_and_caller() {
        let res = static_app()
            .oneshot(get("/api/info", Some("Bearer alice-token")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(body["framework"], "axum");
        assert_eq!(body["sdk"], "goiam");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["user_id"], "user-alice");
        assert_eq!(body["authenticated"], true);
    }

    #[tokio::test]
    async fn slow_identity_lookup_times_out_with_408() {
        let resolver = Arc::new(
            StaticResolver::new()
                .with_user("alice-token", "Alice")
                .with_delay(Duration::from_secs(5)),
        );
        let mut config = test_config("http://localhost:3000");
        config.request_timeout = Duration::from_millis(100);
        let app = build_router(AppState::new(resolver.clone()), &config);

        let res = app
            .oneshot(get("/", Some("Bearer alice-token")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(resolver.calls(), 1);
    }

    #[tokio::test]
    async fn responses_carry_request_id_and_security_headers() {
        let res = static_app().oneshot(get("/", None)).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(res.headers().contains_key("x-request-id"));
        assert_eq!(res.headers()["x-content-type-options"], "nosniff");
        assert_eq!(res.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn greets_user_resolved_by_go_iam() {
        let iam = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/v1"))
            .and(bearer_token("jwt-from-iam"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "ok",
                "data": { "id": "u-1", "name": "Alice", "email": "alice@example.com" }
            })))
            .mount(&iam)
            .await;

        let config = test_config(&iam.uri());
        let identity = build_identity_resolver(&config).unwrap();
        let app = build_router(AppState::new(identity), &config);

        let res = app
            .oneshot(get("/", Some("Bearer jwt-from-iam")))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_string(res).await, "Hello, Alice!");
    }

    #[tokio::test]
    async fn any_go_iam_failure_is_401() {
        let iam = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me/v1"))
            .and(bearer_token("expired"))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
            .mount(&iam)
            .await;
        Mock::given(method("GET"))
            .and(path("/me/v1"))
            .and(bearer_token("broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
            .mount(&iam)
            .await;
        Mock::given(method("GET"))
            .and(path("/me/v1"))
            .and(bearer_token("garbled"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&iam)
            .await;

        let config = test_config(&iam.uri());
        let identity = build_identity_resolver(&config).unwrap();
        let app = build_router(AppState::new(identity), &config);

        for token in ["expired", "broken", "garbled"] {
            let res = app
                .clone()
                .oneshot(get("/", Some(&format!("Bearer {token}"))))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{token}");
            // Upstream detail never leaks to the caller.
            assert_eq!(body_string(res).await, "Unauthorized");
        }
    }
}
