use super::page::{self, Panel};
use crate::ai::client::CompletionBackend;
use crate::ai::persona::Persona;
use crate::error::ExpertError;
use crate::form::{self, Outcome, Submission};
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn CompletionBackend>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(page::render(Persona::ALL[0], "", Panel::Empty))
}

async fn ask(State(state): State<AppState>, Form(submission): Form<Submission>) -> Response {
    let selected = submission
        .persona
        .as_deref()
        .and_then(Persona::from_label)
        .unwrap_or(Persona::ALL[0]);

    match form::submit(state.backend.as_ref(), &submission).await {
        Ok(Outcome::Warning(message)) => {
            Html(page::render(selected, &submission.text, Panel::Warning(message))).into_response()
        }
        Ok(Outcome::Answer { persona, text }) => {
            let selected = persona.unwrap_or(selected);
            Html(page::render(selected, &submission.text, Panel::Answer(&text))).into_response()
        }
        Err(e) => {
            let message = e.to_string();
            (
                status_for(&e),
                Html(page::render(selected, &submission.text, Panel::Failure(&message))),
            )
                .into_response()
        }
    }
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.backend.model(),
    }))
}

/// Requester failures are shown as an error page, never as the blank-input warning.
pub fn status_for(error: &ExpertError) -> StatusCode {
    match error {
        ExpertError::MissingCredential | ExpertError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        ExpertError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        ExpertError::Transport(_)
        | ExpertError::Api { .. }
        | ExpertError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        ExpertError::Config(_) | ExpertError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::Completion;
    use crate::form::tests::{FakeBackend, sleep_answer, upstream_down};
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app_with(backend: Arc<FakeBackend>) -> Router {
        router(AppState { backend })
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ask")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn index_lists_both_personas() {
        let app = app_with(Arc::new(FakeBackend::answering(sleep_answer)));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        for persona in Persona::ALL {
            assert!(html.contains(persona.label()));
            assert!(html.contains(persona.display_name()));
        }
        assert!(html.contains(page::BUSY_MESSAGE));
    }

    #[tokio::test]
    async fn answer_is_rendered_verbatim() {
        let backend = Arc::new(FakeBackend::answering(sleep_answer));
        let response = app_with(backend.clone())
            .oneshot(post_form("persona=health-advisor&text=How+much+sleep+do+I+need%3F"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("回答結果"));
        assert!(html.contains("7〜9時間が目安です。"));
        assert!(html.contains("How much sleep do I need?"));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_text_warns_without_calling() {
        let backend = Arc::new(FakeBackend::answering(sleep_answer));
        let response = app_with(backend.clone())
            .oneshot(post_form("persona=travel-planner&text=+++"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(form::EMPTY_INPUT_WARNING));
        assert!(html.contains("value=\"travel-planner\" checked"));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn backend_failure_is_an_error_page() {
        let backend = Arc::new(FakeBackend::answering(upstream_down));
        let response = app_with(backend.clone())
            .oneshot(post_form("persona=travel-planner&text=hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = body_text(response).await;
        assert!(html.contains("class=\"failure\""));
        assert!(!html.contains(form::EMPTY_INPUT_WARNING));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn missing_persona_field_still_asks() {
        fn echo() -> Result<Completion, ExpertError> {
            Ok(Completion { text: "ok".to_string() })
        }
        let backend = Arc::new(FakeBackend::answering(echo));
        let response = app_with(backend.clone()).oneshot(post_form("text=hi")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn health_reports_model() {
        let app = app_with(Arc::new(FakeBackend::answering(sleep_answer)));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "fake-model");
    }

    #[test]
    fn credential_and_rate_limit_statuses() {
        assert_eq!(status_for(&ExpertError::MissingCredential), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_for(&ExpertError::RateLimited { body: String::new() }),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_for(&ExpertError::MalformedResponse("x".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&ExpertError::from(std::io::Error::other("bind failed"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
