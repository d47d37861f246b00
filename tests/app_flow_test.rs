//! End-to-end dashboard flows against a mock guidance service

mod common;

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use interactif::config::ChatConfig;
use interactif::error::InteractifError;
use interactif::render::render_dashboard;
use interactif::service::HttpGuidanceService;
use interactif::{App, View};

async fn mock_structured(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/structured-chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_high_priority_action_opens_dashboard() {
    colored::control::set_override(false);
    let server = MockServer::start().await;
    mock_structured(&server, common::structured_body(&[("A", "high")], &[])).await;

    let service = HttpGuidanceService::new(&common::service_config(&server.uri())).unwrap();
    let mut app = App::new(ChatConfig::default());

    let dashboard = app.submit_prompt(&service, "Need a plan").await.unwrap();
    assert_eq!(dashboard.actions.len(), 1);
    assert_eq!(dashboard.session.remote_id.as_deref(), Some("remote-session"));

    let rendered = render_dashboard(dashboard);
    assert!(rendered.contains("[HIGH PRIORITY] A"));
    assert_eq!(rendered.matches("PRIORITY]").count(), 1);

    assert_eq!(app.view(), View::Dashboard);
}

#[tokio::test]
async fn test_finish_half_done_mission() {
    let server = MockServer::start().await;
    mock_structured(
        &server,
        common::structured_body(&[("Draft agenda", "high"), ("Send invites", "low")], &["Timing"]),
    )
    .await;

    let service = HttpGuidanceService::new(&common::service_config(&server.uri())).unwrap();
    let mut app = App::new(ChatConfig::default());

    app.submit_prompt(&service, "Quarterly planning").await.unwrap();
    app.dashboard_mut()
        .unwrap()
        .actions
        .toggle_complete(0)
        .unwrap();

    let mission_id = app.finish_mission().unwrap().id.clone();
    let latest = app.missions().latest().unwrap();
    assert_eq!(latest.id, mission_id);
    assert_eq!(latest.completed_actions, 1);
    assert_eq!(latest.total_actions, 2);
    assert_eq!(latest.completion_percent(), 50);
    assert_eq!(app.view(), View::Analysis);
}

#[tokio::test]
async fn test_connection_failure_stays_on_chat() {
    let service = HttpGuidanceService::new(&common::service_config("http://127.0.0.1:1")).unwrap();
    let mut app = App::new(ChatConfig::default());

    let err = app.submit_prompt(&service, "Need a plan").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InteractifError>(),
        Some(InteractifError::Service(_))
    ));
    assert_eq!(app.view(), View::Chat);
    assert!(!app.is_loading());
    assert!(app.last_error().is_some());
    assert!(app.sessions().is_empty());
}

#[tokio::test]
async fn test_blank_prompt_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = HttpGuidanceService::new(&common::service_config(&server.uri())).unwrap();
    let mut app = App::new(ChatConfig::default());

    let err = app.submit_prompt(&service, "   ").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InteractifError>(),
        Some(InteractifError::EmptyPrompt)
    ));
    assert_eq!(app.view(), View::Chat);
}

#[tokio::test]
async fn test_server_error_keeps_previous_missions() {
    let server = MockServer::start().await;
    mock_structured(&server, common::structured_body(&[("A", "low")], &[])).await;
    let service = HttpGuidanceService::new(&common::service_config(&server.uri())).unwrap();
    let mut app = App::new(ChatConfig::default());

    app.submit_prompt(&service, "first").await.unwrap();
    app.finish_mission().unwrap();
    app.back().unwrap();

    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/structured-chat"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(app.submit_prompt(&service, "second").await.is_err());
    assert_eq!(app.view(), View::Chat);
    assert_eq!(app.missions().len(), 1);
    assert_eq!(app.sessions().len(), 1);
}

#[tokio::test]
async fn test_abandoned_request_releases_loading() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/structured-chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::structured_body(&[("A", "high")], &[]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let service = HttpGuidanceService::new(&common::service_config(&server.uri())).unwrap();
    let mut app = App::new(ChatConfig::default());

    let abandoned =
        tokio::time::timeout(Duration::from_millis(100), app.submit_prompt(&service, "plan")).await;
    assert!(abandoned.is_err());
    assert!(!app.is_loading());
    assert_eq!(app.view(), View::Chat);
    assert!(app.sessions().is_empty());

    server.reset().await;
    mock_structured(&server, common::structured_body(&[("A", "high")], &[])).await;

    app.submit_prompt(&service, "plan").await.unwrap();
    assert_eq!(app.view(), View::Dashboard);
    assert!(!app.is_loading());
}
