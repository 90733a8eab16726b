//! Tests for the dispatch loop
//!
//! Drives the dashboard through `Dispatcher` with a mocked Argo CD client and
//! checks what gets loaded, filtered and reported.

use argocd_tui::argocd::{ApiClient, Application, FetchError, HealthStatus, ResourceNode};
use argocd_tui::config::Config;
use argocd_tui::services::ResourceStore;
use argocd_tui::tui::{
    App, Dispatcher, EventResult, FilterTarget, FocusTarget, Key, Keystroke, Theme, UiEvent,
};
use async_trait::async_trait;
use mockall::{Sequence, mock};
use std::sync::Arc;

mock! {
    pub Api {}

    #[async_trait]
    impl ApiClient for Api {
        async fn list_applications(&self) -> Result<Vec<Application>, FetchError>;
        async fn get_resource_tree(&self, app_name: &str) -> Result<Vec<ResourceNode>, FetchError>;
    }
}

fn node(name: &str, kind: &str) -> ResourceNode {
    ResourceNode {
        name: name.to_string(),
        kind: kind.to_string(),
        namespace: "default".to_string(),
        ..Default::default()
    }
}

fn three_apps() -> Vec<Application> {
    vec![
        Application::new("app-a", HealthStatus::Healthy),
        Application::new("app-b", HealthStatus::Degraded),
        Application::new("app-c", HealthStatus::Progressing),
    ]
}

fn tree_for(app_name: &str) -> Vec<ResourceNode> {
    match app_name {
        "app-a" => vec![
            node("nginx", "Deployment"),
            node("redis", "StatefulSet"),
            node("nginx-sidecar", "ConfigMap"),
        ],
        "app-b" => vec![node("api", "Deployment")],
        _ => Vec::new(),
    }
}

fn server_error(path: &str) -> FetchError {
    FetchError::Status {
        url: format!("http://localhost:8080{}", path),
        status: 503,
    }
}

async fn start(client: MockApi) -> (App, Dispatcher) {
    let store = ResourceStore::new(Arc::new(client));
    let mut app = App::new(store, Config::default(), Theme::default());
    let mut dispatcher = Dispatcher::with_default_bindings().unwrap();
    dispatcher.bootstrap(&mut app).await;
    (app, dispatcher)
}

async fn press(app: &mut App, dispatcher: &mut Dispatcher, key: impl Into<Keystroke>) -> EventResult {
    let event = UiEvent::key(app, key);
    dispatcher.dispatch(app, event).await
}

async fn type_text(app: &mut App, dispatcher: &mut Dispatcher, text: &str) {
    for c in text.chars() {
        press(app, dispatcher, c).await;
    }
}

#[tokio::test]
async fn test_bootstrap_loads_first_application() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .times(1)
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-a")
        .times(1)
        .returning(|name| Ok(tree_for(name)));

    let (app, _) = start(client).await;

    assert_eq!(app.visible_apps().len(), 3);
    assert_eq!(app.highlighted_app().unwrap().name, "app-a");
    assert_eq!(app.store().selected_app(), Some("app-a"));
    assert_eq!(app.visible_resources().len(), 3);
}

#[tokio::test]
async fn test_moving_selection_loads_new_application() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-a")
        .times(1)
        .returning(|name| Ok(tree_for(name)));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-b")
        .times(1)
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;

    let result = press(&mut app, &mut dispatcher, 'j').await;
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(app.store().selected_app(), Some("app-b"));
    assert_eq!(app.visible_resources().len(), 1);
    assert_eq!(app.visible_resources()[0].name, "api");
}

#[tokio::test]
async fn test_scrolling_past_the_end_does_not_reload() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    // app-a at bootstrap, then app-b and app-c exactly once each
    for name in ["app-a", "app-b", "app-c"] {
        client
            .expect_get_resource_tree()
            .withf(move |requested: &str| requested == name)
            .times(1)
            .returning(|name| Ok(tree_for(name)));
    }

    let (mut app, mut dispatcher) = start(client).await;
    for _ in 0..5 {
        press(&mut app, &mut dispatcher, 'j').await;
    }
    assert_eq!(app.highlighted_app().unwrap().name, "app-c");
}

#[tokio::test]
async fn test_enter_reloads_even_the_same_application() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-a")
        .times(2)
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;

    press(&mut app, &mut dispatcher, Key::Enter).await;
    assert_eq!(app.focus(), FocusTarget::MainTable);
    assert_eq!(app.store().selected_app(), Some("app-a"));
}

#[tokio::test]
async fn test_failed_resource_load_keeps_previous_table() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-a")
        .returning(|name| Ok(tree_for(name)));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-b")
        .returning(|_| Err(server_error("/api/v1/applications/app-b/resource-tree")));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, 'j').await;

    assert!(app.is_running());
    assert_eq!(app.store().selected_app(), Some("app-a"));
    assert_eq!(app.visible_resources().len(), 3);
    let (message, is_error) = app.status_message().unwrap();
    assert!(*is_error);
    assert!(message.contains("app-b"));
}

#[tokio::test]
async fn test_failed_refresh_keeps_application_list() {
    let mut client = MockApi::new();
    let mut seq = Sequence::new();
    client
        .expect_list_applications()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(three_apps()));
    client
        .expect_list_applications()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(server_error("/api/v1/applications")));
    client
        .expect_get_resource_tree()
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, 'r').await;

    assert_eq!(app.visible_apps().len(), 3);
    assert_eq!(app.highlighted_app().unwrap().name, "app-a");
    assert!(app.status_message().unwrap().1);
}

#[tokio::test]
async fn test_search_filters_and_escape_restores() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, Key::Tab).await;
    assert_eq!(app.focus(), FocusTarget::MainTable);

    press(&mut app, &mut dispatcher, '/').await;
    assert_eq!(app.focus(), FocusTarget::CommandBar);
    type_text(&mut app, &mut dispatcher, "nginx").await;
    assert_eq!(app.search_buffer(), Some("nginx"));
    press(&mut app, &mut dispatcher, Key::Enter).await;

    assert_eq!(app.focus(), FocusTarget::MainTable);
    assert_eq!(app.filter(FilterTarget::MainTable), "nginx");
    let names: Vec<_> = app
        .visible_resources()
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, ["nginx", "nginx-sidecar"]);
    // The store still holds the full set
    assert_eq!(app.store().resources().len(), 3);

    press(&mut app, &mut dispatcher, '/').await;
    assert_eq!(app.search_buffer(), Some("nginx"));
    press(&mut app, &mut dispatcher, Key::Esc).await;

    assert_eq!(app.focus(), FocusTarget::MainTable);
    assert_eq!(app.filter(FilterTarget::MainTable), "");
    assert_eq!(app.visible_resources().len(), 3);
}

#[tokio::test]
async fn test_filter_is_case_sensitive() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, Key::Tab).await;
    press(&mut app, &mut dispatcher, '/').await;
    type_text(&mut app, &mut dispatcher, "NGINX").await;
    press(&mut app, &mut dispatcher, Key::Enter).await;

    assert!(app.visible_resources().is_empty());
}

#[tokio::test]
async fn test_selection_change_drops_resource_filter() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, Key::Tab).await;
    press(&mut app, &mut dispatcher, '/').await;
    type_text(&mut app, &mut dispatcher, "redis").await;
    press(&mut app, &mut dispatcher, Key::Enter).await;
    assert_eq!(app.visible_resources().len(), 1);

    press(&mut app, &mut dispatcher, Key::BackTab).await;
    press(&mut app, &mut dispatcher, 'j').await;

    assert_eq!(app.store().selected_app(), Some("app-b"));
    assert_eq!(app.filter(FilterTarget::MainTable), "");
    assert_eq!(app.visible_resources().len(), 1);
    assert_eq!(app.visible_resources()[0].name, "api");
}

#[tokio::test]
async fn test_app_filter_reloads_when_highlight_moves() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-a")
        .times(1)
        .returning(|name| Ok(tree_for(name)));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-c")
        .times(1)
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, '/').await;
    type_text(&mut app, &mut dispatcher, "-c").await;
    press(&mut app, &mut dispatcher, Key::Enter).await;

    assert_eq!(app.visible_apps().len(), 1);
    assert_eq!(app.store().selected_app(), Some("app-c"));
}

#[tokio::test]
async fn test_escape_on_resource_table_clears_filter_then_propagates() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, Key::Tab).await;
    press(&mut app, &mut dispatcher, '/').await;
    type_text(&mut app, &mut dispatcher, "nginx").await;
    press(&mut app, &mut dispatcher, Key::Enter).await;
    assert_eq!(app.visible_resources().len(), 2);

    let result = press(&mut app, &mut dispatcher, Key::Esc).await;
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(app.focus(), FocusTarget::MainTable);
    assert_eq!(app.filter(FilterTarget::MainTable), "");
    assert_eq!(app.visible_resources().len(), 3);

    // Nothing left to clear
    let result = press(&mut app, &mut dispatcher, Key::Esc).await;
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(app.focus(), FocusTarget::MainTable);
}

#[tokio::test]
async fn test_escape_on_app_table_clears_filter_and_resets_selection() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, '/').await;
    type_text(&mut app, &mut dispatcher, "-b").await;
    press(&mut app, &mut dispatcher, Key::Enter).await;
    assert_eq!(app.visible_apps().len(), 1);
    assert_eq!(app.store().selected_app(), Some("app-b"));

    let result = press(&mut app, &mut dispatcher, Key::Esc).await;
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(app.focus(), FocusTarget::AppTable);
    assert_eq!(app.visible_apps().len(), 3);
    assert_eq!(app.highlighted_app().unwrap().name, "app-a");
    assert_eq!(app.store().selected_app(), Some("app-a"));
}

#[tokio::test]
async fn test_next_key_dismisses_status_message() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-a")
        .returning(|name| Ok(tree_for(name)));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-b")
        .returning(|_| Err(server_error("/api/v1/applications/app-b/resource-tree")));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, 'j').await;
    assert!(app.status_message().unwrap().1);

    let result = press(&mut app, &mut dispatcher, Key::Esc).await;
    assert_eq!(result, EventResult::Ignored);
    assert!(app.status_message().is_none());
}

#[tokio::test]
async fn test_empty_app_filter_clears_resource_table() {
    let mut client = MockApi::new();
    client
        .expect_list_applications()
        .returning(|| Ok(three_apps()));
    client
        .expect_get_resource_tree()
        .withf(|name: &str| name == "app-a")
        .times(1)
        .returning(|name| Ok(tree_for(name)));

    let (mut app, mut dispatcher) = start(client).await;
    press(&mut app, &mut dispatcher, '/').await;
    type_text(&mut app, &mut dispatcher, "zzz").await;
    press(&mut app, &mut dispatcher, Key::Enter).await;

    assert!(app.visible_apps().is_empty());
    assert!(app.highlighted_app().is_none());
    assert_eq!(app.store().selected_app(), None);
    assert!(app.visible_resources().is_empty());
}
