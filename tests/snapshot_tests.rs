//! Rendering tests for the TUI views
//!
//! Views are drawn into a `TestBackend`; assertions look at the text of the
//! resulting buffer. Run `cargo insta review` to accept snapshot changes.

use argocd_tui::argocd::{Application, HealthStatus, ResourceNode};
use argocd_tui::tui::views::{FooterContent, render_app_table, render_footer, render_resource_table};
use argocd_tui::tui::{Context, Surface, Theme, default_registry};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

fn create_test_theme() -> Theme {
    Theme::default()
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn test_nodes() -> Vec<ResourceNode> {
    vec![
        ResourceNode {
            name: "guestbook-ui".to_string(),
            kind: "Deployment".to_string(),
            namespace: "default".to_string(),
            version: "v1".to_string(),
            resource_version: "1234".to_string(),
            images: vec!["nginx:1.25".to_string()],
            ..Default::default()
        },
        ResourceNode {
            name: "guestbook-svc".to_string(),
            kind: "Service".to_string(),
            namespace: "default".to_string(),
            version: "v1".to_string(),
            ..Default::default()
        },
    ]
}

#[test]
fn test_app_table_lists_applications() {
    let theme = create_test_theme();
    let apps = vec![
        Application::new("guestbook", HealthStatus::Healthy),
        Application::new("billing", HealthStatus::Degraded),
    ];
    let mut surface = Surface::table(0);
    surface.set_len(apps.len());

    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_app_table(f, area, &apps, &mut surface, true, "", &theme)
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Applications (2)"));
    assert!(text.contains("guestbook"));
    assert!(text.contains("billing"));
}

#[test]
fn test_app_table_empty_filter_result() {
    let theme = create_test_theme();
    let mut surface = Surface::table(0);

    let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_app_table(f, area, &[], &mut surface, false, "zzz", &theme)
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("[/zzz]"));
    assert!(text.contains("No applications match the filter"));
}

#[test]
fn test_resource_table_has_header_row() {
    let theme = create_test_theme();
    let nodes = test_nodes();
    let mut surface = Surface::table(1);
    surface.set_len(nodes.len());

    let mut terminal = Terminal::new(TestBackend::new(140, 10)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_resource_table(
                f,
                area,
                Some("guestbook"),
                &nodes,
                &mut surface,
                true,
                "",
                &theme,
            )
        })
        .unwrap();

    let text = buffer_text(&terminal);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].contains("Resources: guestbook (2)"));
    assert!(lines[1].contains("NAME"));
    assert!(lines[1].contains("HEALTH"));
    assert!(lines[2].contains("guestbook-ui"));
    assert!(lines[2].contains("nginx:1.25"));
    assert!(lines[3].contains("guestbook-svc"));
}

#[test]
fn test_footer_shows_search_prompt() {
    let theme = create_test_theme();
    let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_footer(
                f,
                area,
                FooterContent::Search {
                    buffer: "nginx",
                    target: "resources",
                },
                &theme,
            )
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("/nginx_"));
    assert!(text.contains("[filter resources]"));
}

#[test]
fn test_main_page_hints() {
    let registry = default_registry().unwrap();
    let hints = registry
        .hints(Context::MainPage, true)
        .iter()
        .map(|hint| format!("{} {}", hint.key, hint.label))
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(hints, @r"
    j/Down Down
    k/Up Up
    g/Home Top
    G/End Bottom
    PgDn/Ctrl-d Page down
    PgUp/Ctrl-u Page up
    Esc Clear filter
    q/Ctrl-c Quit
    ? Toggle help
    / Search
    Tab/Shift-Tab Switch panel
    r Refresh applications
    ");
}

#[test]
fn test_command_bar_hints_exclude_global() {
    let registry = default_registry().unwrap();
    let hints = registry.hints(Context::CommandBar, false);
    let keys: Vec<&str> = hints.iter().map(|hint| hint.key.as_str()).collect();
    assert_eq!(keys, ["Enter", "Esc"]);
}
