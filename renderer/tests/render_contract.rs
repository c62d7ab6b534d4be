//! Behavioural contract of the home renderer, exercised through the public API.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use home_render::types::HomePayload;
use home_render::{
    ContentSource, LoadError, LoadOutcome, MemoryMount, MountRole, MountSet, RenderConfig,
    UnknownSectionPolicy, load_home, render_home,
};
use serde_json::json;

fn payload(value: serde_json::Value) -> HomePayload {
    serde_json::from_value(value).expect("payload")
}

fn sections_html(mounts: &MountSet<MemoryMount>) -> String {
    mounts
        .get(MountRole::Sections)
        .map(|m| m.inner_html().to_string())
        .unwrap_or_default()
}

/// Serve exactly one canned HTTP response on a random local port.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/data/home.json")
}

fn sample() -> HomePayload {
    payload(json!({
        "hero": {
            "title": "Welcome",
            "subtitle": "Admissions are open",
            "buttons": [
                { "label": "Apply", "href": "/apply" },
                { "label": "Broken" },
                { "label": "Visit", "href": "/visit", "variant": "outline" }
            ]
        },
        "sections": [
            { "name": "richtext", "title": "About", "html": "<p>About us</p>" },
            { "type": "list", "title": "Dates", "items": ["Open day", { "item": "Exams" }, {}, ""] },
            { "type": "video", "src": "intro.mp4" },
            { "type": "richtext", "title": "Contact", "content": "<p>Call us</p>" }
        ]
    }))
}

mod idempotence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rendering_twice_equals_rendering_once() {
        let data = sample();
        let cfg = RenderConfig::default();

        let mut once = MountSet::in_memory();
        render_home(&data, &mut once, &cfg);

        let mut twice = MountSet::in_memory();
        render_home(&data, &mut twice, &cfg);
        render_home(&data, &mut twice, &cfg);

        assert_eq!(once, twice);
    }
}

mod ordering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blocks_follow_input_order_with_unknown_kind_skipped() {
        let cfg = RenderConfig {
            unknown_sections: UnknownSectionPolicy::Skip,
            ..Default::default()
        };
        let mut mounts = MountSet::in_memory();
        let report = render_home(&sample(), &mut mounts, &cfg);

        let html = sections_html(&mounts);
        let about = html.find("About us").expect("about");
        let dates = html.find("Open day").expect("dates");
        let contact = html.find("Call us").expect("contact");
        assert!(about < dates && dates < contact);
        assert!(!html.contains("intro.mp4"));
        assert_eq!(report.sections_rendered, 3);
        assert_eq!(report.skipped_sections, 1);
        assert_eq!(report.fallback_sections, 0);
    }

    #[test]
    fn fallback_policy_shows_raw_section_in_place() {
        let mut mounts = MountSet::in_memory();
        let report = render_home(&sample(), &mut mounts, &RenderConfig::default());

        let html = sections_html(&mounts);
        let dates = html.find("Open day").expect("dates");
        let video = html.find("intro.mp4").expect("raw fallback");
        let contact = html.find("Call us").expect("contact");
        assert!(dates < video && video < contact);
        assert!(html.contains("<pre>"));
        assert_eq!(report.fallback_sections, 1);
    }

    #[test]
    fn hero_buttons_keep_order_and_drop_incomplete() {
        let mut mounts = MountSet::in_memory();
        let report = render_home(&sample(), &mut mounts, &RenderConfig::default());

        let html = mounts
            .get(MountRole::HeroButtons)
            .expect("buttons")
            .inner_html()
            .to_string();
        assert!(html.find("Apply").expect("apply") < html.find("Visit").expect("visit"));
        assert!(!html.contains("Broken"));
        assert_eq!((report.buttons_rendered, report.buttons_dropped), (2, 1));
    }
}

mod sections {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_list_entries_contribute_nothing() {
        let mut mounts = MountSet::in_memory();
        render_home(
            &payload(json!({ "sections": [{ "type": "list", "items": [{}, "", "only"] }] })),
            &mut mounts,
            &RenderConfig::default(),
        );
        let html = sections_html(&mounts);
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains("<li>only</li>"));
    }

    #[test]
    fn richtext_fragment_round_trips_byte_for_byte() {
        let fragment = r#"<div class="note"><p>Line &amp; <em>emphasis</em></p><img src="a.png" alt=""></div>"#;
        let mut mounts = MountSet::in_memory();
        render_home(
            &payload(json!({ "sections": [{ "type": "richtext", "html": fragment }] })),
            &mut mounts,
            &RenderConfig::default(),
        );
        let html = sections_html(&mounts);
        let open = r#"<div class="probootstrap-text probootstrap-animate">"#;
        let start = html.find(open).expect("content block") + open.len();
        assert!(html[start..].starts_with(fragment));
        assert!(html[start + fragment.len()..].starts_with("</div>"));
    }

    #[test]
    fn feature_title_selects_two_column_layout() {
        for title in ["Principal Note", "principal note", "PRINCIPAL NOTE"] {
            let mut mounts = MountSet::in_memory();
            render_home(
                &payload(json!({ "sections": [{ "name": "richtext", "title": title, "html": "<p>Hi</p>" }] })),
                &mut mounts,
                &RenderConfig::default(),
            );
            let html = sections_html(&mounts);
            assert!(html.contains("probootstrap-flex-block"), "{title}");
            assert!(html.contains("probootstrap-image"), "{title}");
            assert!(html.contains("url('img/slider_5.png')"), "{title}");
            assert!(html.contains("height: 600px"), "{title}");
            assert!(html.contains(r#"<div class="home-richtext"><p>Hi</p></div>"#), "{title}");
        }
    }

    #[test]
    fn other_title_uses_generic_block() {
        let mut mounts = MountSet::in_memory();
        render_home(
            &payload(json!({ "sections": [{ "name": "richtext", "title": "Other", "html": "<p>Hi</p>" }] })),
            &mut mounts,
            &RenderConfig::default(),
        );
        let html = sections_html(&mounts);
        assert!(!html.contains("probootstrap-flex-block"));
        assert!(!html.contains("probootstrap-image"));
        assert!(html.contains("<h3>Other</h3>"));
    }

    #[test]
    fn configured_feature_label_and_image() {
        let cfg = RenderConfig {
            feature_label: "Dean's Welcome".into(),
            feature_image: "img/dean.jpg".into(),
            ..Default::default()
        };
        let mut mounts = MountSet::in_memory();
        render_home(
            &payload(json!({ "sections": [
                { "title": "dean's welcome", "html": "<p>Hello</p>" },
                { "title": "Principal Note", "html": "<p>Plain</p>" }
            ] })),
            &mut mounts,
            &cfg,
        );
        let html = sections_html(&mounts);
        assert_eq!(html.matches("probootstrap-flex-block").count(), 1);
        assert!(html.contains("img/dean.jpg"));
    }
}

mod loading {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn http_500_shows_single_error_message() {
        let url = serve_once("500 Internal Server Error", "{}");
        let mut mounts = MountSet::empty()
            .with(MountRole::Sections, MemoryMount::with_html("<p>placeholder</p>"));

        let err = load_home(
            &reqwest::Client::new(),
            &ContentSource::Url(url),
            &mut mounts,
            &RenderConfig::default(),
        )
        .await
        .expect_err("500 must fail");

        assert_eq!(err.status(), Some(500));
        let html = sections_html(&mounts);
        assert_eq!(html, "<p class=\"soft\">Failed to load home content: HTTP 500</p>");
        assert!(!html.contains("probootstrap-section"));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_failure() {
        let url = serve_once("200 OK", "{ \"hero\": ");
        let mut mounts = MountSet::in_memory();

        let err = load_home(
            &reqwest::Client::new(),
            &ContentSource::Url(url),
            &mut mounts,
            &RenderConfig::default(),
        )
        .await
        .expect_err("bad JSON must fail");

        assert!(matches!(err, LoadError::Parse(_)));
        assert!(sections_html(&mounts).contains("invalid JSON"));
    }

    #[tokio::test]
    async fn successful_fetch_renders_everything() {
        let url = serve_once(
            "200 OK",
            r#"{"hero":{"title":"Hello"},"sections":[{"type":"list","items":["one"]}]}"#,
        );
        let mut mounts = MountSet::in_memory();

        let outcome = load_home(
            &reqwest::Client::new(),
            &ContentSource::Url(url),
            &mut mounts,
            &RenderConfig::default(),
        )
        .await
        .expect("load succeeds");

        let LoadOutcome::Rendered(report) = outcome else {
            panic!("expected a render");
        };
        assert!(report.hero_rendered);
        assert_eq!(report.sections_rendered, 1);
        assert_eq!(
            mounts.get(MountRole::HeroTitle).map(MemoryMount::inner_html),
            Some("Hello")
        );
    }

    #[tokio::test]
    async fn refused_connection_is_transport_failure() {
        let addr = TcpListener::bind("127.0.0.1:0")
            .and_then(|l| l.local_addr())
            .expect("free port");
        let mut mounts = MountSet::in_memory();

        let err = load_home(
            &reqwest::Client::new(),
            &ContentSource::Url(format!("http://{addr}/home.json")),
            &mut mounts,
            &RenderConfig::default(),
        )
        .await
        .expect_err("nothing listens");

        assert!(matches!(err, LoadError::Transport(_)));
        assert_eq!(sections_html(&mounts).matches("<p class=\"soft\">").count(), 1);
    }
}
