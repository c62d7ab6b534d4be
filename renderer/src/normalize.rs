//! Lenient normalization of raw `home.json` values.
//!
//! The CMS has shipped several shapes of the same document over time. The
//! rules below map all of them onto [`crate::types`]:
//!
//! | value               | accepted fields (first non-empty wins) | default      |
//! |---------------------|----------------------------------------|--------------|
//! | section kind        | `type`, `name`                         | `"richtext"` |
//! | richtext markup     | `html`, `content`                      | `""`         |
//! | list entry text     | string entry, `item`, `title`          | dropped      |
//! | button variant      | `variant`                              | `"primary"`  |
//!
//! Anything of the wrong JSON type is treated as absent: a non-object hero is
//! no hero, a non-array `sections`/`buttons`/`items` is empty, and a text
//! field holding a number is an empty string.

use serde_json::{Map, Value};

use crate::types::{Button, Hero, HomePayload, Section};

/// Section kind used when neither `type` nor `name` is given.
pub const DEFAULT_KIND: &str = "richtext";

impl From<Value> for HomePayload {
    fn from(value: Value) -> Self {
        let Value::Object(root) = value else {
            return HomePayload::default();
        };
        HomePayload {
            hero: root.get("hero").and_then(normalize_hero),
            sections: array(root.get("sections"))
                .iter()
                .map(normalize_section)
                .collect(),
        }
    }
}

/// Normalize a hero value. Returns `None` unless it is an object.
pub fn normalize_hero(value: &Value) -> Option<Hero> {
    let hero = value.as_object()?;
    Some(Hero {
        title: text(hero, "title").unwrap_or_default().to_string(),
        subtitle: text(hero, "subtitle").unwrap_or_default().to_string(),
        buttons: array(hero.get("buttons"))
            .iter()
            .map(normalize_button)
            .collect(),
    })
}

fn normalize_button(value: &Value) -> Button {
    let Some(btn) = value.as_object() else {
        return Button::default();
    };
    Button {
        label: text(btn, "label").unwrap_or_default().to_string(),
        href: text(btn, "href").unwrap_or_default().to_string(),
        variant: text(btn, "variant")
            .unwrap_or(Button::DEFAULT_VARIANT)
            .to_string(),
    }
}

/// Normalize one entry of `sections`.
pub fn normalize_section(value: &Value) -> Section {
    let Some(sec) = value.as_object() else {
        return Section::Invalid { raw: value.clone() };
    };

    let kind = first_text(sec, &["type", "name"]).unwrap_or(DEFAULT_KIND);
    let title = text(sec, "title").map(str::to_string);

    match kind {
        "richtext" => Section::Richtext {
            title,
            html: first_text(sec, &["html", "content"])
                .unwrap_or_default()
                .to_string(),
        },
        "list" => Section::List {
            title,
            items: array(sec.get("items"))
                .iter()
                .filter_map(list_entry_text)
                .collect(),
        },
        other => Section::Unsupported {
            name: other.to_string(),
            raw: value.clone(),
        },
    }
}

/// Resolve a list entry to its text. Empty entries resolve to `None`.
pub fn list_entry_text(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(obj) => first_text(obj, &["item", "title"]).map(str::to_string),
        _ => None,
    }
}

/// Non-empty string field.
fn text<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn first_text<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| text(obj, key))
}

fn array(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn kind_prefers_type_over_legacy_name() {
        let sec = normalize_section(&json!({ "type": "list", "name": "richtext", "items": ["a"] }));
        assert_eq!(sec.kind(), "list");

        let sec = normalize_section(&json!({ "type": "", "name": "list" }));
        assert_eq!(sec.kind(), "list");
    }

    #[test]
    fn kind_defaults_to_richtext() {
        let sec = normalize_section(&json!({ "title": "About", "html": "<p>x</p>" }));
        assert_eq!(
            sec,
            Section::Richtext {
                title: Some("About".into()),
                html: "<p>x</p>".into()
            }
        );
    }

    #[test]
    fn richtext_falls_back_to_legacy_content() {
        let sec = normalize_section(&json!({ "name": "richtext", "html": "", "content": "<b>old</b>" }));
        assert!(matches!(sec, Section::Richtext { html, .. } if html == "<b>old</b>"));

        let sec = normalize_section(&json!({ "name": "richtext" }));
        assert!(matches!(sec, Section::Richtext { html, .. } if html.is_empty()));
    }

    #[test]
    fn list_entries_resolve_and_drop_empties() {
        let sec = normalize_section(&json!({
            "type": "list",
            "items": ["plain", { "item": "from item" }, { "title": "from title" }, {}, "", 42, null]
        }));
        let Section::List { items, .. } = sec else {
            panic!("expected list section");
        };
        assert_eq!(items, vec!["plain", "from item", "from title"]);
    }

    #[test]
    fn list_without_items_is_empty() {
        let sec = normalize_section(&json!({ "type": "list", "items": "nope" }));
        assert!(matches!(sec, Section::List { items, .. } if items.is_empty()));
    }

    #[test]
    fn unknown_kind_keeps_raw_value() {
        let raw = json!({ "type": "video", "src": "clip.mp4" });
        let sec = normalize_section(&raw);
        assert_eq!(
            sec,
            Section::Unsupported {
                name: "video".into(),
                raw
            }
        );
    }

    #[test]
    fn non_object_section_is_invalid() {
        assert!(matches!(normalize_section(&json!("oops")), Section::Invalid { .. }));
        assert!(matches!(normalize_section(&Value::Null), Section::Invalid { .. }));
    }

    #[test]
    fn hero_defaults() {
        assert_eq!(normalize_hero(&json!("not a hero")), None);

        let hero = normalize_hero(&json!({ "title": 7, "buttons": [{ "label": "Go", "href": "/go" }] }))
            .expect("object hero");
        assert_eq!(hero.title, "");
        assert_eq!(hero.subtitle, "");
        assert_eq!(hero.buttons[0].variant, "primary");
        assert!(hero.buttons[0].is_complete());
    }

    #[test]
    fn incomplete_buttons_are_kept_but_flagged() {
        let hero = normalize_hero(&json!({
            "buttons": [{ "label": "No link" }, { "href": "/x" }, null, { "label": "Ok", "href": "/ok", "variant": "outline" }]
        }))
        .expect("object hero");
        let complete: Vec<_> = hero.buttons.iter().filter(|b| b.is_complete()).collect();
        assert_eq!(hero.buttons.len(), 4);
        assert_eq!(complete.len(), 1);
        assert_eq!(complete[0].variant, "outline");
    }

    #[test]
    fn non_object_root_is_empty_payload() {
        let payload: HomePayload = serde_json::from_str("[1, 2]").expect("valid json");
        assert_eq!(payload, HomePayload::default());
    }
}
