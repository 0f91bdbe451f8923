//! Integration tests for form elements
//!
//! Covers value precedence, rule synthesis and saving through relations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use acton_admin::prelude::*;
use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::{header, Request};
use serde_json::{json, Value};

fn user() -> Record {
    Record::persisted("users", json!(7))
        .with_attribute("email", "ann@example.com")
        .with_relation(
            "profile",
            Relation::has_one(
                Record::new("profiles")
                    .with_relation("avatar", Relation::morph_one(Record::new("images"), "imageable", "profiles", "id")),
                "user_id",
                "id",
            ),
        )
        .with_relation("company", Relation::belongs_to(Record::new("companies"), "company_id", "id"))
        .with_relation("roles", Relation::other(Record::new("roles")))
}

#[test]
fn test_value_precedence() {
    let mut element = NamedFormElement::new("email", Some("Email"));
    element.set_default_value("fallback@example.com");
    let model = user();

    let both = InputBag::new()
        .with_old(json!({"email": "old@example.com"}))
        .with_input(json!({"email": "input@example.com"}));
    assert_eq!(element.value(&both, Some(&model)).unwrap(), Some(json!("old@example.com")));

    let input = InputBag::new().with_input(json!({"email": "input@example.com"}));
    assert_eq!(element.value(&input, Some(&model)).unwrap(), Some(json!("input@example.com")));

    let empty = InputBag::new();
    assert_eq!(element.value(&empty, Some(&model)).unwrap(), Some(json!("ann@example.com")));
    assert_eq!(
        element.value(&empty, Some(&Record::new("users"))).unwrap(),
        Some(json!("fallback@example.com"))
    );
    assert_eq!(element.value(&empty, None).unwrap(), Some(json!("fallback@example.com")));
}

#[test]
fn test_has_one_round_trip() {
    let bio = Textarea::new("profile.bio", Some("Bio"));
    let request = InputBag::new().with_input(json!({"profile": {"bio": "Writes Rust"}}));
    let mut model = user();
    assert!(model.loaded("profile").is_none());

    bio.save(&request, &mut model).unwrap();

    let profile = model.loaded("profile").expect("profile attached");
    assert!(!profile.exists());
    assert_eq!(profile.table(), "profiles");
    assert_eq!(profile.attribute("user_id"), Some(json!(7)));
    assert_eq!(profile.attribute("bio"), Some(json!("Writes Rust")));
}

#[test]
fn test_morph_one_through_new_has_one() {
    let url = Text::new("profile.avatar.url", Some("Avatar"));
    let request = InputBag::new().with_input(json!({"profile": {"avatar": {"url": "/a.png"}}}));
    let mut model = user();

    url.save(&request, &mut model).unwrap();

    let avatar = model
        .loaded("profile")
        .and_then(|profile| profile.loaded("avatar"))
        .expect("avatar attached");
    assert_eq!(avatar.attribute("url"), Some(json!("/a.png")));
    assert_eq!(avatar.attribute("imageable_type"), Some(json!("profiles")));
    assert_eq!(avatar.attribute("imageable_id"), Some(Value::Null));
}

#[test]
fn test_unsupported_relation_fails_without_mutation() {
    let mut model = user();
    let before = model.to_json();

    for path in ["roles.name", "profile.missing.name", "nothing.name"] {
        let element = Text::new(path, None);
        let request = InputBag::new().with_input(json!({"roles": {"name": "x"}, "profile": {"missing": {"name": "x"}}}));

        let err = element.save(&request, &mut model).expect_err(path);
        assert!(err.is_logic_error(), "{path}: {err}");
        assert!(matches!(err, AdminError::UnmappableField { .. }));
    }

    assert_eq!(model.to_json(), before);
    assert!(model.loaded("profile").is_none());
}

#[test]
fn test_mutator_applied_exactly_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut name = Text::new("profile.name", None);
    assert!(!name.named().has_mutator());
    name.named_mut().mutate_value(move |value| {
        counter.fetch_add(1, Ordering::SeqCst);
        Value::String(value.as_str().unwrap_or_default().trim().to_string())
    });
    assert!(name.named().has_mutator());

    let mut model = user();
    let request = InputBag::new().with_input(json!({"profile": {"name": "  Ann  "}}));
    name.save(&request, &mut model).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        model.loaded("profile").and_then(|p| p.attribute("name")),
        Some(json!("Ann"))
    );
}

#[test]
fn test_unique_rule_synthesis() {
    let mut email = Text::email("email", Some("Email"));
    email.named_mut().unique(None);

    let persisted = email.validation_rules(Some(&user())).unwrap();
    assert_eq!(persisted["email"], vec!["email", "unique:users,email,7"]);

    let fresh = email.validation_rules(Some(&Record::new("users"))).unwrap();
    assert_eq!(fresh["email"], vec!["email", "unique:users,email"]);

    let err = email.validation_rules(None).expect_err("no model");
    assert!(matches!(err, AdminError::UnresolvablePath { .. }));
}

#[test]
fn test_message_suffix_is_stripped() {
    let mut bio = Textarea::new("profile.bio", Some("Bio"));
    bio.named_mut()
        .add_validation_rule("min:5", None)
        .add_validation_message("min:5", "too short");

    let messages = bio.validation_messages();
    assert_eq!(messages.get("profile[bio].min").map(String::as_str), Some("too short"));
    assert!(!messages.contains_key("profile[bio].min:5"));
}

#[test]
fn test_validation_uses_custom_and_default_messages() {
    let mut bio = Textarea::new("profile.bio", Some("Bio"));
    bio.named_mut()
        .add_validation_rule("min:5", Some("too short"))
        .required(None);
    let form = AdminForm::new("/admin/users/7").element(bio);

    let short = InputBag::new().with_input(json!({"profile": {"bio": "Hey"}}));
    let errors = form.validate(&Validator::new(), &short, Some(&user())).unwrap();
    assert_eq!(errors.for_field("profile.bio")[0].message, "too short");

    let missing = InputBag::new();
    let errors = form.validate(&Validator::new(), &missing, Some(&user())).unwrap();
    assert_eq!(errors.for_field("profile.bio")[0].message, "The Bio field is required.");
}

#[tokio::test]
async fn test_extracted_form_is_saved() {
    let request = Request::builder()
        .method("POST")
        .uri("/admin/users/7")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("email=new%40example.com&profile%5Bbio%5D=Hello&active=1"))
        .unwrap();
    let input = InputBag::from_request(request, &()).await.unwrap();

    let form = AdminForm::new("/admin/users/7")
        .element(Text::email("email", Some("Email")))
        .element(Textarea::new("profile.bio", Some("Bio")))
        .element(Checkbox::new("active", Some("Active")));

    let mut model = user();
    assert!(!form.validate(&Validator::new(), &input, Some(&model)).unwrap().has_errors());
    form.save(&input, &mut model).unwrap();

    assert_eq!(model.attribute("email"), Some(json!("new@example.com")));
    assert_eq!(model.attribute("active"), Some(json!(true)));
    assert_eq!(
        model.loaded("profile").and_then(|p| p.attribute("bio")),
        Some(json!("Hello"))
    );
}
