//! End-to-end notification assembly tests

use auth9_notify::domain::{NotificationEvent, PlaceholderData, Template, UserStoreRef};
use auth9_notify::placeholder::SEND_TO;
use auth9_notify::AppError;
use pretty_assertions::assert_eq;

mod common;

use common::{claim, map, service, InMemoryTemplates, InMemoryUserAttributes};

fn jane_event() -> NotificationEvent {
    NotificationEvent::new("passwordReset")
        .with_username("jane")
        .with_user_store(UserStoreRef("PRIMARY".to_string()))
        .with_tenant_domain("acme.com")
}

fn jane() -> InMemoryUserAttributes {
    InMemoryUserAttributes::default().with_user(
        "PRIMARY",
        "jane",
        map(&[
            (&claim("firstname"), "Jane"),
            (&claim("emailaddress"), "jane@acme.com"),
        ]),
    )
}

#[tokio::test]
async fn test_greeting_resolves_first_name_claim() {
    let templates = InMemoryTemplates::default().with_template(
        "passwordReset",
        "en_US",
        Template::new("Hello {{user.claim.firstname}}").unwrap(),
    );

    let notification = service(jane(), templates, &[])
        .build(&jane_event(), PlaceholderData::new())
        .await
        .unwrap();

    assert_eq!(notification.send_to(), "jane@acme.com");
    assert_eq!(notification.render().body, "Hello Jane");
}

#[tokio::test]
async fn test_caller_recipient_overrides_email_claim() {
    let users = InMemoryUserAttributes::default().with_user(
        "PRIMARY",
        "jane",
        map(&[(&claim("emailaddress"), "x@y.com")]),
    );
    let templates = InMemoryTemplates::default().with_template(
        "passwordReset",
        "en_US",
        Template::new("Body").unwrap(),
    );

    let notification = service(users, templates, &[])
        .build(&jane_event(), map(&[(SEND_TO, "a@b.com")]))
        .await
        .unwrap();

    assert_eq!(notification.send_to(), "a@b.com");
}

#[tokio::test]
async fn test_missing_address_is_delivery_error() {
    let users = InMemoryUserAttributes::default().with_user(
        "PRIMARY",
        "jane",
        map(&[(&claim("firstname"), "Jane")]),
    );
    let templates = InMemoryTemplates::default().with_template(
        "passwordReset",
        "en_US",
        Template::new("Body").unwrap(),
    );

    let err = service(users, templates, &[])
        .build(&jane_event(), PlaceholderData::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DeliveryAddress(_)));
}

#[tokio::test]
async fn test_unconfigured_static_footer_renders_empty() {
    let templates = InMemoryTemplates::default().with_template(
        "passwordReset",
        "en_US",
        Template::new("Body").unwrap().with_footer("[{{param.footer}}]"),
    );

    let notification = service(jane(), templates, &[])
        .build(&jane_event(), PlaceholderData::new())
        .await
        .unwrap();

    assert_eq!(
        notification
            .placeholder_data()
            .get("param.footer")
            .map(String::as_str),
        Some("")
    );
    assert_eq!(notification.render().footer.as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_localized_template_and_full_render() {
    let users = InMemoryUserAttributes::default().with_user(
        "SECONDARY@acme.com",
        "jean",
        map(&[
            (&claim("givenname"), "Jean"),
            (&claim("emailaddress"), "jean@acme.com"),
            (&claim("locality"), "fr_FR"),
        ]),
    );
    let templates = InMemoryTemplates::default().with_template(
        "accountLock",
        "fr_FR",
        Template::new(
            "Bonjour {{user.claim.givenname}}, compte verrouillé: {{user.claim.identity.accountLocked}}. {{product-url-with-user-tenant}}",
        )
        .unwrap()
        .with_subject("{{param.org-name}}: compte verrouillé")
        .with_footer("© {{current-year}} {{param.org-name}} {{unknown}}"),
    );
    let event = NotificationEvent::new("accountLock")
        .with_username("jean")
        .with_user_store_domain("SECONDARY")
        .with_tenant_domain("acme.com")
        .with_send_from("noreply@acme.com")
        .with_staged_claims(map(&[(&claim("identity/accountLocked"), "true")]));

    let notification = service(users, templates, &[("org-name", "Acme")])
        .build(&event, PlaceholderData::new())
        .await
        .unwrap();

    let rendered = notification.render();
    assert_eq!(notification.send_to(), "jean@acme.com");
    assert_eq!(notification.send_from(), Some("noreply@acme.com"));
    assert_eq!(
        rendered.body,
        "Bonjour Jean, compte verrouillé: true. https://id.acme.com/t/acme.com"
    );
    assert_eq!(rendered.subject.as_deref(), Some("Acme: compte verrouillé"));

    let year = chrono::Datelike::year(&chrono::Utc::now());
    assert_eq!(
        rendered.footer,
        Some(format!("© {} Acme {{{{unknown}}}}", year))
    );
}

#[tokio::test]
async fn test_unknown_user_degrades_to_empty_claims() {
    let templates = InMemoryTemplates::default().with_template(
        "passwordReset",
        "en_US",
        Template::new("Hi {{user.claim.firstname}} - {{product-url}}").unwrap(),
    );
    let event = NotificationEvent::new("passwordReset")
        .with_username("ghost")
        .with_user_store(UserStoreRef("PRIMARY".to_string()));

    let notification = service(jane(), templates, &[])
        .build(&event, map(&[(SEND_TO, "ops@acme.com")]))
        .await
        .unwrap();

    assert_eq!(
        notification.render().body,
        "Hi {{user.claim.firstname}} - https://id.acme.com/auth"
    );
}

#[tokio::test]
async fn test_missing_template_is_lookup_error() {
    let err = service(jane(), InMemoryTemplates::default(), &[])
        .build(&jane_event(), PlaceholderData::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::TemplateLookup(_)));
}

#[tokio::test]
async fn test_event_from_loose_properties() {
    let properties = serde_json::from_value(serde_json::json!({
        "templateType": "passwordReset",
        "username": "jane",
        "userStoreRef": "PRIMARY",
        "correlationId": "c-1"
    }))
    .unwrap();
    let event = NotificationEvent::from_properties(properties).unwrap();
    let templates = InMemoryTemplates::default().with_template(
        "passwordReset",
        "en_US",
        Template::new("Hello {{user.claim.firstname}}").unwrap(),
    );

    let notification = service(jane(), templates, &[])
        .build(&event, PlaceholderData::new())
        .await
        .unwrap();

    assert_eq!(notification.render().body, "Hello Jane");
}
