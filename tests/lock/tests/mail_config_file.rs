//! Mail lock tests: config file through to a delivered message, using the
//! in-memory stub transport.

use lettre::transport::stub::StubTransport;
use myutils_mail::{MailConfig, MailError, Mailer};

const CONFIG: &str = r#"{
    "smtp_server": "email-smtp.us-west-2.amazonaws.com",
    "port": 587,
    "from": "Reports <reports@example.com>",
    "to": "team@example.com",
    "cc": "archive@example.com",
    "ses": { "access_key": "AKIAEXAMPLE", "secret_key": "wJalrEXAMPLEKEY" }
}"#;

#[test]
fn config_file_to_stub_delivery() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mail.json");
    std::fs::write(&path, CONFIG).unwrap();

    let mailer = Mailer::new(MailConfig::load(&path).unwrap()).unwrap();
    assert_eq!(mailer.port(), 587);
    assert_eq!(mailer.from().name.as_deref(), Some("Reports"));

    let transport = StubTransport::new_ok();
    mailer
        .send_with(&transport, "Weekly digest", "3 new items")
        .unwrap();

    let sent = transport.messages();
    assert_eq!(sent.len(), 1);
    let (envelope, raw) = &sent[0];
    assert_eq!(
        envelope.from().map(ToString::to_string).as_deref(),
        Some("reports@example.com")
    );
    let mut to: Vec<String> = envelope.to().iter().map(ToString::to_string).collect();
    to.sort();
    assert_eq!(to, vec!["archive@example.com", "team@example.com"]);
    assert!(raw.contains("Subject: Weekly digest"), "{raw}");
    assert!(!raw.contains("wJalrEXAMPLEKEY"), "secret leaked into message");
}

#[test]
fn debug_output_never_contains_secret() {
    let config = MailConfig::from_json_slice(CONFIG.as_bytes()).unwrap();
    assert!(!format!("{config:?}").contains("wJalrEXAMPLEKEY"));
    let mailer = Mailer::new(config).unwrap();
    assert!(!format!("{mailer:?}").contains("wJalrEXAMPLEKEY"));
}

#[test]
fn invalid_cc_in_file_is_rejected_at_build() {
    let config = MailConfig::from_json_slice(
        br#"{"smtp_server":"relay","from":"a@example.com","to":"b@example.com","cc":"nope"}"#,
    )
    .unwrap();
    let err = Mailer::new(config).unwrap_err();
    assert!(
        matches!(err, MailError::InvalidAddress { ref address, .. } if address == "nope"),
        "got {err:?}"
    );
}
