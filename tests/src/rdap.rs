#![cfg(test)]
use astview_common::{ResultMap, Settings, Value};
use astview_core::Scannable;
use astview_scanners::registry;
use pretty_assertions::assert_eq;

const RDAP_RESPONSE: &str = r#"{
  "objectClassName": "domain",
  "ldhName": "example.com",
  "status": ["client delete prohibited", "client transfer prohibited"],
  "secureDNS": { "delegationSigned": true, "maxSigLife": 604800 },
  "port43": null,
  "events": [
    { "eventAction": "registration", "eventDate": "1995-08-14T04:00:00Z" }
  ]
}"#;

fn rdap() -> Scannable {
    let scanner = registry::descriptor("json", Settings::new()).unwrap();
    Scannable::new(scanner, RDAP_RESPONSE)
}

#[test]
fn nested_objects_are_maps() {
    let rdap = rdap();

    let secure: &ResultMap = rdap
        .node("securedns")
        .unwrap()
        .and_then(Value::as_map)
        .unwrap();

    let expected: ResultMap = [
        ("delegationSigned", Value::Bool(true)),
        ("maxSigLife", Value::from("604800")),
    ]
    .into_iter()
    .collect();
    assert_eq!(secure, &expected);

    let signed: Option<bool> = secure.get("delegationSigned").and_then(Value::as_bool);
    assert_eq!(signed, Some(true));
    assert_eq!(secure.get("maxSigLife").and_then(Value::as_bool), None);
}

#[test]
fn json_keys_keep_document_order() {
    let rdap = rdap();
    let keys: Vec<&str> = rdap.ensure_parsed().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["objectClassName", "ldhName", "status", "secureDNS", "port43", "events"]
    );
    // "objectClassName" precedes "ldhName", both contain "name".
    assert_eq!(rdap.node("name").unwrap(), Some(&Value::from("domain")));
}

#[test]
fn null_fields_are_absent() {
    let rdap = rdap();
    assert_eq!(rdap.node("port43").unwrap(), None);
    assert!(!rdap.node_exists("port43").unwrap());
    assert!(rdap.node_exists("ldhName").unwrap());
}

#[test]
fn transform_reaches_into_lists() {
    let rdap = rdap();
    let registered: Option<String> = rdap
        .node_with("events", |v| {
            v.as_list()
                .and_then(|events| events.first())
                .and_then(Value::as_map)
                .and_then(|event| event.get("eventDate"))
                .map(ToString::to_string)
                .unwrap_or_default()
        })
        .unwrap();
    assert_eq!(registered.as_deref(), Some("1995-08-14T04:00:00Z"));
}
