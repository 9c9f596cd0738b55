#![cfg(test)]
use std::io::Write;
use std::sync::atomic::Ordering;

use astview_common::{Settings, Value};
use astview_core::{FileSource, LookupError, ParseState, Scannable, ScannerDescriptor};
use astview_scanners::{registry, KeyValueFactory, ScanError, AVAILABLE_KEY};

use crate::support::{CountingFactory, AVAILABLE_RECORD, WHOIS_RECORD};

fn whois(record: &'static str) -> Scannable {
    let scanner = registry::descriptor("keyvalue", Settings::new()).unwrap();
    Scannable::new(scanner, record)
}

#[test]
fn fuzzy_lookup_finds_registry_fields() {
    let whois = whois(WHOIS_RECORD);

    assert_eq!(
        whois.node("domain name").unwrap(),
        Some(&Value::from("EXAMPLE.COM"))
    );
    assert_eq!(
        whois.node("creation").unwrap(),
        Some(&Value::from("1995-08-14T04:00:00Z"))
    );
    // "Registry Domain ID" comes before "Registrar" and also contains "regist".
    assert_eq!(
        whois.node("regist").unwrap(),
        Some(&Value::from("2336799_DOMAIN_COM-VRSN"))
    );
    assert_eq!(
        whois.node("^registrar$").unwrap(),
        Some(&Value::from("RESERVED-Internet Assigned Numbers Authority"))
    );
}

#[test]
fn repeated_fields_come_back_as_lists() {
    let whois = whois(WHOIS_RECORD);

    let servers: Option<Vec<String>> = whois
        .node_with("name server", |v| {
            v.as_list()
                .unwrap_or_default()
                .iter()
                .map(|s| s.to_string().to_lowercase())
                .collect()
        })
        .unwrap();

    assert_eq!(
        servers,
        Some(vec![
            "a.iana-servers.net".to_string(),
            "b.iana-servers.net".to_string()
        ])
    );
    assert_eq!(whois.node_with("domain status", Value::len).unwrap(), Some(3));
}

#[test]
fn existence_is_exact_and_ignores_empty_fields() {
    let whois = whois(WHOIS_RECORD);

    assert!(whois.node_exists("Domain Name").unwrap());
    assert!(!whois.node_exists("domain_name").unwrap());
    assert!(!whois.node_exists("Registrant Email").unwrap());
    assert_eq!(whois.node("registrant email").unwrap(), None);
}

#[test]
fn available_marker_reads_as_absent() {
    let settings = Settings::new().with("available", "^No match for");
    let scanner = registry::descriptor("keyvalue", settings).unwrap();
    let whois = Scannable::new(scanner, AVAILABLE_RECORD);

    assert!(whois.ensure_parsed().unwrap().contains_key(AVAILABLE_KEY));
    assert_eq!(whois.node(AVAILABLE_KEY).unwrap(), None);
    assert!(!whois.node_exists(AVAILABLE_KEY).unwrap());

    let mut transformed = false;
    let result = whois
        .node_with(AVAILABLE_KEY, |_| transformed = true)
        .unwrap();
    assert_eq!(result, None);
    assert!(!transformed);
}

#[test]
fn file_source_is_read_on_first_lookup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let (factory, parses) = CountingFactory::new(KeyValueFactory);
    let whois = Scannable::new(ScannerDescriptor::new(factory), FileSource::new(file.path()));

    // Written after the facade exists; nothing has been read yet.
    file.write_all(b"Expiry Date: 2031-08-13T04:00:00Z\n").unwrap();
    file.flush().unwrap();

    assert_eq!(whois.state(), ParseState::Unparsed);
    assert_eq!(
        whois.node_with("expir", Value::len).unwrap(),
        Some("2031-08-13T04:00:00Z".len())
    );
    assert_eq!(parses.load(Ordering::SeqCst), 1);
}

#[test]
fn unreadable_file_is_a_configuration_error_and_retries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("late.txt");
    let whois = Scannable::new(
        ScannerDescriptor::new(KeyValueFactory),
        FileSource::new(&path),
    );

    assert!(matches!(
        whois.node("anything"),
        Err(LookupError::Configuration(_))
    ));
    assert_eq!(whois.state(), ParseState::Unparsed);

    std::fs::write(&path, "Domain Name: LATE.EXAMPLE\n").unwrap();
    assert_eq!(
        whois.node("domain").unwrap(),
        Some(&Value::from("LATE.EXAMPLE"))
    );
}

#[test]
fn strict_scanner_errors_reach_the_caller_unchanged() {
    let settings = Settings::new().with("strict", "yes");
    let scanner = registry::descriptor("keyvalue", settings).unwrap();
    let whois = Scannable::new(scanner, "Domain Name: X\nthis line is junk\n");

    let err = whois.node("domain").unwrap_err();
    assert_eq!(err.to_string(), "line 2: missing `:` separator");
    let scan_err = err
        .scanner_error()
        .and_then(|e| e.downcast_ref::<ScanError>())
        .unwrap();
    assert!(matches!(scan_err, ScanError::MissingSeparator { line: 2, .. }));
}

#[test]
fn invalid_settings_surface_on_first_lookup() {
    let settings = Settings::new().with("available", "(unclosed");
    let scanner = registry::descriptor("keyvalue", settings).unwrap();
    let whois = Scannable::new(scanner, WHOIS_RECORD);

    assert!(matches!(
        whois.node_exists("Domain Name"),
        Err(LookupError::Configuration(ref msg)) if msg.contains("keyvalue")
    ));
}
