#![cfg(test)]
use std::sync::atomic::Ordering;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use astview_common::Value;
use astview_core::{ParseState, Scannable, ScannerDescriptor};
use astview_scanners::KeyValueFactory;
use rayon::prelude::*;

use crate::support::{CountingFactory, WHOIS_RECORD};

const THREADS: usize = 16;

/// Every thread hits the facade at once while the first parse is still running.
#[test]
fn concurrent_first_access_parses_once() {
    let (factory, parses) = CountingFactory::new(KeyValueFactory);
    let factory = factory.slow(Duration::from_millis(50));
    let whois = Arc::new(Scannable::new(ScannerDescriptor::new(factory), WHOIS_RECORD));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let whois = whois.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                if i % 2 == 0 {
                    whois.node("domain name").unwrap().cloned()
                } else {
                    whois.node_exists("Domain Name").unwrap();
                    whois.node("Domain Name").unwrap().cloned()
                }
            })
        })
        .collect();

    for handle in handles {
        let value: Option<Value> = handle.join().unwrap();
        assert_eq!(value, Some(Value::from("EXAMPLE.COM")));
    }

    assert_eq!(parses.load(Ordering::SeqCst), 1);
    assert_eq!(whois.state(), ParseState::Parsed);
}

#[test]
fn parallel_lookups_share_one_parse() {
    let (factory, parses) = CountingFactory::new(KeyValueFactory);
    let whois = Scannable::new(ScannerDescriptor::new(factory), WHOIS_RECORD);

    let keys: Vec<&str> = vec!["registrar$", "updated", "creation", "dnssec", "nothing-here"];
    let found: Vec<bool> = keys
        .par_iter()
        .map(|key| whois.node(key).unwrap().is_some())
        .collect();

    assert_eq!(found, vec![true, true, true, true, false]);
    assert_eq!(parses.load(Ordering::SeqCst), 1);
}
