#![cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use astview_common::{ResultMap, Settings, SettingsError};
use astview_core::{Scanner, ScannerFactory};

pub const WHOIS_RECORD: &str = "\
% IANA WHOIS server
%
Domain Name: EXAMPLE.COM
Registry Domain ID: 2336799_DOMAIN_COM-VRSN
Registrar WHOIS Server: whois.iana.org
Updated Date: 2024-08-14T07:01:34Z
Creation Date: 1995-08-14T04:00:00Z
Registrar: RESERVED-Internet Assigned Numbers Authority
Domain Status: clientDeleteProhibited
Domain Status: clientTransferProhibited
Domain Status: clientUpdateProhibited
Name Server: A.IANA-SERVERS.NET
Name Server: B.IANA-SERVERS.NET
DNSSEC: signedDelegation
Registrant Email:
";

pub const AVAILABLE_RECORD: &str = "\
No match for \"NOT-REGISTERED.COM\".
>>> Last update of whois database: 2024-09-01T12:00:00Z <<<
";

/// Wraps a factory and counts how many times a scanner it built actually parsed.
pub struct CountingFactory<F> {
    inner: F,
    parses: Arc<AtomicUsize>,
    delay: Duration,
}

impl<F: ScannerFactory> CountingFactory<F> {
    pub fn new(inner: F) -> (Self, Arc<AtomicUsize>) {
        let parses = Arc::new(AtomicUsize::new(0));
        let factory = Self {
            inner,
            parses: parses.clone(),
            delay: Duration::ZERO,
        };
        (factory, parses)
    }

    /// Holds every parse open for `delay` so concurrent callers pile up behind it.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct CountingScanner {
    inner: Box<dyn Scanner>,
    parses: Arc<AtomicUsize>,
    delay: Duration,
}

impl<F: ScannerFactory> ScannerFactory for CountingFactory<F> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn build(&self, settings: &Settings) -> Result<Box<dyn Scanner>, SettingsError> {
        Ok(Box::new(CountingScanner {
            inner: self.inner.build(settings)?,
            parses: self.parses.clone(),
            delay: self.delay,
        }))
    }
}

impl Scanner for CountingScanner {
    fn parse(&self, content: &str) -> anyhow::Result<ResultMap> {
        self.parses.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.inner.parse(content)
    }
}
