#![doc(test(attr(deny(warnings))))]

//! Onboard Core implements the in-memory KYC/AML intake wizard for Abele
//! Asset Management: a seven-step gated flow collecting investor
//! classification, identity, tax residency, source of wealth, and fund
//! selection, reviewed and submitted within a single session. Nothing is
//! persisted or transmitted.

pub mod cli;
pub mod errors;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Onboard Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
