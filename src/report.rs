use std::error::Error as _;

use tracing::error;

use crate::error::AppError;

/// Sink for errors that must not interrupt the caller.
pub trait ErrorReporter {
    fn report(&mut self, err: &AppError);
}

/// Writes each error, with its source chain, to the `tracing` error log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&mut self, err: &AppError) {
        let chain = source_chain(err);
        if chain.is_empty() {
            error!(error = %err, "operation failed");
        } else {
            error!(error = %err, caused_by = %chain.join(": "), "operation failed");
        }
    }
}

fn source_chain(err: &AppError) -> Vec<String> {
    let mut chain = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}
