use crate::{input, ledger::LedgerError};

// A rejected operation is a normal outcome here, not an exceptional one:
// withdrawals bounce, payments come in too small, and the run goes on.
// The caller still gets the error back; this only leaves a trace of it.
//
// Diagnostics go through `tracing`, so the binary decides where they end
// up (stderr by default) and how verbose they are.

/// Log the operation if it was rejected, and hand the result back untouched.
pub fn report<T>(
    operation: &'static str,
    id: usize,
    result: Result<T, LedgerError>,
) -> Result<T, LedgerError> {
    if let Err(err) = &result {
        tracing::warn!(operation, id, error = %err, "operation rejected");
    }

    result
}

/// Log every record of the input that couldn't be used.
pub fn report_input(errors: &[input::Error]) {
    for err in errors {
        tracing::warn!(error = ?err, "failed to read record");
    }
}
