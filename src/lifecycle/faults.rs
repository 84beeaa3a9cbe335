//! Process-level fault policy.
//!
//! # Responsibilities
//! - Mark the per-request fault boundary
//! - Log every panic through tracing, wherever it happens
//! - Terminate the process on a fault outside the boundary
//!
//! # Design Decisions
//! - Panics inside the boundary are caught by the HTTP layer (500); the
//!   hook only logs them
//! - A fault outside any request is never recovered: the hook exits with
//!   `FAULT_EXIT_CODE`, and the supervisor reports the same fault as an error
//!   when no hook is installed

use std::any::Any;
use std::future::Future;

use tokio::task::{JoinError, JoinHandle};

use crate::lifecycle::startup::ServiceError;

/// Exit code for every fatal error.
pub const FAULT_EXIT_CODE: u8 = 1;

tokio::task_local! {
    static REQUEST_BOUNDARY: ();
}

/// Run `fut` inside the per-request fault boundary.
pub async fn within_request_boundary<F: Future>(fut: F) -> F::Output {
    REQUEST_BOUNDARY.scope((), fut).await
}

/// True while polling a future started by [`within_request_boundary`].
pub fn in_request_boundary() -> bool {
    REQUEST_BOUNDARY.try_with(|_| ()).is_ok()
}

/// Route panic reports through tracing and exit on escaped faults.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let panic = payload_message(info.payload());

        if in_request_boundary() {
            tracing::error!(location = %location, panic = %panic, "Request handler panicked");
            return;
        }

        tracing::error!(location = %location, panic = %panic, "Uncaught fault, exiting");
        std::process::exit(i32::from(FAULT_EXIT_CODE));
    }));
}

/// Best-effort text of a panic payload.
pub fn payload_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else {
        "unknown panic payload"
    }
}

/// Classify a task that ended without returning.
pub fn join_fault(err: JoinError) -> ServiceError {
    if err.is_panic() {
        let payload = err.into_panic();
        ServiceError::Fault(payload_message(&*payload).to_string())
    } else {
        ServiceError::Fault(err.to_string())
    }
}

/// Await the server task and classify how it ended.
pub async fn supervise(handle: JoinHandle<Result<(), std::io::Error>>) -> Result<(), ServiceError> {
    match handle.await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(ServiceError::Serve(e)),
        Err(e) => Err(join_fault(e)),
    }
}
