//! Tokio runtime for async HTTP operations
//!
//! egui drives the UI from the main thread while reqwest needs a tokio
//! context. The binary builds this runtime once, enters it for the lifetime
//! of the window, and background tasks report back through the app event
//! channel which the UI drains every frame.
//!
//! Usage:
//! ```rust,no_run
//! let runtime = tokenscope::utils::runtime::build_runtime()?;
//! let _guard = runtime.enter();
//! // tokio::spawn is now available to handlers
//! # Ok::<(), std::io::Error>(())
//! ```

use tokio::runtime::{Builder, Runtime};

/// Worker threads for network tasks. The workload is a handful of HTTP calls.
const WORKER_THREADS: usize = 2;

pub fn build_runtime() -> std::io::Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(WORKER_THREADS)
        .thread_name("tokenscope-io")
        .enable_all()
        .build()
}
