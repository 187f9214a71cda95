//! Error types shared across the application.

use thiserror::Error;

/// Errors raised by the shell's wiring layer.
///
/// Drawer operations themselves cannot fail; the only failure mode is a
/// composition defect where a consumer is built from a context that never
/// had a drawer handle wired in. That is a programming error and it is
/// surfaced at construction time so it reaches the top-level error boundary
/// instead of silently rendering a drawer that can never open.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("no drawer handle wired into this context; build the shell from AppContext::new")]
    DrawerUnwired,
}
