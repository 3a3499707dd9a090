//! Logging facilities for modal-nav.
//!
//! modal-nav uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("modal_nav=debug,modal_nav_core=trace")
//!         .init();
//! }
//! ```

/// Span names used throughout modal-nav for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Bus publication span.
    pub const BUS: &str = "modal_nav::bus";
    /// Coordinator operation span.
    pub const COORDINATOR: &str = "modal_nav::coordinator";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "modal_nav_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "modal_nav_core::signal";
    /// Event bus target.
    pub const BUS: &str = "modal_nav_core::bus";
    /// Coordinator target.
    pub const COORDINATOR: &str = "modal_nav::coordinator";
    /// Callback registry target.
    pub const REGISTRY: &str = "modal_nav::registry";
    /// Provider and configuration target.
    pub const PROVIDER: &str = "modal_nav::provider";
}
