//! Command implementations

pub mod audit;
pub mod share;
pub mod simple;

pub use audit::{AuditConfig, AuditReport, print_audit_report, run_audit};
pub use share::share_token;
pub use simple::run_simple;
