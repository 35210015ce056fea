//! prospecta-core
//!
//! Pure domain types, the fixed report outline, and report file naming.
//! No I/O and no network clients; this is the shared vocabulary of the
//! Prospecta workspace.

pub mod error;
pub mod models;
pub mod report_files;
