//! Environmental impact engine
//!
//! Reference tables → per-device contribution → aggregate summary →
//! report. Everything here is synchronous and free of I/O; records come in
//! through a [`source::RecordSnapshot`].

pub mod aggregator;
pub mod assembler;
pub mod calculator;
pub mod source;
pub mod tables;

pub use aggregator::{aggregate, aggregate_by_type};
pub use assembler::{assemble_report, recompute_summary, resolve_devices, summarize};
pub use calculator::compute_contribution;
pub use source::{RecordSnapshot, RecordSource};
pub use tables::{DisposedPolicy, MaterialComposition, ReferenceTables};
