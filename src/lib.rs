//! Deterministic rank estimation and institution matching for competitive
//! medical entrance exams.
//!
//! `admission-core` turns subject scores into an estimated rank range and
//! percentile, and matches a rank against an institution catalog to produce
//! banded admission chances. Every operation is a pure function of its
//! inputs: no I/O, no clocks, no shared state. Identical inputs always
//! produce identical outputs, byte-for-byte.
//!
//! The catalog is supplied by the caller; the engine never fetches one.

pub mod catalog;
pub mod config;
pub mod estimation;
pub mod matching;
pub mod scores;
pub mod telemetry;
pub mod types;
