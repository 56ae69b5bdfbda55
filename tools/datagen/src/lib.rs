//! Synthetic Order Flow Generator
//!
//! CSV fixture generator for matching-engine test harnesses. Emits an
//! ordered stream of NEW/MODIFY/CANCEL order events backed by an in-memory
//! active-order registry, so MODIFY and CANCEL rows always reference orders
//! that a prior NEW row created.
//!
//! # Modules
//! - `config` — generator tunables and their canonical defaults
//! - `registry` — active-order registry with uniform random pick/remove
//! - `generator` — the stateful event-generation loop
//! - `sink` — row sinks (file, stdout, in-memory CSV writers)
//! - `error` — error taxonomy

pub mod config;
pub mod error;
pub mod generator;
pub mod registry;
pub mod sink;

use crate::config::GeneratorConfig;
use crate::error::DatagenError;
use crate::generator::EventGenerator;
use crate::sink::{CsvSink, RecordSink};
use std::path::Path;

/// Crate version constant
pub const VERSION: &str = "1.0.0";

/// Generate a full run (header + `count` rows) into an arbitrary sink.
///
/// The same config, seed, and start time reproduce a run byte-for-byte,
/// which is what lets the stdout fallback emit exactly the rows a failed
/// file run would have held.
pub fn generate<S: RecordSink>(
    config: GeneratorConfig,
    seed: u64,
    start_ns: i64,
    count: u64,
    sink: &mut S,
) -> Result<(), DatagenError> {
    EventGenerator::with_start_time(config, seed, start_ns).run(count, sink)
}

/// Generate a full run to a CSV file
pub fn generate_to_file<P: AsRef<Path>>(
    config: GeneratorConfig,
    seed: u64,
    start_ns: i64,
    count: u64,
    path: P,
) -> Result<(), DatagenError> {
    let mut sink = CsvSink::from_path(path)?;
    generate(config, seed, start_ns, count, &mut sink)
}

/// Generate a full run to standard output
pub fn generate_to_stdout(
    config: GeneratorConfig,
    seed: u64,
    start_ns: i64,
    count: u64,
) -> Result<(), DatagenError> {
    let mut sink = CsvSink::stdout();
    generate(config, seed, start_ns, count, &mut sink)
}
