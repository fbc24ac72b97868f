//! Hash-join benchmark program generator.
//!
//! Generates one TPL program that exercises a query engine's hash-join
//! operator across the full cross product of three parameter domains:
//! join-key column count (1..=5), input row count (1 to 1,000,000), and key
//! cardinality (1 to 100). For every (columns, rows, cardinality) triple the
//! program carries a build function that fills a hash table from a table
//! scan and a probe function that re-scans the table and counts key matches;
//! a driver sequences setup, build, probe, and teardown for each pair and
//! returns the accumulated match count.
//!
//! The generator is pure and deterministic: emitters return declaration
//! records ([`joinbench_tpl`]), the assembler owns ordering, and
//! serialization happens once at the end.
//!
//! # Usage
//!
//! ```rust
//! let text = joinbench_gen::generate_text().unwrap();
//! assert!(text.contains("fun buildCol1Row1Car1"));
//! ```

pub mod build;
pub mod driver;
pub mod error;
pub mod params;
pub mod predicate;
pub mod probe;
pub mod program;
pub mod schema;
mod scan;
pub mod state;

pub use driver::GeneratedFunction;
pub use error::GenError;
pub use params::{
    sweep, AggregateKind, ColumnCount, Role, SweepPoint, CARDINALITIES, ROW_COUNTS,
};
pub use program::{generate, generate_text};
