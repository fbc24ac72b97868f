//! Parameter domains for the benchmark sweep.
//!
//! The three domains below are interoperability contracts with the
//! downstream test infrastructure: the input tables it provisions are named
//! from the row count and cardinality, so the values and their order must
//! not change.

use std::fmt;

use crate::error::GenError;

/// Largest supported number of join key columns.
pub const MAX_COLUMNS: u8 = 5;

/// Width in bytes of one integer key column.
pub const KEY_COLUMN_WIDTH_BYTES: u32 = 4;

/// Scan sizes of the pre-provisioned input tables, ascending.
pub const ROW_COUNTS: [u64; 16] = [
    1, 5, 10, 50, 100, 500, 1000, 2000, 5000, 10000, 20000, 50000, 100000, 200000, 500000, 1000000,
];

/// Duplicate factors of the pre-provisioned input tables, ascending.
pub const CARDINALITIES: [u32; 6] = [1, 2, 5, 10, 50, 100];

/// Number of join key columns, validated to lie in 1..=5.
///
/// The column count also selects the aggregate kind paired with the key and
/// the hash-table slot a build/probe pair uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnCount(u8);

impl ColumnCount {
    /// Create a column count, rejecting values outside 1..=5.
    pub fn new(n: u8) -> Result<Self, GenError> {
        if (1..=MAX_COLUMNS).contains(&n) {
            Ok(Self(n))
        } else {
            Err(GenError::column_count_out_of_range(n))
        }
    }

    /// The raw count.
    pub fn get(self) -> u8 {
        self.0
    }

    /// All supported column counts, ascending.
    pub fn all() -> impl Iterator<Item = ColumnCount> {
        (1..=MAX_COLUMNS).map(ColumnCount)
    }

    /// The aggregate kind paired with this column count's row struct.
    pub fn aggregate_kind(self) -> AggregateKind {
        AggregateKind::ALL[usize::from(self.0 - 1)]
    }

    /// Total key width: one 4-byte integer per column.
    pub fn key_width_bytes(self) -> u32 {
        u32::from(self.0) * KEY_COLUMN_WIDTH_BYTES
    }

    /// The scan column index read for every key term.
    ///
    /// All key fields and hash arguments read this one physical column; the
    /// emitted programs never read distinct columns per key field.
    pub fn scan_column_index(self) -> u8 {
        self.0 - 1
    }
}

impl fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The aggregate payload kinds, indexed positionally by column count - 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    /// Integer sum.
    Sum,
    /// Row count.
    CountStar,
    /// Integer average.
    Avg,
    /// Integer minimum.
    Min,
    /// Integer maximum.
    Max,
}

impl AggregateKind {
    /// All kinds, in selector order.
    pub const ALL: [AggregateKind; 5] = [
        AggregateKind::Sum,
        AggregateKind::CountStar,
        AggregateKind::Avg,
        AggregateKind::Min,
        AggregateKind::Max,
    ];

    /// The TPL type name for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            AggregateKind::Sum => "IntegerSumAggregate",
            AggregateKind::CountStar => "CountStarAggregate",
            AggregateKind::Avg => "IntegerAvgAggregate",
            AggregateKind::Min => "IntegerMinAggregate",
            AggregateKind::Max => "IntegerMaxAggregate",
        }
    }
}

/// Which side of the join a generated function implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Scans the input table and fills the hash table.
    Build,
    /// Re-scans the input table and counts matches.
    Probe,
}

impl Role {
    /// Function-name prefix for this role.
    pub fn prefix(self) -> &'static str {
        match self {
            Role::Build => "build",
            Role::Probe => "probe",
        }
    }

    /// Resource-tracker phase label for this role.
    pub fn phase_label(self) -> &'static str {
        match self {
            Role::Build => "joinbuild",
            Role::Probe => "joinprobe",
        }
    }
}

/// One (column count, row count, cardinality) triple of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    /// Number of join key columns.
    pub columns: ColumnCount,
    /// Rows in the scanned input table.
    pub row_count: u64,
    /// Duplicate factor of the input table.
    pub cardinality: u32,
}

impl SweepPoint {
    /// Name of the pre-provisioned input table this point scans.
    pub fn table_name(&self) -> String {
        format!("IntegerCol5Row{}Car{}", self.row_count, self.cardinality)
    }

    /// Deterministic function name for the given role.
    pub fn function_name(&self, role: Role) -> String {
        format!(
            "{}Col{}Row{}Car{}",
            role.prefix(),
            self.columns,
            self.row_count,
            self.cardinality
        )
    }

    /// Resource-tracker report label: phase, row count, key byte width,
    /// cardinality.
    pub fn tracker_label(&self, role: Role) -> String {
        format!(
            "{}, {}, {}, {}",
            role.phase_label(),
            self.row_count,
            self.columns.key_width_bytes(),
            self.cardinality
        )
    }
}

/// The full parameter sweep: column count ascending, then row count, then
/// cardinality.
pub fn sweep() -> impl Iterator<Item = SweepPoint> {
    ColumnCount::all().flat_map(|columns| {
        ROW_COUNTS.iter().flat_map(move |&row_count| {
            CARDINALITIES.iter().map(move |&cardinality| SweepPoint {
                columns,
                row_count,
                cardinality,
            })
        })
    })
}
