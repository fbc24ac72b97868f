//! Scan and hash statements shared by the build and probe sides.
//!
//! Both sides open the same input table, read the same key columns, and fold
//! them into the same hash value; keeping the statements here guarantees the
//! two sides cannot drift apart.

use joinbench_tpl::Stmt;

use crate::params::{ColumnCount, SweepPoint, MAX_COLUMNS};

/// Declare the table iterator, fill the column OID array in descending
/// physical order, and bind the scan to the point's input table.
pub(crate) fn scan_preamble(point: &SweepPoint) -> Vec<Stmt> {
    let n = point.columns.get();
    let mut stmts = vec![
        Stmt::raw("var tvi: TableVectorIterator"),
        Stmt::raw(format!("var col_oids: [{n}]uint32")),
    ];
    for i in 0..n {
        stmts.push(Stmt::raw(format!("col_oids[{i}] = {}", MAX_COLUMNS - i)));
    }
    stmts.push(Stmt::raw(format!(
        "@tableIterInitBind(&tvi, execCtx, \"{}\", col_oids)",
        point.table_name()
    )));
    stmts
}

/// The hash fold over all key columns. Every argument reads the same scan
/// column; build and probe must agree on this exactly.
pub(crate) fn hash_fold(columns: ColumnCount) -> String {
    let scan_col = columns.scan_column_index();
    let args: Vec<String> = (0..columns.get())
        .map(|_| format!("@pciGetInt(vec, {scan_col})"))
        .collect();
    format!("var hash_val = @hash({})", args.join(", "))
}

/// The vectorized two-level scan loop with `per_row` as the innermost body.
pub(crate) fn row_loop(per_row: Vec<Stmt>) -> Stmt {
    Stmt::block(
        "for (@tableIterAdvance(&tvi))",
        vec![
            Stmt::raw("var vec = @tableIterGetPCI(&tvi)"),
            Stmt::block("for (; @pciHasNext(vec); @pciAdvance(vec))", per_row),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Role;
    use pretty_assertions::assert_eq;

    fn point(columns: u8, row_count: u64, cardinality: u32) -> SweepPoint {
        SweepPoint {
            columns: ColumnCount::new(columns).unwrap(),
            row_count,
            cardinality,
        }
    }

    #[test]
    fn test_preamble_oids_descend_from_five() {
        let stmts = scan_preamble(&point(3, 100, 2));
        let lines: Vec<String> = stmts
            .iter()
            .map(|s| match s {
                Stmt::Raw(l) => l.clone(),
                _ => panic!("preamble is flat"),
            })
            .collect();
        assert_eq!(
            lines,
            vec![
                "var tvi: TableVectorIterator",
                "var col_oids: [3]uint32",
                "col_oids[0] = 5",
                "col_oids[1] = 4",
                "col_oids[2] = 3",
                "@tableIterInitBind(&tvi, execCtx, \"IntegerCol5Row100Car2\", col_oids)",
            ]
        );
    }

    #[test]
    fn test_hash_fold_arity() {
        let one = hash_fold(ColumnCount::new(1).unwrap());
        assert_eq!(one, "var hash_val = @hash(@pciGetInt(vec, 0))");

        let three = hash_fold(ColumnCount::new(3).unwrap());
        assert_eq!(
            three,
            "var hash_val = @hash(@pciGetInt(vec, 2), @pciGetInt(vec, 2), @pciGetInt(vec, 2))"
        );
    }

    #[test]
    fn test_preamble_table_name_matches_role_independent_convention() {
        let p = point(2, 10, 5);
        assert!(p.function_name(Role::Build).contains("Row10Car5"));
        let stmts = scan_preamble(&p);
        let bind = match stmts.last().unwrap() {
            Stmt::Raw(l) => l,
            _ => panic!("bind is a raw statement"),
        };
        assert!(bind.contains("\"IntegerCol5Row10Car5\""));
    }
}
