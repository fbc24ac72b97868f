//! Key-equality predicate declarations, one per column count.

use joinbench_tpl::{FunctionDecl, Stmt};

use crate::params::ColumnCount;
use crate::schema::row_struct_name;

/// Name of the equality predicate for a column count.
pub fn key_check_name(columns: ColumnCount) -> String {
    format!("keyCheck{columns}")
}

/// The key-equality predicate passed to the hash-table iterator.
///
/// Compares one scan-column value per key field against the candidate row,
/// joined with `and`. A single column degenerates to one comparison with no
/// conjunction.
pub fn key_check(columns: ColumnCount) -> FunctionDecl {
    let scan_col = columns.scan_column_index();
    let terms: Vec<String> = (1..=columns.get())
        .map(|k| format!("@sqlToBool(@pciGetInt(pci, {scan_col}) == row.key.c{k})"))
        .collect();

    FunctionDecl::new(key_check_name(columns), "bool")
        .param("execCtx", "*ExecutionContext")
        .param("pci", "*ProjectedColumnsIterator")
        .param("row", format!("*{}", row_struct_name(columns)))
        .stmt(Stmt::raw(format!("return {}", terms.join(" and "))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use joinbench_tpl::render_decl_to_string;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_column_has_no_conjunction() {
        let columns = ColumnCount::new(1).unwrap();
        let text = render_decl_to_string(&key_check(columns).into()).unwrap();
        assert_eq!(
            text,
            "fun keyCheck1(execCtx: *ExecutionContext, pci: *ProjectedColumnsIterator, \
             row: *BuildRow1) -> bool {\n\
             \x20 return @sqlToBool(@pciGetInt(pci, 0) == row.key.c1)\n\
             }\n"
        );
        assert_eq!(text.matches(" and ").count(), 0);
    }

    #[test]
    fn test_conjunction_arity_matches_column_count() {
        for columns in ColumnCount::all() {
            let text = render_decl_to_string(&key_check(columns).into()).unwrap();
            assert_eq!(
                text.matches(" and ").count(),
                usize::from(columns.get()) - 1
            );
            assert_eq!(
                text.matches("@sqlToBool").count(),
                usize::from(columns.get())
            );
        }
    }

    #[test]
    fn test_every_term_reads_the_same_scan_column() {
        let columns = ColumnCount::new(3).unwrap();
        let text = render_decl_to_string(&key_check(columns).into()).unwrap();
        assert_eq!(text.matches("@pciGetInt(pci, 2)").count(), 3);
        assert!(text.contains("row.key.c1"));
        assert!(text.contains("row.key.c2"));
        assert!(text.contains("row.key.c3"));
    }
}
