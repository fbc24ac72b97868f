//! Key and row struct declarations, one pair per column count.

use joinbench_tpl::StructDecl;

use crate::params::ColumnCount;

/// Name of the key struct for a column count.
pub fn key_struct_name(columns: ColumnCount) -> String {
    format!("BuildKey{columns}")
}

/// Name of the row struct for a column count.
pub fn row_struct_name(columns: ColumnCount) -> String {
    format!("BuildRow{columns}")
}

/// The join key struct: `columns` integer fields named c1..cn.
pub fn key_struct(columns: ColumnCount) -> StructDecl {
    let mut decl = StructDecl::new(key_struct_name(columns));
    for i in 1..=columns.get() {
        decl = decl.field(format!("c{i}"), "Integer");
    }
    decl
}

/// The hash-table entry struct: the key struct plus one aggregate payload
/// selected positionally by the column count.
pub fn row_struct(columns: ColumnCount) -> StructDecl {
    StructDecl::new(row_struct_name(columns))
        .field("key", key_struct_name(columns))
        .field("agg", columns.aggregate_kind().type_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use joinbench_tpl::render_decl_to_string;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_struct_field_count() {
        for columns in ColumnCount::all() {
            let decl = key_struct(columns);
            assert_eq!(decl.fields.len(), usize::from(columns.get()));
            assert_eq!(decl.fields[0].name, "c1");
            assert_eq!(decl.fields[0].ty, "Integer");
        }
    }

    #[test]
    fn test_row_struct_pairs_key_with_aggregate() {
        let columns = ColumnCount::new(3).unwrap();
        let decl = row_struct(columns);
        assert_eq!(decl.name, "BuildRow3");
        assert_eq!(decl.fields.len(), 2);
        assert_eq!(decl.fields[0].ty, "BuildKey3");
        assert_eq!(decl.fields[1].ty, "IntegerAvgAggregate");
    }

    #[test]
    fn test_key_struct_text() {
        let columns = ColumnCount::new(2).unwrap();
        let text = render_decl_to_string(&key_struct(columns).into()).unwrap();
        assert_eq!(text, "struct BuildKey2 {\n  c1: Integer\n  c2: Integer\n}\n");
    }
}
