//! Probe-side emitter: re-scan the input table and count key matches.

use joinbench_tpl::{FunctionDecl, Stmt};

use crate::params::{Role, SweepPoint};
use crate::predicate::key_check_name;
use crate::scan;
use crate::schema::row_struct_name;
use crate::state::{slot_name, MATCH_COUNTER};

/// The probe procedure for one sweep point.
///
/// Re-scans the same input table as the matching build, recomputes the
/// identical hash fold, and walks the hash-table iterator under the
/// column count's key-equality predicate, bumping the shared match counter
/// once per confirmed match. An empty bucket contributes nothing.
pub fn probe_fn(point: &SweepPoint) -> FunctionDecl {
    let columns = point.columns;
    let row_ty = row_struct_name(columns);

    let per_row = vec![
        Stmt::raw(scan::hash_fold(columns)),
        Stmt::raw("var hti: JoinHashTableIterator"),
        Stmt::block(
            format!(
                "for (@joinHTIterInit(&hti, jht, hash_val); \
                 @joinHTIterHasNext(&hti, {}, execCtx, vec);)",
                key_check_name(columns)
            ),
            vec![
                Stmt::raw(format!(
                    "build_row = @ptrCast(*{row_ty}, @joinHTIterGetRow(&hti))"
                )),
                Stmt::raw(format!("state.{MATCH_COUNTER} = state.{MATCH_COUNTER} + 1")),
            ],
        ),
    ];

    let mut f = FunctionDecl::new(point.function_name(Role::Probe), "nil")
        .param("execCtx", "*ExecutionContext")
        .param("state", "*State")
        .stmt(Stmt::raw("@execCtxStartResourceTracker(execCtx)"))
        .stmt(Stmt::raw(format!(
            "var jht: *JoinHashTable = &state.{}",
            slot_name(columns)
        )))
        .stmt(Stmt::raw(format!("var build_row: *{row_ty}")));
    for stmt in scan::scan_preamble(point) {
        f = f.stmt(stmt);
    }
    // The emitted program re-finalizes the table after probing; downstream
    // report rows are timed with that call included.
    f.stmt(scan::row_loop(per_row))
        .stmt(Stmt::raw("@tableIterClose(&tvi)"))
        .stmt(Stmt::raw("@joinHTBuild(jht)"))
        .stmt(Stmt::raw(format!(
            "@execCtxEndResourceTracker(execCtx, @stringToSql(\"{}\"))",
            point.tracker_label(Role::Probe)
        )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_fn;
    use crate::params::ColumnCount;
    use joinbench_tpl::render_decl_to_string;
    use pretty_assertions::assert_eq;

    fn point(columns: u8, row_count: u64, cardinality: u32) -> SweepPoint {
        SweepPoint {
            columns: ColumnCount::new(columns).unwrap(),
            row_count,
            cardinality,
        }
    }

    #[test]
    fn test_probe_function_text() {
        let text = render_decl_to_string(&probe_fn(&point(2, 10, 5)).into()).unwrap();
        assert_eq!(
            text,
            "fun probeCol2Row10Car5(execCtx: *ExecutionContext, state: *State) -> nil {\n\
             \x20 @execCtxStartResourceTracker(execCtx)\n\
             \x20 var jht: *JoinHashTable = &state.table2\n\
             \x20 var build_row: *BuildRow2\n\
             \x20 var tvi: TableVectorIterator\n\
             \x20 var col_oids: [2]uint32\n\
             \x20 col_oids[0] = 5\n\
             \x20 col_oids[1] = 4\n\
             \x20 @tableIterInitBind(&tvi, execCtx, \"IntegerCol5Row10Car5\", col_oids)\n\
             \x20 for (@tableIterAdvance(&tvi)) {\n\
             \x20   var vec = @tableIterGetPCI(&tvi)\n\
             \x20   for (; @pciHasNext(vec); @pciAdvance(vec)) {\n\
             \x20     var hash_val = @hash(@pciGetInt(vec, 1), @pciGetInt(vec, 1))\n\
             \x20     var hti: JoinHashTableIterator\n\
             \x20     for (@joinHTIterInit(&hti, jht, hash_val); \
             @joinHTIterHasNext(&hti, keyCheck2, execCtx, vec);) {\n\
             \x20       build_row = @ptrCast(*BuildRow2, @joinHTIterGetRow(&hti))\n\
             \x20       state.num_matches = state.num_matches + 1\n\
             \x20     }\n\
             \x20   }\n\
             \x20 }\n\
             \x20 @tableIterClose(&tvi)\n\
             \x20 @joinHTBuild(jht)\n\
             \x20 @execCtxEndResourceTracker(execCtx, @stringToSql(\"joinprobe, 10, 8, 5\"))\n\
             }\n"
        );
    }

    #[test]
    fn test_probe_hash_fold_matches_build() {
        for p in [point(1, 1, 1), point(3, 100, 10), point(5, 1000000, 100)] {
            let build = render_decl_to_string(&build_fn(&p).into()).unwrap();
            let probe = render_decl_to_string(&probe_fn(&p).into()).unwrap();
            let hash_line = |text: &str| {
                text.lines()
                    .find(|l| l.contains("var hash_val"))
                    .map(str::trim)
                    .map(str::to_string)
                    .unwrap()
            };
            assert_eq!(hash_line(&build), hash_line(&probe));
        }
    }

    #[test]
    fn test_probe_references_matching_slot_and_predicate() {
        let text = render_decl_to_string(&probe_fn(&point(4, 50, 2)).into()).unwrap();
        assert!(text.contains("&state.table4"));
        assert!(text.contains("keyCheck4"));
        assert!(text.contains("@stringToSql(\"joinprobe, 50, 16, 2\")"));
    }
}
