//! Build-side emitter: scan the input table and fill one hash table.

use joinbench_tpl::{FunctionDecl, Stmt};

use crate::params::{Role, SweepPoint};
use crate::scan;
use crate::schema::row_struct_name;
use crate::state::slot_name;

/// The build procedure for one sweep point.
///
/// Scans the point's input table, hashes the key columns of every row, and
/// inserts one entry into the hash-table slot for this column count, then
/// finalizes the table for probing. The whole body runs inside a resource
/// tracking scope labeled with the point's build label.
pub fn build_fn(point: &SweepPoint) -> FunctionDecl {
    let columns = point.columns;
    let row_ty = row_struct_name(columns);
    let scan_col = columns.scan_column_index();

    let mut per_row = vec![
        Stmt::raw(scan::hash_fold(columns)),
        Stmt::raw(format!(
            "var elem: *{row_ty} = @ptrCast(*{row_ty}, @joinHTInsert(jht, hash_val))"
        )),
    ];
    // Key fields c2..cn repeat the same scanned value as c1.
    for k in 1..=columns.get() {
        per_row.push(Stmt::raw(format!(
            "elem.key.c{k} = @pciGetInt(vec, {scan_col})"
        )));
    }

    let mut f = FunctionDecl::new(point.function_name(Role::Build), "nil")
        .param("execCtx", "*ExecutionContext")
        .param("state", "*State")
        .stmt(Stmt::raw("@execCtxStartResourceTracker(execCtx)"))
        .stmt(Stmt::raw(format!(
            "var jht: *JoinHashTable = &state.{}",
            slot_name(columns)
        )));
    for stmt in scan::scan_preamble(point) {
        f = f.stmt(stmt);
    }
    f.stmt(scan::row_loop(per_row))
        .stmt(Stmt::raw("@tableIterClose(&tvi)"))
        .stmt(Stmt::raw("@joinHTBuild(jht)"))
        .stmt(Stmt::raw(format!(
            "@execCtxEndResourceTracker(execCtx, @stringToSql(\"{}\"))",
            point.tracker_label(Role::Build)
        )))
}
