//! Shared program state: hash-table slots, setup, and teardown.

use joinbench_tpl::{FunctionDecl, Stmt, StructDecl};

use crate::params::ColumnCount;
use crate::schema::row_struct_name;

/// Name of the shared state struct.
pub const STATE_STRUCT: &str = "State";

/// Name of the setup procedure.
pub const SETUP_FN: &str = "setUpState";

/// Name of the teardown procedure.
pub const TEARDOWN_FN: &str = "tearDownState";

/// Name of the running match counter field.
pub const MATCH_COUNTER: &str = "num_matches";

/// Name of the hash-table slot for a column count.
pub fn slot_name(columns: ColumnCount) -> String {
    format!("table{columns}")
}

/// The shared state struct: one hash-table slot per column count plus the
/// match counter.
pub fn state_struct() -> StructDecl {
    let mut decl = StructDecl::new(STATE_STRUCT);
    for columns in ColumnCount::all() {
        decl = decl.field(slot_name(columns), "JoinHashTable");
    }
    decl.field(MATCH_COUNTER, "int64")
}

/// Setup: initialize every slot sized for its row struct and zero the
/// counter. Runs once before the first build of each pair.
pub fn setup_fn() -> FunctionDecl {
    let mut f = state_fn(SETUP_FN);
    for columns in ColumnCount::all() {
        f = f.stmt(Stmt::raw(format!(
            "@joinHTInit(&state.{}, @execCtxGetMem(execCtx), @sizeOf({}))",
            slot_name(columns),
            row_struct_name(columns)
        )));
    }
    f.stmt(Stmt::raw(format!("state.{MATCH_COUNTER} = 0")))
}

/// Teardown: free all five slots unconditionally. Setup always initialized
/// all five, so freeing an unpopulated slot is safe.
pub fn teardown_fn() -> FunctionDecl {
    let mut f = state_fn(TEARDOWN_FN);
    for columns in ColumnCount::all() {
        f = f.stmt(Stmt::raw(format!("@joinHTFree(&state.{})", slot_name(columns))));
    }
    f
}

fn state_fn(name: &str) -> FunctionDecl {
    FunctionDecl::new(name, "nil")
        .param("execCtx", "*ExecutionContext")
        .param("state", "*State")
}
