//! Driver assembly: sequences setup, build, probe, and teardown calls.

use joinbench_tpl::{FunctionDecl, Stmt};

use crate::params::{Role, SweepPoint};
use crate::state::{MATCH_COUNTER, SETUP_FN, TEARDOWN_FN};

/// One generated build or probe function, with the structured key it was
/// derived from.
///
/// The driver reads the role from this record rather than sniffing it back
/// out of the formatted function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFunction {
    /// Build or probe.
    pub role: Role,
    /// The sweep point the function was generated for.
    pub point: SweepPoint,
    /// The function declaration itself.
    pub decl: FunctionDecl,
}

/// The program entry point.
///
/// Declares one `State` instance, then for each generated function in sweep
/// order: a build is preceded by setup, a probe is followed by teardown.
/// Returns the final match counter as the program's exit value.
pub fn main_fn(functions: &[GeneratedFunction]) -> FunctionDecl {
    let mut f = FunctionDecl::new("main", "int32")
        .param("execCtx", "*ExecutionContext")
        .stmt(Stmt::raw("var state: State"));

    for gf in functions {
        if gf.role == Role::Build {
            f = f
                .stmt(Stmt::Blank)
                .stmt(Stmt::raw(format!("{SETUP_FN}(execCtx, &state)")));
        }
        f = f.stmt(Stmt::raw(format!("{}(execCtx, &state)", gf.decl.name)));
        if gf.role == Role::Probe {
            f = f.stmt(Stmt::raw(format!("{TEARDOWN_FN}(execCtx, &state)")));
        }
    }

    f.stmt(Stmt::Blank)
        .stmt(Stmt::raw(format!("return state.{MATCH_COUNTER}")))
}
