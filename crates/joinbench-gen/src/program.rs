//! Whole-program assembly for the hash-join benchmark sweep.
//!
//! Emission order: key structs, row structs, the state struct, setup,
//! teardown, the key-equality predicates, then every build/probe pair in
//! sweep order, then the driver.

use std::collections::HashSet;

use joinbench_tpl::Program;
use tracing::debug;

use crate::driver::{main_fn, GeneratedFunction};
use crate::error::GenError;
use crate::params::{sweep, ColumnCount, Role};
use crate::{build, predicate, probe, schema, state};

/// Assemble the complete benchmark program for the full parameter sweep.
pub fn generate() -> Result<Program, GenError> {
    let mut program = Program::new();

    for columns in ColumnCount::all() {
        program.push(schema::key_struct(columns));
    }
    for columns in ColumnCount::all() {
        program.push(schema::row_struct(columns));
    }
    program.push(state::state_struct());
    program.push(state::setup_fn());
    program.push(state::teardown_fn());
    for columns in ColumnCount::all() {
        program.push(predicate::key_check(columns));
    }

    let mut functions = Vec::new();
    for point in sweep() {
        functions.push(GeneratedFunction {
            role: Role::Build,
            point,
            decl: build::build_fn(&point),
        });
        functions.push(GeneratedFunction {
            role: Role::Probe,
            point,
            decl: probe::probe_fn(&point),
        });
    }
    debug!(pairs = functions.len() / 2, "emitted build/probe pairs");

    let driver = main_fn(&functions);
    for gf in functions {
        program.push(gf.decl);
    }
    program.push(driver);

    check_unique_names(&program)?;
    debug!(decls = program.decls.len(), "assembled program");
    Ok(program)
}

/// Generate the program and serialize it to text.
pub fn generate_text() -> Result<String, GenError> {
    let program = generate()?;
    Ok(joinbench_tpl::render_program(&program)?)
}

/// A name collision would make the driver's invocation sequence ambiguous;
/// abort the whole emission rather than hand a broken program downstream.
fn check_unique_names(program: &Program) -> Result<(), GenError> {
    let mut seen = HashSet::new();
    for f in program.functions() {
        if !seen.insert(f.name.as_str()) {
            return Err(GenError::duplicate_function(&f.name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use joinbench_tpl::{FunctionDecl, Stmt};

    #[test]
    fn test_generate_succeeds() {
        let program = generate().unwrap();
        // 5 key structs + 5 row structs + State.
        assert_eq!(program.structs().count(), 11);
        // setup + teardown + 5 predicates + 960 sweep functions + main.
        assert_eq!(program.functions().count(), 968);
    }

    #[test]
    fn test_duplicate_name_detection() {
        let mut program = Program::new();
        program.push(FunctionDecl::new("f", "nil").stmt(Stmt::raw("return")));
        program.push(FunctionDecl::new("f", "nil").stmt(Stmt::raw("return")));
        let err = check_unique_names(&program).unwrap_err();
        assert!(matches!(err, GenError::DuplicateFunction(name) if name == "f"));
    }
}
