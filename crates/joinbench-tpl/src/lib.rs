//! TPL declaration records and serializer.
//!
//! This crate models the subset of the TPL target language that the
//! benchmark generator emits: struct declarations and function declarations
//! whose bodies are raw statement lines and nested blocks. Programs are
//! assembled as in-memory [`Program`] values and serialized once, at the
//! end, by [`render_program`].
//!
//! # Usage
//!
//! ```rust
//! use joinbench_tpl::{FunctionDecl, Program, Stmt, StructDecl, render_program};
//!
//! let mut program = Program::new();
//! program.push(StructDecl::new("State").field("count", "int64"));
//! program.push(
//!     FunctionDecl::new("main", "int32")
//!         .param("execCtx", "*ExecutionContext")
//!         .stmt(Stmt::raw("return 0")),
//! );
//! let text = render_program(&program).unwrap();
//! assert!(text.starts_with("struct State {"));
//! ```

pub mod decl;
pub mod error;
pub mod format;

pub use decl::{Decl, Field, FunctionDecl, Param, Program, Stmt, StructDecl};
pub use error::EmitError;
pub use format::{render_decl_to_string, render_program};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_determinism() {
        let mut program = Program::new();
        program.push(StructDecl::new("A").field("x", "Integer"));
        program.push(FunctionDecl::new("f", "nil").stmt(Stmt::raw("return")));

        let a = render_program(&program).unwrap();
        let b = render_program(&program).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_is_newline_terminated() {
        let mut program = Program::new();
        program.push(StructDecl::new("A"));
        let text = render_program(&program).unwrap();
        assert!(text.ends_with("}\n"));
    }
}
