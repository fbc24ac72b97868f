//! Serialization of declaration records to program text.
//!
//! Structs render as `struct Name {` / indented `field: Type` lines / `}`;
//! functions render as `fun name(params) -> ret {` / indented body / `}`.
//! Top-level declarations are separated by one blank line and every
//! declaration is newline-terminated.

use std::fmt::Write;

use crate::decl::{Decl, FunctionDecl, Program, Stmt, StructDecl};
use crate::error::EmitError;

const INDENT: &str = "  ";

/// Render a whole program to text.
pub fn render_program(program: &Program) -> Result<String, EmitError> {
    let mut out = String::new();
    for (i, decl) in program.decls.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_decl(&mut out, decl)?;
    }
    Ok(out)
}

/// Render a single top-level declaration to text.
pub fn render_decl_to_string(decl: &Decl) -> Result<String, EmitError> {
    let mut out = String::new();
    render_decl(&mut out, decl)?;
    Ok(out)
}

fn render_decl(out: &mut String, decl: &Decl) -> Result<(), EmitError> {
    match decl {
        Decl::Struct(s) => render_struct(out, s),
        Decl::Function(f) => render_function(out, f),
    }
}

fn render_struct(out: &mut String, s: &StructDecl) -> Result<(), EmitError> {
    writeln!(out, "struct {} {{", s.name)?;
    for field in &s.fields {
        writeln!(out, "{INDENT}{}: {}", field.name, field.ty)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn render_function(out: &mut String, f: &FunctionDecl) -> Result<(), EmitError> {
    write!(out, "fun {}(", f.name)?;
    for (i, p) in f.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write!(out, "{}: {}", p.name, p.ty)?;
    }
    writeln!(out, ") -> {} {{", f.return_type)?;
    render_stmts(out, &f.body, 1)?;
    writeln!(out, "}}")?;
    Ok(())
}

fn render_stmts(out: &mut String, stmts: &[Stmt], depth: usize) -> Result<(), EmitError> {
    for stmt in stmts {
        match stmt {
            Stmt::Blank => out.push('\n'),
            Stmt::Raw(line) => {
                writeln!(out, "{}{}", INDENT.repeat(depth), line)?;
            }
            Stmt::Block { header, body } => {
                writeln!(out, "{}{} {{", INDENT.repeat(depth), header)?;
                render_stmts(out, body, depth + 1)?;
                writeln!(out, "{}}}", INDENT.repeat(depth))?;
            }
        }
    }
    Ok(())
}
