//! Declaration records for emitted TPL programs.
//!
//! The target language is treated as opaque text: statements are carried as
//! raw lines (plus nested blocks for loops), while struct and function
//! declarations keep enough structure for the generator to reason about
//! names, fields, and bodies before anything is serialized.

/// A complete program: an ordered list of top-level declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level declarations in emission order.
    pub decls: Vec<Decl>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    pub fn push(&mut self, decl: impl Into<Decl>) {
        self.decls.push(decl.into());
    }

    /// Iterate over the function declarations, in emission order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> + '_ {
        self.decls.iter().filter_map(|d| match d {
            Decl::Function(f) => Some(f),
            Decl::Struct(_) => None,
        })
    }

    /// Iterate over the struct declarations, in emission order.
    pub fn structs(&self) -> impl Iterator<Item = &StructDecl> + '_ {
        self.decls.iter().filter_map(|d| match d {
            Decl::Struct(s) => Some(s),
            Decl::Function(_) => None,
        })
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// A struct declaration.
    Struct(StructDecl),
    /// A function declaration.
    Function(FunctionDecl),
}

impl From<StructDecl> for Decl {
    fn from(s: StructDecl) -> Self {
        Decl::Struct(s)
    }
}

impl From<FunctionDecl> for Decl {
    fn from(f: FunctionDecl) -> Self {
        Decl::Function(f)
    }
}

/// A struct declaration: a name and an ordered field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    /// The struct name.
    pub name: String,
    /// The fields, in declaration order.
    pub fields: Vec<Field>,
}

impl StructDecl {
    /// Create a struct declaration with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field (builder style).
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }
}

/// A single struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field name.
    pub name: String,
    /// The field type, as target-language text.
    pub ty: String,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// The parameter name.
    pub name: String,
    /// The parameter type, as target-language text.
    pub ty: String,
}

/// A function declaration: signature plus statement body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// The function name; must be unique within a program.
    pub name: String,
    /// Parameters, in declaration order.
    pub params: Vec<Param>,
    /// Return type, as target-language text.
    pub return_type: String,
    /// The statement body.
    pub body: Vec<Stmt>,
}

impl FunctionDecl {
    /// Create a function declaration with no parameters and an empty body.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: return_type.into(),
            body: Vec::new(),
        }
    }

    /// Append a parameter (builder style).
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(Param {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    /// Append a statement (builder style).
    pub fn stmt(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }
}

/// A statement in a function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// A single raw statement line.
    Raw(String),
    /// A braced block: `header {` body `}`.
    Block {
        /// Everything before the opening brace.
        header: String,
        /// The nested statements.
        body: Vec<Stmt>,
    },
    /// A blank line, for readability of the emitted text.
    Blank,
}

impl Stmt {
    /// Create a raw statement line.
    pub fn raw(line: impl Into<String>) -> Self {
        Stmt::Raw(line.into())
    }

    /// Create a braced block.
    pub fn block(header: impl Into<String>, body: Vec<Stmt>) -> Self {
        Stmt::Block {
            header: header.into(),
            body,
        }
    }
}
