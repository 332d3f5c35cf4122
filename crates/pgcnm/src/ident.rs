//! SQL identifier quoting.
//!
//! [`Ident`] holds one or more identifier parts (`table`, `column`) and renders them as
//! double-quoted PostgreSQL identifiers with embedded `"` doubled:
//!
//! ```ignore
//! use pgcnm::Ident;
//!
//! let id = Ident::qualified("users", "Name")?;
//! assert_eq!(id.to_sql(), r#""users"."Name""#);
//! # Ok::<(), pgcnm::CnmError>(())
//! ```

use crate::error::{CnmError, CnmResult};

/// A quoted SQL identifier, possibly qualified (`"t"."c"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    parts: Vec<String>,
}

fn check_part(part: &str) -> CnmResult<()> {
    if part.is_empty() {
        return Err(CnmError::validation("Identifier cannot be empty"));
    }
    if part.contains('\0') {
        return Err(CnmError::validation(
            "Identifier cannot contain NUL character",
        ));
    }
    Ok(())
}

impl Ident {
    /// A single quoted identifier.
    pub fn quoted(name: &str) -> CnmResult<Self> {
        check_part(name)?;
        Ok(Self {
            parts: vec![name.to_string()],
        })
    }

    /// A table-qualified identifier. An empty `table` yields an unqualified one.
    pub fn qualified(table: &str, name: &str) -> CnmResult<Self> {
        if table.is_empty() {
            return Self::quoted(name);
        }
        check_part(table)?;
        check_part(name)?;
        Ok(Self {
            parts: vec![table.to_string(), name.to_string()],
        })
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false for a constructed identifier.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Render into `out`.
    pub fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push('"');
            for ch in part.chars() {
                if ch == '"' {
                    out.push('"');
                }
                out.push(ch);
            }
            out.push('"');
        }
    }

    /// Render as a SQL string.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_sql())
    }
}
