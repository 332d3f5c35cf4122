//! Condition trees for WHERE clauses and expression assignments.
//!
//! Fragments use `?` placeholders. [`Expr::build`] renumbers them to `$n` against a
//! shared [`ParamList`], so every part of a statement (select list, SET list, WHERE)
//! draws from one consistent sequence. `??` renders a literal `?`, which keeps the
//! `jsonb` `?` operators usable inside templates. A `?` inside a quoted literal or a
//! quoted identifier is text, not a placeholder.

use crate::error::{CnmError, CnmResult};
use crate::param::{Param, ParamList};

/// Expression node.
#[derive(Clone, Debug)]
pub enum Expr {
    /// All children must hold.
    And(Vec<Expr>),
    /// At least one child must hold.
    Or(Vec<Expr>),
    Not(Box<Expr>),
    /// SQL with `?` placeholders and their values.
    Template { sql: String, params: Vec<Param> },
    /// SQL without parameters.
    Raw(String),
    True,
    False,
}

/// Top-level `OR` in user-written text binds looser than the `AND` we join with.
fn has_top_level_or(sql: &str) -> bool {
    let upper = sql.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let mut depth = 0i32;
    let mut in_quote = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\'' => in_quote = !in_quote,
            b'(' if !in_quote => depth += 1,
            b')' if !in_quote => depth -= 1,
            b'O' if !in_quote && depth == 0 => {
                let before = i == 0 || bytes[i - 1].is_ascii_whitespace() || bytes[i - 1] == b')';
                let after = bytes
                    .get(i + 2)
                    .is_none_or(|b| b.is_ascii_whitespace() || *b == b'(');
                if before && after && bytes.get(i + 1) == Some(&b'R') {
                    return true;
                }
            }
            _ => {}
        }
        i += 1;
    }
    false
}

/// Copy `sql`, calling `slot` at each placeholder. Quoted text (`'..'`, `".."`) is
/// copied verbatim; a doubled quote inside it toggles twice and stays inside.
fn scan_template(sql: &str, mut slot: impl FnMut(&mut String)) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut quote: Option<char> = None;
    let mut chars = sql.chars().peekable();
    while let Some(ch) = chars.next() {
        match (ch, quote) {
            ('\'' | '"', None) => {
                quote = Some(ch);
                out.push(ch);
            }
            (c, Some(q)) if c == q => {
                quote = None;
                out.push(ch);
            }
            ('?', None) => {
                if chars.peek() == Some(&'?') {
                    chars.next();
                    out.push('?');
                } else {
                    slot(&mut out);
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Number of placeholders in a template.
pub(crate) fn placeholder_count(sql: &str) -> usize {
    let mut n = 0;
    scan_template(sql, |_| n += 1);
    n
}

impl Expr {
    pub fn and(exprs: Vec<Expr>) -> Self {
        Expr::And(exprs)
    }

    pub fn or(exprs: Vec<Expr>) -> Self {
        Expr::Or(exprs)
    }

    pub fn not(expr: Expr) -> Self {
        Expr::Not(Box::new(expr))
    }

    /// Template with `?` placeholders.
    pub fn template(sql: impl Into<String>, params: Vec<Param>) -> Self {
        Expr::Template {
            sql: sql.into(),
            params,
        }
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Expr::Raw(sql.into())
    }

    /// True for groups with nothing to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Expr::And(exprs) | Expr::Or(exprs) => exprs.iter().all(|e| e.is_empty()),
            Expr::Not(inner) => inner.is_empty(),
            Expr::Raw(sql) => sql.trim().is_empty(),
            Expr::Template { sql, .. } => sql.trim().is_empty(),
            Expr::True | Expr::False => false,
        }
    }

    fn needs_parens_in_and(&self) -> bool {
        match self {
            Expr::Or(exprs) => {
                let live: Vec<&Expr> = exprs.iter().filter(|e| !e.is_empty()).collect();
                live.len() > 1 || live.first().is_some_and(|e| e.needs_parens_in_and())
            }
            Expr::Template { sql, .. } | Expr::Raw(sql) => has_top_level_or(sql),
            _ => false,
        }
    }

    fn build_group(exprs: &[Expr], sep: &str, params: &mut ParamList, in_and: bool) -> String {
        let parts: Vec<String> = exprs
            .iter()
            .filter(|e| !e.is_empty())
            .map(|e| {
                let sql = e.build(params);
                let wrap = if in_and {
                    e.needs_parens_in_and()
                } else {
                    matches!(e, Expr::And(v) if v.iter().filter(|x| !x.is_empty()).count() > 1)
                };
                if wrap { format!("({sql})") } else { sql }
            })
            .collect();
        parts.join(sep)
    }

    /// Render with `$n` placeholders, appending values to `params`.
    pub fn build(&self, params: &mut ParamList) -> String {
        match self {
            Expr::And(exprs) => Self::build_group(exprs, " AND ", params, true),
            Expr::Or(exprs) => Self::build_group(exprs, " OR ", params, false),
            Expr::Not(inner) => {
                let sql = inner.build(params);
                if sql.is_empty() {
                    String::new()
                } else {
                    format!("NOT ({sql})")
                }
            }
            Expr::Template {
                sql,
                params: values,
            } => {
                let mut values = values.iter();
                scan_template(sql, |out| match values.next() {
                    Some(value) => {
                        let idx = params.push_param(value.clone());
                        out.push('$');
                        out.push_str(&idx.to_string());
                    }
                    None => out.push('?'),
                })
            }
            Expr::Raw(sql) => sql.clone(),
            Expr::True => "1=1".to_string(),
            Expr::False => "1=0".to_string(),
        }
    }

    /// Every template carries exactly one value per placeholder.
    pub fn check_placeholders(&self) -> CnmResult<()> {
        match self {
            Expr::And(exprs) | Expr::Or(exprs) => {
                exprs.iter().try_for_each(Expr::check_placeholders)
            }
            Expr::Not(inner) => inner.check_placeholders(),
            Expr::Template { sql, params } => {
                let expected = placeholder_count(sql);
                if expected == params.len() {
                    Ok(())
                } else {
                    Err(CnmError::arg_count(expected, params.len()))
                }
            }
            Expr::Raw(_) | Expr::True | Expr::False => Ok(()),
        }
    }

    /// Render standalone, numbering from `$1`.
    pub fn to_sql(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let sql = self.build(&mut params);
        (sql, params)
    }
}

/// AND-ed list of conditions, as held by a builder's WHERE clause.
#[derive(Clone, Debug, Default)]
pub struct ExprGroup {
    exprs: Vec<Expr>,
}

impl ExprGroup {
    pub fn new() -> Self {
        Self { exprs: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.iter().all(|e| e.is_empty())
    }

    pub fn and_expr(&mut self, expr: Expr) {
        self.exprs.push(expr);
    }

    pub fn exprs(&self) -> &[Expr] {
        &self.exprs
    }

    pub fn check_placeholders(&self) -> CnmResult<()> {
        self.exprs.iter().try_for_each(Expr::check_placeholders)
    }

    /// Render the group, continuing the numbering of `params`.
    pub fn build_into(&self, params: &mut ParamList) -> String {
        Expr::build_group(&self.exprs, " AND ", params, true)
    }
}
