//! Statement/argument tuples.
//!
//! A [`StmtArgs`] pairs a SQL fragment that uses `?` placeholders with its positional
//! bind values. The host builders in [`crate::qb`] renumber the placeholders to `$n`
//! when a full statement is rendered.

use crate::error::{CnmError, CnmResult};
use crate::param::Param;

/// A SQL fragment with its positional arguments.
#[derive(Clone, Debug, Default)]
pub struct StmtArgs {
    pub(crate) stmt: String,
    pub(crate) args: Vec<Param>,
}

impl StmtArgs {
    /// Create a tuple from a statement and its arguments.
    pub fn new(stmt: impl Into<String>, args: impl IntoIterator<Item = Param>) -> Self {
        Self {
            stmt: stmt.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Concatenate this tuple's arguments with the arguments of `others`, in order.
    pub(crate) fn combine_args<'a>(&self, others: impl IntoIterator<Item = &'a StmtArgs>) -> Vec<Param> {
        let mut args = self.args.clone();
        for other in others {
            args.extend(other.args.iter().cloned());
        }
        args
    }

    /// Split into statement and arguments.
    pub fn into_parts(self) -> (String, Vec<Param>) {
        (self.stmt, self.args)
    }

    fn expect_args(&self, expected: usize) -> CnmResult<()> {
        if self.args.len() == expected {
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(
            target: "pgcnm.stmt",
            stmt = %self.stmt,
            expected,
            actual = self.args.len(),
            "fixed-arity unpack on a statement with a different argument count"
        );
        Err(CnmError::arg_count(expected, self.args.len()))
    }
}

macro_rules! unpack_fns {
    (@param $i:tt) => { Param };
    ($($name:ident => $n:literal: [$($i:tt),+];)*) => {$(
        #[doc = concat!("Unpack into the statement and exactly ", stringify!($n), " argument(s).")]
        fn $name(&self) -> CnmResult<(String, $(unpack_fns!(@param $i)),+)> {
            let tuple = self.stmt_args();
            tuple.expect_args($n)?;
            Ok((tuple.stmt.clone(), $(tuple.args[$i].clone()),+))
        }
    )*};
}

/// Shared accessors for every type built on a [`StmtArgs`].
///
/// The `qxN()` family unpacks a tuple into a fixed-size Rust tuple, which is handy
/// when forwarding to APIs that take a statement plus a known number of values.
pub trait StmtArgsTuple {
    /// Borrow the underlying tuple.
    fn stmt_args(&self) -> &StmtArgs;

    /// The SQL statement text.
    fn qs(&self) -> &str {
        &self.stmt_args().stmt
    }

    /// The positional arguments.
    fn args(&self) -> &[Param] {
        &self.stmt_args().args
    }

    /// Return the statement, requiring that there are no arguments.
    fn qx0(&self) -> CnmResult<String> {
        let tuple = self.stmt_args();
        tuple.expect_args(0)?;
        Ok(tuple.stmt.clone())
    }

    unpack_fns! {
        qx1 => 1: [0];
        qx2 => 2: [0, 1];
        qx3 => 3: [0, 1, 2];
        qx4 => 4: [0, 1, 2, 3];
        qx5 => 5: [0, 1, 2, 3, 4];
        qx6 => 6: [0, 1, 2, 3, 4, 5];
        qx7 => 7: [0, 1, 2, 3, 4, 5, 6];
        qx8 => 8: [0, 1, 2, 3, 4, 5, 6, 7];
        qx9 => 9: [0, 1, 2, 3, 4, 5, 6, 7, 8];
        qx10 => 10: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        qx11 => 11: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        qx12 => 12: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
    }
}

impl StmtArgsTuple for StmtArgs {
    fn stmt_args(&self) -> &StmtArgs {
        self
    }
}

/// Implement `ToSql` for builder types so that binding the builder itself (instead of
/// its statement and arguments) fails at serialization time with
/// [`CnmError::NotExecutable`].
macro_rules! impl_not_executable {
    ($($ty:ty),* $(,)?) => {$(
        impl tokio_postgres::types::ToSql for $ty {
            fn to_sql(
                &self,
                _ty: &tokio_postgres::types::Type,
                _out: &mut bytes::BytesMut,
            ) -> Result<tokio_postgres::types::IsNull, Box<dyn std::error::Error + Sync + Send>> {
                Err(Box::new($crate::error::CnmError::NotExecutable))
            }

            fn accepts(_ty: &tokio_postgres::types::Type) -> bool {
                true
            }

            tokio_postgres::types::to_sql_checked!();
        }
    )*};
}

pub(crate) use impl_not_executable;

impl_not_executable!(StmtArgs);

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_postgres::types::{ToSql, Type};

    fn tuple(n: usize) -> StmtArgs {
        StmtArgs::new("x", (0..n as i64).map(Param::new))
    }

    #[test]
    fn qx0_requires_no_args() {
        assert_eq!(tuple(0).qx0().unwrap(), "x");
        assert!(tuple(1).qx0().unwrap_err().is_arg_count());
    }

    #[test]
    fn qx2_unpacks_in_order() {
        let (stmt, a, b) = tuple(2).qx2().unwrap();
        assert_eq!(stmt, "x");
        assert_eq!(format!("{a:?}"), "0");
        assert_eq!(format!("{b:?}"), "1");
    }

    #[test]
    fn qx12_unpacks_all() {
        let (_, a0, .., a11) = tuple(12).qx12().unwrap();
        assert_eq!(format!("{a0:?}"), "0");
        assert_eq!(format!("{a11:?}"), "11");
    }

    #[test]
    fn arity_mismatch_reports_counts() {
        match tuple(3).qx1() {
            Err(CnmError::ArgCount { expected, actual }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn combine_args_keeps_order() {
        let a = StmtArgs::new("a", [Param::new(1i32)]);
        let b = StmtArgs::new("b", [Param::new(2i32), Param::new(3i32)]);
        let args = a.combine_args([&b]);
        let shown: Vec<String> = args.iter().map(|p| format!("{p:?}")).collect();
        assert_eq!(shown, vec!["1", "2", "3"]);
    }

    #[test]
    fn binding_a_tuple_is_rejected() {
        let mut buf = bytes::BytesMut::new();
        let err = tuple(1)
            .to_sql_checked(&Type::TEXT, &mut buf)
            .err()
            .expect("StmtArgs must not bind");
        let err = err.downcast::<CnmError>().unwrap();
        assert!(err.is_not_executable());
    }
}
