//! Row mapping traits

use crate::error::{CnmError, CnmResult};
use tokio_postgres::Row;
use tokio_postgres::types::FromSql;

/// Trait for converting a database row into a Rust value.
///
/// Tuples map columns by position, which pairs well with a select list built from
/// column fragments:
///
/// ```ignore
/// let (name, rank): (String, i32) = qb::select("examples")
///     .select(format!("{}, {}", NAME, RANK))
///     .fetch_one(&client)
///     .await?;
/// ```
pub trait FromRow: Sized {
    /// Convert a database row into Self
    fn from_row(row: &Row) -> CnmResult<Self>;
}

/// Extension trait for Row to provide typed access
pub trait RowExt {
    /// Try to get a column value, returning CnmError::Decode on failure
    fn try_get_column<T>(&self, column: &str) -> CnmResult<T>
    where
        T: for<'a> FromSql<'a>;
}

impl RowExt for Row {
    fn try_get_column<T>(&self, column: &str) -> CnmResult<T>
    where
        T: for<'a> FromSql<'a>,
    {
        self.try_get(column)
            .map_err(|e| CnmError::decode(column, e.to_string()))
    }
}

macro_rules! tuple_from_row {
    ($($t:ident => $i:tt),+) => {
        impl<$($t),+> FromRow for ($($t,)+)
        where
            $($t: for<'a> FromSql<'a>),+
        {
            fn from_row(row: &Row) -> CnmResult<Self> {
                Ok(($(
                    row.try_get($i)
                        .map_err(|e| CnmError::decode(stringify!($i), e.to_string()))?,
                )+))
            }
        }
    };
}

tuple_from_row!(A => 0);
tuple_from_row!(A => 0, B => 1);
tuple_from_row!(A => 0, B => 1, C => 2);
tuple_from_row!(A => 0, B => 1, C => 2, D => 3);
tuple_from_row!(A => 0, B => 1, C => 2, D => 3, E => 4);
tuple_from_row!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
