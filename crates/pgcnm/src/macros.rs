//! Variadic constructors for conditions and select-list statements.

/// Build a [`Qx`](crate::Qx) from a statement and any number of bind values.
///
/// ```ignore
/// let cond = pgcnm::qx!("age BETWEEN ? AND ? AND name = ?", 18, 65, "alice".to_string());
/// assert_eq!(cond.args().len(), 3);
/// ```
#[macro_export]
macro_rules! qx {
    ($stmt:expr $(,)?) => {
        $crate::Qx::bare($stmt)
    };
    ($stmt:expr, $($arg:expr),+ $(,)?) => {
        $crate::Qx::new($stmt, ::std::vec![$($crate::Param::new($arg)),+])
    };
}

/// Build an [`Sx`](crate::Sx) from a statement and any number of bind values.
///
/// ```ignore
/// let adults = pgcnm::sx!("COUNT(CASE WHEN age >= ? THEN 1 END) as adults", 18);
/// ```
#[macro_export]
macro_rules! sx {
    ($stmt:expr $(,)?) => {
        $crate::Sx::new($stmt, ::std::vec::Vec::<$crate::Param>::new())
    };
    ($stmt:expr, $($arg:expr),+ $(,)?) => {
        $crate::Sx::new($stmt, ::std::vec![$($crate::Param::new($arg)),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::StmtArgsTuple;

    #[test]
    fn qx_collects_args() {
        let cond = qx!("age BETWEEN ? AND ? AND name = ?", 18, 65, "a".to_string());
        assert_eq!(cond.qs(), "age BETWEEN ? AND ? AND name = ?");
        assert_eq!(cond.args().len(), 3);
        assert!(qx!("deleted_at IS NULL").args().is_empty());
    }

    #[test]
    fn sx_collects_args() {
        let sx = sx!("COUNT(CASE WHEN age >= ? THEN 1 END) as adults", 18,);
        assert_eq!(sx.args().len(), 1);
        assert_eq!(sx!("COUNT(*)").qx0().unwrap(), "COUNT(*)");
    }
}
