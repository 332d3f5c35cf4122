//! Reusable query modifiers.
//!
//! A scope is a boxed function from a builder to a builder. Fragments produce them
//! ([`Qx::scope`](crate::Qx::scope), [`Sx::scope`](crate::Sx::scope),
//! [`OrderBy::scope`](crate::OrderBy::scope)) and builders apply them in order with
//! [`Scoped::scopes`].

/// A boxed builder transformation.
pub type ScopeFn<Q> = Box<dyn Fn(Q) -> Q + Send + Sync>;

/// Box a closure as a [`ScopeFn`].
pub fn scope<Q, F>(f: F) -> ScopeFn<Q>
where
    F: Fn(Q) -> Q + Send + Sync + 'static,
{
    Box::new(f)
}

/// Builders that accept scopes.
pub trait Scoped: Sized {
    /// Apply every scope in iteration order.
    fn scopes(self, scopes: impl IntoIterator<Item = ScopeFn<Self>>) -> Self {
        scopes.into_iter().fold(self, |qb, f| f(qb))
    }

    /// Apply borrowed scopes, so one set can be shared by several queries.
    fn scopes_ref<'a>(self, scopes: impl IntoIterator<Item = &'a ScopeFn<Self>>) -> Self
    where
        Self: 'a,
    {
        scopes.into_iter().fold(self, |qb, f| f(qb))
    }
}
