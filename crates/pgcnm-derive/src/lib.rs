//! Derive macros for pgcnm
//!
//! Provides `#[derive(Columns)]` and `#[derive(FromRow)]`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod columns;
mod common;
mod from_row;

/// Derive a typed column set for a struct.
///
/// # Example
///
/// ```ignore
/// use pgcnm::Columns;
///
/// #[derive(Columns)]
/// #[orm(table = "examples")]
/// struct Example {
///     name: String,
///     #[orm(column = "type")]
///     kind: String,
///     rank: i32,
/// }
///
/// let c = Example::columns();
/// let (stmt, _) = c.rank.gt(10);
/// assert_eq!(stmt, "rank>?");
/// ```
///
/// # Generated
///
/// - `struct ExampleColumns` with one `pub Column<FieldType>` per field
/// - `ExampleColumns::TABLE`, `ExampleColumns::NAMES`, `ExampleColumns::COLUMNS`
/// - `Example::TABLE` and `fn Example::columns() -> ExampleColumns`
/// - `TableName` for both `Example` and `ExampleColumns`
///
/// # Attributes
///
/// - `#[orm(table = "name")]` - Table name (default: snake_case struct name)
/// - `#[orm(column = "name")]` - Map field to a different column name
/// - `#[orm(skip)]` - Leave the field out of the column set
#[proc_macro_derive(Columns, attributes(orm))]
pub fn derive_columns(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    columns::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive `FromRow` trait for a struct.
///
/// # Example
///
/// ```ignore
/// use pgcnm::FromRow;
///
/// #[derive(FromRow)]
/// struct User {
///     id: i64,
///     username: String,
///     #[orm(column = "email_address")]
///     email: Option<String>,
/// }
/// ```
///
/// # Attributes
///
/// - `#[orm(column = "name")]` - Map field to a different column name
/// - `#[orm(skip)]` - Fill the field with `Default::default()`
#[proc_macro_derive(FromRow, attributes(orm))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_row::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
