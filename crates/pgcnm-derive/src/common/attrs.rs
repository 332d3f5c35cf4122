//! `#[orm(...)]` attribute parsing shared by the derives.

use heck::ToSnakeCase;
use proc_macro2::Span;
use syn::{DeriveInput, Result};

/// Struct-level `#[orm(table = "...")]`.
pub struct StructAttrs {
    pub table: String,
}

/// Field-level `#[orm(column = "...")]` and `#[orm(skip)]`.
#[derive(Default)]
pub struct FieldAttrs {
    pub column: Option<String>,
    pub skip: bool,
}

struct AttrList {
    table: Option<String>,
    column: Option<String>,
    skip: bool,
}

impl syn::parse::Parse for AttrList {
    fn parse(input: syn::parse::ParseStream) -> Result<Self> {
        let mut table: Option<String> = None;
        let mut column: Option<String> = None;
        let mut skip = false;

        loop {
            if input.is_empty() {
                break;
            }

            let ident: syn::Ident = input.parse()?;
            let key = ident.to_string();

            if input.peek(syn::Token![=]) {
                let _: syn::Token![=] = input.parse()?;
                let value: syn::LitStr = input.parse()?;
                match key.as_str() {
                    "table" => table = Some(value.value()),
                    "column" => column = Some(value.value()),
                    _ => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown orm attribute `{key}`"),
                        ));
                    }
                }
            } else {
                match key.as_str() {
                    "skip" => skip = true,
                    _ => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown orm flag `{key}`"),
                        ));
                    }
                }
            }

            if input.is_empty() {
                break;
            }
            let _: syn::Token![,] = input.parse()?;
        }

        Ok(Self {
            table,
            column,
            skip,
        })
    }
}

fn parse_orm_attrs(attrs: &[syn::Attribute]) -> Result<Vec<AttrList>> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("orm"))
        .map(|attr| attr.parse_args::<AttrList>())
        .collect()
}

/// Table name from `#[orm(table = "...")]`, or the snake_case struct name.
pub fn get_struct_attrs(input: &DeriveInput) -> Result<StructAttrs> {
    let mut table: Option<String> = None;
    for list in parse_orm_attrs(&input.attrs)? {
        if list.column.is_some() || list.skip {
            return Err(syn::Error::new(
                Span::call_site(),
                "`column` and `skip` are field attributes",
            ));
        }
        if list.table.is_some() {
            table = list.table;
        }
    }
    if let Some(t) = &table {
        if t.is_empty() {
            return Err(syn::Error::new_spanned(input, "table name cannot be empty"));
        }
    }
    Ok(StructAttrs {
        table: table.unwrap_or_else(|| input.ident.to_string().to_snake_case()),
    })
}

pub fn get_field_attrs(field: &syn::Field) -> Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for list in parse_orm_attrs(&field.attrs)? {
        if list.table.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "`table` is a struct attribute",
            ));
        }
        if list.column.is_some() {
            out.column = list.column;
        }
        out.skip |= list.skip;
    }
    Ok(out)
}
