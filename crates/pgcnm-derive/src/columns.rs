//! Columns derive macro implementation

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{DeriveInput, Result};

use crate::common::attrs::{get_field_attrs, get_struct_attrs};
use crate::common::named_fields;

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let vis = &input.vis;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Columns cannot be derived for generic structs",
        ));
    }

    let table_name = get_struct_attrs(&input)?.table;
    let fields = named_fields(&input, "Columns")?;
    let columns_name = format_ident!("{}Columns", name);

    let mut decls = Vec::with_capacity(fields.len());
    let mut inits = Vec::with_capacity(fields.len());
    let mut names = Vec::with_capacity(fields.len());

    for field in fields.iter() {
        let attrs = get_field_attrs(field)?;
        if attrs.skip {
            continue;
        }
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let column_name = attrs
            .column
            .unwrap_or_else(|| field_ident.unraw().to_string());

        decls.push(quote! {
            pub #field_ident: pgcnm::Column<#ty>
        });
        inits.push(quote! {
            #field_ident: pgcnm::Column::from_static(#column_name)
        });
        names.push(column_name);
    }

    let doc = format!("Typed columns of [`{name}`], table `{table_name}`.");

    Ok(quote! {
        #[doc = #doc]
        #[derive(Clone, Debug, PartialEq, Eq)]
        #vis struct #columns_name {
            #(#decls),*
        }

        impl #columns_name {
            /// Table name
            pub const TABLE: &'static str = #table_name;

            /// Column names in field order
            pub const NAMES: &'static [&'static str] = &[#(#names),*];

            pub const COLUMNS: Self = Self {
                #(#inits),*
            };
        }

        impl #name {
            /// Table name
            pub const TABLE: &'static str = #table_name;

            /// Typed columns of this model
            pub fn columns() -> #columns_name {
                #columns_name::COLUMNS
            }
        }

        impl pgcnm::TableName for #name {
            fn table_name(&self) -> &str {
                #table_name
            }
        }

        impl pgcnm::TableName for #columns_name {
            fn table_name(&self) -> &str {
                #table_name
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_expands_column_struct() {
        let input: DeriveInput = parse_quote! {
            #[orm(table = "examples")]
            pub struct Example {
                name: String,
                #[orm(column = "type")]
                kind: String,
                rank: i32,
                #[orm(skip)]
                cache: Vec<u8>,
            }
        };
        let out = expand(input).unwrap().to_string();
        assert!(out.contains("pub struct ExampleColumns"));
        assert!(out.contains("\"type\""));
        assert!(out.contains("\"examples\""));
        assert!(!out.contains("cache"));
    }

    #[test]
    fn test_raw_identifier_column_name() {
        let input: DeriveInput = parse_quote! {
            struct Item { r#type: String }
        };
        let out = expand(input).unwrap().to_string();
        assert!(out.contains("\"type\""));
        assert!(!out.contains("\"r#type\""));
        assert!(out.contains("\"item\""));
    }

    #[test]
    fn test_rejects_tuple_structs_and_generics() {
        let input: DeriveInput = parse_quote! { struct Pair(i32, i32); };
        assert!(expand(input).is_err());

        let input: DeriveInput = parse_quote! { struct Wrap<T> { value: T } };
        assert!(expand(input).is_err());
    }
}
