//! FromRow derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Result};

use crate::common::attrs::get_field_attrs;
use crate::common::named_fields;

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = named_fields(&input, "FromRow")?;

    let mut field_extracts = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let attrs = get_field_attrs(field)?;
        if attrs.skip {
            field_extracts.push(quote! {
                #field_name: ::core::default::Default::default()
            });
            continue;
        }
        let column_name = attrs
            .column
            .unwrap_or_else(|| field_name.unraw().to_string());
        field_extracts.push(quote! {
            #field_name: row.try_get_column(#column_name)?
        });
    }

    Ok(quote! {
        impl #impl_generics pgcnm::FromRow for #name #ty_generics #where_clause {
            fn from_row(row: &pgcnm::tokio_postgres::Row) -> pgcnm::CnmResult<Self> {
                use pgcnm::RowExt;
                Ok(Self {
                    #(#field_extracts),*
                })
            }
        }
    })
}
