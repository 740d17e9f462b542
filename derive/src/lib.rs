//! Derive macros generating the accessor boilerplate of the objects
//! in the `model` crate.
//!
//! * `ObjectIO` (for structs): `new()` with the required fields, getters,
//!   setters and resetters for the optional fields (honouring the
//!   `#[defaults_to(..)]`, `#[minimum(..)]`, `#[exclusive_minimum(..)]` and
//!   `#[maximum(..)]` attributes), slice getters for `Vec` fields, and the
//!   schedule bookkeeping for `#[schedule("Display Name")]` fields.
//! * `GroupAPI` (for enums wrapping one object per variant): delegating
//!   `name()`, `object_type()` and schedule methods, plus `From` impls.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

mod common_path;
mod docs;
mod field;
mod object_enum;
mod object_struct;

use object_enum::EnumObject;
use object_struct::StructObject;

fn object_io(ast: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = ast.ident.clone();
    let stru = match &ast.data {
        syn::Data::Struct(s) => s,
        _ => {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "ObjectIO can only be derived for structs",
            ))
        }
    };
    let obj = StructObject::new(ident.clone(), stru)?;

    let identity = obj.gen_identity();
    let new = obj.gen_new()?;
    let getters_setters = obj.gen_getters_setters()?;
    let schedules = obj.gen_schedule_fields()?;

    Ok(quote!(
        impl #ident {
            #identity

            #new

            #getters_setters

            #schedules
        }
    ))
}

fn group_api(ast: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let en = match &ast.data {
        syn::Data::Enum(e) => e,
        _ => {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "GroupAPI can only be derived for enums",
            ))
        }
    };
    let obj = EnumObject::new(ast.ident.clone(), en)?;
    Ok(obj.gen_group_api())
}

#[proc_macro_derive(
    ObjectIO,
    attributes(schedule, defaults_to, minimum, exclusive_minimum, maximum)
)]
pub fn derive_object_io(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    match object_io(ast) {
        Ok(t) => t.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(GroupAPI)]
pub fn derive_group_api(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    match group_api(ast) {
        Ok(t) => t.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
