use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

/// A variant of a group of objects (e.g., `Schedule::Constant(ScheduleConstant)`).
#[derive(Clone)]
pub struct VariantData {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    pub docs: String,
}

impl VariantData {
    pub fn new(variant: &syn::Variant) -> syn::Result<Self> {
        let docs = crate::docs::get_docs(&variant.attrs);
        match &variant.fields {
            syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Self {
                ident: variant.ident.clone(),
                ty: fields.unnamed[0].ty.clone(),
                docs,
            }),
            _ => Err(syn::Error::new_spanned(
                variant,
                "GroupAPI variants must wrap exactly one object, e.g., `Constant(ScheduleConstant)`",
            )),
        }
    }
}

pub struct EnumObject {
    pub ident: syn::Ident,
    pub variants: Vec<VariantData>,
}

impl EnumObject {
    pub fn new(ident: syn::Ident, stru: &syn::DataEnum) -> syn::Result<Self> {
        let variants = stru
            .variants
            .iter()
            .map(VariantData::new)
            .collect::<syn::Result<Vec<VariantData>>>()?;

        Ok(Self { ident, variants })
    }

    /// Generates the methods shared by all members of the group, each
    /// of them delegating to the wrapped object.
    pub fn gen_group_api(&self) -> TokenStream2 {
        let ident = &self.ident;
        let variant_idents: Vec<&syn::Ident> = self.variants.iter().map(|v| &v.ident).collect();
        let variant_types: Vec<&syn::Type> = self.variants.iter().map(|v| &v.ty).collect();

        let mut from_impls = quote!();
        for v in self.variants.iter() {
            let v_ident = &v.ident;
            let ty = &v.ty;
            let doc = if v.docs.is_empty() {
                format!(" Wraps the object in a [`{}`]", ident)
            } else {
                format!(" Wraps the object in a [`{}`]: {}", ident, crate::docs::summary(&v.docs))
            };
            from_impls = quote!(
                #from_impls

                impl From<#ty> for #ident {
                    #[doc = #doc]
                    fn from(v: #ty) -> Self {
                        Self::#v_ident(v)
                    }
                }
            );
        }

        quote!(
            impl #ident {
                /// The name of the wrapped object
                pub fn name(&self) -> &str {
                    match self {
                        #( Self::#variant_idents(o) => o.name(), )*
                    }
                }

                /// A mutable reference to the name of the wrapped object
                pub(crate) fn name_mut(&mut self) -> &mut String {
                    match self {
                        #( Self::#variant_idents(o) => &mut o.name, )*
                    }
                }

                /// The class of the wrapped object
                pub fn object_type(&self) -> &'static str {
                    match self {
                        #( Self::#variant_idents(_) => <#variant_types>::OBJECT_TYPE, )*
                    }
                }

                /// The `(display name, schedule name)` pairs of the schedules
                /// the wrapped object points to
                pub fn schedule_fields(&self) -> Vec<(&'static str, &str)> {
                    match self {
                        #( Self::#variant_idents(o) => o.schedule_fields(), )*
                    }
                }

                /// Points a schedule field of the wrapped object to a schedule (or empties it)
                pub fn set_schedule_field(&mut self, display_name: &str, schedule: Option<String>) -> bool {
                    match self {
                        #( Self::#variant_idents(o) => o.set_schedule_field(display_name, schedule), )*
                    }
                }
            }

            #from_impls
        )
    }
}
