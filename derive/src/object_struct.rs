use crate::field::Field;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

pub struct StructObject {
    pub ident: syn::Ident,
    pub fields: Vec<Field>,
}

impl StructObject {
    pub fn new(ident: syn::Ident, stru: &syn::DataStruct) -> syn::Result<Self> {
        let named = match &stru.fields {
            syn::Fields::Named(syn::FieldsNamed { named, .. }) => named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &ident,
                    "ObjectIO can only be derived for structs with named fields",
                ))
            }
        };
        let fields = named
            .iter()
            .map(Field::new)
            .collect::<syn::Result<Vec<Field>>>()?;

        Ok(StructObject { ident, fields })
    }

    pub fn has_name(&self) -> bool {
        self.fields.iter().any(|f| {
            matches!(f, Field::String(_))
                && f.data().ident.as_ref().map(|i| i == "name").unwrap_or(false)
        })
    }

    fn field_ident(f: &Field) -> syn::Result<syn::Ident> {
        f.data()
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(&f.data().ty, "Field has no identity"))
    }

    /// Generates `OBJECT_TYPE`, `object_type()` and, if there is a `name`
    /// field, `name()`
    pub fn gen_identity(&self) -> TokenStream2 {
        let name_str = format!("{}", self.ident);
        let name_getter = if self.has_name() {
            quote!(
                /// The name of the object
                pub fn name(&self) -> &str {
                    &self.name
                }
            )
        } else {
            quote!()
        };

        quote!(
            /// The name of the class, as used in the schedule type registry
            /// and in messages
            pub const OBJECT_TYPE: &'static str = #name_str;

            /// Returns the name of the class of this object
            pub fn object_type(&self) -> &'static str {
                Self::OBJECT_TYPE
            }

            #name_getter
        )
    }

    pub fn gen_new(&self) -> syn::Result<TokenStream2> {
        let new_docstring = format!(" Creates a new [`{}`]", self.ident);
        let mut params = Vec::new();
        let mut content = Vec::new();

        // Initialize all values
        let mut any_strings = false;
        for f in self.fields.iter() {
            let fname = Self::field_ident(f)?;

            match f {
                Field::Option(_) => {
                    // optionals are none
                    content.push(quote!(#fname : None));
                }
                Field::Vec(_) => {
                    // vecs are empty
                    content.push(quote!(#fname : Vec::new()));
                }
                Field::String(_) => {
                    any_strings = true;
                    // Strings are passed as generics
                    params.push(quote!(#fname : S));
                    content.push(quote!(#fname : #fname.into()));
                }
                _ => {
                    let ty = &f.data().ty;
                    params.push(quote!(#fname : #ty));
                    content.push(quote!(#fname));
                }
            }
        }

        let generics = if any_strings {
            quote!(<S: Into<String>>)
        } else {
            quote!()
        };

        Ok(quote!(
            #[doc = #new_docstring]
            ///
            /// All the required fields are asked by the constructor. The Optional
            /// fields default to `None`, and the `Vec` fields default to empty.
            pub fn new #generics (#(#params),*) -> Self {
                Self {
                    #(#content),*
                }
            }
        ))
    }

    fn range_checks(&self, f: &Field) -> syn::Result<TokenStream2> {
        let f_ident = Self::field_ident(f)?;
        let f_ident_str = f_ident.to_string();
        let object_type = format!("{}", self.ident);
        let attrs = &f.data().attributes;
        let mut checks = quote!();

        let mut err = |cond: TokenStream2, limit: TokenStream2| {
            checks = quote!(
                #checks
                if #cond {
                    return Err(crate::ModelError::OutOfRange {
                        object_type: #object_type.to_string(),
                        field: #f_ident_str.to_string(),
                        value: format!("{}", v),
                        limit: #limit,
                    });
                }
            );
        };

        if let Some(min) = &attrs.minimum {
            err(quote!(!(v >= #min)), quote!(format!(">= {}", #min)));
        }
        if let Some(min) = &attrs.exclusive_minimum {
            err(quote!(!(v > #min)), quote!(format!("> {}", #min)));
        }
        if let Some(max) = &attrs.maximum {
            err(quote!(!(v <= #max)), quote!(format!("<= {}", #max)));
        }
        Ok(checks)
    }

    /// Generates the getters, setters and resetters of the optional
    /// fields, and the slice getters of the `Vec` fields.
    pub fn gen_getters_setters(&self) -> syn::Result<TokenStream2> {
        let mut gets: TokenStream2 = quote!();
        let mut sets: TokenStream2 = quote!();
        let object_type = format!("{}", self.ident);

        for f in self.fields.iter() {
            // name of the field
            let f_ident = Self::field_ident(f)?;
            let f_ident_str = f_ident.to_string();
            let data = f.data();
            let field_summary = crate::docs::summary(&data.docs);

            match f {
                Field::Option(d) => {
                    let child = f.child().ok_or_else(|| {
                        syn::Error::new_spanned(&d.ty, "Option without a child type")
                    })?;
                    // Type T inside the Option<T>
                    let ty = &child.data().ty;
                    let is_string = matches!(child, Field::String(_));

                    /* GETTER */
                    let gets_doc_string = format!(" Gets the `{}` field.", f_ident);
                    if let Some(default) = &data.attributes.defaults_to {
                        let default_doc = format!(
                            " Returns the default value (`{}`) if the field is empty.",
                            quote!(#default)
                        );
                        let getter = if is_string {
                            quote!(
                                pub fn #f_ident(&self) -> String {
                                    self.#f_ident.clone().unwrap_or_else(|| String::from(#default))
                                }
                            )
                        } else {
                            quote!(
                                pub fn #f_ident(&self) -> #ty {
                                    self.#f_ident.unwrap_or(#default)
                                }
                            )
                        };
                        let is_defaulted = format_ident!("is_{}_defaulted", f_ident);
                        let is_defaulted_doc =
                            format!(" Checks whether the `{}` field is using its default value", f_ident);
                        gets = quote!(
                            #gets

                            #[doc = #gets_doc_string]
                            ///
                            #[doc = #field_summary]
                            ///
                            #[doc = #default_doc]
                            #getter

                            #[doc = #is_defaulted_doc]
                            pub fn #is_defaulted(&self) -> bool {
                                self.#f_ident.is_none()
                            }
                        );
                    } else {
                        let gets_err = if self.has_name() {
                            quote!(crate::ModelError::MissingField {
                                object_type: #object_type.to_string(),
                                name: self.name.clone(),
                                field: #f_ident_str.to_string(),
                            })
                        } else {
                            quote!(crate::ModelError::MissingField {
                                object_type: #object_type.to_string(),
                                name: String::new(),
                                field: #f_ident_str.to_string(),
                            })
                        };
                        let getter = if is_string {
                            quote!(
                                pub fn #f_ident(&self) -> Result<&str, crate::ModelError> {
                                    self.#f_ident.as_deref().ok_or_else(|| #gets_err)
                                }
                            )
                        } else if child.is_copy() {
                            quote!(
                                pub fn #f_ident(&self) -> Result<#ty, crate::ModelError> {
                                    self.#f_ident.ok_or_else(|| #gets_err)
                                }
                            )
                        } else {
                            quote!(
                                pub fn #f_ident(&self) -> Result<&#ty, crate::ModelError> {
                                    self.#f_ident.as_ref().ok_or_else(|| #gets_err)
                                }
                            )
                        };
                        gets = quote!(
                            #gets

                            #[doc = #gets_doc_string]
                            ///
                            #[doc = #field_summary]
                            ///
                            /// Returns an error if the field is empty.
                            #getter
                        );
                    }

                    /* SETTER */
                    let set_ident = format_ident!("set_{}", f_ident);
                    let sets_doc_string = format!(" Sets the `{}` field.", f_ident);
                    if is_string {
                        sets = quote!(
                            #sets

                            #[doc = #sets_doc_string]
                            pub fn #set_ident<S: Into<String>>(&mut self, v: S) -> &mut Self {
                                self.#f_ident = Some(v.into());
                                self
                            }
                        );
                    } else if data.attributes.is_bounded() {
                        let checks = self.range_checks(f)?;
                        sets = quote!(
                            #sets

                            #[doc = #sets_doc_string]
                            ///
                            /// Returns an error, leaving the object untouched, if the
                            /// value is out of range.
                            pub fn #set_ident(&mut self, v: #ty) -> Result<&mut Self, crate::ModelError> {
                                #checks
                                self.#f_ident = Some(v);
                                Ok(self)
                            }
                        );
                    } else {
                        sets = quote!(
                            #sets

                            #[doc = #sets_doc_string]
                            pub fn #set_ident(&mut self, v: #ty) -> &mut Self {
                                self.#f_ident = Some(v);
                                self
                            }
                        );
                    }

                    /* RESET */
                    let reset_ident = format_ident!("reset_{}", f_ident);
                    let reset_doc_string = format!(" Empties the `{}` field.", f_ident);
                    sets = quote!(
                        #sets

                        #[doc = #reset_doc_string]
                        pub fn #reset_ident(&mut self) -> &mut Self {
                            self.#f_ident = None;
                            self
                        }
                    );
                }
                Field::Vec(d) => {
                    let child = f.child().ok_or_else(|| {
                        syn::Error::new_spanned(&d.ty, "Vec without a child type")
                    })?;
                    let ty = &child.data().ty;
                    let gets_doc_string = format!(" Gets the elements in the `{}` field.", f_ident);
                    gets = quote!(
                        #gets

                        #[doc = #gets_doc_string]
                        ///
                        #[doc = #field_summary]
                        pub fn #f_ident(&self) -> &[#ty] {
                            &self.#f_ident
                        }
                    );
                }
                _ => { /* Required fields are public */ }
            } // End of match
        } // end of fields.iter()

        Ok(quote!(
            #gets

            #sets
        ))
    }

    /// Generates `SCHEDULE_DISPLAY_NAMES`, `schedule_fields()` and
    /// `set_schedule_field()`
    pub fn gen_schedule_fields(&self) -> syn::Result<TokenStream2> {
        let mut idents = Vec::new();
        let mut display_names = Vec::new();
        for f in self.fields.iter() {
            if let Some(display) = &f.data().attributes.schedule {
                idents.push(Self::field_ident(f)?);
                display_names.push(display.clone());
            }
        }

        let (fields_body, setter_body) = if idents.is_empty() {
            (
                quote!(Vec::new()),
                quote!(
                    let _ = (display_name, schedule);
                    false
                ),
            )
        } else {
            (
                quote!(
                    let mut ret = Vec::new();
                    #(
                        if let Some(s) = &self.#idents {
                            ret.push((#display_names, s.as_str()));
                        }
                    )*
                    ret
                ),
                quote!(
                    #(
                        if display_name == #display_names {
                            self.#idents = schedule;
                            return true;
                        }
                    )*
                    false
                ),
            )
        };

        Ok(quote!(
            /// The display names of the schedules this kind of object can point to
            pub const SCHEDULE_DISPLAY_NAMES: &'static [&'static str] = &[#(#display_names),*];

            /// Returns the `(display name, schedule name)` pairs of the
            /// schedules this object points to
            pub fn schedule_fields(&self) -> Vec<(&'static str, &str)> {
                #fields_body
            }

            /// Points the schedule field registered with `display_name` to
            /// `schedule` (or empties it). Returns `false` if there is no such field.
            ///
            /// This does not check the schedule against the schedule type
            /// registry, the `Model` does.
            pub fn set_schedule_field(&mut self, display_name: &str, schedule: Option<String>) -> bool {
                #setter_body
            }
        ))
    }
}
