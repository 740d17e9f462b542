use crate::common_path::*;

/// The helper attributes that `ObjectIO` reads from a field
#[derive(Clone, Default)]
pub struct FieldAttributes {
    /// `#[schedule("Display Name")]`: the field points to a schedule
    /// registered under this display name
    pub schedule: Option<syn::LitStr>,

    /// `#[defaults_to(expr)]`: the value returned when the field is empty
    pub defaults_to: Option<syn::Expr>,

    /// `#[minimum(expr)]`: inclusive lower bound checked by the setter
    pub minimum: Option<syn::Expr>,

    /// `#[exclusive_minimum(expr)]`: exclusive lower bound checked by the setter
    pub exclusive_minimum: Option<syn::Expr>,

    /// `#[maximum(expr)]`: inclusive upper bound checked by the setter
    pub maximum: Option<syn::Expr>,
}

impl FieldAttributes {
    pub fn new(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut ret = Self::default();
        for a in attrs {
            let path = a.path();
            if path.is_ident("schedule") {
                ret.schedule = Some(a.parse_args::<syn::LitStr>()?);
            } else if path.is_ident("defaults_to") {
                ret.defaults_to = Some(a.parse_args::<syn::Expr>()?);
            } else if path.is_ident("minimum") {
                ret.minimum = Some(a.parse_args::<syn::Expr>()?);
            } else if path.is_ident("exclusive_minimum") {
                ret.exclusive_minimum = Some(a.parse_args::<syn::Expr>()?);
            } else if path.is_ident("maximum") {
                ret.maximum = Some(a.parse_args::<syn::Expr>()?);
            }
        }
        Ok(ret)
    }

    /// Whether the setter of this field needs to check a range
    pub fn is_bounded(&self) -> bool {
        self.minimum.is_some() || self.exclusive_minimum.is_some() || self.maximum.is_some()
    }
}

#[derive(Clone)]
pub struct FieldData {
    pub ident: Option<syn::Ident>,
    pub attributes: FieldAttributes,
    pub child: Option<Box<Field>>,
    pub ty: syn::Type,
    pub docs: String,
}

#[derive(Clone)]
pub enum Field {
    Float(FieldData),
    Int(FieldData),
    Bool(FieldData),
    String(FieldData),

    Option(FieldData),
    Vec(FieldData),

    /// Enums and other structures (e.g., `Autosize`).
    Object(FieldData),
}

fn classify(path: &syn::Path, mut data: FieldData) -> Result<Field, String> {
    let ret = if path_is_float(path)? {
        Field::Float(data)
    } else if path_is_int(path)? {
        Field::Int(data)
    } else if path_is_bool(path)? {
        Field::Bool(data)
    } else if path_is_string(path)? {
        Field::String(data)
    } else if path_is_option(path)? {
        let ty = extract_type_from_path(path)?;
        data.child = Some(Box::new(Field::from_type(&ty)?));
        Field::Option(data)
    } else if path_is_vec(path)? {
        let ty = extract_type_from_path(path)?;
        data.child = Some(Box::new(Field::from_type(&ty)?));
        Field::Vec(data)
    } else {
        Field::Object(data)
    };
    Ok(ret)
}

impl Field {
    /// Creates a new Field object, with no ident and no attributes.
    ///
    /// This method is meant to be used for nested typs. E.g. the `usize` in `Vec<usize>`
    pub fn from_type(ty: &syn::Type) -> Result<Self, String> {
        let data = FieldData {
            ident: None,
            attributes: FieldAttributes::default(),
            child: None,
            ty: ty.clone(),
            docs: String::new(), // This is nested... the Docs should be in the parent
        };

        if let syn::Type::Path(p) = ty {
            classify(&p.path, data)
        } else {
            Err("Only path types (e.g., `Option<Float>`) are supported".to_string())
        }
    }

    /// Creates a new Field object based on the tokens in an actual Struct.
    pub fn new(field: &syn::Field) -> syn::Result<Self> {
        let attributes = FieldAttributes::new(&field.attrs)?;
        let data = FieldData {
            ident: field.ident.clone(),
            attributes,
            ty: field.ty.clone(),
            docs: crate::docs::get_docs(&field.attrs),
            child: None,
        };

        let ret = match &field.ty {
            syn::Type::Path(t) => {
                classify(&t.path, data).map_err(|e| syn::Error::new_spanned(&field.ty, e))?
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "Unhandled type in ObjectIO field",
                ))
            }
        };

        if ret.data().attributes.schedule.is_some() && !ret.is_optional_string() {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "#[schedule(..)] fields must be `Option<String>`",
            ));
        }
        Ok(ret)
    }

    pub fn data(&self) -> &FieldData {
        match self {
            Self::Float(d)
            | Self::Int(d)
            | Self::Bool(d)
            | Self::String(d)
            | Self::Vec(d)
            | Self::Option(d)
            | Self::Object(d) => d,
        }
    }

    /// The `Field` contained in an `Option` or a `Vec`
    pub fn child(&self) -> Option<&Field> {
        self.data().child.as_deref()
    }

    /// Can be copied out of a reference
    pub fn is_copy(&self) -> bool {
        matches!(self, Self::Float(_) | Self::Int(_) | Self::Bool(_))
    }

    pub fn is_optional_string(&self) -> bool {
        matches!(self.child(), Some(Field::String(_))) && matches!(self, Self::Option(_))
    }
}
