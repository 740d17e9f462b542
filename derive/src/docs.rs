use syn::{Lit, Meta, MetaNameValue};

/// Collects the `///` lines of an item, one per line, without
/// the leading space.
pub fn get_docs(attrs: &[syn::Attribute]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for at in attrs {
        if !at.path().is_ident("doc") {
            continue;
        }
        if let Meta::NameValue(MetaNameValue {
            value: syn::Expr::Lit(v),
            ..
        }) = &at.meta
        {
            if let Lit::Str(token) = &v.lit {
                let doc = token.value();
                let doc = doc.strip_prefix(' ').unwrap_or(&doc).to_string();
                lines.push(doc);
            }
        }
    }

    lines.join("\n")
}

/// The first paragraph of some docs, used for the docstrings of the
/// generated accessors.
pub fn summary(docs: &str) -> String {
    docs.split("\n\n")
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}
