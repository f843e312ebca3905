use super::{Association, Column, ErrorSet};

use syn::{punctuated::Punctuated, Token};

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional database table name to map the model to
    pub(crate) table: Option<syn::LitStr>,

    /// Primary key column, when not `id`
    pub(crate) primary_key: Option<syn::LitStr>,

    /// Columns with typed accessors, in declaration order
    pub(crate) columns: Vec<Column>,

    pub(crate) associations: Vec<Association>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                    continue;
                }

                match name_value(attr, "table") {
                    Ok(lit) => self.table = Some(lit),
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("primary_key") {
                if self.primary_key.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate `primary_key` attribute",
                    ));
                    continue;
                }

                match name_value(attr, "primary_key") {
                    Ok(lit) => self.primary_key = Some(lit),
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("column") {
                match attr.parse_args_with(Punctuated::<Column, Token![,]>::parse_terminated) {
                    Ok(columns) => {
                        for column in columns {
                            if self.columns.iter().any(|c| c.ident == column.ident) {
                                errs.push(syn::Error::new_spanned(
                                    &column.ident,
                                    format!("duplicate column `{}`", column.ident),
                                ));
                            } else {
                                self.columns.push(column);
                            }
                        }
                    }
                    Err(err) => errs.push(err),
                }
            } else {
                match Association::from_ast(attr) {
                    Ok(Some(association)) => {
                        if self
                            .associations
                            .iter()
                            .any(|a| a.name() == association.name())
                        {
                            errs.push(syn::Error::new_spanned(
                                association.name(),
                                format!("duplicate association `{}`", association.name()),
                            ));
                        } else {
                            self.associations.push(association);
                        }
                    }
                    Ok(None) => {}
                    Err(err) => errs.push(err),
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn name_value(attr: &syn::Attribute, name: &str) -> syn::Result<syn::LitStr> {
    let expected = || syn::Error::new_spanned(attr, format!("expected `{name} = \"...\"`"));

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(expected());
    };

    let syn::Expr::Lit(lit) = &meta.value else {
        return Err(expected());
    };

    let syn::Lit::Str(lit) = &lit.lit else {
        return Err(expected());
    };

    Ok(lit.clone())
}
