use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
};

/// A column with typed accessors, written `name: Type` inside `#[column(..)]`.
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) ident: syn::Ident,
    pub(crate) ty: syn::Type,
}

impl Column {
    /// The column name as stored in the database.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    pub(crate) fn setter_ident(&self) -> syn::Ident {
        quote::format_ident!("set_{}", self.ident.unraw())
    }
}

impl Parse for Column {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident = input.parse()?;
        input.parse::<syn::Token![:]>()?;
        let ty = input.parse()?;

        Ok(Self { ident, ty })
    }
}
