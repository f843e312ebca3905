use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_column_accessors(&self) -> TokenStream {
        let ormlet = &self.ormlet;
        let vis = &self.model.vis;
        let store = &self.model.store;

        self.model
            .columns
            .iter()
            .map(|column| {
                let getter = &column.ident;
                let setter = column.setter_ident();
                let name = column.name();
                let ty = &column.ty;

                quote! {
                    #vis fn #getter(&self) -> #ormlet::Result<#ormlet::Option<#ty>> {
                        self.#store.load::<#ty>(#name)
                    }

                    #vis fn #setter(&mut self, value: impl Into<#ty>) {
                        let value: #ty = value.into();
                        self.#store.set(#name, value);
                    }
                }
            })
            .collect()
    }
}
