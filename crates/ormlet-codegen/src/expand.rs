mod columns;
mod model;
mod relation;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for ormlet types
    ormlet: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impl = self.expand_model_impl();
        let model_methods = self.expand_model_methods();
        let column_accessors = self.expand_column_accessors();
        let relation_accessors = self.expand_relation_accessors();
        let model_ident = &self.model.ident;

        wrap_in_const(quote! {
            #model_impl

            impl #model_ident {
                #model_methods
                #column_accessors
                #relation_accessors
            }
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        ormlet: quote!(_ormlet::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use ormlet as _ormlet;
            #code
        };
    }
}
