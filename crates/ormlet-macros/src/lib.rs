extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Model,
    attributes(table, primary_key, column, belongs_to, has_many, has_one_through)
)]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match ormlet_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
