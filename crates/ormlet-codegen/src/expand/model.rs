use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let ormlet = &self.ormlet;
        let model_ident = &self.model.ident;
        let store = &self.model.store;
        let name = &self.model.name;
        let primary_key = self.model.primary_key();
        let accessors = self.model.columns.iter().map(|column| column.name());
        let declarations = self.expand_declarations();

        let table_name = match &self.model.table {
            Some(table) => quote!(#ormlet::Option::Some(#table)),
            None => quote!(#ormlet::Option::None),
        };

        quote! {
            impl #ormlet::Model for #model_ident {
                const NAME: &'static str = #name;
                const TABLE_NAME: #ormlet::Option<&'static str> = #table_name;
                const PRIMARY_KEY: &'static str = #primary_key;
                const ACCESSORS: &'static [&'static str] = &[ #( #accessors ),* ];

                fn from_attributes(attributes: #ormlet::AttributeStore) -> Self {
                    Self { #store: attributes }
                }

                fn attributes(&self) -> &#ormlet::AttributeStore {
                    &self.#store
                }

                fn attributes_mut(&mut self) -> &mut #ormlet::AttributeStore {
                    &mut self.#store
                }

                fn declare(associations: &mut #ormlet::Associations) {
                    let _ = &associations;
                    #declarations
                }

                fn associations() -> &'static #ormlet::Associations {
                    static ASSOCIATIONS: #ormlet::OnceLock<#ormlet::Associations> = #ormlet::OnceLock::new();

                    ASSOCIATIONS.get_or_init(|| {
                        let mut associations = #ormlet::Associations::new(
                            <Self as #ormlet::Model>::NAME,
                            <Self as #ormlet::Model>::PRIMARY_KEY,
                        );
                        <Self as #ormlet::Model>::declare(&mut associations);
                        associations
                    })
                }
            }
        }
    }

    pub(super) fn expand_model_methods(&self) -> TokenStream {
        let ormlet = &self.ormlet;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let store = &self.model.store;

        quote! {
            #vis async fn all(db: &#ormlet::Db) -> #ormlet::Result<#ormlet::Vec<#model_ident>> {
                db.all::<#model_ident>().await
            }

            #vis async fn find(
                db: &#ormlet::Db,
                key: impl Into<#ormlet::Value>,
            ) -> #ormlet::Result<#ormlet::Option<#model_ident>> {
                db.find::<#model_ident>(key).await
            }

            #vis async fn filter(
                db: &#ormlet::Db,
                predicates: #ormlet::Row,
            ) -> #ormlet::Result<#ormlet::Vec<#model_ident>> {
                db.filter::<#model_ident>(predicates).await
            }

            #vis async fn build(
                db: &#ormlet::Db,
                params: #ormlet::Row,
            ) -> #ormlet::Result<#model_ident> {
                db.build::<#model_ident>(params).await
            }

            #vis async fn save(&mut self, db: &#ormlet::Db) -> #ormlet::Result<()> {
                db.save(self).await
            }

            #vis async fn delete(self, db: &#ormlet::Db) -> #ormlet::Result<()> {
                db.delete(self).await
            }

            #vis fn attribute(&self, column: &str) -> #ormlet::Option<&#ormlet::Value> {
                self.#store.get(column)
            }

            #vis async fn set_attribute(
                &mut self,
                db: &#ormlet::Db,
                column: &str,
                value: impl Into<#ormlet::Value>,
            ) -> #ormlet::Result<()> {
                db.assign(self, column, value).await
            }
        }
    }
}
