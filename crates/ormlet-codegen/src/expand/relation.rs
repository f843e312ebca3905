use super::Expand;
use crate::schema::Association;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Model::declare`, one statement per association attribute.
    pub(super) fn expand_declarations(&self) -> TokenStream {
        let ormlet = &self.ormlet;

        self.model
            .associations
            .iter()
            .map(|association| match association {
                Association::BelongsTo(relation) | Association::HasMany(relation) => {
                    let method = match association {
                        Association::BelongsTo(_) => quote!(belongs_to),
                        _ => quote!(has_many),
                    };
                    let name = relation.name.to_string();
                    let foreign_key = relation.foreign_key.iter();
                    let primary_key = relation.primary_key.iter();
                    let class_name = relation.class_name.iter();

                    quote! {
                        associations.#method(
                            #name,
                            #ormlet::Options::new()
                                #( .foreign_key(#foreign_key) )*
                                #( .primary_key(#primary_key) )*
                                #( .class_name(#class_name) )*,
                        );
                    }
                }
                Association::HasOneThrough(through) => {
                    let name = through.name.to_string();
                    let via = &through.through;
                    let source = &through.source;

                    quote! {
                        associations.has_one_through(#name, #via, #source);
                    }
                }
            })
            .collect()
    }

    pub(super) fn expand_relation_accessors(&self) -> TokenStream {
        let ormlet = &self.ormlet;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;

        self.model
            .associations
            .iter()
            .map(|association| {
                let accessor = association.name();
                let name = accessor.to_string();

                match association {
                    Association::BelongsTo(relation) => {
                        let target = &relation.target;
                        quote! {
                            #vis async fn #accessor(
                                &self,
                                db: &#ormlet::Db,
                            ) -> #ormlet::Result<#ormlet::Option<#target>> {
                                db.belongs_to::<#model_ident, #target>(self, #name).await
                            }
                        }
                    }
                    Association::HasMany(relation) => {
                        let target = &relation.target;
                        quote! {
                            #vis async fn #accessor(
                                &self,
                                db: &#ormlet::Db,
                            ) -> #ormlet::Result<#ormlet::Vec<#target>> {
                                db.has_many::<#model_ident, #target>(self, #name).await
                            }
                        }
                    }
                    Association::HasOneThrough(through) => {
                        let target = &through.target;
                        quote! {
                            #vis async fn #accessor(
                                &self,
                                db: &#ormlet::Db,
                            ) -> #ormlet::Result<#ormlet::Option<#target>> {
                                db.has_one_through::<#model_ident, #target>(self, #name).await
                            }
                        }
                    }
                }
            })
            .collect()
    }
}
