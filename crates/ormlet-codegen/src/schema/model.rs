use super::{Association, Column, ErrorSet, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Class name, used to resolve association targets at runtime
    pub(crate) name: String,

    /// Model visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// The field holding the attribute store
    pub(crate) store: syn::Ident,

    /// Optional table to map the model to
    pub(crate) table: Option<syn::LitStr>,

    pub(crate) primary_key: Option<syn::LitStr>,

    pub(crate) columns: Vec<Column>,

    pub(crate) associations: Vec<Association>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut model_attr = ModelAttr::default();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        let mut fields = node.named.iter();
        let store = match (fields.next(), fields.next()) {
            (Some(field), None) => field.ident.clone(),
            _ => None,
        };

        let Some(store) = store else {
            let mut err = syn::Error::new_spanned(
                &ast.fields,
                "model must have exactly one field, holding its `AttributeStore`",
            );

            if let Some(attr_err) = errs.collect() {
                err.combine(attr_err);
            }

            return Err(err);
        };

        for association in &model_attr.associations {
            if model_attr
                .columns
                .iter()
                .any(|column| &column.ident == association.name())
            {
                errs.push(syn::Error::new_spanned(
                    association.name(),
                    format!(
                        "association `{}` has the same name as a column",
                        association.name()
                    ),
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            name: ast.ident.to_string(),
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            store,
            table: model_attr.table,
            primary_key: model_attr.primary_key,
            columns: model_attr.columns,
            associations: model_attr.associations,
        })
    }

    pub(crate) fn primary_key(&self) -> String {
        self.primary_key
            .as_ref()
            .map(|lit| lit.value())
            .unwrap_or_else(|| "id".to_string())
    }
}
