use crate::{schema::ModelSchema, ModelType};

use ormlet_core::{Error, Result};

use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Finalized model types, keyed by class name.
#[derive(Debug, Default)]
pub(super) struct ModelRegistry {
    models: RwLock<IndexMap<&'static str, Registered>>,
}

#[derive(Debug, Clone)]
pub(super) struct Registered {
    pub(super) ty: ModelType,
    pub(super) schema: Arc<ModelSchema>,
}

impl ModelRegistry {
    /// Registering the same type again is a no-op.
    pub(super) fn insert(&self, ty: ModelType, schema: Arc<ModelSchema>) -> Result<()> {
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = models.get(ty.name) {
            if existing.ty == ty {
                return Ok(());
            }

            return Err(Error::configuration(format!(
                "another model is already registered as `{}`",
                ty.name
            )));
        }

        models.insert(ty.name, Registered { ty, schema });
        Ok(())
    }

    pub(super) fn get(&self, name: &str) -> Option<Registered> {
        self.models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Like [`get`](Self::get), but a missing entry is a configuration error.
    pub(super) fn resolve(&self, name: &str) -> Result<Registered> {
        self.get(name)
            .ok_or_else(|| Error::configuration(format!("model `{name}` is not registered")))
    }
}
