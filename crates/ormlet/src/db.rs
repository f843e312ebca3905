mod associate;
mod builder;
mod persist;
mod query;
mod registry;

pub use builder::Builder;
use registry::ModelRegistry;

use crate::{
    mapper::RecordMapper,
    schema::{ModelSchema, SchemaRegistry},
    Model, ModelType, Result,
};

use ormlet_core::{driver::Driver, stmt::Value};

use std::sync::Arc;

/// Shared state between all `Db` clones.
#[derive(Debug)]
struct Shared {
    driver: Box<dyn Driver>,
    schema: SchemaRegistry,
    models: ModelRegistry,
}

/// A database handle.
///
/// Cloning is cheap; clones share the driver, the discovered schema, and the
/// table of registered model types.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    fn new(driver: Box<dyn Driver>, schema: SchemaRegistry) -> Db {
        Db {
            shared: Arc::new(Shared {
                driver,
                schema,
                models: ModelRegistry::default(),
            }),
        }
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    pub fn schema(&self) -> &SchemaRegistry {
        &self.shared.schema
    }

    /// Finalizes `M`: discovers its columns, checks its typed accessors
    /// against them, and makes it reachable from association declarations.
    pub async fn register<M: Model>(&self) -> Result<()> {
        self.register_type(M::model_type()).await
    }

    pub async fn register_type(&self, ty: ModelType) -> Result<()> {
        let schema = self.shared.schema.columns_for(&ty, self.driver()).await?;

        for accessor in ty.accessors {
            schema.check_column(accessor)?;
        }

        self.shared.models.insert(ty, schema)
    }

    /// Looks up a registered model type by class name.
    pub fn model_by_name(&self, name: &str) -> Option<ModelType> {
        self.shared.models.get(name).map(|registered| registered.ty)
    }

    /// Binds `M` to `table_name`. Must be called before `M` is first used.
    pub fn set_table_name<M: Model>(&self, table_name: impl Into<String>) {
        self.shared
            .schema
            .set_table_name(&M::model_type(), table_name);
    }

    pub fn table_name<M: Model>(&self) -> String {
        self.shared.schema.table_name_for(&M::model_type())
    }

    /// Discovered columns for `M`, running discovery on first use.
    pub async fn columns<M: Model>(&self) -> Result<Arc<ModelSchema>> {
        self.shared
            .schema
            .columns_for(&M::model_type(), self.driver())
            .await
    }

    async fn load<M: Model>(&self, (sql, args): (String, Vec<Value>)) -> Result<Vec<M>> {
        let rows = self.driver().exec(&sql, &args).await?;
        Ok(RecordMapper::hydrate_all(rows))
    }
}
