mod association;
pub(crate) use association::Association;

mod column;
pub(crate) use column::Column;

mod error;
pub(crate) use error::ErrorSet;

mod model;
pub(crate) use model::Model;

mod model_attr;
pub(crate) use model_attr::ModelAttr;
