use ormlet_core::stmt::Value;

/// Collects the values referenced by placeholders, in placeholder order.
pub trait Params {
    fn push(&mut self, param: &Value);
}

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) {
        Vec::push(self, value.clone());
    }
}
