use std::collections::HashMap;

/// Named string-slot storage the resolver reads and writes face stacks through.
///
/// Injected rather than global so resolvers and compositors can be driven
/// against any backing store.
pub trait ValueStore {
    fn string_value(&self, id: &str) -> Option<String>;
    fn set_string_value(&mut self, id: &str, value: String);
}

impl<S: ValueStore + ?Sized> ValueStore for &mut S {
    #[inline]
    fn string_value(&self, id: &str) -> Option<String> {
        (**self).string_value(id)
    }

    #[inline]
    fn set_string_value(&mut self, id: &str, value: String) {
        (**self).set_string_value(id, value);
    }
}

/// A single stored value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Str(String),
    Number(f64),
}

/// In-memory control model: boolean, string and number values keyed by id.
///
/// Typed getters return `None` when the slot is missing or holds another type.
#[derive(Debug, Clone, Default)]
pub struct Model {
    values: HashMap<String, Value>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn bool_value(&self, id: &str) -> Option<bool> {
        match self.values.get(id) {
            Some(Value::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn bool_value_or(&self, id: &str, default: bool) -> bool {
        self.bool_value(id).unwrap_or(default)
    }

    pub fn set_bool_value(&mut self, id: &str, value: bool) {
        self.values.insert(id.to_string(), Value::Bool(value));
    }

    pub fn number_value(&self, id: &str) -> Option<f64> {
        match self.values.get(id) {
            Some(Value::Number(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn set_number_value(&mut self, id: &str, value: f64) {
        self.values.insert(id.to_string(), Value::Number(value));
    }

    /// Removes a slot of any type.
    pub fn clear(&mut self, id: &str) -> Option<Value> {
        self.values.remove(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValueStore for Model {
    fn string_value(&self, id: &str) -> Option<String> {
        match self.values.get(id) {
            Some(Value::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn set_string_value(&mut self, id: &str, value: String) {
        self.values.insert(id.to_string(), Value::Str(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_slots() {
        let mut m = Model::new();
        m.set_bool_value("show_grid", true);
        m.set_number_value("scale", 2.5);
        m.set_string_value("top", "[]".to_string());

        assert_eq!(m.bool_value("show_grid"), Some(true));
        assert_eq!(m.number_value("scale"), Some(2.5));
        assert_eq!(m.string_value("top").as_deref(), Some("[]"));
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn wrong_type_reads_as_missing() {
        let mut m = Model::new();
        m.set_number_value("top", 1.0);
        assert_eq!(m.string_value("top"), None);
        assert_eq!(m.bool_value("top"), None);
        assert!(m.bool_value_or("top", true));
    }

    #[test]
    fn clear_removes_slot() {
        let mut m = Model::new();
        m.set_string_value("top", "x".to_string());
        assert_eq!(m.clear("top"), Some(Value::Str("x".to_string())));
        assert!(m.is_empty());
    }

    #[test]
    fn mut_ref_is_a_store() {
        fn write(mut store: impl ValueStore) {
            store.set_string_value("k", "v".to_string());
        }
        let mut m = Model::new();
        write(&mut m);
        assert_eq!(m.string_value("k").as_deref(), Some("v"));
    }
}
