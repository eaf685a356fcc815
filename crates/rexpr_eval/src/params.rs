//! Parameter contexts.
//!
//! A `Params` implementation supplies named values to `Param` expressions.
//! Lookup is total: a name the context does not know resolves to `Null`.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use rexpr_value::Value;
use rustc_hash::FxHashMap;

/// Named-value lookup used during evaluation.
///
/// Implementations must be safe to share between threads evaluating the same
/// expression tree concurrently.
pub trait Params: Send + Sync {
    /// Value bound to `name`, or `Null` when unbound.
    fn get(&self, name: &str) -> Value;
}

impl<S: BuildHasher + Send + Sync> Params for HashMap<String, Value, S> {
    fn get(&self, name: &str) -> Value {
        HashMap::get(self, name).cloned().unwrap_or_default()
    }
}

impl<P: Params + ?Sized> Params for &P {
    fn get(&self, name: &str) -> Value {
        (**self).get(name)
    }
}

impl<P: Params + ?Sized> Params for Arc<P> {
    fn get(&self, name: &str) -> Value {
        (**self).get(name)
    }
}

/// Owned map-backed parameter context.
#[derive(Clone, Debug, Default)]
pub struct MapParams {
    values: FxHashMap<String, Value>,
}

impl MapParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Params for MapParams {
    fn get(&self, name: &str) -> Value {
        self.values.get(name).cloned().unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MapParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Context with no bindings: every parameter is `Null`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParams;

impl Params for NoParams {
    fn get(&self, _name: &str) -> Value {
        Value::Null
    }
}

/// Closure-backed parameter context.
///
/// ```text
/// let params = ParamFn(|name: &str| if name == "x" { Value::Int(1) } else { Value::Null });
/// ```
#[derive(Clone, Copy)]
pub struct ParamFn<F>(pub F);

impl<F> Params for ParamFn<F>
where
    F: Fn(&str) -> Value + Send + Sync,
{
    fn get(&self, name: &str) -> Value {
        (self.0)(name)
    }
}

impl<F> fmt::Debug for ParamFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ParamFn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn map_params_lookup() {
        let params = MapParams::new().with("a", 1_u64).with("b", "text");
        assert_eq!(params.get("a"), Value::UInt(1));
        assert_eq!(params.get("b"), Value::string("text"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn unbound_names_are_null() {
        let params = MapParams::new().with("a", 1_u64);
        assert_eq!(params.get("missing"), Value::Null);
        assert_eq!(params.get("A"), Value::Null);
        assert_eq!(NoParams.get("a"), Value::Null);
    }

    #[test]
    fn insert_replaces() {
        let mut params = MapParams::new();
        assert_eq!(params.insert("a", 1_i64), None);
        assert_eq!(params.insert("a", 2_i64), Some(Value::Int(1)));
        assert_eq!(params.get("a"), Value::Int(2));
    }

    #[test]
    fn collects_from_pairs() {
        let params: MapParams = [("x", Value::Bool(true)), ("y", Value::Null)]
            .into_iter()
            .collect();
        assert_eq!(params.get("x"), Value::Bool(true));
        assert_eq!(params.get("y"), Value::Null);
        assert!(!params.is_empty());
    }

    #[test]
    fn std_hash_map_is_a_context() {
        let mut map = HashMap::new();
        map.insert("n".to_owned(), Value::Float(0.5));
        assert_eq!(Params::get(&map, "n"), Value::Float(0.5));
        assert_eq!(Params::get(&map, "m"), Value::Null);
    }

    #[test]
    fn shared_and_borrowed_contexts() {
        let params = Arc::new(MapParams::new().with("k", -1_i64));
        assert_eq!(Params::get(&params, "k"), Value::Int(-1));
        let borrowed: &dyn Params = &*params;
        assert_eq!(Params::get(&borrowed, "k"), Value::Int(-1));
    }

    #[test]
    fn closure_context() {
        let params = ParamFn(|name: &str| Value::string(name.to_uppercase()));
        assert_eq!(params.get("abc"), Value::string("ABC"));
    }
}
