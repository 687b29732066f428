use serde_json::Map;
use serde_json::Value;

/// A read-only view of a JSON value.
///
/// [`ValueView::Overlay`] presents an object with some key paths hidden
/// without copying it, so that a validator composed with others only sees
/// the keys it is responsible for.
#[derive(Clone, Debug)]
pub enum ValueView<'v> {
    Overlay(OverlayView<'v>),
    Value(&'v Value),
}
impl<'v> ValueView<'v> {
    /// The underlying value when nothing below it is hidden.
    pub fn as_value(&self) -> Option<&'v Value> {
        match self {
            Self::Overlay(_) => None,
            Self::Value(value) => Some(*value),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Self::Overlay(overlay) => overlay.contains_key(key),
            Self::Value(value) => value.get(key).is_some(),
        }
    }

    pub fn get(&self, key: &str) -> Option<ValueView<'v>> {
        match self {
            Self::Overlay(overlay) => overlay.get(key),
            Self::Value(value) => {
                let value: &'v Value = *value;
                value.get(key).map(ValueView::Value)
            },
        }
    }

    /// A view of the same value with `path` hidden. Hiding anything below
    /// a non-object is a no-op.
    pub fn hiding(self, path: &[String]) -> ValueView<'v> {
        if path.is_empty() {
            return self;
        }
        match self {
            Self::Overlay(mut overlay) => {
                overlay.hidden.push(path.to_vec());
                Self::Overlay(overlay)
            },
            Self::Value(Value::Object(map)) => Self::Overlay(OverlayView {
                base: map,
                hidden: vec![path.to_vec()],
            }),
            other => other,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    pub fn is_object(&self) -> bool {
        match self {
            Self::Overlay(_) => true,
            Self::Value(value) => value.is_object(),
        }
    }

    /// Visible keys, in the underlying object's order. Non-objects have none.
    pub fn keys(&self) -> Vec<&'v str> {
        match self {
            Self::Overlay(overlay) => overlay.keys().collect(),
            Self::Value(value) => {
                let value: &'v Value = *value;
                match value {
                    Value::Object(map) => map.keys().map(String::as_str).collect(),
                    _ => vec![],
                }
            },
        }
    }

    /// Follow `path` through visible keys.
    pub fn lookup(&self, path: &[String]) -> Option<ValueView<'v>> {
        let mut current = self.clone();
        for key in path {
            current = current.get(key)?;
        }
        Some(current)
    }

    /// Materialize the visible part of the view.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Overlay(overlay) => overlay.to_value(),
            Self::Value(value) => (*value).clone(),
        }
    }
}

/// An object with a set of key paths hidden. Lookups delegate to the
/// underlying object.
#[derive(Clone, Debug)]
pub struct OverlayView<'v> {
    base: &'v Map<String, Value>,
    hidden: Vec<Vec<String>>,
}
impl<'v> OverlayView<'v> {
    pub fn new(base: &'v Map<String, Value>, hidden: Vec<Vec<String>>) -> Self {
        Self { base, hidden }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.base.contains_key(key) && !self.is_hidden(key)
    }

    pub fn get(&self, key: &str) -> Option<ValueView<'v>> {
        if self.is_hidden(key) {
            return None;
        }
        let base: &'v Map<String, Value> = self.base;
        let value = base.get(key)?;
        let nested_hidden: Vec<Vec<String>> = self.hidden.iter()
            .filter(|path| path.len() > 1 && path[0] == key)
            .map(|path| path[1..].to_vec())
            .collect();

        Some(match value {
            Value::Object(map) if !nested_hidden.is_empty() =>
                ValueView::Overlay(OverlayView::new(map, nested_hidden)),
            value => ValueView::Value(value),
        })
    }

    pub fn hidden_paths(&self) -> &[Vec<String>] {
        self.hidden.as_slice()
    }

    fn is_hidden(&self, key: &str) -> bool {
        self.hidden.iter().any(|path| path.len() == 1 && path[0] == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'v str> + '_ {
        let base: &'v Map<String, Value> = self.base;
        base.keys()
            .map(String::as_str)
            .filter(|key| !self.is_hidden(key))
    }

    pub fn to_value(&self) -> Value {
        let mut visible = Map::new();
        for key in self.keys() {
            if let Some(view) = self.get(key) {
                visible.insert(key.to_string(), view.to_value());
            }
        }
        Value::Object(visible)
    }
}
