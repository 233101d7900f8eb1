//! The walkable value model.

use std::fmt;

use crate::producer::Producer;
use crate::stream::Stream;
use crate::walkable::IntoValues;

/// The shape of a [`Value`], which decides how the walker treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A string. Terminal.
    String,
    /// Named fields in declaration order.
    Record,
    /// An optional indirection to another value.
    Reference,
    /// Ordered, index-addressable elements.
    Sequence,
    /// Key/value entries with unique keys.
    Mapping,
    /// Values delivered over time until the sender closes the stream.
    Stream,
    /// A zero-argument callable returning values.
    Producer,
    /// Anything else. Ignored by the walker.
    Other,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::String => "string",
            Kind::Record => "record",
            Kind::Reference => "reference",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Stream => "stream",
            Kind::Producer => "producer",
            Kind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A value the walker can traverse.
///
/// Build values directly, with the constructor helpers below, or through
/// [`Walkable::to_value`](crate::Walkable::to_value).
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// A string leaf.
    String(String),
    /// `(field name, value)` pairs in declaration order.
    Record(Vec<(String, Value)>),
    /// `None` is an absent reference.
    Reference(Option<Box<Value>>),
    /// Elements in index order.
    Sequence(Vec<Value>),
    /// `(key, value)` entries. Only values are walked; order carries no meaning.
    Mapping(Vec<(Value, Value)>),
    /// A blocking stream of values.
    Stream(Stream),
    /// A callable producing values on demand.
    Producer(Producer),
    /// A value with nothing to discover.
    #[default]
    Other,
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Record(_) => Kind::Record,
            Value::Reference(_) => Kind::Reference,
            Value::Sequence(_) => Kind::Sequence,
            Value::Mapping(_) => Kind::Mapping,
            Value::Stream(_) => Kind::Stream,
            Value::Producer(_) => Kind::Producer,
            Value::Other => Kind::Other,
        }
    }

    /// Creates a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Creates a record from `(name, value)` pairs, keeping their order.
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Creates a present reference to `value`.
    pub fn reference(value: Value) -> Self {
        Value::Reference(Some(Box::new(value)))
    }

    /// Creates an absent reference.
    pub fn null() -> Self {
        Value::Reference(None)
    }

    /// Creates a sequence.
    pub fn sequence(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Sequence(items.into_iter().collect())
    }

    /// Creates a mapping from `(key, value)` entries.
    pub fn mapping(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Mapping(entries.into_iter().collect())
    }

    /// Wraps a callable whose results are walked in return-position order.
    pub fn producer<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoValues,
    {
        Value::Producer(Producer::new(f))
    }

    /// Returns the string if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for [`Kind::Other`].
    pub fn is_other(&self) -> bool {
        matches!(self, Value::Other)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Stream> for Value {
    fn from(stream: Stream) -> Self {
        Value::Stream(stream)
    }
}

impl From<Producer> for Value {
    fn from(producer: Producer) -> Self {
        Value::Producer(producer)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Reference(value.map(|v| Box::new(v.into())))
    }
}
