//! The `Walkable` capability.
//!
//! Types opt in to walking by describing themselves as a [`Value`]. Nothing is
//! discovered by introspection: a record exposes exactly the fields its
//! implementation registers, so private data stays private unless the type
//! chooses to hand it over.
//!
//! # Example
//!
//! ```rust
//! use walkabout_core::{Value, Walkable};
//!
//! struct Person {
//!     name: String,
//!     password_hash: String,
//!     profile: Profile,
//! }
//!
//! struct Profile {
//!     age: u32,
//!     city: String,
//! }
//!
//! impl Walkable for Profile {
//!     fn to_value(&self) -> Value {
//!         Value::record([("Age", self.age.to_value()), ("City", self.city.to_value())])
//!     }
//! }
//!
//! impl Walkable for Person {
//!     fn to_value(&self) -> Value {
//!         // `password_hash` is not registered, so the walker never sees it.
//!         Value::record([
//!             ("Name", self.name.to_value()),
//!             ("Profile", self.profile.to_value()),
//!         ])
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::stream::Stream;
use crate::value::Value;

/// A type that can describe itself as a walkable [`Value`].
pub trait Walkable {
    /// Converts `self` into the value the walker traverses.
    fn to_value(&self) -> Value;

    /// Borrows `self` as a value when it already is one, converting otherwise.
    fn as_value(&self) -> Cow<'_, Value> {
        Cow::Owned(self.to_value())
    }
}

impl Walkable for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn as_value(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }
}

impl Walkable for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Walkable for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Walkable for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

// Rust references and owning pointers are never null, so they are transparent.
impl<T: Walkable + ?Sized> Walkable for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn as_value(&self) -> Cow<'_, Value> {
        (**self).as_value()
    }
}

impl<T: Walkable + ?Sized> Walkable for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn as_value(&self) -> Cow<'_, Value> {
        (**self).as_value()
    }
}

impl<T: Walkable + ?Sized> Walkable for Rc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn as_value(&self) -> Cow<'_, Value> {
        (**self).as_value()
    }
}

impl<T: Walkable + ?Sized> Walkable for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn as_value(&self) -> Cow<'_, Value> {
        (**self).as_value()
    }
}

impl<T: Walkable> Walkable for Option<T> {
    fn to_value(&self) -> Value {
        Value::Reference(self.as_ref().map(|v| Box::new(v.to_value())))
    }
}

impl<T: Walkable> Walkable for [T] {
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(Walkable::to_value).collect())
    }
}

impl<T: Walkable, const N: usize> Walkable for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Walkable> Walkable for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Walkable> Walkable for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(Walkable::to_value).collect())
    }
}

impl<K: Walkable, V: Walkable, S: BuildHasher> Walkable for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Mapping(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: Walkable, V: Walkable> Walkable for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Mapping(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }
}

impl<T: Walkable + Send + 'static> Walkable for Receiver<T> {
    fn to_value(&self) -> Value {
        Value::Stream(Stream::from_receiver(self.clone()))
    }
}

impl Walkable for Stream {
    fn to_value(&self) -> Value {
        Value::Stream(self.clone())
    }
}

impl Walkable for serde_json::Value {
    fn to_value(&self) -> Value {
        match self {
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.iter().map(Walkable::to_value).collect())
            }
            serde_json::Value::Object(obj) => Value::Mapping(
                obj.iter()
                    .map(|(k, v)| (Value::String(k.clone()), v.to_value()))
                    .collect(),
            ),
            serde_json::Value::Null
            | serde_json::Value::Bool(_)
            | serde_json::Value::Number(_) => Value::Other,
        }
    }
}

macro_rules! impl_walkable_other {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walkable for $ty {
                fn to_value(&self) -> Value {
                    Value::Other
                }
            }
        )*
    };
}

impl_walkable_other!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

/// The return type of a producer, split into values in return-position order.
pub trait IntoValues {
    /// Converts the returned data into the values to walk.
    fn into_values(self) -> Vec<Value>;
}

impl IntoValues for () {
    fn into_values(self) -> Vec<Value> {
        Vec::new()
    }
}

impl IntoValues for Value {
    fn into_values(self) -> Vec<Value> {
        vec![self]
    }
}

impl<T: Walkable> IntoValues for Vec<T> {
    fn into_values(self) -> Vec<Value> {
        self.iter().map(Walkable::to_value).collect()
    }
}

macro_rules! impl_into_values_tuple {
    ($($name:ident),+) => {
        impl<$($name: Walkable),+> IntoValues for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_values(self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.to_value()),+]
            }
        }
    };
}

impl_into_values_tuple!(A);
impl_into_values_tuple!(A, B);
impl_into_values_tuple!(A, B, C);
impl_into_values_tuple!(A, B, C, D);
impl_into_values_tuple!(A, B, C, D, E);
impl_into_values_tuple!(A, B, C, D, E, F);
impl_into_values_tuple!(A, B, C, D, E, F, G);
impl_into_values_tuple!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;

    #[test]
    fn test_strings_are_string_kind() {
        assert_eq!("hello".to_value().kind(), Kind::String);
        assert_eq!("hello".to_string().to_value().kind(), Kind::String);
        assert_eq!(Cow::Borrowed("hello").to_value().kind(), Kind::String);
    }

    #[test]
    fn test_scalars_are_other() {
        assert!(42_i64.to_value().is_other());
        assert!(3.5_f64.to_value().is_other());
        assert!(true.to_value().is_other());
        assert!('c'.to_value().is_other());
    }

    #[test]
    fn test_pointers_are_transparent() {
        let boxed: Box<str> = "boxed".into();
        let shared = Arc::new("shared".to_string());
        let counted = Rc::new("counted".to_string());

        assert_eq!(boxed.to_value().as_str(), Some("boxed"));
        assert_eq!(shared.to_value().as_str(), Some("shared"));
        assert_eq!(counted.to_value().as_str(), Some("counted"));
    }

    #[test]
    fn test_values_are_borrowed_not_cloned() {
        let value = Value::sequence(vec![Value::from("a"), Value::from("b")]);
        let boxed = Box::new(value.clone());
        let shared = Arc::new(value.clone());

        assert!(matches!(value.as_value(), Cow::Borrowed(v) if std::ptr::eq(v, &value)));
        assert!(matches!((&value).as_value(), Cow::Borrowed(_)));
        assert!(matches!(boxed.as_value(), Cow::Borrowed(_)));
        assert!(matches!(shared.as_value(), Cow::Borrowed(_)));
        assert!(matches!("a".to_string().as_value(), Cow::Owned(Value::String(_))));
    }

    #[test]
    fn test_option_is_reference() {
        assert!(matches!(Some("x").to_value(), Value::Reference(Some(_))));
        assert!(matches!(None::<String>.to_value(), Value::Reference(None)));
    }

    #[test]
    fn test_collections() {
        assert_eq!(vec!["a", "b"].to_value().kind(), Kind::Sequence);
        assert_eq!(["a", "b"].to_value().kind(), Kind::Sequence);
        assert_eq!(VecDeque::from(vec![1, 2]).to_value().kind(), Kind::Sequence);

        let mut map = HashMap::new();
        map.insert("k".to_string(), "v".to_string());
        assert_eq!(map.to_value().kind(), Kind::Mapping);

        let tree: BTreeMap<u32, &str> = BTreeMap::from([(1, "one")]);
        assert_eq!(tree.to_value().kind(), Kind::Mapping);
    }

    #[test]
    fn test_json_value() {
        let json = serde_json::json!({
            "name": "test",
            "tags": ["a", "b"],
            "count": 42,
            "missing": null
        });

        let Value::Mapping(entries) = json.to_value() else {
            panic!("Expected a mapping");
        };
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_into_values_for_tuples_and_vecs() {
        assert_eq!(("a", "b").into_values().len(), 2);
        assert_eq!(("a",).into_values().len(), 1);
        assert_eq!(vec!["a", "b", "c"].into_values().len(), 3);
        assert!(().into_values().is_empty());
        assert_eq!(Value::from("x").into_values().len(), 1);
    }
}
