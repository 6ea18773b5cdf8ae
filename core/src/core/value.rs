// switchcraft/src/core/value.rs

//! Defines `Value`, the default comparison type for `Switch` and `Case`.
//!
//! Equality is strict: variants never coerce into one another, `Null` and
//! `Undefined` are distinct, numbers follow IEEE-754 (`NaN` is unequal to
//! itself, `+0 == -0`), and `Ref` values are equal only when they point at
//! the same allocation.
//!
//! Integers are kept exact in `Int` rather than rounded through `f64`. An
//! `Int` equals a `Number` only when the float holds exactly that integer.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A dynamically-typed value that a `Switch` can match against its `Case` nodes.
#[derive(Clone, Default)]
pub enum Value {
  /// Absence of a value. Distinct from `Null`.
  #[default]
  Undefined,
  Null,
  Bool(bool),
  Number(f64),
  /// An integer converted from any Rust integer type, stored without rounding.
  Int(i128),
  String(Arc<str>),
  /// A shared object, compared by identity only.
  Ref(Arc<dyn Any + Send + Sync>),
}

impl Value {
  /// Wraps an arbitrary object so it can be matched by identity.
  pub fn object<T: Any + Send + Sync>(obj: T) -> Self {
    Value::Ref(Arc::new(obj))
  }

}

fn int_eq_float(i: i128, f: f64) -> bool {
  // Any integral f64 below 2^127 converts to i128 exactly; larger ones saturate
  // past every value an integer conversion can produce.
  f.fract() == 0.0 && f as i128 == i
}

impl PartialEq for Value {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Value::Undefined, Value::Undefined) => true,
      (Value::Null, Value::Null) => true,
      (Value::Bool(a), Value::Bool(b)) => a == b,
      // f64 equality already gives NaN != NaN and 0.0 == -0.0
      (Value::Number(a), Value::Number(b)) => a == b,
      (Value::Int(a), Value::Int(b)) => a == b,
      (Value::Int(i), Value::Number(f)) | (Value::Number(f), Value::Int(i)) => int_eq_float(*i, *f),
      (Value::String(a), Value::String(b)) => a == b,
      (Value::Ref(a), Value::Ref(b)) => Arc::ptr_eq(a, b),
      _ => false,
    }
  }
}

impl fmt::Debug for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Undefined => f.write_str("Undefined"),
      Value::Null => f.write_str("Null"),
      Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
      Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
      Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
      Value::String(s) => f.debug_tuple("String").field(s).finish(),
      Value::Ref(r) => write!(f, "Ref({:p})", Arc::as_ptr(r)),
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Undefined => f.write_str("undefined"),
      Value::Null => f.write_str("null"),
      Value::Bool(b) => write!(f, "{}", b),
      Value::Number(n) => write!(f, "{}", n),
      Value::Int(n) => write!(f, "{}", n),
      Value::String(s) => write!(f, "{:?}", s),
      Value::Ref(r) => write!(f, "<ref {:p}>", Arc::as_ptr(r)),
    }
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Value::Bool(b)
  }
}

impl From<f64> for Value {
  fn from(n: f64) -> Self {
    Value::Number(n)
  }
}

impl From<f32> for Value {
  fn from(n: f32) -> Self {
    Value::Number(f64::from(n))
  }
}

macro_rules! value_from_int {
  ($($t:ty),*) => {
    $(
      impl From<$t> for Value {
        fn from(n: $t) -> Self {
          Value::Int(i128::from(n))
        }
      }
    )*
  };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<isize> for Value {
  fn from(n: isize) -> Self {
    Value::Int(n as i128)
  }
}

impl From<usize> for Value {
  fn from(n: usize) -> Self {
    Value::Int(n as i128)
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Value::String(Arc::from(s))
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Value::String(Arc::from(s))
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(opt: Option<T>) -> Self {
    opt.map_or(Value::Null, Into::into)
  }
}
