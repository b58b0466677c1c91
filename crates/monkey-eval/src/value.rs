//! Runtime values.
//!
//! A closed set of variants, matched exhaustively by the evaluator rather
//! than dispatched virtually (see module docs). Composite values (`Array`,
//! `Hash`, `Function`) wrap their payload in an [`Rc`] so that binding a
//! value to a new name, passing it as an argument, or capturing it in a
//! closure is a cheap pointer copy rather than a deep clone.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use monkey_par::ast::FunctionLiteral;

use crate::environment::EnvRef;

pub type BuiltinFn = fn(&[Value]) -> Value;

/// A runtime value produced by evaluating an AST node.
///
/// `ReturnValue` and `Error` are control-flow wrappers rather than
/// user-facing data: `ReturnValue` is unwrapped exactly once, at the
/// boundary of the function or program that produced it (see
/// `crate::evaluator`), and `Error` short-circuits every other evaluation
/// step it is threaded through.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Null,
    Array(Rc<Vec<Value>>),
    Hash(Rc<IndexMap<HashKey, (Value, Value)>>),
    Function(Rc<FunctionLiteral>, EnvRef),
    Builtin(BuiltinFn),
    ReturnValue(Box<Value>),
    Error(String),
}

impl Value {
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);

    pub fn boolean(value: bool) -> Value {
        if value {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    pub fn string(text: impl Into<Rc<str>>) -> Value {
        Value::String(text.into())
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// `false` and `null` are falsy; every other value, including `0` and
    /// empty strings/arrays/hashes, is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// The `M`-prefixed type name used in error messages (spec surface,
    /// not derived from `Debug`).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "MInteger",
            Value::Boolean(_) => "MBoolean",
            Value::String(_) => "MString",
            Value::Null => "MNull",
            Value::Array(_) => "MArray",
            Value::Hash(_) => "MHash",
            Value::Function(..) => "MFunction",
            Value::Builtin(_) => "MBuiltinFunction",
            Value::ReturnValue(_) => "MReturnValue",
            Value::Error(_) => "MError",
        }
    }

    /// The key this value would occupy in a hash, or `None` if its type
    /// cannot be used as a hash key (only integers, booleans, and strings
    /// can).
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey {
                kind: HashKeyKind::Integer,
                hash: *n as u64,
            }),
            Value::Boolean(b) => Some(HashKey {
                kind: HashKeyKind::Boolean,
                hash: if *b { 1 } else { 0 },
            }),
            Value::String(s) => Some(HashKey {
                kind: HashKeyKind::String,
                hash: fnv1a(s.as_bytes()),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Null => write!(f, "null"),
            Value::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
            Value::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.values().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Function(function, _env) => {
                write!(f, "fn(")?;
                for (i, param) in function.parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", param.name.as_str())?;
                }
                write!(f, ") {{\n\t{}\n}}", function.body)
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::ReturnValue(inner) => write!(f, "{inner}"),
            Value::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

/// The category of a hashable value: distinguishes `1` from `true` even if
/// their hashes happen to collide numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKeyKind {
    Integer,
    Boolean,
    String,
}

/// `(type_tag, hash)`, used to index [`Value::Hash`] so that only integers,
/// booleans, and strings are legal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: HashKeyKind,
    pub hash: u64,
}

/// FNV-1a over raw bytes; used for string hash keys.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    let mut hash = OFFSET_BASIS;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
