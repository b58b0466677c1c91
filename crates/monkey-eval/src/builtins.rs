//! Built-in functions, consulted when an identifier is not found in the
//! environment chain (see `crate::evaluator::eval_identifier`).
//!
//! Grounded on `objects.py`'s `BUILTINS` table: arity and type-error
//! message wording are taken verbatim from there.

use std::rc::Rc;

use crate::value::Value;

/// Looks up a builtin by name. Returns `None` if `name` is not a builtin,
/// letting the caller fall through to `identifier not found`.
pub fn lookup(name: &str) -> Option<Value> {
    let builtin: crate::value::BuiltinFn = match name {
        "len" => len,
        "first" => first,
        "last" => last,
        "rest" => rest,
        "push" => push,
        _ => return None,
    };
    Some(Value::Builtin(builtin))
}

fn wrong_arity(got: usize, want: usize) -> Value {
    Value::error(format!("wrong number of arguments. got={got}, want={want}"))
}

fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::error(format!("argument to `len` not supported, got {}", other.type_name())),
    }
}

fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
        other => Value::error(format!("argument to `first` must be ARRAY, got {}", other.type_name())),
    }
}

fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
        other => Value::error(format!("argument to `last` must be ARRAY, got {}", other.type_name())),
    }
}

fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(elements[1..].to_vec()))
            }
        }
        other => Value::error(format!("argument to `rest` must be ARRAY, got {}", other.type_name())),
    }
}

fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut new_elements = elements.as_ref().clone();
            new_elements.push(args[1].clone());
            Value::Array(Rc::new(new_elements))
        }
        other => Value::error(format!("argument to `push` must be ARRAY, got {}", other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array(values: Vec<Value>) -> Value {
        Value::Array(Rc::new(values))
    }

    #[test]
    fn len_counts_string_bytes_and_array_elements() {
        assert!(matches!(len(&[Value::string("hello")]), Value::Integer(5)));
        assert!(matches!(len(&[array(vec![Value::Integer(1), Value::Integer(2)])]), Value::Integer(2)));
    }

    #[test]
    fn len_rejects_unsupported_types() {
        match len(&[Value::Integer(1)]) {
            Value::Error(message) => assert_eq!(message, "argument to `len` not supported, got MInteger"),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn len_rejects_wrong_arity() {
        match len(&[]) {
            Value::Error(message) => assert_eq!(message, "wrong number of arguments. got=0, want=1"),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn first_and_last_on_empty_array_are_null() {
        assert!(matches!(first(&[array(vec![])]), Value::Null));
        assert!(matches!(last(&[array(vec![])]), Value::Null));
    }

    #[test]
    fn rest_drops_the_head_element() {
        let arr = array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        match rest(&[arr]) {
            Value::Array(elements) => {
                assert_eq!(elements.len(), 2);
                assert!(matches!(elements[0], Value::Integer(2)));
            }
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn push_appends_without_mutating_the_original() {
        let original = array(vec![Value::Integer(1)]);
        let pushed = push(&[original.clone(), Value::Integer(2)]);
        match (&original, pushed) {
            (Value::Array(orig_elements), Value::Array(new_elements)) => {
                assert_eq!(orig_elements.len(), 1);
                assert_eq!(new_elements.len(), 2);
            }
            _ => panic!("expected arrays"),
        }
    }
}
