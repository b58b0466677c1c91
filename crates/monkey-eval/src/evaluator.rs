//! Tree-walking evaluator.
//!
//! `eval_program` and `eval_expression` walk the AST produced by
//! `monkey-par`, dispatching on node variant rather than through virtual
//! calls. There is no exception-based control flow: errors are
//! `Value::Error` values threaded through by early return, and early
//! returns from function bodies are `Value::ReturnValue` wrappers unwound
//! exactly once at a function call or program boundary (spec'd in
//! `crate::value`).

use std::rc::Rc;

use indexmap::IndexMap;
use monkey_par::ast::{self, BlockStatement, Expression, Program, Statement};

use crate::builtins;
use crate::environment::{EnvRef, Environment};
use crate::value::Value;

/// Evaluates a whole program. A top-level `return` unwraps its payload
/// here; this is the one place a `ReturnValue` is stripped rather than
/// propagated.
pub fn eval_program(program: &Program, env: &EnvRef) -> Value {
    let mut result = Value::Null;
    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Value::ReturnValue(value) => return *value,
            Value::Error(_) => return result,
            _ => {}
        }
    }
    result
}

/// Evaluates a block's statements without unwrapping `ReturnValue` or
/// stopping at anything but `Error`/`ReturnValue`, so a `return` inside
/// nested `if` blocks propagates up to the enclosing function call.
fn eval_block_statement(block: &BlockStatement, env: &EnvRef) -> Value {
    let mut result = Value::Null;
    for statement in &block.statements {
        result = eval_statement(statement, env);
        if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &EnvRef) -> Value {
    match statement {
        Statement::Let(let_stmt) => {
            let value = eval_expression(&let_stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(let_stmt.name.name, value.clone());
            value
        }
        Statement::Return(return_stmt) => {
            let value = eval_expression(&return_stmt.value, env);
            if value.is_error() {
                value
            } else {
                Value::ReturnValue(Box::new(value))
            }
        }
        Statement::Expression(expr_stmt) => eval_expression(&expr_stmt.expression, env),
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

fn eval_expression(expression: &Expression, env: &EnvRef) -> Value {
    match expression {
        Expression::Identifier(identifier) => eval_identifier(identifier.name.as_str(), env),
        Expression::IntegerLiteral(literal) => Value::Integer(literal.value),
        Expression::BooleanLiteral(literal) => Value::boolean(literal.value),
        Expression::StringLiteral(literal) => Value::string(literal.value.as_str()),
        Expression::ArrayLiteral(array) => {
            let elements = eval_expressions(&array.elements, env);
            match single_error(&elements) {
                Some(error) => error,
                None => Value::Array(Rc::new(elements)),
            }
        }
        Expression::HashLiteral(hash) => eval_hash_literal(hash, env),
        Expression::Prefix(prefix) => {
            let right = eval_expression(&prefix.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(prefix.operator.as_str(), right)
        }
        Expression::Infix(infix) => {
            let left = eval_expression(&infix.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&infix.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(infix.operator.as_str(), left, right)
        }
        Expression::If(if_expr) => eval_if_expression(if_expr, env),
        Expression::FunctionLiteral(literal) => {
            Value::Function(Rc::new(literal.clone()), Rc::clone(env))
        }
        Expression::Call(call) => eval_call_expression(call, env),
        Expression::Index(index) => eval_index_expression(index, env),
    }
}

fn eval_identifier(name: &str, env: &EnvRef) -> Value {
    if let Some(value) = env.borrow().get(monkey_util::Symbol::intern(name)) {
        return value;
    }
    builtins::lookup(name).unwrap_or_else(|| Value::error(format!("identifier not found: {name}")))
}

fn eval_expressions(expressions: &[Expression], env: &EnvRef) -> Vec<Value> {
    let mut values = Vec::with_capacity(expressions.len());
    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return vec![value];
        }
        values.push(value);
    }
    values
}

/// `eval_expressions` returns a single-element vector holding an `Error`
/// when evaluation short-circuited; this recognizes that sentinel.
fn single_error(values: &[Value]) -> Option<Value> {
    if values.len() == 1 && values[0].is_error() {
        Some(values[0].clone())
    } else {
        None
    }
}

fn eval_prefix_expression(operator: &str, right: Value) -> Value {
    match operator {
        "!" => Value::boolean(!right.is_truthy()),
        "-" => match right {
            Value::Integer(n) => Value::Integer(-n),
            other => Value::error(format!("unknown operator: -{}", other.type_name())),
        },
        _ => Value::error(format!("unknown operator: {operator}{}", right.type_name())),
    }
}

fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix_expression(operator, *l, *r),
        _ if operator == "==" => Value::boolean(values_equal(&left, &right)),
        _ if operator == "!=" => Value::boolean(!values_equal(&left, &right)),
        _ if left.type_name() != right.type_name() => Value::error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        (Value::String(l), Value::String(r)) if operator == "+" => {
            Value::string(format!("{l}{r}"))
        }
        _ => Value::error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left + right),
        "-" => Value::Integer(left - right),
        "*" => Value::Integer(left * right),
        "/" => Value::Integer(left / right),
        "<" => Value::boolean(left < right),
        ">" => Value::boolean(left > right),
        "==" => Value::boolean(left == right),
        "!=" => Value::boolean(left != right),
        _ => Value::error(format!("unknown operator: MInteger {operator} MInteger")),
    }
}

/// Value equality for `==`/`!=`: integers by magnitude, booleans and
/// strings by content, `null == null` is true. Mismatched types are
/// handled by the caller before reaching this (everything that does reach
/// here is either same-typed or one of the two sides is `Null`).
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => l == r,
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

fn eval_if_expression(if_expr: &ast::IfExpression, env: &EnvRef) -> Value {
    let condition = eval_expression(&if_expr.condition, env);
    if condition.is_error() {
        return condition;
    }
    if condition.is_truthy() {
        eval_block_statement(&if_expr.consequence, env)
    } else if let Some(alternative) = &if_expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        Value::Null
    }
}

fn eval_call_expression(call: &ast::CallExpression, env: &EnvRef) -> Value {
    let function = eval_expression(&call.function, env);
    if function.is_error() {
        return function;
    }

    let args = eval_expressions(&call.arguments, env);
    if let Some(error) = single_error(&args) {
        return error;
    }

    apply_function(function, &args)
}

fn apply_function(function: Value, args: &[Value]) -> Value {
    match function {
        Value::Function(literal, closure_env) => {
            let call_env = Environment::new_enclosed(closure_env);
            for (param, arg) in literal.parameters.iter().zip(args) {
                call_env.borrow_mut().set(param.name, arg.clone());
            }
            let evaluated = eval_block_statement(&literal.body, &call_env);
            match evaluated {
                Value::ReturnValue(value) => *value,
                other => other,
            }
        }
        Value::Builtin(builtin) => builtin(args),
        other => Value::error(format!("not a function: {}", other.type_name())),
    }
}

fn eval_index_expression(index_expr: &ast::IndexExpression, env: &EnvRef) -> Value {
    let left = eval_expression(&index_expr.left, env);
    if left.is_error() {
        return left;
    }
    let index = eval_expression(&index_expr.index, env);
    if index.is_error() {
        return index;
    }

    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => eval_array_index_expression(elements, *i),
        (Value::Hash(pairs), _) => eval_hash_index_expression(pairs, &index),
        _ => Value::error(format!("index operator not supported: {}", left.type_name())),
    }
}

fn eval_array_index_expression(elements: &[Value], index: i64) -> Value {
    if index < 0 || index > (elements.len() as i64 - 1) {
        Value::Null
    } else {
        elements[index as usize].clone()
    }
}

fn eval_hash_index_expression(
    pairs: &IndexMap<crate::value::HashKey, (Value, Value)>,
    index: &Value,
) -> Value {
    match index.hash_key() {
        Some(key) => pairs.get(&key).map(|(_, v)| v.clone()).unwrap_or(Value::Null),
        None => Value::error(format!("unusable as a hash key: {}", index.type_name())),
    }
}

fn eval_hash_literal(hash: &ast::HashLiteral, env: &EnvRef) -> Value {
    let mut pairs = IndexMap::with_capacity(hash.pairs.len());
    for (key_node, value_node) in &hash.pairs {
        let key = eval_expression(key_node, env);
        if key.is_error() {
            return key;
        }
        let hash_key = match key.hash_key() {
            Some(hash_key) => hash_key,
            None => return Value::error(format!("unusable as hash key: {}", key.type_name())),
        };

        let value = eval_expression(value_node, env);
        if value.is_error() {
            return value;
        }

        pairs.insert(hash_key, (key, value));
    }
    Value::Hash(Rc::new(pairs))
}
