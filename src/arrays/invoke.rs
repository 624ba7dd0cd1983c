//! Calling a named method on every element of a collection.

use serde_json::{Map, Value};

use crate::collection::{shape_name, Collection};
use crate::error::{Error, Result};
use crate::transform::map;

/// Elements that can resolve and call methods by name.
pub trait Invocable {
    /// Result type of a method call.
    type Output;

    /// Calls the method named `method` with `args`.
    ///
    /// # Errors
    /// [`Error::UnknownMethod`] if the element has no such method, or
    /// [`Error::InvalidMethodArguments`] if `args` do not fit it.
    fn invoke_method(&self, method: &str, args: &[Value]) -> Result<Self::Output>;
}

/// Calls `f(element, args)` for every element, collecting the results.
///
/// The element plays the role of the receiver.
///
/// # Examples
/// ```
/// use u_fnkit::arrays::invoke;
/// let scaled = invoke(&[1, 2, 3][..], |n, factor| n * factor, &10);
/// assert_eq!(scaled, vec![10, 20, 30]);
/// ```
pub fn invoke<C, A, R, F>(collection: &C, mut f: F, args: &A) -> Vec<R>
where
    C: Collection + ?Sized,
    A: ?Sized,
    F: FnMut(&C::Item, &A) -> R,
{
    map(collection, |item| f(item, args))
}

/// Calls the named method on every element, collecting the results.
///
/// # Errors
/// The first element's failure, if any; see [`Invocable::invoke_method`].
///
/// # Examples
/// ```
/// use serde_json::json;
/// use u_fnkit::arrays::invoke_method;
/// let words = vec![json!("dog"), json!("cat")];
/// let loud = invoke_method(&words, "to_uppercase", &[]).unwrap();
/// assert_eq!(loud, vec![json!("DOG"), json!("CAT")]);
/// ```
pub fn invoke_method<C>(
    collection: &C,
    method: &str,
    args: &[Value],
) -> Result<Vec<<C::Item as Invocable>::Output>>
where
    C: Collection + ?Sized,
    C::Item: Invocable,
{
    map(collection, |item| item.invoke_method(method, args))
        .into_iter()
        .collect()
}

/// Built-in methods on JSON values.
///
/// | Method | Receiver | Arguments | Result |
/// |---|---|---|---|
/// | `len` | string, array, object | none | character or element count |
/// | `is_empty` | string, array, object | none | bool |
/// | `keys`, `values` | object | none | array |
/// | `to_uppercase`, `to_lowercase`, `trim` | string | none | string |
/// | `reverse` | string, array | none | same kind, reversed |
/// | `get` | array, object | index or key | element or `null` |
/// | `contains` | string, array | needle | bool |
/// | `join` | array | optional separator (default `","`) | string |
impl Invocable for Value {
    type Output = Value;

    fn invoke_method(&self, method: &str, args: &[Value]) -> Result<Value> {
        let unknown = || Error::unknown_method(format!("{}.{method}", shape_name(self)));
        match (method, self) {
            ("len", Value::String(s)) => {
                no_args(method, args).map(|()| Value::from(s.chars().count()))
            }
            ("len", Value::Array(items)) => {
                no_args(method, args).map(|()| Value::from(items.len()))
            }
            ("len", Value::Object(map)) => no_args(method, args).map(|()| Value::from(map.len())),
            ("is_empty", Value::String(s)) => {
                no_args(method, args).map(|()| Value::from(s.is_empty()))
            }
            ("is_empty", Value::Array(items)) => {
                no_args(method, args).map(|()| Value::from(items.is_empty()))
            }
            ("is_empty", Value::Object(map)) => {
                no_args(method, args).map(|()| Value::from(map.is_empty()))
            }
            ("keys", Value::Object(map)) => {
                no_args(method, args).map(|()| map.keys().cloned().map(Value::from).collect())
            }
            ("values", Value::Object(map)) => {
                no_args(method, args).map(|()| map.values().cloned().collect())
            }
            ("to_uppercase", Value::String(s)) => {
                no_args(method, args).map(|()| Value::from(s.to_uppercase()))
            }
            ("to_lowercase", Value::String(s)) => {
                no_args(method, args).map(|()| Value::from(s.to_lowercase()))
            }
            ("trim", Value::String(s)) => no_args(method, args).map(|()| Value::from(s.trim())),
            ("reverse", Value::String(s)) => {
                no_args(method, args).map(|()| Value::from(s.chars().rev().collect::<String>()))
            }
            ("reverse", Value::Array(items)) => {
                no_args(method, args).map(|()| items.iter().rev().cloned().collect())
            }
            ("get", Value::Array(items)) => {
                let index = one_arg(method, args)?
                    .as_u64()
                    .ok_or_else(|| Error::invalid_method_arguments(method, "expected an index"))?;
                let index = usize::try_from(index)
                    .map_err(|_| Error::invalid_method_arguments(method, "index out of range"))?;
                Ok(items.get(index).cloned().unwrap_or(Value::Null))
            }
            ("get", Value::Object(map)) => get_key(map, method, args),
            ("contains", Value::String(s)) => {
                let needle = one_arg(method, args)?
                    .as_str()
                    .ok_or_else(|| Error::invalid_method_arguments(method, "expected a string"))?;
                Ok(Value::from(s.contains(needle)))
            }
            ("contains", Value::Array(items)) => {
                let needle = one_arg(method, args)?;
                Ok(Value::from(items.contains(needle)))
            }
            ("join", Value::Array(items)) => {
                let separator = match args {
                    [] => ",",
                    [Value::String(sep)] => sep.as_str(),
                    _ => {
                        return Err(Error::invalid_method_arguments(
                            method,
                            "expected an optional string separator",
                        ))
                    }
                };
                let parts: Vec<String> = items.iter().map(join_part).collect();
                Ok(Value::from(parts.join(separator)))
            }
            _ => Err(unknown()),
        }
    }
}

fn no_args(method: &str, args: &[Value]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_method_arguments(
            method,
            format!("expected no arguments, got {}", args.len()),
        ))
    }
}

fn one_arg<'a>(method: &str, args: &'a [Value]) -> Result<&'a Value> {
    match args {
        [arg] => Ok(arg),
        _ => Err(Error::invalid_method_arguments(
            method,
            format!("expected 1 argument, got {}", args.len()),
        )),
    }
}

fn get_key(map: &Map<String, Value>, method: &str, args: &[Value]) -> Result<Value> {
    let key = one_arg(method, args)?
        .as_str()
        .ok_or_else(|| Error::invalid_method_arguments(method, "expected a key"))?;
    Ok(map.get(key).cloned().unwrap_or(Value::Null))
}

fn join_part(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
