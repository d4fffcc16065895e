//! Helpers for ordered JSON mappings and nested containers.
//!
//! A [`Mapping`] keeps insertion order, so "first match" and "last
//! occurrence" below mean what they say.

use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::utils::text;
use crate::utils::validation::{self, type_name};

pub type Mapping = Map<String, Value>;

pub const DEFAULT_PATH_DELIMITER: &str = ".";

// === Misc ===

/// Overwrite matching keys of `defaults` with `overrides`.
///
/// When `strict`, only keys already present in `defaults` are merged.
pub fn merge_defaults(defaults: &mut Mapping, overrides: &Mapping, strict: bool) {
    for (key, value) in overrides {
        if strict && !defaults.contains_key(key) {
            continue;
        }
        defaults.insert(key.clone(), value.clone());
    }
}

/// Rewrite top-level keys from `snake_case` to `camelCase`.
pub fn convert_keys_to_camel_case(mapping: &mut Mapping) {
    *mapping = std::mem::take(mapping)
        .into_iter()
        .map(|(key, value)| (text::to_camel_case(&key), value))
        .collect();
}

/// Rewrite every key with `rename`, descending into nested objects and
/// objects held in arrays. Array positions are not keys and stay as they are.
pub fn map_keys_recursive<F>(mapping: &mut Mapping, rename: F)
where
    F: Fn(&str) -> String,
{
    rename_keys(mapping, &rename);
}

fn rename_keys<F>(mapping: &mut Mapping, rename: &F)
where
    F: Fn(&str) -> String,
{
    *mapping = std::mem::take(mapping)
        .into_iter()
        .map(|(key, mut value)| {
            rename_nested(&mut value, rename);
            (rename(&key), value)
        })
        .collect();
}

fn rename_nested<F>(value: &mut Value, rename: &F)
where
    F: Fn(&str) -> String,
{
    match value {
        Value::Object(map) => rename_keys(map, rename),
        Value::Array(items) => {
            for item in items {
                rename_nested(item, rename);
            }
        }
        _ => {}
    }
}

/// Every leaf value of a nested container, in order.
pub fn flatten(value: &Value) -> Vec<Value> {
    let mut out = Vec::new();
    collect_leaves(value, &mut out);
    out
}

fn collect_leaves(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| collect_leaves(item, out)),
        Value::Object(map) => map.values().for_each(|item| collect_leaves(item, out)),
        leaf => out.push(leaf.clone()),
    }
}

// === Finding ===

/// Verdict of a [`splice_where`] predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splice {
    Take,
    Keep,
    /// Stop scanning; nothing further is taken.
    Stop,
}

impl From<bool> for Splice {
    fn from(take: bool) -> Self {
        if take {
            Splice::Take
        } else {
            Splice::Keep
        }
    }
}

/// Remove and return the entries the predicate takes.
///
/// At most `limit` entries are taken when a limit is given.
pub fn splice_where<F>(mapping: &mut Mapping, mut predicate: F, limit: Option<usize>) -> Mapping
where
    F: FnMut(&Value, &str) -> Splice,
{
    let mut taken_keys = HashSet::new();
    for (key, value) in mapping.iter() {
        if limit.is_some_and(|limit| taken_keys.len() >= limit) {
            break;
        }
        match predicate(value, key) {
            Splice::Stop => break,
            Splice::Take => {
                taken_keys.insert(key.clone());
            }
            Splice::Keep => {}
        }
    }

    let mut taken = Mapping::new();
    for (key, value) in std::mem::take(mapping) {
        if taken_keys.contains(&key) {
            taken.insert(key, value);
        } else {
            mapping.insert(key, value);
        }
    }
    taken
}

/// Which part of an entry a [`find`] predicate sees.
pub enum Matcher<'a> {
    ByKey(Box<dyn Fn(&str) -> bool + 'a>),
    ByValue(Box<dyn Fn(&Value) -> bool + 'a>),
    ByKeyValue(Box<dyn Fn(&Value, &str) -> bool + 'a>),
}

impl<'a> Matcher<'a> {
    pub fn key(predicate: impl Fn(&str) -> bool + 'a) -> Self {
        Matcher::ByKey(Box::new(predicate))
    }

    pub fn value(predicate: impl Fn(&Value) -> bool + 'a) -> Self {
        Matcher::ByValue(Box::new(predicate))
    }

    pub fn key_value(predicate: impl Fn(&Value, &str) -> bool + 'a) -> Self {
        Matcher::ByKeyValue(Box::new(predicate))
    }

    fn matches(&self, key: &str, value: &Value) -> bool {
        match self {
            Matcher::ByKey(predicate) => predicate(key),
            Matcher::ByValue(predicate) => predicate(value),
            Matcher::ByKeyValue(predicate) => predicate(value, key),
        }
    }
}

/// First value whose entry matches.
pub fn find<'m>(mapping: &'m Mapping, matcher: &Matcher<'_>) -> Option<&'m Value> {
    mapping
        .iter()
        .find(|(key, value)| matcher.matches(key, value))
        .map(|(_, value)| value)
}

/// First value whose entry does not match.
pub fn find_not<'m>(mapping: &'m Mapping, matcher: &Matcher<'_>) -> Option<&'m Value> {
    mapping
        .iter()
        .find(|(key, value)| !matcher.matches(key, value))
        .map(|(_, value)| value)
}

/// Entries whose key is in `keys`, in mapping order.
pub fn filter_by_keys<K: AsRef<str>>(mapping: &Mapping, keys: &[K]) -> Mapping {
    let wanted: HashSet<&str> = keys.iter().map(AsRef::as_ref).collect();
    mapping
        .iter()
        .filter(|(key, _)| wanted.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Entries whose key is not in `keys`, in mapping order.
pub fn remove_by_keys<K: AsRef<str>>(mapping: &Mapping, keys: &[K]) -> Mapping {
    let unwanted: HashSet<&str> = keys.iter().map(AsRef::as_ref).collect();
    mapping
        .iter()
        .filter(|(key, _)| !unwanted.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

// === Random ===

/// Same key/value pairs in a random order.
pub fn shuffle_assoc<R: Rng + ?Sized>(mapping: &Mapping, rng: &mut R) -> Mapping {
    let mut keys: Vec<&String> = mapping.keys().collect();
    keys.shuffle(rng);
    keys.into_iter()
        .filter_map(|key| mapping.get(key).map(|value| (key.clone(), value.clone())))
        .collect()
}

/// Outcome of [`select_random`].
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// `count == 1`: just the value.
    Single(Value),
    /// Selected entries, in mapping order.
    Many(Mapping),
}

/// Pick `count` distinct random entries.
pub fn select_random<R: Rng + ?Sized>(
    mapping: &Mapping,
    count: usize,
    rng: &mut R,
) -> Result<Selection> {
    if count == 0 || count > mapping.len() {
        return Err(Error::validation_invalid_argument(
            "count",
            format!("Count must be between 1 and {}", mapping.len()),
            Some(count.to_string()),
            None,
        ));
    }

    let entries: Vec<(&String, &Value)> = mapping.iter().collect();
    let mut picked = index::sample(rng, entries.len(), count).into_vec();
    picked.sort_unstable();

    if let [only] = picked.as_slice() {
        return Ok(Selection::Single(entries[*only].1.clone()));
    }

    Ok(Selection::Many(
        picked
            .into_iter()
            .map(|idx| (entries[idx].0.clone(), entries[idx].1.clone()))
            .collect(),
    ))
}

// === Computing ===

/// Numeric view of a value: numbers and numeric strings.
fn numeric(value: &Value) -> Option<(f64, Option<i64>)> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| (f, n.as_i64())),
        Value::String(s) if is_numeric_key(s) => {
            let s = s.trim();
            s.parse::<f64>().ok().map(|f| (f, s.parse::<i64>().ok()))
        }
        _ => None,
    }
}

fn require_numeric(value: &Value, field: &str) -> Result<(f64, Option<i64>)> {
    numeric(value).ok_or_else(|| Error::validation_type_mismatch(field, "number", type_name(value)))
}

fn container_values<'v>(value: &'v Value, field: &str) -> Result<Box<dyn Iterator<Item = &'v Value> + 'v>> {
    match value {
        Value::Array(items) => Ok(Box::new(items.iter())),
        Value::Object(map) => Ok(Box::new(map.values())),
        other => Err(Error::validation_type_mismatch(
            field,
            "array or object",
            type_name(other),
        )),
    }
}

/// Sum of every value, starting at 0. Integer inputs give an integer sum.
pub fn sum(collection: &Value) -> Result<Value> {
    let mut float_total = 0.0;
    let mut int_total: Option<i64> = Some(0);

    for value in container_values(collection, "collection")? {
        let (float, int) = require_numeric(value, "collection")?;
        float_total += float;
        int_total = match (int_total, int) {
            (Some(total), Some(int)) => total.checked_add(int),
            _ => None,
        };
    }

    if let Some(total) = int_total {
        return Ok(Value::from(total));
    }

    Number::from_f64(float_total).map(Value::Number).ok_or_else(|| {
        Error::validation_invalid_argument(
            "collection",
            "Sum is not a finite number",
            Some(float_total.to_string()),
            None,
        )
    })
}

/// Key of the largest value; ties go to the last occurrence.
pub fn max_key(mapping: &Mapping) -> Result<Option<String>> {
    extreme_key(mapping, |candidate, best| candidate >= best)
}

/// Key of the smallest value; ties go to the last occurrence.
pub fn min_key(mapping: &Mapping) -> Result<Option<String>> {
    extreme_key(mapping, |candidate, best| candidate <= best)
}

fn extreme_key<F>(mapping: &Mapping, replaces: F) -> Result<Option<String>>
where
    F: Fn(f64, f64) -> bool,
{
    let mut best: Option<(&String, f64)> = None;
    for (key, value) in mapping {
        let (number, _) = require_numeric(value, key)?;
        match best {
            Some((_, current)) if !replaces(number, current) => {}
            _ => best = Some((key, number)),
        }
    }
    Ok(best.map(|(key, _)| key.clone()))
}

// === Comparing ===

/// Three-way split of two mappings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Differences {
    /// Entries of `alpha` that also appear in `beta`.
    pub both: Mapping,
    pub alpha: Mapping,
    pub beta: Mapping,
}

/// Split by key presence.
pub fn describe_differences_by_keys(alpha: &Mapping, beta: &Mapping) -> Differences {
    let keep = |from: &Mapping, other: &Mapping, present: bool| -> Mapping {
        from.iter()
            .filter(|(key, _)| other.contains_key(key.as_str()) == present)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    };

    Differences {
        both: keep(alpha, beta, true),
        alpha: keep(alpha, beta, false),
        beta: keep(beta, alpha, false),
    }
}

/// Split by value presence, keeping each entry's key.
pub fn describe_differences(alpha: &Mapping, beta: &Mapping) -> Differences {
    let keep = |from: &Mapping, other: &Mapping, present: bool| -> Mapping {
        from.iter()
            .filter(|(_, value)| other.values().any(|v| v == *value) == present)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    };

    Differences {
        both: keep(alpha, beta, true),
        alpha: keep(alpha, beta, false),
        beta: keep(beta, alpha, false),
    }
}

/// `a` and `b` agree on every key in `keys` that `a` has.
///
/// With `keys_required`, both must also hold a truthy value for every key.
pub fn is_same_by_keys<K: AsRef<str>>(a: &Mapping, b: &Mapping, keys: &[K], keys_required: bool) -> bool {
    if keys_required && !(has_values_for_keys(a, keys) && has_values_for_keys(b, keys)) {
        return false;
    }

    let b = filter_by_keys(b, keys);
    filter_by_keys(a, keys)
        .iter()
        .all(|(key, value)| b.get(key) == Some(value))
}

/// Every key is present with a truthy value. Strings are trimmed first, and
/// `"0"`, `0`, `false`, `null` and empty containers count as missing.
pub fn has_values_for_keys<K: AsRef<str>>(target: &Mapping, keys: &[K]) -> bool {
    let present = filter_by_keys(target, keys);
    present.len() == keys.len() && present.values().all(is_truthy)
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !s.is_empty() && s != "0"
        }
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

// === Probing ===

/// Key that reads as a number: `"1"`, `"-2.5"`, `"1e3"`.
pub fn is_numeric_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && key.parse::<f64>().is_ok()
}

/// Every key is numeric. Arrays are always indexed.
pub fn is_indexed(value: &Value) -> Result<bool> {
    match value {
        Value::Array(_) => Ok(true),
        Value::Object(map) => Ok(map.keys().all(|key| is_numeric_key(key))),
        other => Err(Error::validation_type_mismatch(
            "value",
            "array or object",
            type_name(other),
        )),
    }
}

/// No key is numeric. Only an empty array qualifies among arrays.
pub fn is_assoc(value: &Value) -> Result<bool> {
    match value {
        Value::Array(items) => Ok(items.is_empty()),
        Value::Object(map) => Ok(!map.keys().any(|key| is_numeric_key(key))),
        other => Err(Error::validation_type_mismatch(
            "value",
            "array or object",
            type_name(other),
        )),
    }
}

// === Converting ===

/// Re-index rows by column.
///
/// - value and key column: `{ row[key]: row[value] }`
/// - value column only: `[ row[value] ]`
/// - key column only: `{ row[key]: row }`
pub fn column(rows: &[Value], value_column: Option<&str>, key_column: Option<&str>) -> Result<Value> {
    if value_column.is_none() && key_column.is_none() {
        return Err(Error::validation_invalid_argument(
            "column",
            "You must pass a key or value column to use on the given rows",
            None,
            None,
        ));
    }

    let Some(key_column) = key_column else {
        let mut values = Vec::with_capacity(rows.len());
        for row in rows {
            let row = validation::require_object(row, "rows")?;
            values.push(column_value(row, value_column));
        }
        return Ok(Value::Array(values));
    };

    let mut out = Mapping::new();
    for row in rows {
        let fields = validation::require_object(row, "rows")?;
        let key = row_key(fields, key_column)?;
        let value = match value_column {
            Some(_) => column_value(fields, value_column),
            None => row.clone(),
        };
        out.insert(key, value);
    }
    Ok(Value::Object(out))
}

fn column_value(row: &Mapping, column: Option<&str>) -> Value {
    column
        .and_then(|column| row.get(column))
        .cloned()
        .unwrap_or(Value::Null)
}

fn row_key(row: &Mapping, key_column: &str) -> Result<String> {
    let key = validation::require(
        row.get(key_column),
        "key_column",
        &format!("Row has no '{}' column", key_column),
    )?;

    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::validation_type_mismatch(
            key_column,
            "string or number",
            type_name(other),
        )),
    }
}

/// Split a comma list into trimmed items; arrays pass through.
pub fn comma_list_to_array(value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::String(list) => Ok(list
            .split(',')
            .map(|item| Value::String(item.trim().to_string()))
            .collect()),
        Value::Array(items) => Ok(items.clone()),
        other => Err(Error::validation_type_mismatch(
            "items",
            "comma list or array",
            type_name(other),
        )),
    }
}

// === Access ===

/// Nested lookup by keys; `default` on any missing or null step.
///
/// Array steps take numeric keys.
pub fn safe_get<'a, K: AsRef<str>>(container: &'a Value, keys: &[K], default: &'a Value) -> &'a Value {
    if keys.is_empty() {
        return default;
    }

    let mut current = container;
    for key in keys {
        let key: &str = key.as_ref();
        let next = match current {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
            _ => None,
        };
        match next {
            Some(Value::Null) | None => return default,
            Some(value) => current = value,
        }
    }
    current
}

/// [`safe_get`] with a `.`-delimited path such as `"db.primary.host"`.
pub fn safe_get_path<'a>(container: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    let keys: Vec<&str> = path.split(DEFAULT_PATH_DELIMITER).collect();
    safe_get(container, &keys, default)
}

/// [`safe_get`] with a path split on a custom delimiter.
pub fn safe_get_by_delimited_path<'a>(
    container: &'a Value,
    path: &str,
    default: &'a Value,
    delimiter: &str,
) -> Result<&'a Value> {
    if delimiter.is_empty() {
        return Err(Error::validation_invalid_argument(
            "delimiter",
            "Path delimiter cannot be empty",
            None,
            None,
        ));
    }

    let keys: Vec<&str> = path.split(delimiter).collect();
    Ok(safe_get(container, &keys, default))
}

/// Append to `mapping[key]`, replacing any non-array value with a new array first.
pub fn safe_append(mapping: &mut Mapping, key: &str, value: Value) {
    let slot = mapping
        .entry(key.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));

    if !slot.is_array() {
        *slot = Value::Array(Vec::new());
    }
    if let Value::Array(items) = slot {
        items.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn mapping(value: Value) -> Mapping {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    fn keys(mapping: &Mapping) -> Vec<&str> {
        mapping.keys().map(String::as_str).collect()
    }

    #[test]
    fn merge_defaults_overwrites_and_appends() {
        let mut defaults = mapping(json!({"color": "red", "size": 1}));
        merge_defaults(&mut defaults, &mapping(json!({"size": 2, "shape": "round"})), false);

        assert_eq!(Value::Object(defaults.clone()), json!({"color": "red", "size": 2, "shape": "round"}));
        assert_eq!(keys(&defaults), vec!["color", "size", "shape"]);
    }

    #[test]
    fn merge_defaults_strict_ignores_unknown_keys() {
        let mut defaults = mapping(json!({"color": "red", "size": 1}));
        merge_defaults(&mut defaults, &mapping(json!({"size": 2, "shape": "round"})), true);

        assert_eq!(Value::Object(defaults), json!({"color": "red", "size": 2}));
    }

    #[test]
    fn convert_keys_only_touches_top_level() {
        let mut map = mapping(json!({"first_name": "Ada", "home_address": {"zip_code": "1"}}));
        convert_keys_to_camel_case(&mut map);

        assert_eq!(keys(&map), vec!["firstName", "homeAddress"]);
        assert_eq!(map["homeAddress"], json!({"zip_code": "1"}));
    }

    #[test]
    fn map_keys_recursive_descends_into_objects_and_arrays() {
        let mut map = mapping(json!({"outer": {"inner": 1}, "list": [{"item": true}]}));
        map_keys_recursive(&mut map, |key| key.to_uppercase());

        assert_eq!(
            Value::Object(map),
            json!({"OUTER": {"INNER": 1}, "LIST": [{"ITEM": true}]})
        );
    }

    #[test]
    fn map_keys_recursive_leaves_array_positions_alone() {
        let mut map = mapping(json!({"rows": [{"id": 1}, [{"id": 2}]]}));
        map_keys_recursive(&mut map, |key| format!("{}_", key));

        assert_eq!(Value::Object(map), json!({"rows_": [{"id_": 1}, [{"id_": 2}]]}));
    }

    #[test]
    fn flatten_collects_leaves_in_order() {
        let nested = json!({"a": 1, "b": [2, {"c": 3}], "d": [], "e": null});
        assert_eq!(flatten(&nested), vec![json!(1), json!(2), json!(3), Value::Null]);
    }

    #[test]
    fn splice_where_removes_taken_entries() {
        let mut map = mapping(json!({"a": 1, "b": 2, "c": 3, "d": 4}));
        let taken = splice_where(&mut map, |value, _| (value.as_i64().unwrap_or(0) % 2 == 0).into(), None);

        assert_eq!(keys(&taken), vec!["b", "d"]);
        assert_eq!(keys(&map), vec!["a", "c"]);
    }

    #[test]
    fn splice_where_respects_limit_and_stop() {
        let mut map = mapping(json!({"a": 1, "b": 2, "c": 3, "d": 4}));
        let taken = splice_where(&mut map, |_, _| Splice::Take, Some(2));
        assert_eq!(keys(&taken), vec!["a", "b"]);

        let mut map = mapping(json!({"a": 1, "b": 2, "stop": 0, "d": 4}));
        let taken = splice_where(
            &mut map,
            |_, key| if key == "stop" { Splice::Stop } else { Splice::Take },
            None,
        );
        assert_eq!(keys(&taken), vec!["a", "b"]);
        assert_eq!(keys(&map), vec!["stop", "d"]);
    }

    #[test]
    fn find_by_each_matcher_kind() {
        let map = mapping(json!({"apple": 3, "banana": 5, "cherry": 7}));

        assert_eq!(find(&map, &Matcher::key(|k| k.starts_with('b'))), Some(&json!(5)));
        assert_eq!(find(&map, &Matcher::value(|v| v.as_i64() > Some(5))), Some(&json!(7)));
        assert_eq!(
            find(&map, &Matcher::key_value(|v, k| k.len() == 5 && v.is_number())),
            Some(&json!(3))
        );
        assert_eq!(find(&map, &Matcher::key(|k| k == "durian")), None);
    }

    #[test]
    fn find_not_returns_first_non_match() {
        let map = mapping(json!({"apple": 3, "banana": 5}));
        assert_eq!(find_not(&map, &Matcher::value(|v| v == &json!(3))), Some(&json!(5)));
        assert_eq!(find_not(&map, &Matcher::value(|v| v.is_number())), None);
    }

    #[test]
    fn filter_and_remove_by_keys() {
        let map = mapping(json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(Value::Object(filter_by_keys(&map, &["c", "a", "z"])), json!({"a": 1, "c": 3}));
        assert_eq!(Value::Object(remove_by_keys(&map, &["a"])), json!({"b": 2, "c": 3}));
    }

    #[test]
    fn shuffle_keeps_pairs() {
        let map = mapping(json!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5}));
        let shuffled = shuffle_assoc(&map, &mut StdRng::seed_from_u64(42));

        assert_eq!(shuffled.len(), map.len());
        for (key, value) in &map {
            assert_eq!(shuffled.get(key), Some(value));
        }
    }

    #[test]
    fn select_random_single_and_many() {
        let map = mapping(json!({"a": 1, "b": 2, "c": 3}));
        let mut rng = StdRng::seed_from_u64(1);

        match select_random(&map, 1, &mut rng).unwrap() {
            Selection::Single(value) => assert!(map.values().any(|v| v == &value)),
            other => panic!("expected single, got {:?}", other),
        }

        match select_random(&map, 3, &mut rng).unwrap() {
            Selection::Many(picked) => assert_eq!(keys(&picked), vec!["a", "b", "c"]),
            other => panic!("expected many, got {:?}", other),
        }
    }

    #[test]
    fn select_random_rejects_bad_counts() {
        let map = mapping(json!({"a": 1}));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_random(&map, 0, &mut rng).is_err());
        assert!(select_random(&map, 2, &mut rng).is_err());
    }

    #[test]
    fn sum_folds_from_zero() {
        assert_eq!(sum(&json!([1, 2, 3])).unwrap(), json!(6));
        assert_eq!(sum(&json!({"a": 1.5, "b": "2"})).unwrap(), json!(3.5));
        assert_eq!(sum(&json!([])).unwrap(), json!(0));
    }

    #[test]
    fn sum_rejects_non_numbers() {
        let err = sum(&json!([1, "two"])).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.type_mismatch");
        assert!(sum(&json!("12")).is_err());
    }

    #[test]
    fn extreme_keys_prefer_last_tie() {
        let map = mapping(json!({"a": 3, "b": 9, "c": 1, "d": 9, "e": 1}));
        assert_eq!(max_key(&map).unwrap(), Some("d".to_string()));
        assert_eq!(min_key(&map).unwrap(), Some("e".to_string()));
        assert_eq!(max_key(&Mapping::new()).unwrap(), None);
    }

    #[test]
    fn describe_differences_by_keys_partitions() {
        let alpha = mapping(json!({"a": 1, "b": 2}));
        let beta = mapping(json!({"b": 20, "c": 3}));
        let diff = describe_differences_by_keys(&alpha, &beta);

        assert_eq!(Value::Object(diff.both), json!({"b": 2}));
        assert_eq!(Value::Object(diff.alpha), json!({"a": 1}));
        assert_eq!(Value::Object(diff.beta), json!({"c": 3}));
    }

    #[test]
    fn describe_differences_partitions_by_value() {
        let alpha = mapping(json!({"x": "red", "y": "green"}));
        let beta = mapping(json!({"p": "green", "q": "blue"}));
        let diff = describe_differences(&alpha, &beta);

        assert_eq!(Value::Object(diff.both), json!({"y": "green"}));
        assert_eq!(Value::Object(diff.alpha), json!({"x": "red"}));
        assert_eq!(Value::Object(diff.beta), json!({"q": "blue"}));
    }

    #[test]
    fn same_by_keys_and_required_values() {
        let a = mapping(json!({"id": 1, "name": "x", "extra": true}));
        let b = mapping(json!({"id": 1, "name": "x", "extra": false}));
        assert!(is_same_by_keys(&a, &b, &["id", "name"], false));
        assert!(!is_same_by_keys(&a, &b, &["id", "extra"], false));

        let blank = mapping(json!({"id": 1, "name": "  "}));
        assert!(!is_same_by_keys(&blank, &blank, &["id", "name"], true));
        assert!(has_values_for_keys(&a, &["id", "name"]));
        assert!(!has_values_for_keys(&a, &["id", "missing"]));
    }

    #[test]
    fn indexed_and_assoc_probes() {
        assert!(is_indexed(&json!({"0": "a", "1": "b"})).unwrap());
        assert!(!is_indexed(&json!({"0": "a", "name": "b"})).unwrap());
        assert!(is_assoc(&json!({"name": "a"})).unwrap());
        assert!(!is_assoc(&json!({"name": "a", "2": "b"})).unwrap());
        assert!(is_indexed(&json!([1, 2])).unwrap());
        assert!(!is_assoc(&json!([1, 2])).unwrap());
        assert!(is_indexed(&json!("text")).is_err());
    }

    #[test]
    fn numeric_keys() {
        assert!(is_numeric_key("12"));
        assert!(is_numeric_key("-2.5"));
        assert!(is_numeric_key("1e3"));
        assert!(!is_numeric_key("inf"));
        assert!(!is_numeric_key("12a"));
        assert!(!is_numeric_key(""));
    }

    #[test]
    fn column_variants() {
        let rows = vec![
            json!({"one": 1, "two": 2, "three": 3}),
            json!({"one": "a", "two": "b", "three": "c"}),
        ];

        assert_eq!(
            column(&rows, Some("one"), Some("three")).unwrap(),
            json!({"3": 1, "c": "a"})
        );
        assert_eq!(column(&rows, Some("one"), None).unwrap(), json!([1, "a"]));
        assert_eq!(
            column(&rows, None, Some("one")).unwrap(),
            json!({"1": rows[0], "a": rows[1]})
        );
    }

    #[test]
    fn column_requires_a_selector() {
        let err = column(&[json!({"a": 1})], None, None).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert!(column(&[json!({"a": 1})], None, Some("b")).is_err());
        assert!(column(&[json!([1])], Some("a"), None).is_err());
    }

    #[test]
    fn comma_list_splits_and_trims() {
        assert_eq!(
            comma_list_to_array(&json!("a, b ,c")).unwrap(),
            vec![json!("a"), json!("b"), json!("c")]
        );
        assert_eq!(comma_list_to_array(&json!(["x"])).unwrap(), vec![json!("x")]);
        assert_eq!(
            comma_list_to_array(&json!(3)).unwrap_err().code.as_str(),
            "validation.type_mismatch"
        );
    }

    #[test]
    fn safe_get_nested_and_default() {
        let data = json!({"a": {"b": {"c": 5}}, "list": [10, 20]});
        let default = json!(-1);

        assert_eq!(safe_get(&data, &["a", "b", "c"], &default), &json!(5));
        assert_eq!(safe_get(&json!({"a": {}}), &["a", "b", "c"], &default), &json!(-1));
        assert_eq!(safe_get(&data, &["list", "1"], &default), &json!(20));
        assert_eq!(safe_get(&data, &["a", "b", "c", "d"], &default), &json!(-1));
        assert_eq!(safe_get(&json!({"a": null}), &["a"], &default), &json!(-1));
    }

    #[test]
    fn safe_get_by_paths() {
        let data = json!({"db": {"primary": {"host": "localhost"}}});
        let default = Value::Null;

        assert_eq!(safe_get_path(&data, "db.primary.host", &default), &json!("localhost"));
        assert_eq!(
            safe_get_by_delimited_path(&data, "db/primary/host", &default, "/").unwrap(),
            &json!("localhost")
        );
        assert!(safe_get_by_delimited_path(&data, "db", &default, "").is_err());
    }

    #[test]
    fn safe_append_initializes_and_replaces() {
        let mut map = mapping(json!({"scalar": 5}));
        safe_append(&mut map, "list", json!(1));
        safe_append(&mut map, "list", json!(2));
        safe_append(&mut map, "scalar", json!("x"));

        assert_eq!(map["list"], json!([1, 2]));
        assert_eq!(map["scalar"], json!(["x"]));
    }
}
