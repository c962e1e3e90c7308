use std::collections::{BTreeMap, HashMap};
use crate::error::Accessor;
use crate::{Error, Value};

/// One decoded position: a value, or the error its decoding produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    Value(Value),
    Error(Error),
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Slot::Value(value)
    }
}

impl From<Error> for Slot {
    fn from(error: Error) -> Self {
        Slot::Error(error)
    }
}

impl From<Result<Value, Error>> for Slot {
    fn from(result: Result<Value, Error>) -> Self {
        match result {
            Ok(value) => Slot::Value(value),
            Err(error) => Slot::Error(error),
        }
    }
}

fn resolve(slot: &Slot, accessor: impl FnOnce() -> Accessor) -> Result<&Value, Error> {
    match slot {
        Slot::Value(value) => Ok(value),
        Slot::Error(error) => Err(Error::Deferred {
            accessor: accessor(),
            source: Box::new(error.clone()),
        }),
    }
}

/// Decoded tuple or array.
///
/// Slots are read-only and addressable by position. A slot is also
/// addressable by name when no other slot carries the same name. A slot
/// whose decoding failed keeps the failure and raises it only when that
/// slot is accessed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AbiResult {
    slots: Vec<Slot>,
    names: Vec<Option<String>>,
}

impl AbiResult {
    pub fn from_items(items: Vec<Slot>, names: Vec<Option<String>>) -> Result<Self, Error> {
        if items.len() != names.len() {
            return Err(Error::InvalidArgument {
                argument: "names",
                reason: format!("{} names for {} items", names.len(), items.len()),
            });
        }

        Ok(Self::with_names(items, names))
    }

    /// Callers pass one name per slot.
    pub(crate) fn with_names(slots: Vec<Slot>, names: Vec<Option<String>>) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for name in names.iter().flatten() {
            *counts.entry(name.as_str()).or_default() += 1;
        }

        let unique = names.iter()
            .map(|name| name.as_ref().filter(|name| counts[name.as_str()] == 1).cloned())
            .collect::<Vec<_>>();

        Self::raw(slots, unique)
    }

    /// Names are taken as already unique.
    fn raw(slots: Vec<Slot>, names: Vec<Option<String>>) -> Self {
        Self { slots, names }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Accessor names per slot; `None` for unnamed and colliding slots.
    pub fn names(&self) -> &[Option<String>] {
        &self.names
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate.as_deref() == Some(name))
    }

    pub fn get(&self, index: usize) -> Result<&Value, Error> {
        let slot = self.slots.get(index).ok_or(Error::IndexOutOfRange {
            index,
            length: self.slots.len(),
        })?;
        resolve(slot, || Accessor::Index(index))
    }

    /// `Ok(None)` when no slot answers to `name`.
    pub fn get_value(&self, name: &str) -> Result<Option<&Value>, Error> {
        match self.index_of(name) {
            None => Ok(None),
            Some(index) => resolve(&self.slots[index], || Accessor::Name(name.to_string())).map(Some),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Result<&Value, Error>> + '_ {
        self.slots.iter()
            .enumerate()
            .map(|(index, slot)| resolve(slot, || Accessor::Index(index)))
    }

    pub fn to_array(&self) -> Result<Vec<Value>, Error> {
        self.iter().map(|value| value.cloned()).collect()
    }

    pub fn to_object(&self) -> Result<BTreeMap<String, Value>, Error> {
        let mut object = BTreeMap::new();
        for (index, name) in self.names.iter().enumerate() {
            let name = name.as_ref().ok_or_else(|| Error::UnsupportedOperation {
                operation: "to_object()",
                reason: format!("value at index {} unnamed", index),
            })?;

            if !object.contains_key(name) {
                let value = resolve(&self.slots[index], || Accessor::Index(index))?;
                object.insert(name.clone(), value.clone());
            }
        }
        Ok(object)
    }

    /// Copies `start..end` (clamped to the bounds). Captured errors are
    /// copied along without being raised.
    pub fn slice(&self, start: usize, end: usize) -> AbiResult {
        let end = end.min(self.slots.len());
        let start = start.min(end);
        Self::raw(self.slots[start..end].to_vec(), self.names[start..end].to_vec())
    }

    /// Unlike [`AbiResult::slice`], every slot up to the last one tested is
    /// resolved, so the first captured error raises.
    pub fn filter<F>(&self, mut predicate: F) -> Result<AbiResult, Error>
    where
        F: FnMut(&Value, usize) -> bool,
    {
        let mut slots = Vec::new();
        let mut names = Vec::new();
        for (index, value) in self.iter().enumerate() {
            let value = value?;
            if predicate(value, index) {
                slots.push(Slot::Value(value.clone()));
                names.push(self.names[index].clone());
            }
        }
        Ok(Self::raw(slots, names))
    }

    pub fn map<T, F>(&self, mut f: F) -> Result<Vec<T>, Error>
    where
        F: FnMut(&Value, usize) -> T,
    {
        self.iter()
            .enumerate()
            .map(|(index, value)| value.map(|value| f(value, index)))
            .collect()
    }
}

impl From<Vec<Value>> for AbiResult {
    fn from(values: Vec<Value>) -> Self {
        let names = vec![None; values.len()];
        Self::raw(values.into_iter().map(Slot::Value).collect(), names)
    }
}

impl FromIterator<Value> for AbiResult {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// A slot that raises when accessed, located by its index path.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultError {
    pub path: Vec<usize>,
    pub error: Error,
}

/// Walks `result` and every nested result, depth first, and reports each
/// slot whose access raises. Never raises itself.
pub fn check_result_errors(result: &AbiResult) -> Vec<ResultError> {
    let mut errors = Vec::new();
    collect_errors(&mut Vec::new(), result, &mut errors);
    errors
}

fn collect_errors(path: &mut Vec<usize>, result: &AbiResult, errors: &mut Vec<ResultError>) {
    for index in 0..result.len() {
        path.push(index);
        match result.get(index) {
            Ok(Value::Array(nested)) | Ok(Value::Tuple(nested)) => collect_errors(path, nested, errors),
            Ok(_) => {}
            Err(error) => errors.push(ResultError { path: path.clone(), error }),
        }
        path.pop();
    }
}
