use claimcheck_value::{Generator, Record, Value};

use crate::error::HarnessError;

/// Positional arguments handed to a predicate for one trial.
///
/// Accessors check both position and type, so a predicate that expects more
/// arguments than its claim supplies fails at execution time with
/// [`HarnessError::MissingArgument`].
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    values: Vec<Value>,
}

impl Args {
    pub fn new(values: Vec<Value>) -> Self {
        Args { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn get(&self, index: usize) -> Result<&Value, HarnessError> {
        self.values.get(index).ok_or(HarnessError::MissingArgument {
            index,
            arity: self.values.len(),
        })
    }

    fn typed<'a, T>(
        &'a self,
        index: usize,
        expected: &'static str,
        pick: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, HarnessError> {
        let value = self.get(index)?;
        pick(value).ok_or(HarnessError::TypeMismatch {
            index,
            expected,
            got: value.type_name(),
        })
    }

    pub fn bool(&self, index: usize) -> Result<bool, HarnessError> {
        self.typed(index, "Bool", Value::as_bool)
    }

    pub fn int(&self, index: usize) -> Result<i64, HarnessError> {
        self.typed(index, "Int", Value::as_int)
    }

    pub fn float(&self, index: usize) -> Result<f64, HarnessError> {
        self.typed(index, "Float", Value::as_float)
    }

    pub fn char(&self, index: usize) -> Result<char, HarnessError> {
        self.typed(index, "Char", Value::as_char)
    }

    pub fn str(&self, index: usize) -> Result<&str, HarnessError> {
        self.typed(index, "String", Value::as_str)
    }

    pub fn list(&self, index: usize) -> Result<&[Value], HarnessError> {
        self.typed(index, "List", Value::as_list)
    }

    pub fn map(&self, index: usize) -> Result<&Record, HarnessError> {
        self.typed(index, "Map", Value::as_map)
    }

    pub fn generator(&self, index: usize) -> Result<&Generator, HarnessError> {
        self.typed(index, "Generator", Value::as_generator)
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Args::new(values)
    }
}
