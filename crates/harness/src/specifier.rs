use claimcheck_value::{Generator, Value};
use rand::RngCore;

/// A value source for one claim argument.
///
/// `Constant` values are handed over as-is; `Generator`s are invoked once per
/// resolution. A generator that returns another generator yields it as data
/// (`Value::Generator`), it is not invoked again.
#[derive(Debug, Clone, PartialEq)]
pub enum Specifier {
    Constant(Value),
    Generator(Generator),
}

impl Specifier {
    pub fn constant(value: impl Into<Value>) -> Self {
        Specifier::Constant(value.into())
    }

    /// Build a specifier from a closure over the registry's random source.
    pub fn from_fn(f: impl Fn(&mut dyn RngCore) -> Value + 'static) -> Self {
        Specifier::Generator(Generator::new(f))
    }

    pub fn is_generator(&self) -> bool {
        matches!(self, Specifier::Generator(_))
    }

    /// Produce one value. Never memoized: each call is an independent draw.
    pub fn resolve(&self, rng: &mut dyn RngCore) -> Value {
        match self {
            Specifier::Constant(value) => value.clone(),
            Specifier::Generator(generator) => generator.call(rng),
        }
    }
}

impl From<Value> for Specifier {
    fn from(value: Value) -> Self {
        Specifier::Constant(value)
    }
}

impl From<Generator> for Specifier {
    fn from(generator: Generator) -> Self {
        Specifier::Generator(generator)
    }
}

macro_rules! constant_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Specifier {
                fn from(v: $t) -> Self {
                    Specifier::Constant(Value::from(v))
                }
            }
        )*
    };
}

constant_from!(bool, i64, i32, u32, f64, char, &str, String, Vec<Value>);

/// Build a `Vec<Specifier>` from a mix of specifiers and plain values.
///
/// ```
/// use claimcheck::{specs, specifiers::integer};
/// let args = specs![integer(5), "a", 3];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! specs {
    ($($s:expr),* $(,)?) => {
        vec![$($crate::Specifier::from($s)),*]
    };
}
