//! Built-in specifiers.
//!
//! Every constructor returns a [`Specifier::Generator`]; nested specifiers are
//! resolved once per invocation of the enclosing generator.

use std::cell::OnceCell;

use claimcheck_value::{Record, Value};
use log::warn;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::specifier::Specifier;

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a > b { (b, a) } else { (a, b) }
}

/// Resolve a count specifier. Non-numeric results count as zero.
fn resolve_count(count: &Specifier, rng: &mut dyn RngCore) -> usize {
    let value = count.resolve(rng);
    match value.as_count() {
        Some(n) => n,
        None => {
            warn!("count specifier produced {} ({}); using 0", value, value.type_name());
            0
        }
    }
}

/// Integer in `[0, max]`.
pub fn integer(max: i64) -> Specifier {
    integer_range(0, max)
}

/// Integer in `[min, max]`, inclusive on both ends. Reversed bounds are swapped.
pub fn integer_range(min: i64, max: i64) -> Specifier {
    let (lo, hi) = ordered(min, max);
    Specifier::from_fn(move |rng| Value::Int(rng.random_range(lo..=hi)))
}

/// Real in `[0, max)`.
pub fn number(max: f64) -> Specifier {
    number_range(0.0, max)
}

/// Real in `[min, max)`. Equal bounds always produce `min`.
pub fn number_range(min: f64, max: f64) -> Specifier {
    let (lo, hi) = ordered(min, max);
    Specifier::from_fn(move |rng| {
        let unit: f64 = rng.random();
        // finite even when hi - lo overflows
        let x = lo * (1.0 - unit) + hi * unit;
        // rounding can land on hi; keep the range half-open
        Value::Float(if x < hi { x } else { lo })
    })
}

/// Fair coin.
pub fn boolean() -> Specifier {
    biased(0.5)
}

/// `true` with probability `bias`, clamped to `[0, 1]`.
pub fn biased(bias: f64) -> Specifier {
    let p = if bias.is_nan() { 0.5 } else { bias.clamp(0.0, 1.0) };
    Specifier::from_fn(move |rng| Value::Bool(rng.random_bool(p)))
}

/// Lowercase ASCII letter.
pub fn character() -> Specifier {
    character_range('a', 'z')
}

/// Character whose code point is uniform in `[min, max]`.
pub fn character_range(min: char, max: char) -> Specifier {
    let (lo, hi) = ordered(min, max);
    Specifier::from_fn(move |rng| Value::Char(rng.random_range(lo..=hi)))
}

/// Hand `spec` over without invoking it. A generator comes out as
/// `Value::Generator` holding the very same closure.
pub fn literal(spec: impl Into<Specifier>) -> Specifier {
    let value = match spec.into() {
        Specifier::Generator(g) => Value::Generator(g),
        Specifier::Constant(v) => v,
    };
    Specifier::from_fn(move |_| value.clone())
}

/// List of `count` independent draws of `item`. `count` may itself be a
/// specifier and is resolved once per invocation.
pub fn array_of(count: impl Into<Specifier>, item: impl Into<Specifier>) -> Specifier {
    let count = count.into();
    let item = item.into();
    Specifier::from_fn(move |rng| {
        let n = resolve_count(&count, rng);
        Value::List((0..n).map(|_| item.resolve(rng)).collect())
    })
}

/// List with the same shape as `items`, each entry resolved.
pub fn spec_list(items: impl IntoIterator<Item = Specifier>) -> Specifier {
    let items: Vec<Specifier> = items.into_iter().collect();
    Specifier::from_fn(move |rng| {
        Value::List(items.iter().map(|s| s.resolve(rng)).collect())
    })
}

/// Record with the same keys as `fields`, in the same order, each value
/// resolved.
pub fn spec_record<K: Into<String>>(
    fields: impl IntoIterator<Item = (K, Specifier)>,
) -> Specifier {
    let fields: Vec<(String, Specifier)> = fields
        .into_iter()
        .map(|(k, s)| (k.into(), s))
        .collect();
    Specifier::from_fn(move |rng| {
        let mut out = Record::new();
        for (key, spec) in &fields {
            out.insert(key.as_str(), spec.resolve(rng));
        }
        Value::Map(out)
    })
}

/// One of `items`, chosen uniformly and then resolved. Empty input yields `Unit`.
pub fn one_of(items: impl IntoIterator<Item = Specifier>) -> Specifier {
    let items: Vec<Specifier> = items.into_iter().collect();
    Specifier::from_fn(move |rng| match items.choose(&mut *rng) {
        Some(spec) => spec.resolve(rng),
        None => Value::Unit,
    })
}

/// One character of `text`, chosen uniformly. Empty input yields `Unit`.
pub fn one_of_chars(text: &str) -> Specifier {
    let chars: Vec<char> = text.chars().collect();
    Specifier::from_fn(move |rng| match chars.choose(rng) {
        Some(c) => Value::Char(*c),
        None => Value::Unit,
    })
}

/// JSON encoding of one draw of `value`.
pub fn encoded(value: impl Into<Specifier>) -> Specifier {
    let value = value.into();
    Specifier::from_fn(move |rng| Value::String(value.resolve(rng).to_json()))
}

/// Concatenation of `count` draws of `piece`.
///
/// `count` is resolved once for the lifetime of the specifier, on its first
/// invocation and from that invocation's random source. Every later draw has
/// the same length; only the pieces vary.
pub fn string_of(count: impl Into<Specifier>, piece: impl Into<Specifier>) -> Specifier {
    let count = count.into();
    let piece = piece.into();
    let fixed: OnceCell<usize> = OnceCell::new();
    Specifier::from_fn(move |rng| {
        let n = *fixed.get_or_init(|| resolve_count(&count, rng));
        let mut out = String::new();
        for _ in 0..n {
            match piece.resolve(rng) {
                Value::Char(c) => out.push(c),
                Value::String(s) => out.push_str(&s),
                Value::Unit => {}
                other => out.push_str(&other.to_json()),
            }
        }
        Value::String(out)
    })
}
