#[cfg(test)]
mod tests {
    use crate::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Int(42)), "42");
        assert_eq!(format!("{}", Value::String("hi".into())), "\"hi\"");
        assert_eq!(format!("{}", Value::Char('q')), "'q'");
        assert_eq!(format!("{}", Value::Bool(true)), "true");
        assert_eq!(format!("{}", Value::Unit), "()");
        assert_eq!(
            format!("{}", Value::List(vec![Value::Int(1), Value::Int(2)])),
            "[1, 2]"
        );
    }

    #[test]
    fn test_only_bool_true_is_true() {
        assert!(Value::Bool(true).is_true());
        assert!(!Value::Bool(false).is_true());
        assert!(!Value::Int(1).is_true());
        assert!(!Value::String("true".into()).is_true());
        assert!(!Value::Unit.is_true());
        assert!(!Value::List(vec![Value::Bool(true)]).is_true());
    }

    #[test]
    fn test_json_encoding() {
        assert_eq!(Value::Int(5).to_json(), "5");
        assert_eq!(Value::String("a".into()).to_json(), "\"a\"");
        assert_eq!(Value::Char('x').to_json(), "\"x\"");
        assert_eq!(Value::Unit.to_json(), "null");
        assert_eq!(
            Value::List(vec![Value::Int(1), Value::String("b".into())]).to_json(),
            "[1,\"b\"]"
        );

        let mut entries = Record::new();
        entries.insert("foo", Value::Bool(false));
        assert_eq!(Value::Map(entries).to_json(), "{\"foo\":false}");
    }

    #[test]
    fn test_generator_encodes_as_empty_object() {
        let g = Generator::new(|_| Value::Unit);
        assert_eq!(Value::Generator(g).to_json(), "{}");
    }

    #[test]
    fn test_non_finite_float_encodes_as_null() {
        assert_eq!(Value::Float(f64::NAN).to_json(), "null");
    }

    #[test]
    fn test_generator_identity() {
        let g = Generator::new(|_| Value::Int(1));
        let same = g.clone();
        let other = Generator::new(|_| Value::Int(1));
        assert!(g.ptr_eq(&same));
        assert_eq!(g, same);
        assert!(!g.ptr_eq(&other));
        assert_ne!(Value::Generator(g), Value::Generator(other));
    }

    #[test]
    fn test_generator_call_draws_from_source() {
        use rand::Rng;
        let g = Generator::new(|rng| Value::Int(rng.random_range(0..=1_000_000)));
        let mut a = ChaCha20Rng::seed_from_u64(9);
        let mut b = ChaCha20Rng::seed_from_u64(9);
        assert_eq!(g.call(&mut a), g.call(&mut b));
    }

    #[test]
    fn test_as_count() {
        assert_eq!(Value::Int(3).as_count(), Some(3));
        assert_eq!(Value::Int(-2).as_count(), Some(0));
        assert_eq!(Value::Float(2.9).as_count(), Some(2));
        assert_eq!(Value::Bool(true).as_count(), Some(1));
        assert_eq!(Value::String("3".into()).as_count(), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Int(0).type_name(), "Int");
        assert_eq!(Value::Char('a').type_name(), "Char");
        assert_eq!(Value::Map(Record::new()).type_name(), "Map");
        assert_eq!(Value::Generator(Generator::new(|_| Value::Unit)).type_name(), "Generator");
    }

    // --- Record Tests ---

    #[test]
    fn test_record_keeps_insertion_order() {
        let record: Record = [("zeta", Value::Int(1)), ("alpha", Value::Int(2))]
            .into_iter()
            .collect();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        let value = Value::Map(record);
        assert_eq!(value.to_json(), "{\"zeta\":1,\"alpha\":2}");
        assert_eq!(format!("{value}"), "{zeta: 1, alpha: 2}");
    }

    #[test]
    fn test_record_insert_replaces_in_place() {
        let mut record = Record::new();
        assert_eq!(record.insert("a", Value::Int(1)), None);
        record.insert("b", Value::Int(2));
        assert_eq!(record.insert("a", Value::Int(3)), Some(Value::Int(1)));
        assert_eq!(record.len(), 2);
        assert_eq!(record["a"], Value::Int(3));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(record.get("c").is_none());
        assert!(record.contains_key("b"));
    }

    #[test]
    fn test_record_equality_is_order_sensitive() {
        let ab: Record = [("a", Value::Unit), ("b", Value::Unit)].into_iter().collect();
        let ba: Record = [("b", Value::Unit), ("a", Value::Unit)].into_iter().collect();
        assert_ne!(ab, ba);
    }
}
