use std::cell::Cell;
use std::rc::Rc;

use claimcheck::specifiers::*;
use claimcheck::*;

fn registry(seed: u64) -> Registry {
    Registry::with_config(HarnessConfig::default().with_seed(seed)).unwrap()
}

fn verdict(registry: &Registry, group: &str, index: usize) -> Verdict {
    registry.claims(group).unwrap()[index].result()
}

// === Trial Count Tests ===

#[test]
fn test_always_true_runs_every_trial() {
    for n in [1, 2, 7, 100] {
        let runs = Rc::new(Cell::new(0u32));
        let r = runs.clone();
        let mut reg = registry(n as u64);
        reg.claim(
            "always true",
            move |_| {
                r.set(r.get() + 1);
                true
            },
            vec![],
        );
        reg.reps(n).unwrap().check(None).unwrap();
        assert_eq!(runs.get(), n);
        assert_eq!(verdict(&reg, DEFAULT_GROUP, 0), Verdict::Pass);
    }
}

#[test]
fn test_always_false_still_runs_every_trial() {
    for n in [1, 3, 50] {
        let runs = Rc::new(Cell::new(0u32));
        let r = runs.clone();
        let mut reg = registry(n as u64);
        reg.claim(
            "always false",
            move |_| {
                r.set(r.get() + 1);
                false
            },
            vec![],
        );
        reg.reps(n).unwrap().check(None).unwrap();
        assert_eq!(runs.get(), n);
        assert_eq!(verdict(&reg, DEFAULT_GROUP, 0), Verdict::Fail);
    }
}

#[test]
fn test_check_leaves_nothing_untested() {
    let mut reg = registry(1);
    reg.claim("yes", |_| true, vec![]);
    reg.group("Other").claim("no", |_| false, vec![]);

    let before = reg.summary();
    assert_eq!(before.untested, 2);

    reg.check(None).unwrap();
    let after = reg.summary();
    assert_eq!(after.untested, 0);
    assert_eq!(after.passed, 1);
    assert_eq!(after.failed, 1);
}

// === Clear Tests ===

#[test]
fn test_full_clear_keeps_only_empty_default_group() {
    let mut reg = registry(2);
    reg.group("A").claim("a", |_| true, vec![]);
    reg.group("B").claim("b", |_| true, vec![]);
    reg.clear(None).unwrap();

    let raw = reg.raw(None).unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].name, DEFAULT_GROUP);
    assert!(raw[0].claims.is_empty());
    assert_eq!(reg.active_group(), DEFAULT_GROUP);

    // the cursor is back on the default group
    reg.claim("fresh", |_| true, vec![]);
    assert_eq!(reg.claims(DEFAULT_GROUP).unwrap().len(), 1);
}

#[test]
fn test_named_clear_empties_one_group() {
    let mut reg = registry(3);
    reg.group("A").claim("a", |_| true, vec![]);
    reg.group("B").claim("b", |_| true, vec![]);
    reg.clear(Some("A")).unwrap();
    assert!(reg.claims("A").unwrap().is_empty());
    assert_eq!(reg.claims("B").unwrap().len(), 1);
}

// === Specifier Property Tests ===

#[test]
fn test_claims_over_generated_arguments() {
    let mut reg = registry(99);
    reg.group("Specifiers")
        .claim(
            "integer_range stays in range",
            |args| -> ClaimResult {
                let n = args.int(0)?;
                Ok((-20..=20).contains(&n))
            },
            vec![integer_range(-20, 20)],
        )
        .claim(
            "array_of yields three elements in range",
            |args| -> ClaimResult {
                let items = args.list(0)?;
                Ok(items.len() == 3
                    && items
                        .iter()
                        .all(|v| v.as_int().is_some_and(|n| (3..=15).contains(&n))))
            },
            vec![array_of(3, integer_range(3, 15))],
        )
        .claim(
            "spec_record keeps keys and foo < bar",
            |args| -> ClaimResult {
                let record = args.map(0)?;
                let foo = record.get("foo").and_then(Value::as_int);
                let bar = record.get("bar").and_then(Value::as_int);
                Ok(matches!((foo, bar), (Some(f), Some(b)) if f < b))
            },
            vec![spec_record([("foo", integer(2)), ("bar", integer_range(3, 5))])],
        )
        .claim(
            "one_of_chars picks from the text",
            |args| -> ClaimResult { Ok(matches!(args.char(0)?, 'c' | 'd')) },
            vec![one_of_chars("cd")],
        );

    reg.reps(1000).unwrap().check(Some("Specifiers")).unwrap();
    let summary = reg.summary();
    assert_eq!(summary.passed, 4, "{}", report::render_text(&reg.raw(None).unwrap()));
}

#[test]
fn test_literal_generator_reaches_predicate_uninvoked() {
    let invoked = Rc::new(Cell::new(false));
    let flag = invoked.clone();
    let g = Generator::new(move |_| {
        flag.set(true);
        Value::Unit
    });
    let expected = g.clone();

    let mut reg = registry(4);
    reg.claim(
        "literal keeps the generator",
        move |args| -> ClaimResult { Ok(args.generator(0)?.ptr_eq(&expected)) },
        vec![literal(g)],
    );
    reg.reps(10).unwrap().check(None).unwrap();
    assert_eq!(verdict(&reg, DEFAULT_GROUP, 0), Verdict::Pass);
    assert!(!invoked.get());
}

// === Hook Tests ===

#[test]
fn test_setup_counters_with_five_reps() {
    let g = Rc::new(Cell::new(0u32));
    let s = Rc::new(Cell::new(0u32));
    let seen = Rc::new(Cell::new(true));

    let mut reg = registry(5);
    let gc = g.clone();
    reg.setup(move || gc.set(gc.get() + 1));
    let sc = s.clone();
    reg.setup_group("G", move || sc.set(sc.get() + 1));

    let observed = s.clone();
    let ok = seen.clone();
    let calls = Rc::new(Cell::new(0u32));
    let c = calls.clone();
    reg.group("G").claim(
        "setup ran before the predicate",
        move |_| {
            c.set(c.get() + 1);
            if observed.get() != c.get() {
                ok.set(false);
            }
            true
        },
        vec![],
    );

    reg.reps(5).unwrap().check(Some("G")).unwrap();
    assert_eq!(g.get(), 5);
    assert_eq!(s.get(), 5);
    assert!(seen.get());
    assert_eq!(verdict(&reg, "G", 0), Verdict::Pass);
}

#[test]
fn test_teardown_runs_after_each_trial() {
    let torn = Rc::new(Cell::new(0u32));
    let mut reg = registry(6);
    let t = torn.clone();
    reg.teardown(move || t.set(t.get() + 1));

    let observed = torn.clone();
    let calls = Rc::new(Cell::new(0u32));
    let c = calls.clone();
    reg.claim(
        "teardown lags the predicate by one",
        move |_| {
            c.set(c.get() + 1);
            observed.get() + 1 == c.get()
        },
        vec![],
    );
    reg.reps(8).unwrap().check(None).unwrap();
    assert_eq!(torn.get(), 8);
    assert_eq!(verdict(&reg, DEFAULT_GROUP, 0), Verdict::Pass);
}

// === Nested Registry Tests ===

#[test]
fn test_predicate_can_drive_a_nested_registry() {
    let mut reg = registry(7);
    reg.claim(
        "an inner always-false claim fails",
        |_| -> ClaimResult {
            let mut inner = Registry::with_config(HarnessConfig::default().with_seed(1))?;
            inner.claim("inner", |_| false, vec![]);
            inner.reps(3)?.check(None)?;
            let raw = inner.raw(Some(DEFAULT_GROUP))?;
            Ok(raw[0].claims[0].verdict == Verdict::Fail)
        },
        vec![],
    );
    reg.reps(5).unwrap().check(None).unwrap();
    assert_eq!(verdict(&reg, DEFAULT_GROUP, 0), Verdict::Pass);
}
