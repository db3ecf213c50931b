//! The harness's own claims, checked by `claimcheck run`.
//!
//! Core claims drive a second, nested registry from inside their predicates.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use claimcheck::specifiers::*;
use claimcheck::{
    specs, ClaimReport, ClaimResult, Generator, GroupReport, HarnessConfig, HarnessError,
    Registry, Specifier, Value, Verdict, DEFAULT_GROUP,
};

pub const CORE_GROUP: &str = "Core tests";
pub const SPECIFIER_GROUP: &str = "Specifier tests";

/// Register both suite groups into `registry`.
pub fn register(registry: &mut Registry) -> Result<(), HarnessError> {
    let nested = HarnessConfig::default().with_seed(registry.seed());
    let inner = Rc::new(RefCell::new(Registry::with_config(nested)?));
    register_core(registry, inner);
    register_specifiers(registry);
    Ok(())
}

fn register_core(registry: &mut Registry, inner: Rc<RefCell<Registry>>) {
    registry.group(CORE_GROUP);

    registry.claim(
        "claim should work with a constant",
        |args| -> ClaimResult { Ok(args.str(0)? == "a") },
        specs!["a"],
    );

    registry.claim(
        "claim should work with specifiers",
        |args| -> ClaimResult { Ok(args.str(0)? == "a") },
        specs![Specifier::from_fn(|_| Value::from("a"))],
    );

    registry.claim("claim should work without specifiers", |_| true, vec![]);

    let nested = inner.clone();
    registry.claim(
        "clear should work",
        move |_| -> ClaimResult {
            let mut reg = nested.borrow_mut();
            reg.claim("fail", |_| false, vec![]);
            reg.clear(None)?.check(None)?;
            Ok(reg.raw(Some(DEFAULT_GROUP))?[0].claims.is_empty())
        },
        vec![],
    );

    let nested = inner.clone();
    registry.claim(
        "reps should work",
        move |args| -> ClaimResult {
            let reps = u32::try_from(args.int(0)?)
                .map_err(|e| HarnessError::raised(format!("bad repetition count: {e}")))?;
            let mut reg = nested.borrow_mut();
            reg.clear(None)?;

            let runs = Rc::new(Cell::new(0u32));
            let counter = runs.clone();
            reg.claim("reps", move |_| counter.set(counter.get() + 1), vec![]);
            reg.reps(reps)?.check(None)?;
            Ok(runs.get() == reps)
        },
        vec![integer_range(1, 10)],
    );

    let nested = inner.clone();
    registry.claim(
        "claim should work with fail",
        move |_| -> ClaimResult {
            let mut reg = nested.borrow_mut();
            reg.clear(None)?;
            reg.claim("fail", |_| false, vec![]);
            reg.check(None)?;
            let expected = vec![ClaimReport { name: "fail".into(), verdict: Verdict::Fail }];
            Ok(reg.raw(Some(DEFAULT_GROUP))?[0].claims == expected)
        },
        vec![],
    );

    let nested = inner.clone();
    registry.claim(
        "claim should work when not tested",
        move |_| -> ClaimResult {
            let mut reg = nested.borrow_mut();
            reg.clear(None)?;
            reg.claim("missing", |_| (), vec![]);
            let expected = vec![ClaimReport { name: "missing".into(), verdict: Verdict::Untested }];
            Ok(reg.raw(Some(DEFAULT_GROUP))?[0].claims == expected)
        },
        vec![],
    );

    let nested = inner.clone();
    registry.claim(
        "groups should work",
        move |_| -> ClaimResult {
            let mut reg = nested.borrow_mut();
            reg.clear(None)?;
            reg.group("Test group").claim("missing", |_| (), vec![]);
            let expected = vec![
                GroupReport { name: DEFAULT_GROUP.into(), claims: vec![] },
                GroupReport {
                    name: "Test group".into(),
                    claims: vec![ClaimReport { name: "missing".into(), verdict: Verdict::Untested }],
                },
            ];
            Ok(reg.raw(None)? == expected)
        },
        vec![],
    );

    registry.claim(
        "setup hooks should run before every trial",
        move |_| -> ClaimResult {
            let mut reg = inner.borrow_mut();
            reg.clear(None)?;

            let global = Rc::new(Cell::new(0u32));
            let scoped = Rc::new(Cell::new(0u32));
            let g = global.clone();
            reg.setup(move || g.set(g.get() + 1));
            let s = scoped.clone();
            reg.setup_group("G", move || s.set(s.get() + 1));

            let observed = scoped.clone();
            let calls = Rc::new(Cell::new(0u32));
            let c = calls.clone();
            reg.group("G").claim(
                "sees setup",
                move |_| {
                    c.set(c.get() + 1);
                    observed.get() == c.get()
                },
                vec![],
            );
            reg.reps(5)?.check(None)?;
            Ok(global.get() == 5
                && scoped.get() == 5
                && reg.claims("G")?[0].result() == Verdict::Pass)
        },
        vec![],
    );
}

fn register_specifiers(registry: &mut Registry) {
    registry.group(SPECIFIER_GROUP);

    registry.claim(
        "array_of specifier",
        |args| -> ClaimResult {
            let numbers = args.list(0)?;
            let letters = args.list(1)?;
            Ok(numbers.len() == 3
                && numbers
                    .iter()
                    .all(|v| v.as_int().is_some_and(|n| (3..=15).contains(&n)))
                && letters == [Value::from("a"), Value::from("a"), Value::from("a")])
        },
        vec![array_of(3, integer_range(3, 15)), array_of(3, "a")],
    );

    registry.claim(
        "boolean specifier",
        |args| -> ClaimResult {
            args.bool(0)?;
            args.bool(1)
        },
        vec![boolean(), biased(1.0)],
    );

    registry.claim(
        "character specifier",
        |args| -> ClaimResult {
            let any = args.char(0)?;
            let narrow = args.char(1)?;
            Ok(any.is_ascii_lowercase() && narrow > 'l' && narrow < 'q')
        },
        vec![character(), character_range('m', 'p')],
    );

    registry.claim(
        "integer specifier",
        |args| -> ClaimResult { Ok(args.int(0)? < args.int(1)?) },
        vec![integer(2), integer_range(3, 5)],
    );

    let marker = Generator::new(|_| Value::Unit);
    let expected = marker.clone();
    registry.claim(
        "literal specifier",
        move |args| -> ClaimResult {
            Ok(args.generator(0)?.ptr_eq(&expected) && args.bool(1)?)
        },
        vec![literal(marker), literal(true)],
    );

    registry.claim(
        "number specifier",
        |args| -> ClaimResult { Ok(args.float(0)? < args.float(1)?) },
        vec![number(5.0), number_range(5.0, 10.0)],
    );

    registry.claim(
        "one_of specifier (list)",
        |args| -> ClaimResult { Ok(matches!(args.str(0)?, "a" | "b")) },
        vec![one_of(vec![
            Specifier::from_fn(|_| Value::from("a")),
            Specifier::from_fn(|_| Value::from("b")),
        ])],
    );

    registry.claim(
        "one_of specifier (string)",
        |args| -> ClaimResult {
            let c = args.char(0)?;
            Ok(c > 'b' && c < 'h')
        },
        vec![one_of_chars("cdefg")],
    );

    registry.claim(
        "spec_list specifier",
        |args| -> ClaimResult {
            let items = args.list(0)?;
            match (items.first().and_then(Value::as_int), items.get(1).and_then(Value::as_int)) {
                (Some(a), Some(b)) => Ok(a < b),
                _ => Ok(false),
            }
        },
        vec![spec_list(vec![integer(2), integer_range(3, 5)])],
    );

    registry.claim(
        "spec_record specifier",
        |args| -> ClaimResult {
            let record = args.map(0)?;
            match (
                record.get("foo").and_then(Value::as_int),
                record.get("bar").and_then(Value::as_int),
            ) {
                (Some(foo), Some(bar)) => Ok(foo < bar),
                _ => Ok(false),
            }
        },
        vec![spec_record([("foo", integer(2)), ("bar", integer_range(3, 5))])],
    );

    registry.claim(
        "string_of specifier",
        |args| -> ClaimResult {
            let s = args.str(0)?;
            Ok(s.chars().count() == 4 && s.chars().all(|c| ('a'..='c').contains(&c)))
        },
        vec![string_of(4, character_range('a', 'c'))],
    );

    registry.claim(
        "encoded specifier",
        |args| -> ClaimResult { Ok(args.str(0)? == "[1,\"a\"]") },
        vec![encoded(spec_list(specs![1, "a"]))],
    );
}
