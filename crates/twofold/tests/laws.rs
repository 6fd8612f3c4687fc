//! Property tests for the combinator laws both algebras commit to.

use proptest::prelude::*;
use std::cell::Cell;
use twofold::{Maybe, Outcome, maybe, outcome};

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::of)
}

fn any_nested_maybe() -> impl Strategy<Value = Maybe<Maybe<Maybe<i32>>>> {
    any::<Option<Option<Option<i32>>>>()
        .prop_map(|raw| Maybe::of(raw.map(|mid| Maybe::of(mid.map(Maybe::of)))))
}

fn any_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
}

fn halve(n: i32) -> Maybe<i32> {
    if n % 2 == 0 {
        maybe::present(n / 2)
    } else {
        maybe::absent()
    }
}

fn positive(n: i32) -> Maybe<i32> {
    if n > 0 {
        maybe::present(n.wrapping_sub(1))
    } else {
        maybe::absent()
    }
}

fn checked_double(n: i32) -> Outcome<i32, String> {
    match n.checked_mul(2) {
        Some(v) => outcome::success(v),
        None => outcome::failure(format!("overflow doubling {n}")),
    }
}

fn non_negative(n: i32) -> Outcome<i32, String> {
    if n >= 0 {
        outcome::success(n)
    } else {
        outcome::failure(format!("{n} is negative"))
    }
}

proptest! {
    // Classification

    #[test]
    fn of_some_is_present(value in any::<i32>(), default in any::<i32>()) {
        let m = maybe::of(Some(value));
        prop_assert!(m.is_present());
        prop_assert_eq!(m.get_or(default), value);
    }

    #[test]
    fn of_none_is_absent(default in any::<i32>()) {
        let m = maybe::of(None::<i32>);
        prop_assert!(m.is_absent());
        prop_assert_eq!(m.get_or(default), default);
    }

    // Maybe laws

    #[test]
    fn maybe_map_identity(value in any::<i32>()) {
        prop_assert_eq!(maybe::of(Some(value)).map(|x| x), maybe::present(value));
    }

    #[test]
    fn maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(maybe::present(value).flat_map(halve), halve(value));
    }

    #[test]
    fn maybe_right_identity(m in any_maybe()) {
        prop_assert_eq!(m.flat_map(maybe::present), m);
    }

    #[test]
    fn maybe_associativity(m in any_maybe()) {
        let left = m.flat_map(halve).flat_map(positive);
        let right = m.flat_map(|x| halve(x).flat_map(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn maybe_flat_map_is_map_then_flatten(m in any_maybe()) {
        prop_assert_eq!(m.flat_map(halve), m.map(halve).flatten());
    }

    #[test]
    fn maybe_flatten_idempotent(m in any_nested_maybe()) {
        let once = m.flatten();
        prop_assert_eq!(maybe::present(once).flatten(), once);
        prop_assert_eq!(once.flatten(), m.map(Maybe::flatten).flatten());
    }

    #[test]
    fn maybe_nullable_map_filters(m in any_maybe()) {
        let filtered = m.map_nullable(|n| (n % 3 == 0).then_some(n));
        let expected = match m {
            Maybe::Present(n) if n % 3 == 0 => Maybe::Present(n),
            _ => Maybe::Absent,
        };
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn maybe_tap_is_transparent(m in any_maybe()) {
        let calls = Cell::new(0);
        let tapped = m.tap(|_| calls.set(calls.get() + 1));
        prop_assert_eq!(tapped, m);
        prop_assert_eq!(calls.get(), usize::from(m.is_present()));
    }

    #[test]
    fn maybe_fold_runs_exactly_one_arm(m in any_maybe()) {
        let present_calls = Cell::new(0);
        let absent_calls = Cell::new(0);
        m.fold(
            |_| present_calls.set(present_calls.get() + 1),
            || absent_calls.set(absent_calls.get() + 1),
        );
        prop_assert_eq!(present_calls.get() + absent_calls.get(), 1);
        prop_assert_eq!(present_calls.get() == 1, m.is_present());
    }

    // Outcome laws

    #[test]
    fn outcome_map_never_reclassifies(o in any_outcome()) {
        let mapped = o.clone().map(|n| n.wrapping_add(1));
        prop_assert_eq!(mapped.is_ok(), o.is_ok());
        prop_assert_eq!(mapped, o.map(|n| n.wrapping_add(1)));
    }

    #[test]
    fn outcome_map_err_keeps_success(value in any::<i32>()) {
        let o = outcome::success::<i32, String>(value).map_err(|e| e.to_uppercase());
        prop_assert!(o.is_ok());
        prop_assert_eq!(o.get_or(0), value);
    }

    #[test]
    fn outcome_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            outcome::success::<i32, String>(value).flat_map(checked_double),
            checked_double(value)
        );
    }

    #[test]
    fn outcome_right_identity(o in any_outcome()) {
        prop_assert_eq!(o.clone().flat_map(outcome::success), o);
    }

    #[test]
    fn outcome_associativity(o in any_outcome()) {
        let left = o.clone().flat_map(checked_double).flat_map(non_negative);
        let right = o.flat_map(|x| checked_double(x).flat_map(non_negative));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn outcome_flat_map_is_map_then_flatten(o in any_outcome()) {
        prop_assert_eq!(
            o.clone().flat_map(non_negative),
            o.map(non_negative).flatten()
        );
    }

    #[test]
    fn outcome_taps_are_transparent(o in any_outcome()) {
        let successes = Cell::new(0);
        let failures = Cell::new(0);
        let tapped = o
            .clone()
            .tap(|_| successes.set(successes.get() + 1))
            .tap_error(|_| failures.set(failures.get() + 1));
        prop_assert_eq!(&tapped, &o);
        prop_assert_eq!(successes.get(), usize::from(o.is_ok()));
        prop_assert_eq!(failures.get(), usize::from(o.is_err()));
    }

    #[test]
    fn outcome_fold_runs_exactly_one_arm(o in any_outcome()) {
        let arms = Cell::new(0);
        let was_ok = o.is_ok();
        let picked_success = o.fold(
            |_| {
                arms.set(arms.get() + 1);
                true
            },
            |_| {
                arms.set(arms.get() + 1);
                false
            },
        );
        prop_assert_eq!(arms.get(), 1);
        prop_assert_eq!(picked_success, was_ok);
    }

    #[test]
    fn outcome_or_else_keeps_success(value in any::<i32>()) {
        let kept = outcome::success::<i32, String>(value)
            .or_else(|_| outcome::success::<i32, ()>(0));
        prop_assert_eq!(kept, outcome::success(value));
    }
}
