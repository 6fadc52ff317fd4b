//! Closure combinators.
//!
//! Predicates, functions and consumers are ordinary closures; the extension
//! traits below add composition methods to every closure of the right shape.
//! Suppliers, two-argument functions and primitive specializations need no
//! extra machinery and appear directly in the demo.

use crate::style;
use rand::Rng;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::io::{self, Write};
use uuid::Uuid;

// =============================================================================
// Milestone 1: Extension traits
// =============================================================================

pub trait PredicateExt<T: ?Sized>: Fn(&T) -> bool {
    fn and<G>(self, other: G) -> impl Fn(&T) -> bool
    where
        Self: Sized,
        G: Fn(&T) -> bool,
    {
        move |t: &T| self(t) && other(t)
    }

    fn or<G>(self, other: G) -> impl Fn(&T) -> bool
    where
        Self: Sized,
        G: Fn(&T) -> bool,
    {
        move |t: &T| self(t) || other(t)
    }

    fn negate(self) -> impl Fn(&T) -> bool
    where
        Self: Sized,
    {
        move |t: &T| !self(t)
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> PredicateExt<T> for F {}

pub trait FunctionExt<A, B>: Fn(A) -> B {
    /// `f.and_then(g)` applies `f` first, then `g`.
    fn and_then<C, G>(self, after: G) -> impl Fn(A) -> C
    where
        Self: Sized,
        G: Fn(B) -> C,
    {
        move |a: A| after(self(a))
    }

    /// `f.compose(g)` applies `g` first, then `f`.
    fn compose<Z, G>(self, before: G) -> impl Fn(Z) -> B
    where
        Self: Sized,
        G: Fn(Z) -> A,
    {
        move |z: Z| self(before(z))
    }
}

impl<A, B, F: Fn(A) -> B> FunctionExt<A, B> for F {}

pub trait ConsumerExt<T: ?Sized>: Fn(&T) {
    fn followed_by<G>(self, next: G) -> impl Fn(&T)
    where
        Self: Sized,
        G: Fn(&T),
    {
        move |t: &T| {
            self(t);
            next(t);
        }
    }
}

impl<T: ?Sized, F: Fn(&T)> ConsumerExt<T> for F {}

// =============================================================================
// Milestone 2: Binary operators from comparators
// =============================================================================

/// Ties keep the first argument.
pub fn min_by<T, C>(comparator: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> Ordering,
{
    move |a: T, b: T| {
        if comparator(&a, &b) == Ordering::Greater {
            b
        } else {
            a
        }
    }
}

/// Ties keep the first argument.
pub fn max_by<T, C>(comparator: C) -> impl Fn(T, T) -> T
where
    C: Fn(&T, &T) -> Ordering,
{
    move |a: T, b: T| {
        if comparator(&a, &b) == Ordering::Less {
            b
        } else {
            a
        }
    }
}

// =============================================================================
// Milestone 3: Example functions
// =============================================================================

pub fn is_long_name(name: &str) -> bool {
    name.chars().count() > 5
}

pub fn starts_with_h(name: &str) -> bool {
    name.starts_with('H')
}

pub fn name_length(name: &str) -> usize {
    name.chars().count()
}

/// Same char count as `name_length`, saturating at `i32::MAX`.
pub fn length_as_int(s: &str) -> i32 {
    i32::try_from(name_length(s)).unwrap_or(i32::MAX)
}

pub fn square(n: usize) -> usize {
    n * n
}

// =============================================================================
// Demo
// =============================================================================

pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    tracing::info!("running functional interfaces demo");

    let sink = RefCell::new(Vec::<String>::new());
    let emit = |line: String| sink.borrow_mut().push(line);

    emit(style::heading("Predicate Example"));
    emit(format!("Is 'Hasan' long? {}", is_long_name("Hasan")));
    emit(format!(
        "Starts with H AND long? {}",
        is_long_name.and(starts_with_h)("Hasanuddin")
    ));
    emit(format!(
        "Starts with H OR long? {}",
        is_long_name.or(starts_with_h)("Ali")
    ));
    emit(format!("NOT long? {}", is_long_name.negate()("Ali")));

    emit(String::new());
    emit(style::heading("Function Example"));
    emit(format!("Length of 'Hasan': {}", name_length("Hasan")));
    emit(format!(
        "Length squared: {}",
        name_length.and_then(square)("Hasan")
    ));
    emit(format!(
        "Square then length: {}",
        square.compose(name_length)("Hasan")
    ));

    emit(String::new());
    emit(style::heading("Supplier Example"));
    let random_id = || Uuid::new_v4().to_string();
    emit(format!("Random ID: {}", random_id()));

    emit(String::new());
    emit(style::heading("Consumer Example"));
    let print_upper = |s: &str| emit(s.to_uppercase());
    let print_lower = |s: &str| emit(s.to_lowercase());
    print_upper.followed_by(print_lower)("Java8");

    emit(String::new());
    emit(style::heading("BiFunction Example"));
    let add = |a: i32, b: i32| a + b;
    emit(format!("10 + 20 = {}", add(10, 20)));

    emit(String::new());
    emit(style::heading("UnaryOperator Example"));
    let add_exclamation = |s: &str| format!("{s}!");
    emit(add_exclamation("Hello"));

    emit(String::new());
    emit(style::heading("BinaryOperator Example"));
    let multiply = |a: i32, b: i32| a * b;
    emit(format!("5 * 4 = {}", multiply(5, 4)));

    let min_by_op = min_by(i32::cmp);
    let max_by_op = max_by(i32::cmp);
    emit(format!("Min of (10, 20): {}", min_by_op(10, 20)));
    emit(format!("Max of (10, 20): {}", max_by_op(10, 20)));

    emit(String::new());
    emit(style::heading("BiPredicate Example"));
    let name_length_check = |name: &str, len: usize| name_length(name) == len;
    emit(format!(
        "Is 'Hasan' length 5? {}",
        name_length_check("Hasan", 5)
    ));

    emit(String::new());
    emit(style::heading("BiConsumer Example"));
    let print_name_and_age = |name: &str, age: u32| emit(format!("{name} is {age} years old"));
    print_name_and_age("Hasan", 30);

    emit(String::new());
    emit(style::heading("Primitive Specializations"));
    let is_even = |num: i32| num % 2 == 0;
    emit(format!("Is 10 even? {}", is_even(10)));

    let double_to_string = |val: f64| format!("Value: {val:?}");
    emit(double_to_string(3.14));

    emit(format!(
        "Length of 'Functional': {}",
        length_as_int("Functional")
    ));

    let random_int = || rand::thread_rng().gen_range(0..100);
    emit(format!("Random int: {}", random_int()));

    let double_value = |val: i64| val * 2;
    emit(format!("Double of 10L: {}", double_value(10)));

    let repeat_name = |name: &str, times: usize| (0..times).for_each(|_| emit(name.to_string()));
    repeat_name("Repeat", 3);

    for line in sink.into_inner() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
