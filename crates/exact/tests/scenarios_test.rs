//! End-to-end scenarios: composed specifications, refined newtypes and the
//! three extraction modes.

use std::sync::atomic::{AtomicUsize, Ordering};

use exact::combinators::And;
use exact::exact;
use exact::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// FIXTURES
// ============================================================================

/// Composite spec as a `const`.
const NOT_BLANK_TRIMMED: And<NotBlank, Trim> = and(NOT_BLANK, TRIM);

/// The same composite, built on first use.
static LAZY_NOT_BLANK_TRIMMED: Lazy<And<NotBlank, Trim>> = Lazy::new(|| NOT_BLANK.and(TRIM));

mod username {
    use exact::exact;

    use super::NOT_BLANK_TRIMMED;

    const BLOCKLIST: &[&str] = &["offensive", "slur"];

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    pub enum UsernameError {
        #[error("invalid username")]
        Invalid,
        #[error("offensive username: {0}")]
        Offensive(String),
    }

    exact! {
        #[derive(PartialEq, Eq)]
        pub Username(String) for String;
        spec UsernameSpec;
        error UsernameError;
        body(cx, raw) {
            let name = cx.embed(&NOT_BLANK_TRIMMED, raw, |_| UsernameError::Invalid)?;
            cx.ensure(name.len() < 100, || UsernameError::Invalid)?;
            cx.ensure(!BLOCKLIST.contains(&name.as_str()), || {
                UsernameError::Offensive(name.clone())
            })?;
            Ok(name)
        }
    }
}

use username::{Username, UsernameError, UsernameSpec};

// ============================================================================
// NOT BLANK
// ============================================================================

#[rstest]
#[case("hello", Ok("hello"))]
#[case("", Err("cannot be blank"))]
#[case("   ", Err("cannot be blank"))]
fn not_blank(#[case] input: &str, #[case] expected: Result<&str, &str>) {
    let result = NOT_BLANK.evaluate(input);
    assert_eq!(result.as_deref().map_err(ExactError::message), expected);
}

// ============================================================================
// NOT BLANK, THEN TRIM
// ============================================================================

#[test]
fn not_blank_trimmed_trims() {
    assert_eq!(NOT_BLANK_TRIMMED.evaluate("  hi  ").unwrap(), "hi");
    assert_eq!(LAZY_NOT_BLANK_TRIMMED.evaluate("  hi  ").unwrap(), "hi");
}

#[test]
fn not_blank_trimmed_rejects_blank() {
    let error = NOT_BLANK_TRIMMED.evaluate("   ").unwrap_err();
    assert_eq!(error.message(), "cannot be blank");
    assert!(LAZY_NOT_BLANK_TRIMMED.evaluate("   ").is_err());
}

// ============================================================================
// USERNAME
// ============================================================================

#[test]
fn username_accepts() {
    let username = UsernameSpec.evaluate("bob").unwrap();
    assert_eq!(username.value(), "bob");
    assert_eq!(Username::SPEC.evaluate("  bob ").unwrap().into_inner(), "bob");
}

#[rstest]
#[case("offensive", UsernameError::Offensive("offensive".to_owned()))]
#[case("", UsernameError::Invalid)]
#[case("    ", UsernameError::Invalid)]
fn username_rejects(#[case] input: &str, #[case] expected: UsernameError) {
    assert_eq!(Username::SPEC.evaluate(input).unwrap_err(), expected);
}

#[test]
fn username_length_limit() {
    assert!(Username::SPEC.evaluate("x".repeat(99)).is_ok());
    assert_eq!(
        Username::SPEC.evaluate("x".repeat(100)).unwrap_err(),
        UsernameError::Invalid
    );
}

#[test]
fn username_reevaluates_to_itself() {
    let first = Username::SPEC.evaluate(" alice ").unwrap();
    let second = Username::SPEC.evaluate(first.value().clone()).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// EXTRACTION MODES
// ============================================================================

#[test]
fn failing_input_in_every_mode() {
    assert!(Username::SPEC.evaluate_or_none("offensive").is_none());

    let exception = Username::SPEC.evaluate_or_throw("offensive").unwrap_err();
    let payload = exception.payload::<UsernameError>().unwrap();
    assert_eq!(payload, &UsernameError::Offensive("offensive".to_owned()));
    assert_eq!(exception.message(), payload.to_string());
}

#[test]
fn exception_rendering() {
    let exception = NOT_BLANK.evaluate_or_throw("").unwrap_err();
    insta::assert_snapshot!(exception, @"exact error: cannot be blank");

    let exception = Username::SPEC.evaluate_or_throw("slur").unwrap_err();
    insta::assert_snapshot!(exception, @"exact error: offensive username: slur");
}

#[test]
fn panicking_mode_carries_exception() {
    let caught = std::panic::catch_unwind(|| Username::SPEC.evaluate_or_panic("")).unwrap_err();
    let exception = *caught.downcast::<ExactException>().unwrap();
    assert_eq!(
        exception.into_payload::<UsernameError>().unwrap(),
        UsernameError::Invalid
    );
}

#[test]
fn passing_input_in_every_mode() {
    let expected = Username::SPEC.evaluate("carol").unwrap();
    assert_eq!(Username::SPEC.evaluate_or_none("carol"), Some(expected.clone()));
    assert_eq!(Username::SPEC.evaluate_or_throw("carol").unwrap(), expected.clone());
    assert_eq!(Username::SPEC.evaluate_or_panic("carol"), expected);
}

// ============================================================================
// SHORT-CIRCUIT
// ============================================================================

static P1_CALLS: AtomicUsize = AtomicUsize::new(0);
static P2_CALLS: AtomicUsize = AtomicUsize::new(0);
static P3_CALLS: AtomicUsize = AtomicUsize::new(0);

fn counted(
    counter: &'static AtomicUsize,
    pass: bool,
    name: &'static str,
) -> BoxSpec<i32, i32, ExactError> {
    must_be(
        move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            pass
        },
        move |_| ExactError::new(name),
    )
    .boxed()
}

#[test]
fn all_of_stops_at_first_failure() {
    let spec = all_of(vec![
        counted(&P1_CALLS, false, "p1"),
        counted(&P2_CALLS, true, "p2"),
        counted(&P3_CALLS, true, "p3"),
    ]);

    assert_eq!(spec.evaluate(0).unwrap_err().message(), "p1");
    assert_eq!(P1_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(P2_CALLS.load(Ordering::SeqCst), 0);
    assert_eq!(P3_CALLS.load(Ordering::SeqCst), 0);
}

// ============================================================================
// CONSTRAINT VIOLATIONS
// ============================================================================

#[test]
fn constraint_violation_rendering() {
    let violation = PositiveDouble::tagged(-3.5, "main test").unwrap_err();
    insta::assert_snapshot!(
        violation,
        @r#"[exact] PositiveDouble constraint violated in "main test". The value "-3.5" doesn't meet the requirement: "Must be a positive and finite number.""#
    );

    let exception = PositiveDouble::SPEC.evaluate_or_throw(0.0).unwrap_err();
    assert!(exception.is::<ConstraintViolation>());
}

// ============================================================================
// EXACT VALUE
// ============================================================================

#[test]
fn exact_value_refines_further() {
    let name = NotBlankString::from_spec("ada".to_owned(), &NOT_BLANK).unwrap();
    let trimmed: TrimmedString = name.refine(&TRIMMED).unwrap();
    assert_eq!(trimmed.as_str(), "ada");

    let padded = NotBlankString::from_spec(" ada".to_owned(), &NOT_BLANK).unwrap();
    assert_eq!(
        padded.refine(&TRIMMED).unwrap_err().message(),
        "\" ada\" contains whitespace."
    );
}

// Keep the macro import exercised at the top level too.
exact! {
    #[derive(PartialEq, Eq)]
    pub Percentage(u8) for i64;
    spec PercentageSpec;
    error ExactError;
    body(cx, raw) {
        let value = cx.ensure_some(u8::try_from(raw).ok(), || ExactError::no_match(&raw))?;
        cx.check(value <= 100)?;
        Ok(value)
    }
}

#[rstest]
#[case(0, true)]
#[case(100, true)]
#[case(101, false)]
#[case(-1, false)]
fn percentage(#[case] raw: i64, #[case] accepted: bool) {
    assert_eq!(Percentage::SPEC.evaluate(raw).is_ok(), accepted);
}

#[test]
fn percentage_messages() {
    assert_eq!(
        PercentageSpec.evaluate(-1).unwrap_err().message(),
        "Value (-1) doesn't match the predicate"
    );
    assert_eq!(PercentageSpec.evaluate(101).unwrap_err().message(), "Failed condition.");
}

// ============================================================================
// BUILDER CHAIN
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Account {
    Admin,
    User(u32),
}

fn account() -> impl Spec<Input = String, Output = Account, Error = ExactError> {
    exact_builder(|b: ExactBuilder<String>| {
        b.requirement(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_owned())
            .map_or_fail(|cx, s| {
                if s == "a/" {
                    return Ok(Account::Admin);
                }
                let id = cx.ensure_some(s.strip_prefix("u/"), || {
                    ExactError::new(format!("unknown account kind: {s}"))
                })?;
                let id = cx.ensure_some(id.parse::<u32>().ok(), || {
                    ExactError::new(format!("invalid user id: {id}"))
                })?;
                Ok(Account::User(id))
            })
            .finish(|account| account)
    })
}

#[rstest]
#[case("a/", Account::Admin)]
#[case(" a/ ", Account::Admin)]
#[case("u/123", Account::User(123))]
fn account_accepts(#[case] input: &str, #[case] expected: Account) {
    assert_eq!(account().evaluate(input).unwrap(), expected);
}

#[rstest]
#[case("", "Predicate failed for value: \"\"")]
#[case(" ", "Predicate failed for value: \" \"")]
#[case("Okay", "unknown account kind: Okay")]
#[case("u/Fail", "invalid user id: Fail")]
fn account_rejects(#[case] input: &str, #[case] message: &str) {
    assert_eq!(account().evaluate(input).unwrap_err().message(), message);
}

// ============================================================================
// RECOVERY INSIDE A BODY
// ============================================================================

fn display_name() -> impl Spec<Input = String, Output = String, Error = ExactError> {
    from_fn(|cx: &mut Raise<ExactError>, raw: String| {
        let name = cx
            .embed(&NOT_BLANK, raw, |e| e)
            .unwrap_or_else(|_| "anonymous".to_owned());
        cx.ensure(name.len() < 5, || ExactError::new("display name too long"))?;
        Ok(name)
    })
}

#[rstest]
#[case("ada", Ok("ada"))]
#[case("", Err("display name too long"))]
#[case("   ", Err("display name too long"))]
#[case("bartholomew", Err("display name too long"))]
fn display_name_raises_after_fallback(#[case] input: &str, #[case] expected: Result<&str, &str>) {
    let result = display_name().evaluate(input);
    assert_eq!(result.as_deref().map_err(ExactError::message), expected);
}
