//! Username refinement: composition, a custom error type and all three
//! extraction modes.
//!
//! Run with `RUST_LOG=exact=trace` to see evaluation events.

use exact::exact;
use exact::prelude::*;
use tracing_subscriber::EnvFilter;

const BLOCKLIST: &[&str] = &["offensive", "slur"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    #[error("invalid username")]
    Invalid,
    #[error("offensive username: {0}")]
    Offensive(String),
}

exact! {
    /// A trimmed, non-blank username under 100 characters.
    pub Username(String) for String;
    spec UsernameSpec;
    error UsernameError;
    body(cx, raw) {
        let name = cx.embed(&NOT_BLANK.and(TRIM), raw, |_| UsernameError::Invalid)?;
        cx.ensure(name.len() < 100, || UsernameError::Invalid)?;
        cx.ensure(!BLOCKLIST.contains(&name.as_str()), || {
            UsernameError::Offensive(name.clone())
        })?;
        Ok(name)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for input in ["  bob  ", "", "offensive"] {
        match Username::SPEC.evaluate(input) {
            Ok(name) => println!("✓ {input:?} -> {:?}", name.value()),
            Err(e) => println!("✗ {input:?}: {e}"),
        }
    }

    println!();
    println!("nullable: {:?}", Username::SPEC.evaluate_or_none("   "));

    if let Err(exception) = Username::SPEC.evaluate_or_throw("slur") {
        println!("throwing: {exception}");
        if let Some(UsernameError::Offensive(name)) = exception.payload::<UsernameError>() {
            println!("  payload names {name:?}");
        }
    }
}
