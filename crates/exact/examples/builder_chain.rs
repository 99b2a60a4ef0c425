//! Step-by-step refinement with `exact_builder`.
//!
//! Parses `a/` into an admin and `u/<id>` into a user. The chain is poisoned
//! by the first failing step and later steps never run.
//!
//! Run with `RUST_LOG=exact=trace` to see where a chain was poisoned.

use exact::prelude::*;
use tracing_subscriber::EnvFilter;

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

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let spec = account();
    for input in ["a/", " u/123 ", "", "Okay", "u/Fail"] {
        match spec.evaluate(input) {
            Ok(account) => println!("✓ {input:?} -> {account:?}"),
            Err(e) => println!("✗ {input:?}: {e}"),
        }
    }
}
