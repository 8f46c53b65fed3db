/// Asserts that an expression matches a pattern, optionally followed by a
/// guard. Panics with the `Debug` representation of the value otherwise.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(,)?) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr $(,)?) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match {} if {}",
                ::core::stringify!($pat),
                ::core::stringify!($pred)
            ),
        }
    }};
}
