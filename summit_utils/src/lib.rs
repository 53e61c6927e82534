pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use summit_utils::Apply;
    /// fn greeting(name: Option<&str>) -> String {
    ///     String::from("Hello").apply_map(name, |slf, name| format!("{slf}, {name}"))
    /// }
    /// assert_eq!(greeting(None), "Hello");
    /// assert_eq!(greeting(Some("Summit")), "Hello, Summit");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }
}

impl<T> Apply for T {}

/// Asserts that an expression matches a pattern, printing the value on failure.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the predicate")]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Outcome {
        Sent(u32),
        Dropped,
    }

    #[test]
    fn apply_map_some_and_none() {
        assert_eq!(1.apply_map(Some(2), |a, b| a + b), 3);
        assert_eq!(1.apply_map(None, |a, b: i32| a + b), 1);
    }

    #[test]
    fn assert_matches_pattern() {
        assert_matches!(Outcome::Sent(1), Outcome::Sent(_));
        assert_matches!(Outcome::Sent(2), Outcome::Sent(n) if *n == 2);
        assert_matches!(Outcome::Dropped, Outcome::Dropped);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_mismatch() {
        assert_matches!(Outcome::Dropped, Outcome::Sent(_));
    }
}
