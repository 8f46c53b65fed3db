mod macros;

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use portfolio_utils::Apply;
    /// fn with_signature(body: String, signature: Option<&str>) -> String {
    ///     body.apply_map(signature, |body, sig| format!("{body}\n-- \n{sig}"))
    /// }
    /// assert_eq!(with_signature("Hi".into(), None), "Hi");
    /// assert_eq!(with_signature("Hi".into(), Some("Ann")), "Hi\n-- \nAnn");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}
