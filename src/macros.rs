/// Build an array of [`Value`][crate::Value]s from anything convertible into one.
///
/// ```
/// use loom_prelude::values;
///
/// let args = values![1, "two", 3.0];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        [$($crate::Value::from($value)),*]
    };
}

#[cfg(test)]
macro_rules! assert_snapshot {
    ($expr:expr, @$snapshot:literal) => {{
        {
            #[cfg(any(miri, feature = "__disable_snapshots"))]
            let _ = $expr;
        }

        {
            #[cfg(all(not(miri), not(feature = "__disable_snapshots")))]
            insta::assert_snapshot!($expr, @$snapshot);
        }
    }};
}
