//! Call-syntax sugar for curry nodes.

/// Applies arguments to a curry node without spelling out the tuple.
///
/// `apply!(node, a, b)` expands to `node.apply((a, b,))`, so the receiver is
/// borrowed and stays reusable.
///
/// # Examples
///
/// ```
/// use currying::{apply, curry};
///
/// fn add(a: i32, b: i32, c: i32) -> i32 {
///     a + b + c
/// }
///
/// let curried = curry(add);
///
/// assert_eq!(apply!(apply!(apply!(curried, 10), 11), 12), 33);
/// assert_eq!(apply!(apply!(curried, 10, 11), 12), 33);
/// assert_eq!(apply!(curried, 10, 11, 12), 33);
///
/// // An empty application yields an equivalent node.
/// let same = apply!(curried);
/// assert_eq!(same.remaining(), 3);
/// ```
#[macro_export]
macro_rules! apply {
    ($node:expr $(, $argument:expr)* $(,)?) => {
        $node.apply(($($argument,)*))
    };
}
