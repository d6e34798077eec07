/// A ternary expression.  Rust's `if` is already an expression, but
/// `cargo fmt` spreads it over five lines, and the border cases of the
/// seam graph (first position, last position, everything between)
/// read far better as one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $when_true: expr, $when_false: expr) => {
        if $condition {
            $when_true
        } else {
            $when_false
        }
    };
}
