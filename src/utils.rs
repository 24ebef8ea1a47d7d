/// Evaluates an expression and logs how long it took at debug level.
macro_rules! timed {
    ($e:expr, $name:expr) => {{
        let start = std::time::Instant::now();
        let result = $e;
        tracing::debug!(elapsed = ?start.elapsed(), "{}", $name);
        result
    }};
}

pub(crate) use timed;

#[test]
fn timed_passes_value_through() {
    let value = timed!(2 + 2, "addition");
    assert_eq!(value, 4);
}
