/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, evaluates it, logs how long it took, then returns its value.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Calculate the number of hexes in a hexagon-shaped map with the given
/// radius. Radius 0 means 1 hex, 1 is 7 hexes, 2 is 19, etc.
pub fn hexagon_len(radius: u16) -> usize {
    // We'll always have 3r^2+3r+1 hexes. f(0) = 1, and each ring adds 6r:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}
