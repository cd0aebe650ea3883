use std::future::Future;
use std::time::{Duration, Instant};

use tracing::info;

/// Run `op` once and return its output together with the wall-clock time it took
pub async fn measure<F, Fut, T>(op: F) -> (T, Duration)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let start = Instant::now();
    let output = op().await;
    (output, start.elapsed())
}

/// Run `op` once, log how long it took, and hand back its output untouched
pub async fn timed<F, Fut, T>(label: &str, op: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let (output, elapsed) = measure(op).await;
    info!(
        operation = label,
        elapsed_ms = elapsed.as_millis() as u64,
        "Request finished in: {:.4} seconds.",
        elapsed.as_secs_f64()
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn timed_runs_the_operation_exactly_once() {
        let calls = AtomicUsize::new(0);
        let result = timed("count", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            42
        })
        .await;

        assert_eq!(result, 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn timed_passes_errors_through() {
        let result: Result<(), String> = timed("fail", || async { Err("boom".to_string()) }).await;
        assert_eq!(result, Err("boom".to_string()));
    }

    #[tokio::test]
    async fn measure_reports_elapsed_time() {
        let ((), elapsed) = measure(|| tokio::time::sleep(Duration::from_millis(20))).await;
        assert!(elapsed >= Duration::from_millis(20));
    }
}
