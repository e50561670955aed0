//! Fork-join helpers over rayon.

/// Runs `a` and `b` and returns both results.
///
/// With `parallel` set the closures go through `rayon::join` and may run on
/// different worker threads; otherwise they run in order on the calling thread.
/// Either way both have finished before this returns.
pub fn join_if<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel {
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn sequential_runs_in_order() {
        let counter = AtomicUsize::new(0);
        let (a, b) = join_if(
            false,
            || counter.fetch_add(1, Ordering::SeqCst),
            || counter.fetch_add(1, Ordering::SeqCst),
        );
        assert_eq!((a, b), (0, 1));
    }

    #[test]
    fn parallel_returns_both_results() {
        let items: Vec<u32> = (0..1000).collect();
        let (sum, max) = join_if(
            true,
            || items.iter().map(|&x| x as u64).sum::<u64>(),
            || items.iter().copied().max(),
        );
        assert_eq!(sum, 499_500);
        assert_eq!(max, Some(999));
    }

    #[test]
    fn parallel_joins_before_returning() {
        let done = AtomicUsize::new(0);
        join_if(
            true,
            || {
                std::thread::sleep(std::time::Duration::from_millis(5));
                done.fetch_add(1, Ordering::SeqCst);
            },
            || {
                done.fetch_add(1, Ordering::SeqCst);
            },
        );
        assert_eq!(done.load(Ordering::SeqCst), 2);
    }
}
