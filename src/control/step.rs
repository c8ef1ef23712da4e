//! Step type - the state of a trampoline loop.
//!
//! A step is either `Loop(next)`, asking the driver to go around once more,
//! or `Done(result)`, ending the loop. [`Step::tail_rec`] drives a synchronous
//! loop; [`Task::chain_rec`](crate::effect::Task::chain_rec) drives one that
//! accumulates deferred work.

use crate::Factorized;

/// One iteration's verdict in a trampoline loop.
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Step;
///
/// let sum = Step::tail_rec((0_u64, 1_u64), |(total, n)| {
///     if n > 100_000 {
///         Step::Done(total)
///     } else {
///         Step::Loop((total + n, n + 1))
///     }
/// });
/// assert_eq!(sum, 5_000_050_000);
/// assert_eq!(Step::<i32>::Loop(1).to_string(), "Step.Loop(1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Factorized)]
pub enum Step<A, B = A> {
    /// Continue with the carried state.
    Loop(A),
    /// Stop with the carried result.
    Done(B),
}

impl<A, B> Step<A, B> {
    /// Runs `function` from `initial` until it returns `Done`.
    ///
    /// The loop is iterative, so the stack does not grow with the number
    /// of iterations.
    pub fn tail_rec<F>(initial: A, mut function: F) -> B
    where
        F: FnMut(A) -> Self,
    {
        let mut state = initial;
        loop {
            match function(state) {
                Self::Loop(next) => state = next,
                Self::Done(result) => return result,
            }
        }
    }

    /// Maps the `Loop` payload.
    #[inline]
    pub fn map_loop<C, F>(self, function: F) -> Step<C, B>
    where
        F: FnOnce(A) -> C,
    {
        match self {
            Self::Loop(state) => Step::Loop(function(state)),
            Self::Done(result) => Step::Done(result),
        }
    }

    /// Maps the `Done` payload.
    #[inline]
    pub fn map_done<C, F>(self, function: F) -> Step<A, C>
    where
        F: FnOnce(B) -> C,
    {
        match self {
            Self::Loop(state) => Step::Loop(state),
            Self::Done(result) => Step::Done(function(result)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(10, 3_628_800)]
    #[case(20, 2_432_902_008_176_640_000)]
    fn tail_rec_computes_factorial(#[case] n: u64, #[case] expected: u64) {
        let result = Step::tail_rec((n, 1_u64), |(n, accumulator)| {
            if n <= 1 {
                Step::Done(accumulator)
            } else {
                Step::Loop((n - 1, n * accumulator))
            }
        });
        assert_eq!(result, expected);
    }

    #[test]
    fn tail_rec_survives_a_million_iterations() {
        let count = Step::tail_rec(0_u32, |n| {
            if n == 1_000_000 {
                Step::Done(n)
            } else {
                Step::Loop(n + 1)
            }
        });
        assert_eq!(count, 1_000_000);
    }

    #[test]
    fn predicates_follow_the_variant() {
        let looping: Step<i32, &str> = Step::Loop(1);
        let done: Step<i32, &str> = Step::Done("end");
        assert!(looping.is_loop());
        assert!(done.is_done());
        assert_eq!(done.to_string(), "Step.Done(\"end\")");
    }

    #[test]
    fn map_loop_leaves_done_alone() {
        let done: Step<i32, i32> = Step::Done(5);
        assert_eq!(done.map_loop(|n| n * 2), Step::Done(5));
        assert_eq!(Step::<i32, i32>::Loop(5).map_loop(|n| n * 2), Step::Loop(10));
        assert_eq!(done.map_done(|n| n + 1), Step::Done(6));
    }
}
