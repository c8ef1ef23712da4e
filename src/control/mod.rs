//! Control structures.
//!
//! - [`Either`]: the failure/success channel every [`Task`](crate::effect::Task) settles into
//! - [`Step`]: the `Loop`/`Done` verdict that drives trampolines
//! - [`Pair`]: two values carried together, used by `chain_rec`
//!
//! # Examples
//!
//! ```rust
//! use functional_io::control::{Either, Step};
//!
//! let digits = Step::tail_rec((1234_u32, 0_u32), |(n, count)| {
//!     if n == 0 { Step::Done(count) } else { Step::Loop((n / 10, count + 1)) }
//! });
//! let checked: Either<&str, u32> = if digits == 4 { Either::Right(digits) } else { Either::Left("bad") };
//! assert_eq!(checked, Either::Right(4));
//! ```

mod either;
mod pair;
mod step;

pub use either::Either;
pub use pair::Pair;
pub use step::Step;
