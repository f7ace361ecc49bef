//! Shopping list aggregation for a week of planned meals.
//!
//! Recipe markup goes through [`extract`], each raw line through
//! [`normalize`], and [`aggregate`] counts canonical names across the plan's
//! recipes minus an [`ExclusionSet`]. [`format`] renders the result.

mod aggregate;
mod exclusion;
mod extract;
mod format;
mod normalize;
pub mod unit;

pub use aggregate::*;
pub use exclusion::*;
pub use extract::*;
pub use format::*;
pub use normalize::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}
