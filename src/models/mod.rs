//! Shared data models spanning the engine layers.

pub mod bar;
pub mod fundamentals;
pub mod recommendation;
pub mod snapshot;

pub use bar::{is_strictly_ordered, Bar, Period};
pub use fundamentals::Fundamentals;
pub use recommendation::{Classification, Recommendation};
pub use snapshot::IndicatorSnapshot;
