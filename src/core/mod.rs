pub mod errors;
pub mod constants;
pub mod range;
pub mod util;
pub mod counter;
pub mod readable_histogram;

pub use self::counter::Counter;

pub use self::errors::*;
pub use self::range::Range;
pub use self::readable_histogram::ReadableHistogram;
