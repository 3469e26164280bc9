mod detail;
mod flags;
mod indicator;
mod raw;
mod record;
mod scored;

pub use detail::CachedDetail;
pub use flags::RiskFlag;
pub use indicator::Indicator;
pub use raw::{RawRecord, RawSnapshot};
pub use record::{IndicatorRecord, UNKNOWN_SECTOR};
pub use scored::{RankedSnapshot, ScoredRecord};
