mod record;
mod segment;

pub use record::{GeneRecord, MotifMatch, Sequence};
pub use segment::{segment, Segment, SegmentKind};
