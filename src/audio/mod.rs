pub mod file;
pub mod segment;
pub mod source;

pub use file::AudioFile;
pub use segment::AudioSegment;
pub use source::{FileSource, PushHandle, PushSource, SegmentSource};
