mod error;
mod extract;
mod range;
mod sequence;
mod version;

pub use error::Error;
pub use range::Range;
pub use sequence::Sequence;
pub use version::IntoVersion;
pub use version::Version;

/// Maximum number of versions a [`Sequence`] yields. Only the patch position
/// moves, so a range whose upper bound sits on a later major or minor line
/// would otherwise never reach it.
pub const MAX_SEQUENCE_LEN: usize = 65_536;
