//! Domain names.
//!
//! Domain names appear on the wire as sequences of length-prefixed labels
//! terminated by an empty root label. Inside messages, the tail of a name
//! may be replaced by a compression pointer referring back to an earlier
//! occurrence. [`Name`] stores the uncompressed form; [`Compressor`]
//! carries the per-message state that turns repeated suffixes into
//! pointers while writing.

pub use self::absolute::{Name, NameError, NameIter};
pub use self::compressor::Compressor;
pub use self::label::{Label, LongLabelError};

mod absolute;
mod compressor;
mod label;
