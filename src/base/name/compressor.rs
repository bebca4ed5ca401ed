//! Domain name compression state.
//!
//! This is a private module. Its public types are re-exported by the
//! parent module.

use std::collections::HashMap;

//------------ Compressor ----------------------------------------------------

/// The compression state of one message being written.
///
/// In an attempt to keep messages small, DNS uses a procedure called "name
/// compression": instead of writing a domain name suffix that already
/// appears earlier in the message again, a two byte pointer to its first
/// occurrence is written. The compressor remembers, for every name suffix
/// written out literally so far, the offset at which it was written.
///
/// One compressor belongs to exactly one message and one pass over it.
/// Since the length of compressed record data depends on everything
/// written before it, predicting lengths works the same way writing does:
/// run the length computations in message order against one fresh
/// compressor, then the writes in the same order against another fresh
/// one. Both passes traverse the same suffixes and record the same
/// offsets, so the predicted lengths are exact.
///
/// Only offsets of up to [`MAX_OFFSET`][Self::MAX_OFFSET] can be recorded
/// since the pointer encoding reserves the top two bits of its first byte
/// as a tag. Suffixes written beyond that offset are simply never
/// recorded.
///
/// Matching is case-insensitive per label, as name comparison is; the
/// bytes actually written keep the caller's case.
#[derive(Clone, Debug)]
pub struct Compressor {
    /// Maps a lowercased wire-format suffix to its offset in the message.
    entries: HashMap<Box<[u8]>, u16>,

    /// Whether compression is performed at all.
    ///
    /// A disabled compressor never matches and never records, which makes
    /// every name write itself out in full.
    enabled: bool,
}

impl Compressor {
    /// The largest message offset a pointer can refer to.
    pub const MAX_OFFSET: usize = 0x3FFF;

    /// Creates a new, empty compressor.
    #[must_use]
    pub fn new() -> Self {
        Compressor {
            entries: HashMap::new(),
            enabled: true,
        }
    }

    /// Creates a compressor that never compresses.
    ///
    /// Useful for writing messages that must not contain compressed names
    /// at all while keeping the code paths identical.
    #[must_use]
    pub fn disabled() -> Self {
        Compressor {
            entries: HashMap::new(),
            enabled: false,
        }
    }

    /// Returns the recorded offset of a wire-format suffix, if any.
    pub(super) fn get(&self, suffix: &[u8]) -> Option<u16> {
        if !self.enabled {
            return None;
        }
        self.entries.get(Self::key(suffix).as_slice()).copied()
    }

    /// Records a wire-format suffix as written at `offset`.
    ///
    /// Offsets beyond [`MAX_OFFSET`][Self::MAX_OFFSET] are quietly
    /// ignored, as is a suffix that is already known: the first
    /// occurrence wins, matching what a reader of the message sees.
    pub(super) fn insert(&mut self, suffix: &[u8], offset: usize) {
        if !self.enabled || offset > Self::MAX_OFFSET {
            return;
        }
        self.entries
            .entry(Self::key(suffix).into_boxed_slice())
            .or_insert(offset as u16);
    }

    fn key(suffix: &[u8]) -> Vec<u8> {
        suffix.to_ascii_lowercase()
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let mut cx = Compressor::new();
        cx.insert(b"\x03www\x07example\x03com\x00", 2);
        cx.insert(b"\x03www\x07example\x03com\x00", 40);
        assert_eq!(cx.get(b"\x03www\x07example\x03com\x00"), Some(2));
    }

    #[test]
    fn case_insensitive_match() {
        let mut cx = Compressor::new();
        cx.insert(b"\x07Example\x03com\x00", 12);
        assert_eq!(cx.get(b"\x07eXaMpLe\x03COM\x00"), Some(12));
    }

    #[test]
    fn offset_bound() {
        let mut cx = Compressor::new();
        cx.insert(b"\x03far\x00", 0x4000);
        assert_eq!(cx.get(b"\x03far\x00"), None);
        cx.insert(b"\x04near\x00", 0x3FFF);
        assert_eq!(cx.get(b"\x04near\x00"), Some(0x3FFF));
    }

    #[test]
    fn disabled_never_matches() {
        let mut cx = Compressor::disabled();
        cx.insert(b"\x03com\x00", 2);
        assert_eq!(cx.get(b"\x03com\x00"), None);
    }
}
