//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the
//! parent module.

use super::super::wire::Compose;
use core::{cmp, fmt, hash};
use octseq::builder::OctetsBuilder;

//------------ Label ---------------------------------------------------------

/// An uninterpreted slice of up to 63 bytes.
///
/// On the wire a label is preceded by a single length byte. Label content
/// is arbitrary binary data; in particular it is not guaranteed to be
/// ASCII, let alone UTF-8. Comparison is done ignoring ASCII case, as DNS
/// names compare case-insensitively.
///
/// This is an unsized type wrapping the content of a valid label.
#[derive(Eq)]
#[repr(transparent)]
pub struct Label([u8]);

impl Label {
    /// The maximum number of content bytes.
    pub const MAX_LEN: usize = 63;

    /// Creates a label from the underlying slice without any checking.
    ///
    /// # Safety
    ///
    /// The `slice` must be at most 63 bytes long.
    pub(super) unsafe fn from_slice_unchecked(slice: &[u8]) -> &Self {
        &*(slice as *const [u8] as *const Self)
    }

    /// Returns a static reference to the root label.
    ///
    /// The root label is an empty label.
    #[must_use]
    pub fn root() -> &'static Self {
        unsafe { Self::from_slice_unchecked(b"") }
    }

    /// Converts a byte slice into a label.
    ///
    /// This will fail if the slice is longer than 63 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<&Self, LongLabelError> {
        if slice.len() > Self::MAX_LEN {
            Err(LongLabelError(()))
        } else {
            Ok(unsafe { Self::from_slice_unchecked(slice) })
        }
    }

    /// Returns a reference to the underlying byte slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the label content.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether this is the root label.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length of the label on the wire, length byte included.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1 + self.0.len()
    }
}

//--- Compose

impl Compose for Label {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        // Safe cast: the length was checked at construction.
        target.append_slice(&[self.0.len() as u8])?;
        target.append_slice(&self.0)
    }
}

//--- AsRef

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

//--- PartialEq, PartialOrd, Ord, Hash

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0
            .iter()
            .map(u8::to_ascii_lowercase)
            .cmp(other.0.iter().map(u8::to_ascii_lowercase))
    }
}

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Hash the length first so that the hash of a name is unambiguous
        // over its label structure.
        state.write_u8(self.0.len() as u8);
        for ch in self.0.iter() {
            state.write_u8(ch.to_ascii_lowercase())
        }
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.0.iter() {
            if ch == b'.' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if !(0x20..0x7F).contains(&ch) {
                write!(f, "\\{:03}", ch)?;
            } else {
                write!(f, "{}", ch as char)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Label(\"{}\")", self)
    }
}

//------------ LongLabelError ------------------------------------------------

/// A label is longer than the allowed 63 bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongLabelError(());

impl fmt::Display for LongLabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("long label")
    }
}

impl std::error::Error for LongLabelError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_slice() {
        assert!(Label::from_slice(&[0u8; 63]).is_ok());
        assert!(Label::from_slice(&[0u8; 64]).is_err());
        assert!(Label::from_slice(b"").unwrap().is_root());
    }

    #[test]
    fn eq_ignores_case() {
        let left = Label::from_slice(b"Example").unwrap();
        let right = Label::from_slice(b"eXAMPLe").unwrap();
        assert_eq!(left, right);
        assert_ne!(left, Label::from_slice(b"examples").unwrap());
    }

    #[test]
    fn hash_matches_eq() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash(label: &Label) -> u64 {
            let mut hasher = DefaultHasher::new();
            label.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(
            hash(Label::from_slice(b"Example").unwrap()),
            hash(Label::from_slice(b"example").unwrap()),
        );
    }
}
