//! Character strings.
//!
//! The somewhat ill-named `<character-string>` is a length-delimited byte
//! sequence of up to 255 bytes: one length byte followed by that many
//! content bytes. Despite the name the content is not necessarily text.

use super::wire::{Compose, Parse, ParseError};
use bytes::Bytes;
use core::{cmp, fmt, hash};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ CharStr -------------------------------------------------------

/// A byte sequence of up to 255 bytes.
///
/// The length limit is enforced at construction time; composing therefore
/// cannot fail for reasons of its own.
#[derive(Clone, Default)]
pub struct CharStr(Bytes);

impl CharStr {
    /// The maximum number of content bytes.
    pub const MAX_LEN: usize = 255;

    /// Creates a new empty character string.
    #[must_use]
    pub fn empty() -> Self {
        CharStr(Bytes::new())
    }

    /// Creates a character string from an octets sequence.
    ///
    /// Fails if the sequence is longer than 255 bytes.
    pub fn from_octets(octets: Bytes) -> Result<Self, CharStrError> {
        if octets.len() > Self::MAX_LEN {
            Err(CharStrError(()))
        } else {
            Ok(CharStr(octets))
        }
    }

    /// Creates a character string by copying a slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self, CharStrError> {
        Self::from_octets(Bytes::copy_from_slice(slice))
    }

    /// Returns the content as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns the number of content bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the character string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length this value occupies on the wire.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1 + self.0.len()
    }
}

//--- Parse and Compose

impl<'a> Parse<'a> for CharStr {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        let len = parser.parse_u8()? as usize;
        let content = parser.parse_octets(len)?;
        Ok(CharStr(Bytes::copy_from_slice(content)))
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        let len = parser.parse_u8()? as usize;
        parser.advance(len).map_err(Into::into)
    }
}

impl Compose for CharStr {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        // Safe cast: the length was checked at construction.
        target.append_slice(&[self.0.len() as u8])?;
        target.append_slice(self.0.as_ref())
    }
}

//--- AsRef

impl AsRef<[u8]> for CharStr {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- PartialEq, Eq, PartialOrd, Ord, Hash

impl<T: AsRef<[u8]>> PartialEq<T> for CharStr {
    fn eq(&self, other: &T) -> bool {
        self.as_slice().eq(other.as_ref())
    }
}

impl Eq for CharStr {}

impl<T: AsRef<[u8]>> PartialOrd<T> for CharStr {
    fn partial_cmp(&self, other: &T) -> Option<cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_ref())
    }
}

impl Ord for CharStr {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl hash::Hash for CharStr {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

//--- Display and Debug

impl fmt::Display for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.0.as_ref() {
            if ch == b'"' || ch == b'\\' {
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

impl fmt::Debug for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CharStr(\"{}\")", self)
    }
}

//------------ CharStrError --------------------------------------------------

/// A byte sequence does not fit into a character string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharStrError(());

impl fmt::Display for CharStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("character string with more than 255 octets")
    }
}

impl std::error::Error for CharStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;

    #[test]
    fn from_octets_limits() {
        assert!(CharStr::from_slice(&[0u8; 255]).is_ok());
        assert!(CharStr::from_slice(&[0u8; 256]).is_err());
    }

    #[test]
    fn parse_exact_and_truncated() {
        // Length byte claims 3 with 3 available: fine.
        let mut parser = Parser::from_ref(b"\x03foo".as_slice());
        let cs = CharStr::parse(&mut parser).unwrap();
        assert_eq!(cs.as_slice(), b"foo");
        assert_eq!(parser.remaining(), 0);

        // Length byte claims 5 with 3 available: truncation.
        let mut parser = Parser::from_ref(b"\x05foo".as_slice());
        assert_eq!(
            CharStr::parse(&mut parser),
            Err(ParseError::ShortInput)
        );
    }

    #[test]
    fn compose() {
        let cs = CharStr::from_slice(b"foo").unwrap();
        let mut buf = Vec::new();
        infallible(cs.compose(&mut buf));
        assert_eq!(buf, b"\x03foo");
        assert_eq!(cs.encoded_len(), buf.len());
    }
}
