//! Absolute domain names.
//!
//! This is a private module. Its public types are re-exported by the
//! parent module.

use super::super::wire::{Compose, FormError, Parse, ParseError};
use super::compressor::Compressor;
use super::label::Label;
use bytes::Bytes;
use core::{cmp, fmt, hash, str};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Name ----------------------------------------------------------

/// An absolute domain name.
///
/// The name is stored in uncompressed wire format: a sequence of labels,
/// each preceded by its length byte, terminated by the zero-length root
/// label. The stored form never contains compression pointers; those only
/// exist inside messages and are resolved while parsing.
///
/// Names compare and hash case-insensitively per label, following DNS
/// convention; the original spelling is preserved and is what gets written
/// back out.
#[derive(Clone)]
pub struct Name {
    /// The uncompressed wire format of the name.
    ///
    /// Invariants: a valid sequence of labels with length bytes in
    /// `0..=63`, ending in the root label, at most 255 bytes in total.
    octets: Bytes,
}

impl Name {
    /// The maximum length of a wire-format name.
    pub const MAX_LEN: usize = 255;

    /// Returns the root name.
    #[must_use]
    pub fn root() -> Self {
        Name {
            octets: Bytes::from_static(b"\0"),
        }
    }

    /// Creates a name from its uncompressed wire format.
    ///
    /// Checks every label length, the root terminator, and the overall
    /// length bound.
    pub fn from_octets(octets: Bytes) -> Result<Self, NameError> {
        if octets.len() > Self::MAX_LEN {
            return Err(NameError::LongName);
        }
        let mut pos = 0;
        loop {
            match octets.get(pos) {
                Some(0) => {
                    if pos + 1 == octets.len() {
                        return Ok(Name { octets });
                    }
                    return Err(NameError::TrailingData);
                }
                Some(&len) if len <= Label::MAX_LEN as u8 => {
                    pos += 1 + usize::from(len);
                    if pos >= octets.len() {
                        return Err(NameError::ShortInput);
                    }
                }
                Some(_) => return Err(NameError::BadLabel),
                None => return Err(NameError::ShortInput),
            }
        }
    }

    /// Creates a name from a sequence of label contents.
    ///
    /// The root label is appended automatically and must not be part of
    /// the sequence.
    pub fn from_labels<I, L>(labels: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut octets = Vec::new();
        for label in labels {
            let label = label.as_ref();
            if label.is_empty() || label.len() > Label::MAX_LEN {
                return Err(NameError::BadLabel);
            }
            if octets.len() + 1 + label.len() > Self::MAX_LEN - 1 {
                return Err(NameError::LongName);
            }
            octets.push(label.len() as u8);
            octets.extend_from_slice(label);
        }
        octets.push(0);
        Ok(Name {
            octets: octets.into(),
        })
    }

    /// Returns a reference to the wire-format octets of the name.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns the length of the uncompressed wire format.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the name consists of the root label only.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.octets.len() == 1
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The final root label is included.
    #[must_use]
    pub fn iter(&self) -> NameIter<'_> {
        NameIter {
            slice: self.octets.as_ref(),
        }
    }

    /// Returns the number of labels, the root label included.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.iter().count()
    }

    /// Returns whether `base` is a suffix of this name.
    #[must_use]
    pub fn ends_with(&self, base: &Name) -> bool {
        let mut pos = 0;
        loop {
            if Self::eq_slices(&self.octets[pos..], base.as_slice()) {
                return true;
            }
            match self.octets[pos] {
                0 => return false,
                len => pos += 1 + usize::from(len),
            }
        }
    }

    fn eq_slices(left: &[u8], right: &[u8]) -> bool {
        // Length bytes are at most 63 and thus never alphabetic, so
        // whole-sequence case folding compares labels correctly.
        left.eq_ignore_ascii_case(right)
    }
}

/// # Parsing from messages
///
impl Name {
    /// Parses a name out of a message.
    ///
    /// The parser must cover the message from its first byte, since
    /// compression pointers refer to offsets from the start of the
    /// message. On success the parser is positioned right behind the name
    /// as it appears at the original position: behind the root label for
    /// an uncompressed name, or behind the first pointer for a compressed
    /// one. Labels reached through a pointer do not count as consumed.
    ///
    /// Pointer targets must point strictly backward; anything else,
    /// including the two-pointer cycles of crafted messages, fails the
    /// parse instead of looping.
    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let mut buf = NameBuf::new();

        // Phase one: read labels in place until the name ends or the
        // first compression pointer is found.
        let mut ptr = loop {
            match LabelType::parse(parser)? {
                LabelType::Normal(0) => return buf.finish(),
                LabelType::Normal(len) => {
                    buf.push(parser.parse_octets(usize::from(len))?)?;
                }
                LabelType::Pointer(ptr) => break ptr,
            }
        };

        // Phase two: follow the pointer chain on a copy of the parser so
        // the caller's position stays right behind the first pointer.
        let mut parser = *parser;
        loop {
            // The parser sits right behind the pointer just read, so a
            // target that does not point strictly before that pointer
            // cannot be part of a terminating chain.
            if usize::from(ptr) >= parser.pos().saturating_sub(2) {
                return Err(FormError::new(
                    "compression pointer does not point backward",
                )
                .into());
            }
            parser.seek(usize::from(ptr))?;
            loop {
                match LabelType::parse(&mut parser)? {
                    LabelType::Normal(0) => return buf.finish(),
                    LabelType::Normal(len) => {
                        buf.push(
                            parser.parse_octets(usize::from(len))?,
                        )?;
                    }
                    LabelType::Pointer(next) => {
                        ptr = next;
                        break;
                    }
                }
            }
        }
    }

    /// Skips over a name without assembling it.
    pub fn skip<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<(), ParseError> {
        loop {
            match LabelType::parse(parser)? {
                LabelType::Normal(0) => return Ok(()),
                LabelType::Normal(len) => {
                    parser.advance(usize::from(len))?;
                }
                LabelType::Pointer(_) => return Ok(()),
            }
        }
    }
}

/// # Writing into messages
///
impl Name {
    /// Appends the name without compressing it.
    ///
    /// Does not consult or update any compression state; record kinds
    /// whose names must never be compressed use this.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.octets.as_ref())
    }

    /// Appends the name, compressing against and updating `cx`.
    ///
    /// The target is assumed to hold exactly the message being built, so
    /// the current target length is the offset names are recorded at.
    /// The longest already-recorded suffix of the name is replaced by a
    /// pointer; every longer suffix that gets written out literally is
    /// recorded for names written later.
    pub fn compose_compressed<Target>(
        &self,
        target: &mut Target,
        cx: &mut Compressor,
    ) -> Result<(), Target::AppendError>
    where
        Target: OctetsBuilder + AsRef<[u8]> + ?Sized,
    {
        let mut pos = 0;
        loop {
            let suffix = &self.octets[pos..];
            if suffix.len() == 1 {
                // Only the root is left.
                return target.append_slice(b"\0");
            }
            if let Some(offset) = cx.get(suffix) {
                return (0xC000 | offset).compose(target);
            }
            cx.insert(suffix, target.as_ref().len());
            let end = pos + 1 + usize::from(self.octets[pos]);
            target.append_slice(&self.octets[pos..end])?;
            pos = end;
        }
    }

    /// Returns the number of bytes `compose_compressed` would append.
    ///
    /// `offset` is the offset within the message at which the name would
    /// be written. The compressor is updated exactly the way the write
    /// updates it, which is what makes a separate length pass over a
    /// whole message come out exact; see [`Compressor`] for the
    /// discipline this implies.
    pub fn compressed_len(
        &self,
        cx: &mut Compressor,
        offset: usize,
    ) -> usize {
        let mut pos = 0;
        let mut len = 0;
        loop {
            let suffix = &self.octets[pos..];
            if suffix.len() == 1 {
                return len + 1;
            }
            if cx.get(suffix).is_some() {
                return len + 2;
            }
            cx.insert(suffix, offset + len);
            let step = 1 + usize::from(self.octets[pos]);
            len += step;
            pos += step;
        }
    }
}

//--- Parse and Compose (uncompressed flavors)

impl<'a> Parse<'a> for Name {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        Name::parse(parser)
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        Name::skip(parser)
    }
}

impl Compose for Name {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        Name::compose(self, target)
    }
}

//--- FromStr

impl str::FromStr for Name {
    type Err = NameError;

    /// Parses a name from its dotted presentation format.
    ///
    /// Both `"example.com"` and `"example.com."` denote the same absolute
    /// name; `"."` and the empty string denote the root. A backslash
    /// escapes the next character; `\ddd` with three decimal digits
    /// denotes a single byte value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "." {
            return Ok(Name::root());
        }
        let mut octets = vec![0u8];
        let mut label_start = 0;
        let mut chars = s.chars();

        fn flush(
            octets: &mut Vec<u8>,
            label_start: usize,
        ) -> Result<usize, NameError> {
            let len = octets.len() - label_start - 1;
            if len == 0 || len > Label::MAX_LEN {
                return Err(NameError::BadLabel);
            }
            octets[label_start] = len as u8;
            octets.push(0);
            Ok(octets.len() - 1)
        }

        while let Some(ch) = chars.next() {
            match ch {
                '.' => label_start = flush(&mut octets, label_start)?,
                '\\' => match chars.next() {
                    Some(d @ '0'..='9') => {
                        let mut value = u32::from(d) - u32::from('0');
                        for _ in 0..2 {
                            match chars.next().and_then(|c| c.to_digit(10))
                            {
                                Some(digit) => {
                                    value = value * 10 + digit
                                }
                                None => {
                                    return Err(NameError::BadLabel)
                                }
                            }
                        }
                        if value > 255 {
                            return Err(NameError::BadLabel);
                        }
                        octets.push(value as u8);
                    }
                    Some(ch) if ch.is_ascii() => octets.push(ch as u8),
                    _ => return Err(NameError::BadLabel),
                },
                ch if ch.is_ascii() => octets.push(ch as u8),
                _ => return Err(NameError::BadLabel),
            }
        }
        if octets.len() > label_start + 1 {
            // No trailing dot; flush the final label.
            flush(&mut octets, label_start)?;
        } else {
            // Trailing dot already terminated the last label; the final
            // slot becomes the root label.
            octets.truncate(octets.len() - 1);
            octets.push(0);
        }
        if octets.len() > Self::MAX_LEN {
            return Err(NameError::LongName);
        }
        Ok(Name {
            octets: octets.into(),
        })
    }
}

//--- PartialEq, Eq, PartialOrd, Ord, Hash

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        Self::eq_slices(self.as_slice(), other.as_slice())
    }
}

impl Eq for Name {}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in self.as_slice() {
            state.write_u8(ch.to_ascii_lowercase())
        }
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        let mut first = true;
        for label in self.iter() {
            if label.is_root() {
                break;
            }
            if !first {
                f.write_str(".")?;
            }
            first = false;
            label.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//------------ NameIter ------------------------------------------------------

/// An iterator over the labels of a name.
#[derive(Clone, Debug)]
pub struct NameIter<'a> {
    slice: &'a [u8],
}

impl<'a> Iterator for NameIter<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.slice.split_first()?;
        let (label, tail) = tail.split_at(usize::from(len));
        self.slice = if len == 0 { &[] } else { tail };
        // Safe: the stored wire format only contains valid labels.
        Some(unsafe { Label::from_slice_unchecked(label) })
    }
}

//------------ NameBuf -------------------------------------------------------

/// Accumulates the labels of a name being parsed.
struct NameBuf {
    octets: [u8; Name::MAX_LEN],
    len: usize,
}

impl NameBuf {
    fn new() -> Self {
        NameBuf {
            octets: [0; Name::MAX_LEN],
            len: 0,
        }
    }

    fn push(&mut self, label: &[u8]) -> Result<(), ParseError> {
        // One byte must remain for the root label.
        if self.len + 1 + label.len() > Name::MAX_LEN - 1 {
            return Err(FormError::new("long domain name").into());
        }
        self.octets[self.len] = label.len() as u8;
        self.octets[self.len + 1..self.len + 1 + label.len()]
            .copy_from_slice(label);
        self.len += 1 + label.len();
        Ok(())
    }

    fn finish(mut self) -> Result<Name, ParseError> {
        self.octets[self.len] = 0;
        self.len += 1;
        Ok(Name {
            octets: Bytes::copy_from_slice(&self.octets[..self.len]),
        })
    }
}

//------------ LabelType -----------------------------------------------------

/// The type of a label plucked off a message.
enum LabelType {
    /// An ordinary label of the given length, or the root for zero.
    Normal(u8),

    /// A compression pointer to the given message offset.
    Pointer(u16),
}

impl LabelType {
    fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let head = parser.parse_u8()?;
        match head {
            0..=0x3F => Ok(LabelType::Normal(head)),
            0xC0..=0xFF => {
                let tail = parser.parse_u8()?;
                Ok(LabelType::Pointer(
                    (u16::from(head & 0x3F) << 8) | u16::from(tail),
                ))
            }
            _ => Err(FormError::new("unknown label type").into()),
        }
    }
}

//------------ NameError -----------------------------------------------------

/// An octets sequence does not form a valid name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// The sequence ended before the root label.
    ShortInput,

    /// A label length was illegal or a label was empty.
    BadLabel,

    /// Data continued after the root label.
    TrailingData,

    /// The name is longer than 255 bytes.
    LongName,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            NameError::ShortInput => "unexpected end of input",
            NameError::BadLabel => "illegal label",
            NameError::TrailingData => "trailing data",
            NameError::LongName => "long domain name",
        })
    }
}

impl std::error::Error for NameError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            name("www.example.com").as_slice(),
            b"\x03www\x07example\x03com\x00"
        );
        assert_eq!(
            name("www.example.com.").as_slice(),
            b"\x03www\x07example\x03com\x00"
        );
        assert_eq!(name(".").as_slice(), b"\x00");
        assert_eq!(name("a\\.b.c").as_slice(), b"\x03a.b\x01c\x00");
        assert_eq!(name("a\\046b").as_slice(), b"\x03a.b\x00");
        assert!("..".parse::<Name>().is_err());
    }

    #[test]
    fn display_round_trip() {
        for input in ["www.example.com", "a\\.b.c", "."] {
            let parsed = name(input);
            assert_eq!(parsed.to_string().parse::<Name>().unwrap(), parsed);
        }
    }

    #[test]
    fn from_octets() {
        assert!(Name::from_octets(Bytes::from_static(
            b"\x03www\x07example\x03com\x00"
        ))
        .is_ok());
        // Truncated before the root.
        assert_eq!(
            Name::from_octets(Bytes::from_static(b"\x03www")),
            Err(NameError::ShortInput)
        );
        // A pointer is not a valid stored label.
        assert_eq!(
            Name::from_octets(Bytes::from_static(b"\xC0\x04\x00")),
            Err(NameError::BadLabel)
        );
        // Data after the root label.
        assert_eq!(
            Name::from_octets(Bytes::from_static(b"\x00\x00")),
            Err(NameError::TrailingData)
        );
    }

    #[test]
    fn eq_ignores_case() {
        assert_eq!(name("www.Example.Com"), name("WWW.example.com"));
        assert_ne!(name("www.example.com"), name("www.example.org"));
    }

    #[test]
    fn parse_uncompressed() {
        let msg = b"\x03www\x07example\x03com\x00rest";
        let mut parser = Parser::from_ref(msg.as_slice());
        let parsed = Name::parse(&mut parser).unwrap();
        assert_eq!(parsed, name("www.example.com"));
        assert_eq!(parser.pos(), 17);
    }

    #[test]
    fn parse_compressed() {
        // "example.com" at offset 2, "www" + pointer at offset 16.
        let msg = b"XX\x07example\x03com\x00X\x03www\xC0\x02tail";
        let mut parser = Parser::from_ref(msg.as_slice());
        parser.seek(16).unwrap();
        let parsed = Name::parse(&mut parser).unwrap();
        assert_eq!(parsed, name("www.example.com"));
        // Only the label and the pointer count as consumed.
        assert_eq!(parser.pos(), 22);
    }

    #[test]
    fn parse_pointer_cycle() {
        // Offset 12 points to 14, which points back to 12.
        let mut msg = vec![0u8; 16];
        msg[12] = 0xC0;
        msg[13] = 14;
        msg[14] = 0xC0;
        msg[15] = 12;
        let mut parser = Parser::from_ref(msg.as_slice());
        parser.seek(12).unwrap();
        assert!(Name::parse(&mut parser).is_err());
    }

    #[test]
    fn parse_forward_pointer() {
        let msg = b"\xC0\x04XX\x03com\x00";
        let mut parser = Parser::from_ref(msg.as_slice());
        assert!(Name::parse(&mut parser).is_err());
    }

    #[test]
    fn parse_length_boundary() {
        // 63 labels of 4 bytes each: 252 bytes, plus one 1-byte label
        // (2 bytes) and the root: exactly 255.
        let mut msg = Vec::new();
        for _ in 0..63 {
            msg.extend_from_slice(b"\x03abc");
        }
        msg.extend_from_slice(b"\x01x\x00");
        assert_eq!(msg.len(), 255);
        let mut parser = Parser::from_ref(msg.as_slice());
        let parsed = Name::parse(&mut parser).unwrap();
        assert_eq!(parsed.encoded_len(), 255);

        // One more label byte pushes it over the edge.
        let mut msg = Vec::new();
        for _ in 0..63 {
            msg.extend_from_slice(b"\x03abc");
        }
        msg.extend_from_slice(b"\x02xy\x00");
        let mut parser = Parser::from_ref(msg.as_slice());
        assert!(Name::parse(&mut parser).is_err());
    }

    #[test]
    fn compose_compressed() {
        let mut cx = Compressor::new();
        let mut buf = Vec::new();
        infallible(
            name("example.com").compose_compressed(&mut buf, &mut cx),
        );
        assert_eq!(buf, b"\x07example\x03com\x00");
        infallible(
            name("www.example.com")
                .compose_compressed(&mut buf, &mut cx),
        );
        // Shares the suffix recorded at offset zero.
        assert_eq!(
            &buf[13..],
            b"\x03www\xC0\x00"
        );
    }

    #[test]
    fn compressed_len_predicts_compose() {
        let names =
            ["a.example.com", "b.example.com", "example.com", "com"];
        let mut len_cx = Compressor::new();
        let mut write_cx = Compressor::new();
        let mut buf = Vec::new();
        for n in names {
            let n = name(n);
            let predicted =
                n.compressed_len(&mut len_cx, buf.len());
            let before = buf.len();
            infallible(
                n.compose_compressed(&mut buf, &mut write_cx),
            );
            assert_eq!(predicted, buf.len() - before, "{}", n);
        }
    }

    #[test]
    fn ends_with() {
        assert!(name("www.example.com").ends_with(&name("example.com")));
        assert!(name("www.example.com").ends_with(&name(".")));
        assert!(!name("example.com").ends_with(&name("www.example.com")));
    }
}
