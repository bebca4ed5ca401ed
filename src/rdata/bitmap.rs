//! Type bitmaps of NSEC and NSEC3 records.
//!
//! The bitmap lists record types in windows of 256 types each. Every
//! window is encoded as its window number, the number of octets that
//! follow, and up to 32 octets of bits. Empty windows are left out and
//! a window never ends in a zero octet, which makes the encoding of any
//! given type set unique.

use crate::base::iana::Rtype;
use crate::base::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ RtypeBitmap ---------------------------------------------------

/// A set of record types, encoded as an NSEC-style bitmap.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RtypeBitmap {
    octets: Bytes,
}

impl RtypeBitmap {
    /// Creates a bitmap from its wire-format octets.
    ///
    /// Checks the window structure: ascending window numbers, block
    /// lengths between 1 and 32, and no trailing zero octet in any
    /// block.
    pub fn from_octets(octets: Bytes) -> Result<Self, ParseError> {
        let mut data = octets.as_ref();
        let mut last_window: Option<u8> = None;
        while !data.is_empty() {
            if data.len() < 2 {
                return Err(ParseError::ShortInput);
            }
            let window = data[0];
            let len = usize::from(data[1]);
            if let Some(last) = last_window {
                if window <= last {
                    return Err(ParseError::form_error(
                        "bitmap windows out of order",
                    ));
                }
            }
            last_window = Some(window);
            if len == 0 || len > 32 {
                return Err(ParseError::form_error(
                    "invalid bitmap block length",
                ));
            }
            if data.len() < 2 + len {
                return Err(ParseError::ShortInput);
            }
            if data[2 + len - 1] == 0 {
                return Err(ParseError::form_error(
                    "bitmap block ends in zero octet",
                ));
            }
            data = &data[2 + len..];
        }
        Ok(RtypeBitmap { octets })
    }

    /// Returns a builder for a bitmap.
    pub fn builder() -> RtypeBitmapBuilder {
        RtypeBitmapBuilder { types: Vec::new() }
    }

    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Returns whether the bitmap contains the given record type.
    pub fn contains(&self, rtype: Rtype) -> bool {
        let value = rtype.to_int();
        let (window, bit) = (value >> 8, value & 0xFF);
        let octet = usize::from(bit >> 3);
        let mask = 0x80u8 >> (bit & 7);
        let mut data = self.octets.as_ref();
        while data.len() >= 2 {
            let len = usize::from(data[1]);
            if u16::from(data[0]) == window {
                return data[2..2 + len]
                    .get(octet)
                    .map_or(false, |bits| bits & mask != 0);
            }
            data = &data[2 + len..];
        }
        false
    }

    /// Returns an iterator over the types in the bitmap.
    pub fn iter(&self) -> RtypeBitmapIter<'_> {
        RtypeBitmapIter {
            data: self.octets.as_ref(),
            block: 0,
            bit: 0,
        }
    }

    /// Parses a bitmap from the remaining bytes of `parser`.
    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Self::from_octets(Bytes::copy_from_slice(
            parser.parse_octets(parser.remaining())?,
        ))
    }

    /// Appends the wire format of the bitmap to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.octets.as_ref())
    }

    pub fn encoded_len(&self) -> usize {
        self.octets.len()
    }
}

impl fmt::Display for RtypeBitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for rtype in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            rtype.fmt(f)?;
        }
        Ok(())
    }
}

//------------ RtypeBitmapIter -----------------------------------------------

/// An iterator over the record types in a bitmap.
pub struct RtypeBitmapIter<'a> {
    /// The remaining blocks, starting with the current one.
    data: &'a [u8],

    /// The octet index within the current block's bits.
    block: usize,

    /// The bit index within that octet.
    bit: u16,
}

impl<'a> Iterator for RtypeBitmapIter<'a> {
    type Item = Rtype;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.data.len() < 2 {
                return None;
            }
            let len = usize::from(self.data[1]);
            if self.block >= len {
                self.data = &self.data[2 + len..];
                self.block = 0;
                self.bit = 0;
                continue;
            }
            let octet = self.data[2 + self.block];
            while self.bit < 8 {
                let bit = self.bit;
                self.bit += 1;
                if octet & (0x80 >> bit) != 0 {
                    let value = (u16::from(self.data[0]) << 8)
                        | ((self.block as u16) << 3)
                        | bit;
                    return Some(Rtype::from_int(value));
                }
            }
            self.bit = 0;
            self.block += 1;
        }
    }
}

//------------ RtypeBitmapBuilder --------------------------------------------

/// Builds a type bitmap from individual record types.
#[derive(Clone, Debug, Default)]
pub struct RtypeBitmapBuilder {
    types: Vec<Rtype>,
}

impl RtypeBitmapBuilder {
    /// Adds a record type to the set.
    pub fn add(&mut self, rtype: Rtype) -> &mut Self {
        self.types.push(rtype);
        self
    }

    /// Renders the set into its unique wire encoding.
    pub fn finalize(mut self) -> RtypeBitmap {
        self.types.sort_unstable_by_key(|rtype| rtype.to_int());
        self.types.dedup();
        let mut octets = Vec::new();
        let mut types = self.types.iter().map(|rtype| rtype.to_int());
        let mut next = types.next();
        while let Some(first) = next {
            let window = first >> 8;
            let mut bits = [0u8; 32];
            let mut high = 0;
            while let Some(value) = next {
                if value >> 8 != window {
                    break;
                }
                let bit = value & 0xFF;
                let octet = usize::from(bit >> 3);
                bits[octet] |= 0x80 >> (bit & 7);
                high = octet;
                next = types.next();
            }
            octets.push(window as u8);
            octets.push((high + 1) as u8);
            octets.extend_from_slice(&bits[..=high]);
        }
        RtypeBitmap {
            octets: octets.into(),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_and_query() {
        let mut builder = RtypeBitmap::builder();
        builder
            .add(Rtype::A)
            .add(Rtype::NS)
            .add(Rtype::MX)
            .add(Rtype::SOA)
            .add(Rtype::DLV);
        let bitmap = builder.finalize();

        for rtype in [Rtype::A, Rtype::NS, Rtype::MX, Rtype::SOA, Rtype::DLV]
        {
            assert!(bitmap.contains(rtype), "{}", rtype);
        }
        assert!(!bitmap.contains(Rtype::AAAA));
        assert!(!bitmap.contains(Rtype::TXT));

        let collected: Vec<Rtype> = bitmap.iter().collect();
        assert_eq!(
            collected,
            [Rtype::A, Rtype::NS, Rtype::SOA, Rtype::MX, Rtype::DLV]
        );
    }

    #[test]
    fn encoding_shape() {
        let mut builder = RtypeBitmap::builder();
        builder.add(Rtype::A).add(Rtype::MX);
        let bitmap = builder.finalize();
        // Window 0, two octets: A is bit 1, MX is bit 15.
        assert_eq!(bitmap.as_slice(), b"\x00\x02\x40\x01");
    }

    #[test]
    fn round_trip_through_octets() {
        let mut builder = RtypeBitmap::builder();
        builder.add(Rtype::from_int(1)).add(Rtype::from_int(2));
        builder.add(Rtype::from_int(15)).add(Rtype::from_int(6));
        builder.add(Rtype::from_int(65535));
        let bitmap = builder.finalize();
        let reparsed =
            RtypeBitmap::from_octets(Bytes::copy_from_slice(
                bitmap.as_slice(),
            ))
            .unwrap();
        assert_eq!(bitmap, reparsed);
        let collected: Vec<u16> =
            reparsed.iter().map(|t| t.to_int()).collect();
        assert_eq!(collected, [1, 2, 6, 15, 65535]);
    }

    #[test]
    fn invalid_encodings_rejected() {
        // Trailing zero octet.
        assert!(RtypeBitmap::from_octets(Bytes::from_static(
            b"\x00\x02\x40\x00"
        ))
        .is_err());
        // Zero-length block.
        assert!(RtypeBitmap::from_octets(Bytes::from_static(
            b"\x00\x00"
        ))
        .is_err());
        // Windows out of order.
        assert!(RtypeBitmap::from_octets(Bytes::from_static(
            b"\x01\x01\x40\x00\x01\x40"
        ))
        .is_err());
        // Truncated block.
        assert!(RtypeBitmap::from_octets(Bytes::from_static(
            b"\x00\x04\x40"
        ))
        .is_err());
        // The empty bitmap is fine.
        assert!(
            RtypeBitmap::from_octets(Bytes::new()).is_ok()
        );
    }
}
