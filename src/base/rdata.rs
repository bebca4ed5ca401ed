//! Record data handling.
//!
//! Each record type comes with its own record data format. The traits in
//! this module are the interface between the generic record machinery and
//! the concrete data types in the [`rdata`][crate::rdata] module:
//! [`RecordData`] ties a value to its record type, [`ComposeRecordData`]
//! writes it out, and [`ParseRecordData`] creates it from a message.
//!
//! [`UnknownRecordData`] keeps the data of record types nothing else
//! claims as a plain octets sequence.

use super::iana::Rtype;
use super::name::Compressor;
use super::wire::{compose_len_prefixed, Composer, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;

//------------ RecordData ----------------------------------------------------

/// A type that represents record data.
///
/// The type knows the record type of the data it holds.
pub trait RecordData {
    /// Returns the record type associated with this record data instance.
    fn rtype(&self) -> Rtype;
}

//------------ ComposeRecordData ---------------------------------------------

/// A type of record data that can be written to a message.
///
/// Record data that contains domain names receives the message's
/// compression state. Only the record types grandfathered into
/// compression actually use it; everybody else writes their names
/// verbatim and leaves the compression state untouched.
pub trait ComposeRecordData: RecordData {
    /// Returns the length the composed record data will have.
    ///
    /// `offset` is the message offset at which the record data would
    /// begin. The compressor is updated exactly like
    /// [`compose_rdata`][Self::compose_rdata] updates its own, so a
    /// length pass over several records stays in sync with the write
    /// pass as long as each pass starts from a fresh compressor.
    fn rdlen(&self, cx: &mut Compressor, offset: usize) -> usize;

    /// Appends the wire format of the record data to `target`.
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        cx: &mut Compressor,
    ) -> Result<(), Target::AppendError>;

    /// Appends the record data prefixed with its 16 bit length.
    fn compose_len_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        compose_len_prefixed(target, |target| {
            self.compose_rdata(target, cx)
        })
    }
}

//------------ ParseRecordData -----------------------------------------------

/// A record data type that can be parsed from a message.
///
/// The parser passed to [`parse_rdata`][Self::parse_rdata] is a
/// sub-parser delimited to exactly the record data but sharing the
/// message's absolute offsets, so compression pointers inside the data
/// still resolve.
pub trait ParseRecordData<'a>: RecordData + Sized {
    /// Parses the record data.
    ///
    /// Returns `Ok(None)` if the type does not know how to parse data of
    /// type `rtype`; in that case the parser must be left untouched.
    fn parse_rdata(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError>;
}

//------------ UnknownRecordData ---------------------------------------------

/// A type for parsing any type of record data.
///
/// The data is kept as the raw octets of the record data, together with
/// the record type. This is the fallback for record types without a
/// concrete implementation. Since the raw data may contain compression
/// pointers that would be meaningless outside their original message,
/// a value of this type should not be copied between messages if its
/// record type is one of the compressible ones.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnknownRecordData {
    /// The record type of this data.
    rtype: Rtype,

    /// The raw record data.
    data: Bytes,
}

impl UnknownRecordData {
    /// Creates generic record data from the given octets.
    pub fn from_octets(
        rtype: Rtype,
        data: Bytes,
    ) -> Result<Self, LongRecordData> {
        if data.len() > usize::from(u16::MAX) {
            return Err(LongRecordData(()));
        }
        Ok(UnknownRecordData { rtype, data })
    }

    /// Returns the raw record data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Parses the remaining bytes of `parser` as generic record data.
    pub fn parse<'a>(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let data =
            Bytes::copy_from_slice(parser.parse_octets(parser.remaining())?);
        Ok(UnknownRecordData { rtype, data })
    }
}

//--- RecordData and friends

impl RecordData for UnknownRecordData {
    fn rtype(&self) -> Rtype {
        self.rtype
    }
}

impl ComposeRecordData for UnknownRecordData {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.data.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.data.as_ref())
    }
}

impl<'a> ParseRecordData<'a> for UnknownRecordData {
    fn parse_rdata(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        Self::parse(rtype, parser).map(Some)
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // RFC 3597 generic representation.
        write!(f, "\\# {}", self.data.len())?;
        for ch in self.data.as_ref() {
            write!(f, " {:02X}", ch)?;
        }
        Ok(())
    }
}

//------------ LongRecordData ------------------------------------------------

/// Record data would exceed the 16 bit length prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongRecordData(());

impl fmt::Display for LongRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("record data too long")
    }
}

impl std::error::Error for LongRecordData {}

//============ Testing =======================================================

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use octseq::builder::infallible;

    /// Checks that `rdlen` predicts what `compose_rdata` writes.
    ///
    /// Both directions run on a fresh compressor, mirroring how a length
    /// pass and a write pass over a message each start from scratch.
    pub fn test_rdlen<D: ComposeRecordData>(data: &D) {
        let mut len_cx = Compressor::new();
        let mut write_cx = Compressor::new();
        let mut buf = Vec::new();
        infallible(data.compose_rdata(&mut buf, &mut write_cx));
        assert_eq!(data.rdlen(&mut len_cx, 0), buf.len());
    }

    /// Checks that composed record data parses back into the same value.
    pub fn test_compose_parse<In, F, Out>(data: &In, parse: F)
    where
        In: ComposeRecordData + PartialEq<Out> + core::fmt::Debug,
        F: FnOnce(&mut Parser<[u8]>) -> Result<Out, ParseError>,
        Out: core::fmt::Debug,
    {
        let mut buf = Vec::new();
        infallible(
            data.compose_rdata(&mut buf, &mut Compressor::disabled()),
        );
        let mut parser = Parser::from_ref(buf.as_slice());
        let parsed = parse(&mut parser).unwrap();
        assert_eq!(parser.remaining(), 0);
        assert_eq!(*data, parsed);
    }

    #[test]
    fn unknown_compose_parse() {
        let data = UnknownRecordData::from_octets(
            Rtype::from_int(4095),
            Bytes::from_static(b"\x12\x34\x56"),
        )
        .unwrap();
        test_rdlen(&data);
        test_compose_parse(&data, |parser| {
            UnknownRecordData::parse(Rtype::from_int(4095), parser)
        });
    }

    #[test]
    fn unknown_display() {
        let data = UnknownRecordData::from_octets(
            Rtype::from_int(4095),
            Bytes::from_static(b"\x0a\x00"),
        )
        .unwrap();
        assert_eq!(data.to_string(), "\\# 2 0A 00");
    }
}
