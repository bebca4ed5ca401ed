//! Creating and consuming data in wire format.
//!
//! All field encodings are big-endian ("network byte order"). Parsing is
//! total: malformed input is reported through [`ParseError`], never through
//! a panic. Composing a value that was validated at construction time
//! cannot produce malformed output; the only compose-time error is the
//! target running out of space.

use bytes::BytesMut;
use core::fmt;
use octseq::builder::{OctetsBuilder, Truncate};
use octseq::parse::{Parser, ShortInput};
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Composer ------------------------------------------------------

/// A buffer wire-format data can be composed into.
///
/// Apart from appending data, composing needs to be able to look at and
/// patch data that was appended earlier: record data is prefixed by its
/// length which is only known once the data has been written, and domain
/// name compression needs to know the current length of the message.
///
/// A composer is assumed to hold exactly the message being built, starting
/// at its first byte. Compression offsets are relative to that byte.
pub trait Composer:
    OctetsBuilder + AsRef<[u8]> + AsMut<[u8]> + Truncate
{
}

impl Composer for std::vec::Vec<u8> {}

impl Composer for BytesMut {}

//------------ compose_len_prefixed ------------------------------------------

/// Composes some data prefixed by its 16 bit length.
///
/// Appends a placeholder, runs `op`, and patches the placeholder with the
/// number of bytes `op` appended. If `op` fails, the target is truncated
/// back to where it started.
///
/// # Panics
///
/// The function panics if `op` appends more than 0xFFFF bytes.
pub fn compose_len_prefixed<Target, F>(
    target: &mut Target,
    op: F,
) -> Result<(), Target::AppendError>
where
    Target: Composer + ?Sized,
    F: FnOnce(&mut Target) -> Result<(), Target::AppendError>,
{
    target.append_slice(&[0; 2])?;
    let pos = target.as_ref().len();
    match op(target) {
        Ok(_) => {
            let len = u16::try_from(target.as_ref().len() - pos)
                .expect("long data");
            target.as_mut()[pos - 2..pos]
                .copy_from_slice(&len.to_be_bytes());
            Ok(())
        }
        Err(err) => {
            target.truncate(pos - 2);
            Err(err)
        }
    }
}

//------------ Compose -------------------------------------------------------

/// A type with a fixed-size wire representation that can be appended.
pub trait Compose {
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<T: Compose + ?Sized> Compose for &T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for i8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self as u8])
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(i16);
compose_to_be_bytes!(u16);
compose_to_be_bytes!(i32);
compose_to_be_bytes!(u32);
compose_to_be_bytes!(i64);
compose_to_be_bytes!(u64);

impl Compose for Ipv4Addr {
    const COMPOSE_LEN: u16 = 4;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets())
    }
}

impl Compose for Ipv6Addr {
    const COMPOSE_LEN: u16 = 16;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets())
    }
}

//------------ U48 -----------------------------------------------------------

/// A 48 bit unsigned integer in network byte order.
///
/// Used by TSIG time stamps. A separate type rather than a plain `u64` so
/// that the construction-time range check cannot be skipped.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct U48(u64);

impl U48 {
    pub const MAX: u64 = 0xFFFF_FFFF_FFFF;

    /// Creates a value from a `u64`, failing if it needs more than 48 bits.
    pub fn new(value: u64) -> Result<Self, LongInteger> {
        if value > Self::MAX {
            Err(LongInteger(()))
        } else {
            Ok(U48(value))
        }
    }

    pub fn into_int(self) -> u64 {
        self.0
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let mut buf = [0u8; 6];
        parser.parse_buf(&mut buf)?;
        let mut bytes = [0u8; 8];
        bytes[2..].copy_from_slice(&buf);
        Ok(U48(u64::from_be_bytes(bytes)))
    }
}

impl Compose for U48 {
    const COMPOSE_LEN: u16 = 6;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.0.to_be_bytes()[2..])
    }
}

impl From<U48> for u64 {
    fn from(value: U48) -> Self {
        value.into_int()
    }
}

impl fmt::Display for U48 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value of itself from a parser.
///
/// The parser always covers the complete message so that domain name
/// compression pointers can be resolved by absolute offset. Values that
/// live inside a length-delimited field are handed a sub-parser created
/// via [`Parser::parse_parser`], which keeps absolute positions intact
/// while bounding how much the value may consume.
pub trait Parse<'a>: Sized {
    /// Extracts a value from the beginning of `parser`.
    ///
    /// If parsing fails, the parser position is undefined.
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError>;

    /// Skips over a value of this type at the beginning of `parser`.
    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError>;
}

impl<'a> Parse<'a> for i8 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_i8().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        parser.advance(1).map_err(Into::into)
    }
}

impl<'a> Parse<'a> for u8 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u8().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        parser.advance(1).map_err(Into::into)
    }
}

impl<'a> Parse<'a> for u16 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u16_be().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        parser.advance(2).map_err(Into::into)
    }
}

impl<'a> Parse<'a> for i32 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_i32_be().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        parser.advance(4).map_err(Into::into)
    }
}

impl<'a> Parse<'a> for u32 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u32_be().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        parser.advance(4).map_err(Into::into)
    }
}

impl<'a> Parse<'a> for u64 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u64_be().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        parser.advance(8).map_err(Into::into)
    }
}

impl<'a> Parse<'a> for Ipv4Addr {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 4];
        parser.parse_buf(&mut buf)?;
        Ok(buf.into())
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        parser.advance(4).map_err(Into::into)
    }
}

impl<'a> Parse<'a> for Ipv6Addr {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 16];
        parser.parse_buf(&mut buf)?;
        Ok(buf.into())
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        parser.advance(16).map_err(Into::into)
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the parser.
    ShortInput,

    /// A formatting error occurred.
    Form(FormError),
}

impl ParseError {
    /// Creates a new parse error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::ShortInput
    }
}

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::Form(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occurred.
///
/// This is a generic error for all kinds of error cases that result in data
/// not being accepted. For diagnostics, the error is being given a static
/// string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//------------ LongInteger ---------------------------------------------------

/// A value was too large for its wire-format integer width.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongInteger(());

impl fmt::Display for LongInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("integer out of range")
    }
}

impl std::error::Error for LongInteger {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;

    #[test]
    fn compose_ints() {
        let mut buf = Vec::new();
        infallible(0x1234u16.compose(&mut buf));
        infallible(0x0102_0304u32.compose(&mut buf));
        assert_eq!(buf, b"\x12\x34\x01\x02\x03\x04");
    }

    #[test]
    fn u48_round_trip() {
        let value = U48::new(0x0000_0102_0304_0506).unwrap();
        let mut buf = Vec::new();
        infallible(value.compose(&mut buf));
        assert_eq!(buf, b"\x01\x02\x03\x04\x05\x06");
        let mut parser = Parser::from_ref(buf.as_slice());
        assert_eq!(U48::parse(&mut parser).unwrap(), value);
        assert_eq!(parser.remaining(), 0);
        assert!(U48::new(0x1_0000_0000_0000).is_err());
    }

    #[test]
    fn parse_u16_short_input() {
        let mut parser = Parser::from_ref(b"\x12".as_slice());
        assert_eq!(u16::parse(&mut parser), Err(ParseError::ShortInput));
    }

    #[test]
    fn len_prefixed() {
        let mut buf = Vec::new();
        infallible(compose_len_prefixed(&mut buf, |target| {
            target.append_slice(b"abc")
        }));
        assert_eq!(buf, b"\x00\x03abc");
    }
}
