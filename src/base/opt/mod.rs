//! Record data and options of OPT records.
//!
//! Since DNS message headers are relatively short, the OPT record type
//! was introduced to allow for a number of extensions to the protocol.
//! Its record data is a sequence of options, each consisting of a 16 bit
//! option code, a 16 bit length, and that many bytes of payload.
//!
//! [`Opt`] holds a validated option sequence, [`AllOptData`] is the enum
//! over all implemented options, and the `OptData` trait family mirrors
//! the record data traits one level down.

pub mod cookie;
pub mod expire;
pub mod keepalive;
pub mod keytag;
pub mod lease;
pub mod llq;
pub mod nsid;
pub mod padding;
pub mod subnet;

pub use self::cookie::Cookie;
pub use self::expire::Expire;
pub use self::keepalive::TcpKeepalive;
pub use self::keytag::KeyTag;
pub use self::lease::UpdateLease;
pub use self::llq::Llq;
pub use self::nsid::Nsid;
pub use self::padding::Padding;
pub use self::subnet::ClientSubnet;

use super::iana::{OptionCode, Rtype};
use super::name::Compressor;
use super::rdata::{ComposeRecordData, ParseRecordData, RecordData};
use super::wire::{Compose, Composer, Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use core::marker::PhantomData;
use octseq::builder::{infallible, OctetsBuilder};
use octseq::parse::Parser;

//------------ Opt -----------------------------------------------------------

/// OPT record data: a sequence of options.
///
/// The contained octets are guaranteed to be a sequence of option
/// headers and payloads that fills them exactly. The options themselves
/// are only interpreted when iterating.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Opt {
    octets: Bytes,
}

impl Opt {
    /// Creates OPT record data from the underlying octets.
    ///
    /// The function checks that the octets are a sequence of options,
    /// the last of which ends exactly at the end of the sequence.
    pub fn from_octets(octets: Bytes) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(octets.as_ref());
        while parser.remaining() > 0 {
            let header = OptionHeader::parse(&mut parser)?;
            parser.advance(usize::from(header.len))?;
        }
        Ok(Opt { octets })
    }

    /// Returns the raw octets of the option sequence.
    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Returns an empty builder for OPT record data.
    pub fn builder() -> OptBuilder {
        OptBuilder { octets: Vec::new() }
    }

    /// Returns an iterator over options of type `D`.
    ///
    /// Each option is parsed on the fly; options `D` does not care for
    /// are skipped quietly, malformed options surface as errors.
    pub fn iter<'a, D: ParseOptData<'a>>(&'a self) -> OptIter<'a, D> {
        OptIter {
            parser: Parser::from_ref(self.octets.as_ref()),
            marker: PhantomData,
        }
    }

    /// Returns the first option of type `D` if present and well-formed.
    pub fn first<'a, D: ParseOptData<'a>>(&'a self) -> Option<D> {
        self.iter().next()?.ok()
    }

    /// Parses OPT record data from a message.
    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Self::from_octets(Bytes::copy_from_slice(
            parser.parse_octets(parser.remaining())?,
        ))
    }
}

//--- RecordData and friends

impl RecordData for Opt {
    fn rtype(&self) -> Rtype {
        Rtype::OPT
    }
}

impl ComposeRecordData for Opt {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        self.octets.len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.octets.as_ref())
    }
}

impl<'a> ParseRecordData<'a> for Opt {
    fn parse_rdata(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if rtype == Rtype::OPT {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for option in self.iter::<AllOptData>() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            match option {
                Ok(option) => {
                    write!(f, "{}", option.code())?;
                }
                Err(_) => f.write_str("invalid option")?,
            }
        }
        Ok(())
    }
}

//------------ OptBuilder ----------------------------------------------------

/// Builds the option sequence of an OPT record.
#[derive(Clone, Debug, Default)]
pub struct OptBuilder {
    octets: Vec<u8>,
}

impl OptBuilder {
    /// Appends an option to the sequence.
    pub fn push(&mut self, option: &impl ComposeOptData) -> &mut Self {
        infallible(option.code().compose(&mut self.octets));
        infallible(option.compose_len().compose(&mut self.octets));
        infallible(option.compose_option(&mut self.octets));
        self
    }

    /// Finishes the sequence into OPT record data.
    pub fn finish(self) -> Opt {
        Opt {
            octets: self.octets.into(),
        }
    }
}

//------------ OptionHeader --------------------------------------------------

/// The header of an OPT option: code and payload length.
#[derive(Clone, Copy, Debug)]
pub struct OptionHeader {
    code: OptionCode,
    len: u16,
}

impl OptionHeader {
    pub fn code(self) -> OptionCode {
        self.code
    }

    pub fn len(self) -> u16 {
        self.len
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(OptionHeader {
            code: OptionCode::parse(parser)?,
            len: u16::parse(parser)?,
        })
    }
}

//------------ OptIter -------------------------------------------------------

/// An iterator over the options of an OPT record.
pub struct OptIter<'a, D> {
    parser: Parser<'a, [u8]>,
    marker: PhantomData<D>,
}

impl<'a, D: ParseOptData<'a>> Iterator for OptIter<'a, D> {
    type Item = Result<D, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.parser.remaining() > 0 {
            match self.next_step() {
                Ok(Some(item)) => return Some(Ok(item)),
                Ok(None) => {}
                Err(err) => {
                    // Cannot continue on a malformed sequence.
                    self.parser.advance(self.parser.remaining()).ok()?;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

impl<'a, D: ParseOptData<'a>> OptIter<'a, D> {
    fn next_step(&mut self) -> Result<Option<D>, ParseError> {
        let header = OptionHeader::parse(&mut self.parser)?;
        let mut option =
            self.parser.parse_parser(usize::from(header.len))?;
        let item = D::parse_option(header.code, &mut option)?;
        if item.is_some() && option.remaining() > 0 {
            return Err(ParseError::form_error(
                "trailing data in option",
            ));
        }
        Ok(item)
    }
}

//------------ OptData et al. ------------------------------------------------

/// A type representing an OPT option.
pub trait OptData {
    /// Returns the option code of the option.
    fn code(&self) -> OptionCode;
}

/// An OPT option that can be written to a message.
pub trait ComposeOptData: OptData {
    /// Returns the length of the option payload.
    fn compose_len(&self) -> u16;

    /// Appends the option payload, without the header.
    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

/// An OPT option that can be parsed from a message.
pub trait ParseOptData<'a>: OptData + Sized {
    /// Parses the payload of an option with the given code.
    ///
    /// Returns `Ok(None)` if the type is not interested in options of
    /// `code`. The parser is delimited to exactly the payload.
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError>;
}

//------------ AllOptData ----------------------------------------------------

/// All implemented OPT options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AllOptData {
    Cookie(Cookie),
    ClientSubnet(ClientSubnet),
    Expire(Expire),
    KeyTag(KeyTag),
    Llq(Llq),
    Nsid(Nsid),
    Padding(Padding),
    TcpKeepalive(TcpKeepalive),
    UpdateLease(UpdateLease),
    Other(UnknownOptData),
}

macro_rules! all_delegate {
    ( $self:expr, $inner:ident => $op:expr ) => {
        match $self {
            AllOptData::Cookie($inner) => $op,
            AllOptData::ClientSubnet($inner) => $op,
            AllOptData::Expire($inner) => $op,
            AllOptData::KeyTag($inner) => $op,
            AllOptData::Llq($inner) => $op,
            AllOptData::Nsid($inner) => $op,
            AllOptData::Padding($inner) => $op,
            AllOptData::TcpKeepalive($inner) => $op,
            AllOptData::UpdateLease($inner) => $op,
            AllOptData::Other($inner) => $op,
        }
    };
}

impl OptData for AllOptData {
    fn code(&self) -> OptionCode {
        all_delegate!(self, inner => inner.code())
    }
}

impl ComposeOptData for AllOptData {
    fn compose_len(&self) -> u16 {
        all_delegate!(self, inner => inner.compose_len())
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        all_delegate!(self, inner => inner.compose_option(target))
    }
}

impl<'a> ParseOptData<'a> for AllOptData {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        match code {
            OptionCode::COOKIE => {
                Cookie::parse(parser).map(AllOptData::Cookie)
            }
            OptionCode::CLIENT_SUBNET => {
                ClientSubnet::parse(parser).map(AllOptData::ClientSubnet)
            }
            OptionCode::EXPIRE => {
                Expire::parse(parser).map(AllOptData::Expire)
            }
            OptionCode::KEY_TAG => {
                KeyTag::parse(parser).map(AllOptData::KeyTag)
            }
            OptionCode::LLQ => Llq::parse(parser).map(AllOptData::Llq),
            OptionCode::NSID => {
                Nsid::parse(parser).map(AllOptData::Nsid)
            }
            OptionCode::PADDING => {
                Padding::parse(parser).map(AllOptData::Padding)
            }
            OptionCode::TCP_KEEPALIVE => {
                TcpKeepalive::parse(parser).map(AllOptData::TcpKeepalive)
            }
            OptionCode::UPDATE_LEASE => {
                UpdateLease::parse(parser).map(AllOptData::UpdateLease)
            }
            _ => UnknownOptData::parse(code, parser)
                .map(AllOptData::Other),
        }
        .map(Some)
    }
}

//------------ UnknownOptData ------------------------------------------------

/// The payload of an option without a concrete implementation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownOptData {
    code: OptionCode,
    data: Bytes,
}

impl UnknownOptData {
    pub fn from_octets(
        code: OptionCode,
        data: Bytes,
    ) -> Result<Self, LongOptData> {
        LongOptData::check_len(data.len())?;
        Ok(UnknownOptData { code, data })
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn parse<'a>(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let data = Bytes::copy_from_slice(
            parser.parse_octets(parser.remaining())?,
        );
        Ok(UnknownOptData { code, data })
    }
}

impl OptData for UnknownOptData {
    fn code(&self) -> OptionCode {
        self.code
    }
}

impl ComposeOptData for UnknownOptData {
    fn compose_len(&self) -> u16 {
        self.data.len() as u16
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.data.as_ref())
    }
}

//------------ LongOptData ---------------------------------------------------

/// Option data is longer than the 16 bit length field can express.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongOptData(());

impl LongOptData {
    pub fn check_len(len: usize) -> Result<(), Self> {
        if len > usize::from(u16::MAX) {
            Err(LongOptData(()))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for LongOptData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("option data too long")
    }
}

impl std::error::Error for LongOptData {}

//============ Testing =======================================================

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use octseq::builder::infallible;

    /// Checks that an option survives a compose and parse cycle.
    pub fn test_option_compose_parse<In, F, Out>(data: &In, parse: F)
    where
        In: ComposeOptData + PartialEq<Out> + core::fmt::Debug,
        F: FnOnce(&mut Parser<[u8]>) -> Result<Out, ParseError>,
        Out: core::fmt::Debug,
    {
        let mut buf = Vec::new();
        infallible(data.compose_option(&mut buf));
        assert_eq!(buf.len(), usize::from(data.compose_len()));
        let mut parser = Parser::from_ref(buf.as_slice());
        let parsed = parse(&mut parser).unwrap();
        assert_eq!(parser.remaining(), 0);
        assert_eq!(*data, parsed);
    }

    #[test]
    fn opt_exact_budget() {
        // A sequence whose last option ends exactly at the end.
        let octets = Bytes::from_static(
            b"\x00\x03\x00\x02ab\x00\x0c\x00\x00",
        );
        let opt = Opt::from_octets(octets).unwrap();
        let options: Result<Vec<AllOptData>, _> =
            opt.iter().collect();
        assert_eq!(options.unwrap().len(), 2);

        // Truncated payload.
        assert!(Opt::from_octets(Bytes::from_static(
            b"\x00\x03\x00\x05ab"
        ))
        .is_err());

        // Truncated header.
        assert!(
            Opt::from_octets(Bytes::from_static(b"\x00\x03\x00")).is_err()
        );
    }

    #[test]
    fn builder_round_trip() {
        let mut builder = Opt::builder();
        builder.push(
            &Nsid::from_octets(Bytes::from_static(b"host1")).unwrap(),
        );
        builder.push(&Expire::new(Some(1209600)));
        let opt = builder.finish();

        assert_eq!(
            opt.first::<Nsid>().unwrap().as_slice(),
            b"host1"
        );
        assert_eq!(
            opt.first::<Expire>().unwrap().expire(),
            Some(1209600)
        );
    }

    #[test]
    fn unknown_option_kept() {
        let mut builder = Opt::builder();
        builder.push(
            &UnknownOptData::from_octets(
                OptionCode::from_int(4711),
                Bytes::from_static(b"\x01\x02"),
            )
            .unwrap(),
        );
        let opt = builder.finish();
        let option = opt.first::<AllOptData>().unwrap();
        match option {
            AllOptData::Other(data) => {
                assert_eq!(data.code(), OptionCode::from_int(4711));
                assert_eq!(data.data().as_ref(), b"\x01\x02");
            }
            _ => panic!("expected unknown option"),
        }
    }

    #[test]
    fn unknown_option_length_checked() {
        assert!(UnknownOptData::from_octets(
            OptionCode::from_int(4711),
            Bytes::from(vec![0u8; 0x1_0000]),
        )
        .is_err());
    }
}
