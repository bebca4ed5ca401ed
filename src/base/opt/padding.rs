//! The padding option for hiding message sizes.

use super::super::iana::OptionCode;
use super::super::wire::ParseError;
use super::{ComposeOptData, OptData, ParseOptData};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

/// The padding option.
///
/// The payload carries no information; its length pads the message to
/// a less telling size. Padding bytes are kept as parsed since the
/// protocol does not require them to be zero.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Padding {
    octets: Bytes,
}

impl Padding {
    /// Creates padding of the given length filled with zero bytes.
    pub fn new(len: u16) -> Self {
        Padding {
            octets: vec![0; usize::from(len)].into(),
        }
    }

    pub fn from_octets(octets: Bytes) -> Self {
        Padding { octets }
    }

    pub fn as_slice(&self) -> &[u8] {
        self.octets.as_ref()
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Padding {
            octets: Bytes::copy_from_slice(
                parser.parse_octets(parser.remaining())?,
            ),
        })
    }
}

impl OptData for Padding {
    fn code(&self) -> OptionCode {
        OptionCode::PADDING
    }
}

impl ComposeOptData for Padding {
    fn compose_len(&self) -> u16 {
        self.octets.len() as u16
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.octets.as_ref())
    }
}

impl<'a> ParseOptData<'a> for Padding {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if code == OptionCode::PADDING {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} bytes", self.octets.len())
    }
}
