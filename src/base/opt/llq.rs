//! The long-lived query option of DNS push services.

use super::super::iana::OptionCode;
use super::super::wire::{Compose, Parse, ParseError};
use super::{ComposeOptData, OptData, ParseOptData};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

/// The LLQ option of Apple's long-lived queries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Llq {
    pub version: u16,
    pub operation: u16,
    pub error: u16,
    pub id: u64,
    pub lease: u32,
}

impl Llq {
    const LEN: u16 = 18;

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        if parser.remaining() != usize::from(Self::LEN) {
            return Err(ParseError::form_error(
                "invalid LLQ option length",
            ));
        }
        Ok(Llq {
            version: u16::parse(parser)?,
            operation: u16::parse(parser)?,
            error: u16::parse(parser)?,
            id: u64::parse(parser)?,
            lease: u32::parse(parser)?,
        })
    }
}

impl OptData for Llq {
    fn code(&self) -> OptionCode {
        OptionCode::LLQ
    }
}

impl ComposeOptData for Llq {
    fn compose_len(&self) -> u16 {
        Self::LEN
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.version.compose(target)?;
        self.operation.compose(target)?;
        self.error.compose(target)?;
        self.id.compose(target)?;
        self.lease.compose(target)
    }
}

impl<'a> ParseOptData<'a> for Llq {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if code == OptionCode::LLQ {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for Llq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "v{} op {} error {} id {} lease {}",
            self.version, self.operation, self.error, self.id, self.lease
        )
    }
}

#[cfg(test)]
mod test {
    use super::super::test::test_option_compose_parse;
    use super::*;

    #[test]
    fn compose_parse() {
        test_option_compose_parse(
            &Llq {
                version: 1,
                operation: 1,
                error: 0,
                id: 0x1234_5678_9ABC_DEF0,
                lease: 7200,
            },
            Llq::parse,
        );
    }
}
