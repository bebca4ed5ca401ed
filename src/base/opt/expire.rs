//! The expire option for zone transfer clients.

use super::super::iana::OptionCode;
use super::super::wire::{Compose, Parse, ParseError};
use super::{ComposeOptData, OptData, ParseOptData};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

/// The expire option.
///
/// A client includes the option with an empty payload; the server
/// answers with the expire value of the zone in seconds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Expire(Option<u32>);

impl Expire {
    pub fn new(expire: Option<u32>) -> Self {
        Expire(expire)
    }

    pub fn expire(self) -> Option<u32> {
        self.0
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        match parser.remaining() {
            0 => Ok(Expire(None)),
            4 => Ok(Expire(Some(u32::parse(parser)?))),
            _ => Err(ParseError::form_error(
                "invalid expire option length",
            )),
        }
    }
}

impl OptData for Expire {
    fn code(&self) -> OptionCode {
        OptionCode::EXPIRE
    }
}

impl ComposeOptData for Expire {
    fn compose_len(&self) -> u16 {
        match self.0 {
            Some(_) => 4,
            None => 0,
        }
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        match self.0 {
            Some(expire) => expire.compose(target),
            None => Ok(()),
        }
    }
}

impl<'a> ParseOptData<'a> for Expire {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if code == OptionCode::EXPIRE {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for Expire {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(expire) => expire.fmt(f),
            None => f.write_str("none"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::super::test::test_option_compose_parse;
    use super::*;

    #[test]
    fn compose_parse() {
        test_option_compose_parse(&Expire::new(None), Expire::parse);
        test_option_compose_parse(
            &Expire::new(Some(1209600)),
            Expire::parse,
        );
    }

    #[test]
    fn bad_length() {
        let mut parser = Parser::from_ref(b"\x00\x01".as_slice());
        assert!(Expire::parse(&mut parser).is_err());
    }
}
