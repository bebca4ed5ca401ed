//! The edns-tcp-keepalive option.

use super::super::iana::OptionCode;
use super::super::wire::{Compose, Parse, ParseError};
use super::{ComposeOptData, OptData, ParseOptData};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

/// The TCP keepalive option.
///
/// The timeout is in units of 100 milliseconds. Clients send the option
/// empty, servers answer with the timeout they are prepared to keep an
/// idle connection open for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TcpKeepalive(Option<u16>);

impl TcpKeepalive {
    pub fn new(timeout: Option<u16>) -> Self {
        TcpKeepalive(timeout)
    }

    pub fn timeout(self) -> Option<u16> {
        self.0
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        match parser.remaining() {
            0 => Ok(TcpKeepalive(None)),
            2 => Ok(TcpKeepalive(Some(u16::parse(parser)?))),
            _ => Err(ParseError::form_error(
                "invalid tcp-keepalive option length",
            )),
        }
    }
}

impl OptData for TcpKeepalive {
    fn code(&self) -> OptionCode {
        OptionCode::TCP_KEEPALIVE
    }
}

impl ComposeOptData for TcpKeepalive {
    fn compose_len(&self) -> u16 {
        match self.0 {
            Some(_) => 2,
            None => 0,
        }
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        match self.0 {
            Some(timeout) => timeout.compose(target),
            None => Ok(()),
        }
    }
}

impl<'a> ParseOptData<'a> for TcpKeepalive {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if code == OptionCode::TCP_KEEPALIVE {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for TcpKeepalive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(timeout) => timeout.fmt(f),
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
        test_option_compose_parse(
            &TcpKeepalive::new(None),
            TcpKeepalive::parse,
        );
        test_option_compose_parse(
            &TcpKeepalive::new(Some(600)),
            TcpKeepalive::parse,
        );
    }
}
