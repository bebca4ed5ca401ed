//! The DNS cookie option for off-path spoofing protection.

use super::super::iana::OptionCode;
use super::super::wire::ParseError;
use super::{ComposeOptData, OptData, ParseOptData};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

/// A DNS cookie.
///
/// A client cookie is always eight bytes. The server cookie, if present,
/// is between eight and 32 bytes.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Cookie {
    client: [u8; 8],
    server: Option<Bytes>,
}

impl Cookie {
    pub fn new(
        client: [u8; 8],
        server: Option<Bytes>,
    ) -> Result<Self, ParseError> {
        if let Some(ref server) = server {
            if server.len() < 8 || server.len() > 32 {
                return Err(ParseError::form_error(
                    "invalid server cookie length",
                ));
            }
        }
        Ok(Cookie { client, server })
    }

    pub fn client(&self) -> [u8; 8] {
        self.client
    }

    pub fn server(&self) -> Option<&Bytes> {
        self.server.as_ref()
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let mut client = [0u8; 8];
        parser.parse_buf(&mut client)?;
        let server = match parser.remaining() {
            0 => None,
            len @ 8..=32 => Some(Bytes::copy_from_slice(
                parser.parse_octets(len)?,
            )),
            _ => {
                return Err(ParseError::form_error(
                    "invalid server cookie length",
                ))
            }
        };
        Ok(Cookie { client, server })
    }
}

impl OptData for Cookie {
    fn code(&self) -> OptionCode {
        OptionCode::COOKIE
    }
}

impl ComposeOptData for Cookie {
    fn compose_len(&self) -> u16 {
        8 + self.server.as_ref().map_or(0, |s| s.len() as u16)
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.client)?;
        if let Some(ref server) = self.server {
            target.append_slice(server.as_ref())?;
        }
        Ok(())
    }
}

impl<'a> ParseOptData<'a> for Cookie {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if code == OptionCode::COOKIE {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ch in &self.client {
            write!(f, "{:02X}", ch)?;
        }
        if let Some(ref server) = self.server {
            for ch in server.as_ref() {
                write!(f, "{:02X}", ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::super::test::test_option_compose_parse;
    use super::*;

    #[test]
    fn compose_parse() {
        let cookie = Cookie::new(*b"clientck", None).unwrap();
        test_option_compose_parse(&cookie, Cookie::parse);
        let cookie = Cookie::new(
            *b"clientck",
            Some(Bytes::from_static(b"server-cookie-24")),
        )
        .unwrap();
        test_option_compose_parse(&cookie, Cookie::parse);
    }

    #[test]
    fn bad_server_cookie_lengths() {
        assert!(Cookie::new(
            *b"clientck",
            Some(Bytes::from_static(b"short"))
        )
        .is_err());
        // Seven bytes of server cookie on the wire.
        let wire = b"clientck1234567";
        let mut parser = Parser::from_ref(wire.as_slice());
        assert!(Cookie::parse(&mut parser).is_err());
    }
}
