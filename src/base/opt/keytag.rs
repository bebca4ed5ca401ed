//! The edns-key-tag option.

use super::super::iana::OptionCode;
use super::super::wire::{Compose, Parse, ParseError};
use super::{ComposeOptData, OptData, ParseOptData};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

/// The key tag option.
///
/// Lists the key tags of the trust anchors a validating resolver is
/// using, so zone operators can follow rollover progress.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct KeyTag {
    tags: Vec<u16>,
}

impl KeyTag {
    pub fn new(tags: Vec<u16>) -> Self {
        KeyTag { tags }
    }

    pub fn tags(&self) -> &[u16] {
        &self.tags
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        if parser.remaining() % 2 != 0 {
            return Err(ParseError::form_error(
                "invalid key-tag option length",
            ));
        }
        let mut tags = Vec::with_capacity(parser.remaining() / 2);
        while parser.remaining() > 0 {
            tags.push(u16::parse(parser)?);
        }
        Ok(KeyTag { tags })
    }
}

impl OptData for KeyTag {
    fn code(&self) -> OptionCode {
        OptionCode::KEY_TAG
    }
}

impl ComposeOptData for KeyTag {
    fn compose_len(&self) -> u16 {
        (self.tags.len() * 2) as u16
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        for tag in &self.tags {
            tag.compose(target)?;
        }
        Ok(())
    }
}

impl<'a> ParseOptData<'a> for KeyTag {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if code == OptionCode::KEY_TAG {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for KeyTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for tag in &self.tags {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            tag.fmt(f)?;
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
        test_option_compose_parse(
            &KeyTag::new(vec![20326, 19036]),
            KeyTag::parse,
        );
    }

    #[test]
    fn odd_length() {
        let mut parser = Parser::from_ref(b"\x4f\x66\x01".as_slice());
        assert!(KeyTag::parse(&mut parser).is_err());
    }
}
