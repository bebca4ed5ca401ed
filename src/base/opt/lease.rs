//! The update lease option of dynamic update clients.

use super::super::iana::OptionCode;
use super::super::wire::{Compose, Parse, ParseError};
use super::{ComposeOptData, OptData, ParseOptData};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

/// The update lease option.
///
/// Carries the desired lease in seconds and optionally a separate lease
/// for KEY records.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UpdateLease {
    lease: u32,
    key_lease: Option<u32>,
}

impl UpdateLease {
    pub fn new(lease: u32, key_lease: Option<u32>) -> Self {
        UpdateLease { lease, key_lease }
    }

    pub fn lease(self) -> u32 {
        self.lease
    }

    pub fn key_lease(self) -> Option<u32> {
        self.key_lease
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        match parser.remaining() {
            4 => Ok(UpdateLease {
                lease: u32::parse(parser)?,
                key_lease: None,
            }),
            8 => Ok(UpdateLease {
                lease: u32::parse(parser)?,
                key_lease: Some(u32::parse(parser)?),
            }),
            _ => Err(ParseError::form_error(
                "invalid update lease option length",
            )),
        }
    }
}

impl OptData for UpdateLease {
    fn code(&self) -> OptionCode {
        OptionCode::UPDATE_LEASE
    }
}

impl ComposeOptData for UpdateLease {
    fn compose_len(&self) -> u16 {
        match self.key_lease {
            Some(_) => 8,
            None => 4,
        }
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.lease.compose(target)?;
        match self.key_lease {
            Some(key_lease) => key_lease.compose(target),
            None => Ok(()),
        }
    }
}

impl<'a> ParseOptData<'a> for UpdateLease {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if code == OptionCode::UPDATE_LEASE {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for UpdateLease {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.key_lease {
            Some(key_lease) => {
                write!(f, "{} key {}", self.lease, key_lease)
            }
            None => self.lease.fmt(f),
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
            &UpdateLease::new(3600, None),
            UpdateLease::parse,
        );
        test_option_compose_parse(
            &UpdateLease::new(3600, Some(86400)),
            UpdateLease::parse,
        );
    }
}
