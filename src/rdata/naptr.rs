//! Record data from RFC 3403: naming authority pointers.

use crate::base::charstr::CharStr;
use crate::base::iana::Rtype;
use crate::base::name::{Compressor, Name};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Composer, Parse, ParseError};
use core::fmt;
use octseq::parse::Parser;

//------------ Naptr ---------------------------------------------------------

/// NAPTR record data: a DDDS rewrite rule.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Naptr {
    order: u16,
    preference: u16,
    flags: CharStr,
    services: CharStr,
    regexp: CharStr,
    replacement: Name,
}

impl Naptr {
    pub fn new(
        order: u16,
        preference: u16,
        flags: CharStr,
        services: CharStr,
        regexp: CharStr,
        replacement: Name,
    ) -> Self {
        Naptr {
            order,
            preference,
            flags,
            services,
            regexp,
            replacement,
        }
    }

    pub fn order(&self) -> u16 {
        self.order
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn flags(&self) -> &CharStr {
        &self.flags
    }

    pub fn services(&self) -> &CharStr {
        &self.services
    }

    pub fn regexp(&self) -> &CharStr {
        &self.regexp
    }

    pub fn replacement(&self) -> &Name {
        &self.replacement
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Naptr {
            order: u16::parse(parser)?,
            preference: u16::parse(parser)?,
            flags: CharStr::parse(parser)?,
            services: CharStr::parse(parser)?,
            regexp: CharStr::parse(parser)?,
            replacement: Name::parse(parser)?,
        })
    }
}

impl RecordData for Naptr {
    fn rtype(&self) -> Rtype {
        Rtype::NAPTR
    }
}

impl ComposeRecordData for Naptr {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        4 + self.flags.encoded_len()
            + self.services.encoded_len()
            + self.regexp.encoded_len()
            + self.replacement.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.order.compose(target)?;
        self.preference.compose(target)?;
        self.flags.compose(target)?;
        self.services.compose(target)?;
        self.regexp.compose(target)?;
        self.replacement.compose(target)
    }
}

impl fmt::Display for Naptr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}.",
            self.order,
            self.preference,
            self.flags,
            self.services,
            self.regexp,
            self.replacement
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_rdlen};

    #[test]
    fn naptr_compose_parse() {
        let naptr = Naptr::new(
            100,
            50,
            CharStr::from_slice(b"s").unwrap(),
            CharStr::from_slice(b"SIP+D2U").unwrap(),
            CharStr::from_slice(b"").unwrap(),
            "_sip._udp.example.com".parse().unwrap(),
        );
        test_rdlen(&naptr);
        test_compose_parse(&naptr, Naptr::parse);
    }
}
