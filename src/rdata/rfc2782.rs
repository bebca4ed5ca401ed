//! Record data from RFC 2782: service location.

use crate::base::iana::Rtype;
use crate::base::name::{Compressor, Name};
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::{Compose, Composer, Parse, ParseError};
use core::fmt;
use octseq::parse::Parser;

//------------ Srv -----------------------------------------------------------

/// SRV record data: the location of a service.
///
/// The target name is written without compression.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: Name,
}

impl Srv {
    pub fn new(
        priority: u16,
        weight: u16,
        port: u16,
        target: Name,
    ) -> Self {
        Srv {
            priority,
            weight,
            port,
            target,
        }
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn target(&self) -> &Name {
        &self.target
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        Ok(Srv {
            priority: u16::parse(parser)?,
            weight: u16::parse(parser)?,
            port: u16::parse(parser)?,
            target: Name::parse(parser)?,
        })
    }
}

impl RecordData for Srv {
    fn rtype(&self) -> Rtype {
        Rtype::SRV
    }
}

impl ComposeRecordData for Srv {
    fn rdlen(&self, _cx: &mut Compressor, _offset: usize) -> usize {
        6 + self.target.encoded_len()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
        _cx: &mut Compressor,
    ) -> Result<(), Target::AppendError> {
        self.priority.compose(target)?;
        self.weight.compose(target)?;
        self.port.compose(target)?;
        self.target.compose(target)
    }
}

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}.",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_rdlen};

    #[test]
    fn srv_compose_parse() {
        let srv = Srv::new(
            0,
            5,
            5060,
            "sip.example.com".parse().unwrap(),
        );
        test_rdlen(&srv);
        test_compose_parse(&srv, Srv::parse);
    }
}
