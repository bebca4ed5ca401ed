//! The EDNS client subnet option.

use super::super::iana::{AddressFamily, OptionCode};
use super::super::wire::{Compose, Parse, ParseError};
use super::{ComposeOptData, OptData, ParseOptData};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::net::IpAddr;

/// The client subnet option.
///
/// Carries the network prefix of the client a resolver is asking on
/// behalf of. Only as many address bytes as the source prefix length
/// covers appear on the wire; bits past the prefix length are zero.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ClientSubnet {
    source_prefix_len: u8,
    scope_prefix_len: u8,
    addr: IpAddr,
}

impl ClientSubnet {
    /// Creates a new client subnet value.
    ///
    /// Fails if a prefix length exceeds the address width. Address bits
    /// beyond the source prefix length are cleared.
    pub fn new(
        source_prefix_len: u8,
        scope_prefix_len: u8,
        addr: IpAddr,
    ) -> Result<Self, ParseError> {
        let bits = match addr {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if u16::from(source_prefix_len) > bits
            || u16::from(scope_prefix_len) > bits
        {
            return Err(ParseError::form_error("bad prefix length"));
        }
        Ok(ClientSubnet {
            source_prefix_len,
            scope_prefix_len,
            addr: mask_addr(addr, source_prefix_len),
        })
    }

    pub fn source_prefix_len(self) -> u8 {
        self.source_prefix_len
    }

    pub fn scope_prefix_len(self) -> u8 {
        self.scope_prefix_len
    }

    pub fn addr(self) -> IpAddr {
        self.addr
    }

    /// The number of address bytes present on the wire.
    fn addr_len(self) -> usize {
        (usize::from(self.source_prefix_len) + 7) / 8
    }

    pub fn parse<'a>(
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Self, ParseError> {
        let family = AddressFamily::parse(parser)?;
        let source_prefix_len = u8::parse(parser)?;
        let scope_prefix_len = u8::parse(parser)?;
        let addr_len = (usize::from(source_prefix_len) + 7) / 8;
        if parser.remaining() != addr_len {
            return Err(ParseError::form_error(
                "invalid client subnet address length",
            ));
        }
        let addr = match family {
            AddressFamily::IPV4 => {
                if addr_len > 4 {
                    return Err(ParseError::form_error(
                        "bad prefix length",
                    ));
                }
                let mut buf = [0u8; 4];
                parser.parse_buf(&mut buf[..addr_len])?;
                IpAddr::from(buf)
            }
            AddressFamily::IPV6 => {
                if addr_len > 16 {
                    return Err(ParseError::form_error(
                        "bad prefix length",
                    ));
                }
                let mut buf = [0u8; 16];
                parser.parse_buf(&mut buf[..addr_len])?;
                IpAddr::from(buf)
            }
            _ => {
                return Err(ParseError::form_error(
                    "unknown address family",
                ))
            }
        };
        if mask_addr(addr, source_prefix_len) != addr {
            return Err(ParseError::form_error(
                "bits set past client subnet prefix",
            ));
        }
        Ok(ClientSubnet {
            source_prefix_len,
            scope_prefix_len,
            addr,
        })
    }
}

/// Clears all address bits past `prefix_len`.
fn mask_addr(addr: IpAddr, prefix_len: u8) -> IpAddr {
    match addr {
        IpAddr::V4(addr) => {
            let bits = u32::from(addr);
            let mask = if prefix_len >= 32 {
                u32::MAX
            } else {
                !(u32::MAX >> prefix_len)
            };
            IpAddr::from(std::net::Ipv4Addr::from(bits & mask))
        }
        IpAddr::V6(addr) => {
            let bits = u128::from(addr);
            let mask = if prefix_len >= 128 {
                u128::MAX
            } else {
                !(u128::MAX >> prefix_len)
            };
            IpAddr::from(std::net::Ipv6Addr::from(bits & mask))
        }
    }
}

impl OptData for ClientSubnet {
    fn code(&self) -> OptionCode {
        OptionCode::CLIENT_SUBNET
    }
}

impl ComposeOptData for ClientSubnet {
    fn compose_len(&self) -> u16 {
        4 + self.addr_len() as u16
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        let mut buf = [0u8; 16];
        let family = match self.addr {
            IpAddr::V4(addr) => {
                buf[..4].copy_from_slice(&addr.octets());
                AddressFamily::IPV4
            }
            IpAddr::V6(addr) => {
                buf.copy_from_slice(&addr.octets());
                AddressFamily::IPV6
            }
        };
        family.compose(target)?;
        self.source_prefix_len.compose(target)?;
        self.scope_prefix_len.compose(target)?;
        target.append_slice(&buf[..self.addr_len()])
    }
}

impl<'a> ParseOptData<'a> for ClientSubnet {
    fn parse_option(
        code: OptionCode,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError> {
        if code == OptionCode::CLIENT_SUBNET {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for ClientSubnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.addr, self.source_prefix_len, self.scope_prefix_len
        )
    }
}

#[cfg(test)]
mod test {
    use super::super::test::test_option_compose_parse;
    use super::*;

    #[test]
    fn compose_parse() {
        let subnet = ClientSubnet::new(
            24,
            0,
            IpAddr::from([192, 0, 2, 0]),
        )
        .unwrap();
        test_option_compose_parse(&subnet, ClientSubnet::parse);
        assert_eq!(subnet.compose_len(), 7);
    }

    #[test]
    fn new_masks_host_bits() {
        let subnet = ClientSubnet::new(
            24,
            0,
            IpAddr::from([192, 0, 2, 99]),
        )
        .unwrap();
        assert_eq!(subnet.addr(), IpAddr::from([192, 0, 2, 0]));
    }

    #[test]
    fn parse_rejects_host_bits() {
        // 24 bit prefix but the third byte has trailing bits set is
        // fine; bits in the low byte cannot appear since only three
        // address bytes are on the wire. A 20 bit prefix with bits in
        // the last nibble is the interesting case.
        let wire = b"\x00\x01\x14\x00\xC0\x00\x0F";
        let mut parser = Parser::from_ref(wire.as_slice());
        assert!(ClientSubnet::parse(&mut parser).is_err());
    }

    #[test]
    fn parse_rejects_short_address() {
        let wire = b"\x00\x01\x18\x00\xC0\x00";
        let mut parser = Parser::from_ref(wire.as_slice());
        assert!(ClientSubnet::parse(&mut parser).is_err());
    }
}
