//! TCP header options.
//!
//! The options portion of a TCP header is a sequence of options, each
//! tagged with a kind byte. End-of-list and no-operation consist of their
//! kind byte alone; every other option follows it with a length byte that
//! covers the whole option including the two bytes of header.
//!
//! [`TcpOptions`] parses such a sequence out of a fixed budget, the space
//! between the end of the fixed header and the start of the payload. An
//! end-of-list option terminates the sequence; whatever follows it inside
//! the budget is padding and is dropped. Composing writes the options in
//! the order given and nothing else, leaving any padding to the caller.

use crate::base::iana::TcpOptionKind;
use crate::base::wire::{Compose, Parse, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ TcpOption -----------------------------------------------------

/// A single TCP option.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TcpOption {
    /// End of option list.
    Eol,

    /// No operation, used to pad between options.
    Nop,

    /// The maximum segment size the sender is willing to receive.
    Mss(u16),

    /// The shift count to scale the window field by.
    WindowScale(u8),

    /// The sender can process selective acknowledgments.
    SackPermitted,

    /// Blocks of data that have been received out of order.
    Sack(Vec<SackBlock>),

    /// Obsolete echo option.
    Echo(u32),

    /// Obsolete echo reply option.
    EchoReply(u32),

    /// A timestamp and the most recent timestamp received.
    Timestamp {
        value: u32,
        echo_reply: u32,
    },

    /// The sender can use the partial order connection service.
    PocPermitted,

    /// The partial order service profile.
    PocProfile {
        start: bool,
        end: bool,
    },

    /// Connection count.
    Cc(u32),

    /// Connection count for new connections.
    CcNew(u32),

    /// Connection count echo.
    CcEcho(u32),

    /// Request for an alternate checksum algorithm.
    AltChecksumRequest(u8),

    /// Data for an alternate checksum algorithm.
    AltChecksumData(Bytes),

    /// An MD5 digest over the segment and a connection key.
    Md5([u8; 16]),

    /// How long the sender will wait for acknowledgments.
    ///
    /// The timeout is 15 bits wide; the flag selects minutes instead of
    /// seconds as its unit.
    UserTimeout {
        minutes: bool,
        timeout: u16,
    },

    /// The mood of the packet.
    Mood(Bytes),

    /// An option of a kind this crate knows nothing about.
    Unknown {
        kind: TcpOptionKind,
        payload: Bytes,
    },
}

impl TcpOption {
    /// Returns the kind of the option.
    pub fn kind(&self) -> TcpOptionKind {
        match *self {
            TcpOption::Eol => TcpOptionKind::EOL,
            TcpOption::Nop => TcpOptionKind::NOP,
            TcpOption::Mss(_) => TcpOptionKind::MSS,
            TcpOption::WindowScale(_) => TcpOptionKind::WINDOW_SCALE,
            TcpOption::SackPermitted => TcpOptionKind::SACK_PERMITTED,
            TcpOption::Sack(_) => TcpOptionKind::SACK,
            TcpOption::Echo(_) => TcpOptionKind::ECHO,
            TcpOption::EchoReply(_) => TcpOptionKind::ECHO_REPLY,
            TcpOption::Timestamp { .. } => TcpOptionKind::TIMESTAMP,
            TcpOption::PocPermitted => TcpOptionKind::POC_PERMITTED,
            TcpOption::PocProfile { .. } => {
                TcpOptionKind::POC_SERVICE_PROFILE
            }
            TcpOption::Cc(_) => TcpOptionKind::CC,
            TcpOption::CcNew(_) => TcpOptionKind::CC_NEW,
            TcpOption::CcEcho(_) => TcpOptionKind::CC_ECHO,
            TcpOption::AltChecksumRequest(_) => {
                TcpOptionKind::ALT_CHECKSUM_REQUEST
            }
            TcpOption::AltChecksumData(_) => {
                TcpOptionKind::ALT_CHECKSUM_DATA
            }
            TcpOption::Md5(_) => TcpOptionKind::MD5_SIGNATURE,
            TcpOption::UserTimeout { .. } => {
                TcpOptionKind::USER_TIMEOUT
            }
            TcpOption::Mood(_) => TcpOptionKind::MOOD,
            TcpOption::Unknown { kind, .. } => kind,
        }
    }

    /// Returns the length the option occupies on the wire.
    ///
    /// Variable-length options can be built with payloads too long for
    /// the single length byte; [`TcpOptions::new`] rejects those.
    pub fn wire_len(&self) -> usize {
        match *self {
            TcpOption::Eol | TcpOption::Nop => 1,
            TcpOption::SackPermitted | TcpOption::PocPermitted => 2,
            TcpOption::WindowScale(_)
            | TcpOption::PocProfile { .. }
            | TcpOption::AltChecksumRequest(_) => 3,
            TcpOption::Mss(_) | TcpOption::UserTimeout { .. } => 4,
            TcpOption::Echo(_)
            | TcpOption::EchoReply(_)
            | TcpOption::Cc(_)
            | TcpOption::CcNew(_)
            | TcpOption::CcEcho(_) => 6,
            TcpOption::Timestamp { .. } => 10,
            TcpOption::Sack(ref blocks) => 2 + 8 * blocks.len(),
            TcpOption::AltChecksumData(ref data) => 2 + data.len(),
            TcpOption::Md5(_) => 18,
            TcpOption::Mood(ref mood) => 2 + mood.len(),
            TcpOption::Unknown { ref payload, .. } => {
                2 + payload.len()
            }
        }
    }

    /// Parses the payload of an option of the given kind.
    ///
    /// The parser holds exactly the payload, without kind and length
    /// bytes. All of it must be consumed.
    fn parse_payload(
        kind: TcpOptionKind,
        parser: &mut Parser<'_, [u8]>,
    ) -> Result<Self, ParseError> {
        let res = match kind {
            TcpOptionKind::MSS => TcpOption::Mss(u16::parse(parser)?),
            TcpOptionKind::WINDOW_SCALE => {
                TcpOption::WindowScale(u8::parse(parser)?)
            }
            TcpOptionKind::SACK_PERMITTED => TcpOption::SackPermitted,
            TcpOptionKind::SACK => {
                if parser.remaining() % 8 != 0 {
                    return Err(ParseError::form_error(
                        "ragged SACK option",
                    ));
                }
                let mut blocks =
                    Vec::with_capacity(parser.remaining() / 8);
                while parser.remaining() > 0 {
                    blocks.push(SackBlock {
                        left_edge: u32::parse(parser)?,
                        right_edge: u32::parse(parser)?,
                    });
                }
                TcpOption::Sack(blocks)
            }
            TcpOptionKind::ECHO => TcpOption::Echo(u32::parse(parser)?),
            TcpOptionKind::ECHO_REPLY => {
                TcpOption::EchoReply(u32::parse(parser)?)
            }
            TcpOptionKind::TIMESTAMP => TcpOption::Timestamp {
                value: u32::parse(parser)?,
                echo_reply: u32::parse(parser)?,
            },
            TcpOptionKind::POC_PERMITTED => TcpOption::PocPermitted,
            TcpOptionKind::POC_SERVICE_PROFILE => {
                let flags = u8::parse(parser)?;
                TcpOption::PocProfile {
                    start: flags & 0x80 != 0,
                    end: flags & 0x40 != 0,
                }
            }
            TcpOptionKind::CC => TcpOption::Cc(u32::parse(parser)?),
            TcpOptionKind::CC_NEW => {
                TcpOption::CcNew(u32::parse(parser)?)
            }
            TcpOptionKind::CC_ECHO => {
                TcpOption::CcEcho(u32::parse(parser)?)
            }
            TcpOptionKind::ALT_CHECKSUM_REQUEST => {
                TcpOption::AltChecksumRequest(u8::parse(parser)?)
            }
            TcpOptionKind::ALT_CHECKSUM_DATA => {
                TcpOption::AltChecksumData(Bytes::copy_from_slice(
                    parser.parse_octets(parser.remaining())?,
                ))
            }
            TcpOptionKind::MD5_SIGNATURE => {
                let mut digest = [0u8; 16];
                parser.parse_buf(&mut digest)?;
                TcpOption::Md5(digest)
            }
            TcpOptionKind::USER_TIMEOUT => {
                let raw = u16::parse(parser)?;
                TcpOption::UserTimeout {
                    minutes: raw & 0x8000 != 0,
                    timeout: raw & 0x7FFF,
                }
            }
            TcpOptionKind::MOOD => {
                TcpOption::Mood(Bytes::copy_from_slice(
                    parser.parse_octets(parser.remaining())?,
                ))
            }
            _ => TcpOption::Unknown {
                kind,
                payload: Bytes::copy_from_slice(
                    parser.parse_octets(parser.remaining())?,
                ),
            },
        };
        if parser.remaining() > 0 {
            return Err(ParseError::form_error(
                "trailing data in TCP option",
            ));
        }
        Ok(res)
    }

    /// Appends the option to the end of `target`.
    ///
    /// The option must fit its length byte, so `wire_len` may not
    /// exceed 255. Options parsed off the wire always do; for built
    /// options, [`TcpOptions::new`] enforces the limit.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        match *self {
            TcpOption::Eol | TcpOption::Nop => {
                return self.kind().compose(target);
            }
            _ => {}
        }
        self.kind().compose(target)?;
        (self.wire_len() as u8).compose(target)?;
        match *self {
            TcpOption::Eol
            | TcpOption::Nop
            | TcpOption::SackPermitted
            | TcpOption::PocPermitted => Ok(()),
            TcpOption::Mss(mss) => mss.compose(target),
            TcpOption::WindowScale(shift) => shift.compose(target),
            TcpOption::Sack(ref blocks) => {
                for block in blocks {
                    block.left_edge.compose(target)?;
                    block.right_edge.compose(target)?;
                }
                Ok(())
            }
            TcpOption::Echo(value)
            | TcpOption::EchoReply(value)
            | TcpOption::Cc(value)
            | TcpOption::CcNew(value)
            | TcpOption::CcEcho(value) => value.compose(target),
            TcpOption::Timestamp { value, echo_reply } => {
                value.compose(target)?;
                echo_reply.compose(target)
            }
            TcpOption::PocProfile { start, end } => {
                let mut flags = 0u8;
                if start {
                    flags |= 0x80;
                }
                if end {
                    flags |= 0x40;
                }
                flags.compose(target)
            }
            TcpOption::AltChecksumRequest(algorithm) => {
                algorithm.compose(target)
            }
            TcpOption::AltChecksumData(ref data) => {
                target.append_slice(data.as_ref())
            }
            TcpOption::Md5(ref digest) => target.append_slice(digest),
            TcpOption::UserTimeout { minutes, timeout } => {
                let mut raw = timeout & 0x7FFF;
                if minutes {
                    raw |= 0x8000;
                }
                raw.compose(target)
            }
            TcpOption::Mood(ref mood) => {
                target.append_slice(mood.as_ref())
            }
            TcpOption::Unknown { ref payload, .. } => {
                target.append_slice(payload.as_ref())
            }
        }
    }
}

impl fmt::Display for TcpOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TcpOption::Mss(mss) => write!(f, "MSS {}", mss),
            TcpOption::WindowScale(shift) => {
                write!(f, "WScale {}", shift)
            }
            TcpOption::Sack(ref blocks) => {
                f.write_str("SACK")?;
                for block in blocks {
                    write!(
                        f,
                        " {}-{}",
                        block.left_edge, block.right_edge
                    )?;
                }
                Ok(())
            }
            TcpOption::Timestamp { value, echo_reply } => {
                write!(f, "Timestamp {} {}", value, echo_reply)
            }
            TcpOption::UserTimeout { minutes, timeout } => {
                write!(
                    f,
                    "UserTimeout {} {}",
                    timeout,
                    if minutes { "min" } else { "s" }
                )
            }
            _ => self.kind().fmt(f),
        }
    }
}

//------------ SackBlock -----------------------------------------------------

/// A block of sequence numbers received out of order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SackBlock {
    /// The first sequence number of the block.
    pub left_edge: u32,

    /// The sequence number right after the block.
    pub right_edge: u32,
}

//------------ TcpOptions ----------------------------------------------------

/// The options portion of a TCP header.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct TcpOptions {
    options: Vec<TcpOption>,
}

impl TcpOptions {
    /// Creates a value from a list of options.
    ///
    /// Fails if any option is too long for its length byte, which only
    /// the variable-length kinds can be.
    pub fn new(options: Vec<TcpOption>) -> Result<Self, ParseError> {
        for option in &options {
            if option.wire_len() > 255 {
                return Err(ParseError::form_error(
                    "TCP option too long",
                ));
            }
        }
        Ok(TcpOptions { options })
    }

    /// Returns the options in order of appearance.
    pub fn options(&self) -> &[TcpOption] {
        &self.options
    }

    /// Returns the length the options occupy on the wire.
    ///
    /// Padding to a four byte boundary is not included.
    pub fn wire_len(&self) -> usize {
        self.options.iter().map(TcpOption::wire_len).sum()
    }

    /// Parses the options out of the remainder of `parser`.
    ///
    /// The parser must hold exactly the options budget of the header. An
    /// end-of-list option stops parsing; the rest of the budget is
    /// padding and gets skipped without being kept. An option whose
    /// declared length is below 2 or runs past the budget is an error.
    pub fn parse(
        parser: &mut Parser<'_, [u8]>,
    ) -> Result<Self, ParseError> {
        let mut options = Vec::new();
        while parser.remaining() > 0 {
            let kind = TcpOptionKind::parse(parser)?;
            match kind {
                TcpOptionKind::EOL => {
                    options.push(TcpOption::Eol);
                    parser.advance(parser.remaining())?;
                    break;
                }
                TcpOptionKind::NOP => {
                    options.push(TcpOption::Nop);
                    continue;
                }
                _ => {}
            }
            let len = usize::from(u8::parse(parser)?);
            if len < 2 {
                return Err(ParseError::form_error(
                    "bad TCP option length",
                ));
            }
            let mut payload = parser.parse_parser(len - 2)?;
            options.push(TcpOption::parse_payload(
                kind,
                &mut payload,
            )?);
        }
        Ok(TcpOptions { options })
    }

    /// Appends the options to the end of `target`.
    ///
    /// The options are written in order, with no padding after them.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        for option in &self.options {
            option.compose(target)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;

    fn parse_all(wire: &[u8]) -> Result<TcpOptions, ParseError> {
        let mut parser = Parser::from_ref(wire);
        let res = TcpOptions::parse(&mut parser)?;
        assert_eq!(parser.remaining(), 0);
        Ok(res)
    }

    #[test]
    fn syn_options_round_trip() {
        // A typical SYN: MSS, SACK permitted, timestamp, NOP, window
        // scale.
        let options = TcpOptions::new(vec![
            TcpOption::Mss(1460),
            TcpOption::SackPermitted,
            TcpOption::Timestamp {
                value: 0x01020304,
                echo_reply: 0,
            },
            TcpOption::Nop,
            TcpOption::WindowScale(7),
        ])
        .unwrap();
        assert_eq!(options.wire_len(), 20);

        let mut buf = Vec::new();
        infallible(options.compose(&mut buf));
        assert_eq!(buf.len(), 20);
        assert_eq!(parse_all(&buf).unwrap(), options);
    }

    #[test]
    fn sack_blocks() {
        let wire =
            b"\x05\x12\
              \x00\x00\x10\x00\x00\x00\x20\x00\
              \x00\x00\x30\x00\x00\x00\x40\x00";
        let options = parse_all(wire).unwrap();
        assert_eq!(
            options.options(),
            &[TcpOption::Sack(vec![
                SackBlock {
                    left_edge: 0x1000,
                    right_edge: 0x2000
                },
                SackBlock {
                    left_edge: 0x3000,
                    right_edge: 0x4000
                },
            ])]
        );

        // A SACK payload that is not a whole number of blocks.
        assert!(parse_all(b"\x05\x06\x00\x00\x10\x00").is_err());
    }

    #[test]
    fn eol_swallows_padding() {
        let wire = b"\x02\x04\x05\xB4\x00\x00\x00\x00";
        let options = parse_all(wire).unwrap();
        assert_eq!(
            options.options(),
            &[TcpOption::Mss(1460), TcpOption::Eol]
        );

        // Composing writes no padding back.
        let mut buf = Vec::new();
        infallible(options.compose(&mut buf));
        assert_eq!(buf, b"\x02\x04\x05\xB4\x00".as_slice());
    }

    #[test]
    fn length_overrun_rejected() {
        // MSS claiming 4 bytes with only 3 present.
        assert!(parse_all(b"\x02\x04\x05").is_err());
        // Length below the option header size.
        assert!(parse_all(b"\x02\x01\x05\xB4").is_err());
        // Kind byte with no length byte at all.
        assert!(parse_all(b"\x02").is_err());
    }

    #[test]
    fn payload_length_checked() {
        // MSS with a 3 byte payload.
        assert!(parse_all(b"\x02\x05\x05\xB4\x00").is_err());
    }

    #[test]
    fn user_timeout_flag() {
        let options = parse_all(b"\x1C\x04\x80\x3C").unwrap();
        assert_eq!(
            options.options(),
            &[TcpOption::UserTimeout {
                minutes: true,
                timeout: 60
            }]
        );
        let mut buf = Vec::new();
        infallible(options.compose(&mut buf));
        assert_eq!(buf, b"\x1C\x04\x80\x3C".as_slice());
    }

    #[test]
    fn unknown_option_round_trip() {
        let wire = b"\x1B\x05\x01\x02\x03";
        let options = parse_all(wire).unwrap();
        assert_eq!(
            options.options(),
            &[TcpOption::Unknown {
                kind: TcpOptionKind::QUICK_START_RESPONSE,
                payload: Bytes::from_static(b"\x01\x02\x03"),
            }]
        );
        let mut buf = Vec::new();
        infallible(options.compose(&mut buf));
        assert_eq!(buf, wire.as_slice());
    }

    #[test]
    fn overlong_options_rejected() {
        // A mood so verbose its option cannot carry it.
        assert!(TcpOptions::new(vec![TcpOption::Mood(Bytes::from(
            vec![b'!'; 300]
        ))])
        .is_err());
        // 32 SACK blocks need 258 bytes.
        assert!(TcpOptions::new(vec![TcpOption::Sack(vec![
            SackBlock {
                left_edge: 0,
                right_edge: 1
            };
            32
        ])])
        .is_err());
        // 253 payload bytes are the largest that still fit.
        assert!(TcpOptions::new(vec![TcpOption::Unknown {
            kind: TcpOptionKind::QUICK_START_RESPONSE,
            payload: Bytes::from(vec![0u8; 253]),
        }])
        .is_ok());
        assert!(TcpOptions::new(vec![TcpOption::Unknown {
            kind: TcpOptionKind::QUICK_START_RESPONSE,
            payload: Bytes::from(vec![0u8; 254]),
        }])
        .is_err());
    }

    #[test]
    fn mood_option() {
        let options = parse_all(b"\x19\x04:)").unwrap();
        assert_eq!(
            options.options(),
            &[TcpOption::Mood(Bytes::from_static(b":)"))]
        );
    }
}
