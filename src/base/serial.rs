//! Serial numbers.
//!
//! DNS uses 32 bit serial numbers in various places that are conceptually
//! viewed as the 32 bit modulus of a larger number space. Because of that,
//! special rules apply when processing these values. This module provides
//! the type [`Serial`] that implements these rules.

use super::wire::{Compose, Parse, ParseError};
use core::cmp::Ordering;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::time::{SystemTime, UNIX_EPOCH};
use time::PrimitiveDateTime;

//------------ Serial --------------------------------------------------------

/// A serial number.
///
/// Serial numbers are used to track changes to resources, most
/// prominently the version of a zone in the SOA record, and as the
/// seconds-since-epoch time stamps of SIG records. Since these numbers are
/// only 32 bits long, they can wrap. [RFC 1982] defined the semantics for
/// doing arithmetic in the face of these wrap-arounds. This type
/// implements these semantics atop a native `u32`.
///
/// The RFC defines two operations: addition and comparison.
///
/// For addition, the amount added can only be a positive number of up to
/// `2^31 - 1`. Because of this, we decided to not implement the `Add`
/// trait but rather have a dedicated method `add` so as to not cause
/// surprise panics.
///
/// Serial numbers only implement a partial ordering. That is, there are
/// pairs of values that are not equal but there still isn't one value
/// larger than the other. Since this is neatly implemented by the
/// `PartialOrd` trait, the type implements that.
///
/// [RFC 1982]: https://tools.ietf.org/html/rfc1982
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Serial(pub u32);

impl Serial {
    /// Returns a serial number for the current Unix time.
    #[must_use]
    pub fn now() -> Self {
        let now = SystemTime::now();
        let value = match now.duration_since(UNIX_EPOCH) {
            Ok(value) => value,
            Err(_) => UNIX_EPOCH.duration_since(now).unwrap(),
        };
        Self(value.as_secs() as u32)
    }

    /// Returns a serial number for a calendar date.
    ///
    /// SIG inception and expiration times are this kind of serial. The
    /// date is taken to be in UTC; seconds since the Unix epoch are
    /// truncated to 32 bits, which is what the wire format carries.
    #[must_use]
    pub fn from_datetime(when: PrimitiveDateTime) -> Self {
        Self(when.assume_utc().unix_timestamp() as u32)
    }

    /// Returns the serial number as a raw integer.
    #[must_use]
    pub fn into_int(self) -> u32 {
        self.0
    }

    /// Add `other` to `self`.
    ///
    /// Serial numbers only allow values of up to `2^31 - 1` to be added to
    /// them. Therefore, this method requires `other` to be a `u32` instead
    /// of a `Serial` to indicate that you cannot simply add two serials
    /// together. This is also why we don't implement the `Add` trait.
    ///
    /// # Panics
    ///
    /// This method panics if `other` is greater than `2^31 - 1`.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(self, other: u32) -> Self {
        assert!(other <= 0x7FFF_FFFF);
        Serial(self.0.wrapping_add(other))
    }
}

//--- From

impl From<u32> for Serial {
    fn from(value: u32) -> Self {
        Serial(value)
    }
}

impl From<Serial> for u32 {
    fn from(value: Serial) -> Self {
        value.into_int()
    }
}

//--- Parse and Compose

impl<'a> Parse<'a> for Serial {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        u32::parse(parser).map(Into::into)
    }

    fn skip(parser: &mut Parser<'a, [u8]>) -> Result<(), ParseError> {
        u32::skip(parser)
    }
}

impl Compose for Serial {
    const COMPOSE_LEN: u16 = u32::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.0.compose(target)
    }
}

//--- Display

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

//--- PartialOrd

impl PartialOrd for Serial {
    fn partial_cmp(&self, other: &Serial) -> Option<Ordering> {
        match self.0.cmp(&other.0) {
            Ordering::Equal => Some(Ordering::Equal),
            Ordering::Less => {
                let diff = other.0 - self.0;
                if diff < 0x8000_0000 {
                    Some(Ordering::Less)
                } else if diff > 0x8000_0000 {
                    Some(Ordering::Greater)
                } else {
                    None
                }
            }
            Ordering::Greater => {
                let diff = self.0 - other.0;
                if diff < 0x8000_0000 {
                    Some(Ordering::Greater)
                } else if diff > 0x8000_0000 {
                    Some(Ordering::Less)
                } else {
                    None
                }
            }
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn good_addition() {
        assert_eq!(Serial(0).add(4), Serial(4));
        assert_eq!(
            Serial(0xFF00_0000).add(0x0F00_0000),
            Serial(0x0E00_0000)
        );
    }

    #[test]
    #[should_panic]
    fn bad_addition() {
        let _ = Serial(0).add(0x8000_0000);
    }

    #[test]
    fn comparison() {
        use core::cmp::Ordering::*;

        assert_eq!(Serial(12), Serial(12));
        assert_ne!(Serial(12), Serial(112));

        assert_eq!(Serial(12).partial_cmp(&Serial(12)), Some(Equal));

        // s1 is said to be less than s2 if [...]
        // (i1 < i2 and i2 - i1 < 2^(SERIAL_BITS - 1))
        assert_eq!(Serial(12).partial_cmp(&Serial(13)), Some(Less));
        assert_ne!(
            Serial(12).partial_cmp(&Serial(3_000_000_012)),
            Some(Less)
        );

        // or (i1 > i2 and i1 - i2 > 2^(SERIAL_BITS - 1))
        assert_eq!(
            Serial(3_000_000_012).partial_cmp(&Serial(12)),
            Some(Less)
        );
        assert_ne!(Serial(13).partial_cmp(&Serial(12)), Some(Less));

        // s1 is said to be greater than s2 if [...]
        // (i1 < i2 and i2 - i1 > 2^(SERIAL_BITS - 1))
        assert_eq!(
            Serial(12).partial_cmp(&Serial(3_000_000_012)),
            Some(Greater)
        );
        assert_ne!(Serial(12).partial_cmp(&Serial(13)), Some(Greater));

        // or (i1 > i2 and i1 - i2 < 2^(SERIAL_BITS - 1))
        assert_eq!(Serial(13).partial_cmp(&Serial(12)), Some(Greater));
        assert_ne!(
            Serial(3_000_000_012).partial_cmp(&Serial(12)),
            Some(Greater)
        );

        // i1 < i2 and i2 - i1 == 2^(SERIAL_BITS - 1): not equal but
        // neither is greater.
        assert_eq!(
            Serial(12).partial_cmp(&Serial(2_147_483_660)),
            None
        );
    }
}
