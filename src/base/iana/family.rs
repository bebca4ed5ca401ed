//! Address families.

int_enum! {
    /// IANA address family numbers.
    ///
    /// Used by the APL record and the EDNS client subnet option to tag
    /// which address space a prefix belongs to.
    =>
    AddressFamily, u16;

    /// IP version 4.
    (IPV4 => 1, "IPv4")

    /// IP version 6.
    (IPV6 => 2, "IPv6")
}

impl AddressFamily {
    /// Returns the full width of an address of this family in bits.
    ///
    /// Returns `None` for families the crate knows nothing about.
    pub fn address_bits(self) -> Option<u16> {
        match self {
            AddressFamily::IPV4 => Some(32),
            AddressFamily::IPV6 => Some(128),
            _ => None,
        }
    }
}
