//! Security algorithm numbers.

int_enum! {
    /// Security algorithm numbers.
    ///
    /// Used by the KEY, SIG, RRSIG, DNSKEY, DS and IPSECKEY records. The
    /// crate never interprets keys or signatures; the numbers are carried
    /// so a value can be matched without consulting raw integers.
    =>
    SecurityAlgorithm, u8;

    /// RSA/MD5.
    (RSAMD5 => 1, "RSAMD5")

    /// Diffie-Hellman.
    (DH => 2, "DH")

    /// DSA/SHA1.
    (DSA => 3, "DSA")

    /// RSA/SHA-1.
    (RSASHA1 => 5, "RSASHA1")

    /// DSA-NSEC3-SHA1.
    (DSA_NSEC3_SHA1 => 6, "DSA-NSEC3-SHA1")

    /// RSASHA1-NSEC3-SHA1.
    (RSASHA1_NSEC3_SHA1 => 7, "RSASHA1-NSEC3-SHA1")

    /// RSA/SHA-256.
    (RSASHA256 => 8, "RSASHA256")

    /// RSA/SHA-512.
    (RSASHA512 => 10, "RSASHA512")

    /// GOST R 34.10-2001.
    (ECC_GOST => 12, "ECC-GOST")

    /// ECDSA curve P-256 with SHA-256.
    (ECDSAP256SHA256 => 13, "ECDSAP256SHA256")

    /// ECDSA curve P-384 with SHA-384.
    (ECDSAP384SHA384 => 14, "ECDSAP384SHA384")

    /// Ed25519.
    (ED25519 => 15, "ED25519")

    /// Ed448.
    (ED448 => 16, "ED448")

    /// Indirect keys.
    (INDIRECT => 252, "INDIRECT")

    /// A private algorithm identified by a domain name.
    (PRIVATEDNS => 253, "PRIVATEDNS")

    /// A private algorithm identified by an OID.
    (PRIVATEOID => 254, "PRIVATEOID")
}

int_enum! {
    /// NSEC3 hash algorithm numbers.
    =>
    Nsec3HashAlgorithm, u8;

    /// SHA-1.
    (SHA1 => 1, "SHA-1")
}

int_enum! {
    /// Delegation signer digest algorithm numbers.
    =>
    DigestAlgorithm, u8;

    /// SHA-1.
    (SHA1 => 1, "SHA-1")

    /// SHA-256.
    (SHA256 => 2, "SHA-256")

    /// GOST R 34.11-94.
    (GOST => 3, "GOST R 34.11-94")

    /// SHA-384.
    (SHA384 => 4, "SHA-384")
}
