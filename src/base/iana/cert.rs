//! Certificate types for the CERT record.

int_enum! {
    /// CERT certificate types.
    =>
    CertificateType, u16;

    /// An X.509 certificate as per PKIX.
    (PKIX => 1, "PKIX")

    /// A SPKI certificate.
    (SPKI => 2, "SPKI")

    /// An OpenPGP packet.
    (PGP => 3, "PGP")

    /// An URL of an X.509 data object.
    (IPKIX => 4, "IPKIX")

    /// An URL of a SPKI certificate.
    (ISPKI => 5, "ISPKI")

    /// A fingerprint and URL of an OpenPGP packet.
    (IPGP => 6, "IPGP")

    /// An attribute certificate.
    (ACPKIX => 7, "ACPKIX")

    /// An URL of an attribute certificate.
    (IACPKIX => 8, "IACPKIX")

    /// An URI private certificate.
    (URI => 253, "URI")

    /// An OID private certificate.
    (OID => 254, "OID")
}
