//! Resource Record (RR) TYPEs.

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record. The currently assigned
    /// values are maintained in an [IANA registry].
    ///
    /// In order to avoid confusion over capitalization, the mnemonics are
    /// treated as single acronyms and all variant names are spelled with an
    /// initial capital letter.
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination.
    ///
    /// (Obsolete, replaced by MX.)
    (MD => 3, "MD")

    /// A mail forwarder.
    ///
    /// (Obsolete, replaced by MX.)
    (MF => 4, "MF")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A mailbox domain name.
    (MB => 7, "MB")

    /// A mail group member.
    (MG => 8, "MG")

    /// A mail rename domain name.
    (MR => 9, "MR")

    /// A null resource record.
    (NULL => 10, "NULL")

    /// A well known service description.
    (WKS => 11, "WKS")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// The responsible person for a domain.
    (RP => 17, "RP")

    /// AFS data base location.
    (AFSDB => 18, "AFSDB")

    /// An X.25 PSDN address.
    (X25 => 19, "X25")

    /// An ISDN address.
    (ISDN => 20, "ISDN")

    /// Route through.
    (RT => 21, "RT")

    /// An NSAP address.
    (NSAP => 22, "NSAP")

    /// A domain name pointer for NSAP records.
    (NSAPPTR => 23, "NSAP-PTR")

    /// A security signature.
    (SIG => 24, "SIG")

    /// A security key.
    (KEY => 25, "KEY")

    /// An X.400 mail mapping information record.
    (PX => 26, "PX")

    /// Geographical position.
    (GPOS => 27, "GPOS")

    /// An IPv6 address.
    (AAAA => 28, "AAAA")

    /// Location information.
    (LOC => 29, "LOC")

    /// The next domain in a zone.
    ///
    /// (Obsolete, replaced by NSEC.)
    (NXT => 30, "NXT")

    /// Server selection.
    (SRV => 33, "SRV")

    /// An ATM address.
    (ATMA => 34, "ATMA")

    /// A naming authority pointer.
    (NAPTR => 35, "NAPTR")

    /// A key exchanger.
    (KX => 36, "KX")

    /// A certificate record.
    (CERT => 37, "CERT")

    /// An IPv6 address (historic format).
    ///
    /// (Obsolete, replaced by AAAA.)
    (A6 => 38, "A6")

    /// Delegation name.
    (DNAME => 39, "DNAME")

    /// A kitchen sink record.
    (SINK => 40, "SINK")

    /// EDNS option pseudo record.
    (OPT => 41, "OPT")

    /// An address prefix list.
    (APL => 42, "APL")

    /// A delegation signer.
    (DS => 43, "DS")

    /// An SSH key fingerprint.
    (SSHFP => 44, "SSHFP")

    /// IPsec keying material.
    (IPSECKEY => 45, "IPSECKEY")

    /// A DNSSEC signature.
    (RRSIG => 46, "RRSIG")

    /// Next secure record.
    (NSEC => 47, "NSEC")

    /// A DNSSEC key.
    (DNSKEY => 48, "DNSKEY")

    /// Hashed next secure record.
    (NSEC3 => 50, "NSEC3")

    /// NSEC3 parameters.
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// Host identity protocol.
    (HIP => 55, "HIP")

    /// A resource record key.
    (RKEY => 57, "RKEY")

    /// A trust anchor link.
    (TALINK => 58, "TALINK")

    /// A child delegation signer.
    (CDS => 59, "CDS")

    /// SPF text strings.
    ///
    /// (Obsolete, replaced by TXT.)
    (SPF => 99, "SPF")

    /// Transaction key.
    (TKEY => 249, "TKEY")

    /// Transaction signature.
    (TSIG => 250, "TSIG")

    /// A request for a transfer of an entire zone.
    ///
    /// (Query type.)
    (AXFR => 252, "AXFR")

    /// A request for mailbox-related records.
    ///
    /// (Query type.)
    (MAILB => 253, "MAILB")

    /// A request for mail agent records.
    ///
    /// (Obsolete query type.)
    (MAILA => 254, "MAILA")

    /// A request for all records.
    ///
    /// (Query type.)
    (ANY => 255, "ANY")

    /// A uniform resource identifier.
    (URI => 256, "URI")

    /// Certification authority restriction.
    (CAA => 257, "CAA")

    /// A DNSSEC trust authority.
    (TA => 32768, "TA")

    /// A DNSSEC lookaside validation record.
    (DLV => 32769, "DLV")
}
