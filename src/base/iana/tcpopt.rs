//! TCP option kind numbers.

int_enum! {
    /// TCP option kinds.
    ///
    /// The first byte of every TCP option identifies its kind. End-of-list
    /// and no-operation consist of that byte alone; every other kind is
    /// followed by a length byte covering the whole option.
    =>
    TcpOptionKind, u8;

    /// End of option list.
    (EOL => 0, "EOL")

    /// No operation.
    (NOP => 1, "NOP")

    /// Maximum segment size.
    (MSS => 2, "MSS")

    /// Window scale.
    (WINDOW_SCALE => 3, "WScale")

    /// Selective acknowledgment permitted.
    (SACK_PERMITTED => 4, "SACKPermitted")

    /// Selective acknowledgment blocks.
    (SACK => 5, "SACK")

    /// Echo.
    ///
    /// (Obsolete, superseded by the timestamp option.)
    (ECHO => 6, "Echo")

    /// Echo reply.
    ///
    /// (Obsolete, superseded by the timestamp option.)
    (ECHO_REPLY => 7, "EchoReply")

    /// Timestamp and echoed timestamp.
    (TIMESTAMP => 8, "Timestamp")

    /// Partial order connection permitted.
    (POC_PERMITTED => 9, "POCPermitted")

    /// Partial order service profile.
    (POC_SERVICE_PROFILE => 10, "POCServiceProfile")

    /// Connection count.
    (CC => 11, "CC")

    /// Connection count for new connections.
    (CC_NEW => 12, "CC.NEW")

    /// Connection count echo.
    (CC_ECHO => 13, "CC.ECHO")

    /// Alternate checksum request.
    (ALT_CHECKSUM_REQUEST => 14, "AltChecksumRequest")

    /// Alternate checksum data.
    (ALT_CHECKSUM_DATA => 15, "AltChecksumData")

    /// MD5 signature.
    (MD5_SIGNATURE => 19, "MD5Signature")

    /// The packet's mood.
    ///
    /// (April 1st RFC 5841.)
    (MOOD => 25, "Mood")

    /// Quick-start response.
    (QUICK_START_RESPONSE => 27, "QuickStartResponse")

    /// User timeout.
    (USER_TIMEOUT => 28, "UserTimeout")
}
