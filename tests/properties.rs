//! End-to-end properties of the record codec.

use bytes::Bytes;
use netwire::base::charstr::CharStr;
use netwire::base::iana::{Class, Rtype, SecurityAlgorithm};
use netwire::base::name::{Compressor, Name};
use netwire::base::opt::{AllOptData, Nsid, Opt, TcpKeepalive};
use netwire::base::rdata::ComposeRecordData;
use netwire::base::{Record, Serial};
use netwire::rdata::bitmap::RtypeBitmap;
use netwire::rdata::dnssec::Nsec;
use netwire::rdata::rfc1035::{Cname, Mx, Ns, Soa, Txt};
use netwire::rdata::rfc3596::Aaaa;
use netwire::rdata::AnyRecordData;
use octseq::builder::infallible;
use octseq::parse::Parser;

fn name(s: &str) -> Name {
    s.parse().unwrap()
}

fn compose_all(records: &[Record<AnyRecordData>]) -> Vec<u8> {
    let mut cx = Compressor::new();
    let mut buf = Vec::new();
    for record in records {
        infallible(record.compose(&mut buf, &mut cx));
    }
    buf
}

fn parse_all(wire: &[u8]) -> Vec<Record<AnyRecordData>> {
    let mut parser = Parser::from_ref(wire);
    let mut records = Vec::new();
    while parser.remaining() > 0 {
        records.push(Record::parse(&mut parser).unwrap().unwrap());
    }
    records
}

#[test]
fn compression_reuses_suffixes() {
    let records = [
        Record::new(
            name("a.example.com"),
            Class::IN,
            3600,
            AnyRecordData::Cname(Cname::new(name("b.example.com"))),
        ),
        Record::new(
            name("b.example.com"),
            Class::IN,
            3600,
            AnyRecordData::Mx(Mx::new(10, name("example.com"))),
        ),
    ];
    let buf = compose_all(&records);

    // "example.com" is spelled out once, at offset 2 inside the first
    // owner. The second owner is a label plus a pointer, and the MX
    // exchange is a bare pointer.
    assert_eq!(&buf[..17], b"\x01a\x07example\x03com\x00");
    let count = buf
        .windows(13)
        .filter(|win| *win == b"\x07example\x03com\x00")
        .count();
    assert_eq!(count, 1);
    assert!(buf.windows(2).any(|win| win == [0xC0, 0x02]));

    let parsed = parse_all(&buf);
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].owner(), records[0].owner());
    assert_eq!(parsed[1].owner(), records[1].owner());
    assert_eq!(parsed[0].data(), records[0].data());
    assert_eq!(parsed[1].data(), records[1].data());
}

#[test]
fn disabled_compressor_writes_names_verbatim() {
    let record = Record::new(
        name("a.example.com"),
        Class::IN,
        3600,
        AnyRecordData::Ns(Ns::new(name("a.example.com"))),
    );
    let mut cx = Compressor::disabled();
    let mut buf = Vec::new();
    infallible(record.compose(&mut buf, &mut cx));
    let count = buf
        .windows(15)
        .filter(|win| *win == b"\x01a\x07example\x03com\x00")
        .count();
    assert_eq!(count, 2);
    assert!(!buf.iter().any(|&b| b >= 0xC0));
}

#[test]
fn length_prediction_is_exact() {
    let records = [
        Record::new(
            name("example.com"),
            Class::IN,
            3600,
            AnyRecordData::Soa(Soa::new(
                name("ns1.example.com"),
                name("hostmaster.example.com"),
                Serial(2023121101),
                10800,
                3600,
                604800,
                3600,
            )),
        ),
        Record::new(
            name("example.com"),
            Class::IN,
            3600,
            AnyRecordData::Ns(Ns::new(name("ns1.example.com"))),
        ),
        Record::new(
            name("www.example.com"),
            Class::IN,
            3600,
            AnyRecordData::Aaaa(Aaaa::new(
                "2001:db8::1".parse().unwrap(),
            )),
        ),
        Record::new(
            name("example.com"),
            Class::IN,
            3600,
            AnyRecordData::Txt(Txt::new(vec![CharStr::from_slice(
                b"v=spf1 -all",
            )
            .unwrap()])),
        ),
    ];

    let mut len_cx = Compressor::new();
    let mut write_cx = Compressor::new();
    let mut buf = Vec::new();
    for record in &records {
        let predicted = record.compressed_len(&mut len_cx, buf.len());
        let before = buf.len();
        infallible(record.compose(&mut buf, &mut write_cx));
        assert_eq!(predicted, buf.len() - before);
    }

    let parsed = parse_all(&buf);
    assert_eq!(parsed.len(), records.len());
    for (parsed, original) in parsed.iter().zip(&records) {
        assert_eq!(parsed.owner(), original.owner());
        assert_eq!(parsed.data(), original.data());
    }
}

#[test]
fn pointer_cycle_is_rejected() {
    // A record owner made of two pointers that chase each other.
    let wire = b"\xC0\x02\xC0\x00";
    let mut parser = Parser::from_ref(wire.as_slice());
    assert!(Record::<AnyRecordData>::parse(&mut parser).is_err());
}

#[test]
fn nsec_bitmap_survives_the_record_envelope() {
    let mut builder = RtypeBitmap::builder();
    for rtype in [
        Rtype::A,
        Rtype::NS,
        Rtype::SOA,
        Rtype::MX,
        Rtype::RRSIG,
        Rtype::NSEC,
        Rtype::DLV,
    ] {
        builder.add(rtype);
    }
    let record = Record::new(
        name("example.com"),
        Class::IN,
        3600,
        AnyRecordData::Nsec(Nsec::new(
            name("a.example.com"),
            builder.finalize(),
        )),
    );
    let buf = compose_all(std::slice::from_ref(&record));
    let parsed = parse_all(&buf);
    match parsed[0].data() {
        AnyRecordData::Nsec(nsec) => {
            assert!(nsec.types().contains(Rtype::MX));
            assert!(nsec.types().contains(Rtype::DLV));
            assert!(!nsec.types().contains(Rtype::TXT));
        }
        _ => panic!("expected NSEC record data"),
    }
}

#[test]
fn opt_round_trips_inside_a_record() {
    let mut builder = Opt::builder();
    builder.push(
        &Nsid::from_octets(Bytes::from_static(b"ns.example")).unwrap(),
    );
    builder.push(&TcpKeepalive::new(Some(300)));
    let opt = builder.finish();

    // The OPT pseudo record presses the class field into service as
    // the requestor's payload size.
    let record = Record::new(
        Name::root(),
        Class::from_int(4096),
        0,
        AnyRecordData::Opt(opt),
    );
    let buf = compose_all(std::slice::from_ref(&record));
    let parsed = parse_all(&buf);
    assert_eq!(parsed[0].rtype(), Rtype::OPT);
    match parsed[0].data() {
        AnyRecordData::Opt(opt) => {
            let options: Vec<AllOptData> = opt
                .iter::<AllOptData>()
                .collect::<Result<_, _>>()
                .unwrap();
            assert_eq!(options.len(), 2);
            assert!(matches!(options[0], AllOptData::Nsid(_)));
            assert!(matches!(
                options[1],
                AllOptData::TcpKeepalive(_)
            ));
        }
        _ => panic!("expected OPT record data"),
    }
}

#[test]
fn unknown_rdata_passes_through_unchanged() {
    // Type 1000 with some opaque payload.
    let mut buf = Vec::new();
    let mut cx = Compressor::new();
    let record = Record::new(
        name("example.com"),
        Class::IN,
        3600,
        AnyRecordData::Unknown(
            netwire::base::rdata::UnknownRecordData::from_octets(
                Rtype::from_int(1000),
                Bytes::from_static(b"\x01\x02\x03\x04"),
            )
            .unwrap(),
        ),
    );
    infallible(record.compose(&mut buf, &mut cx));
    let parsed = parse_all(&buf);
    assert_eq!(parsed[0].rtype(), Rtype::from_int(1000));
    assert_eq!(parsed[0].data(), record.data());
}

#[test]
fn family_rtypes_survive_round_trips() {
    use netwire::base::iana::DigestAlgorithm;
    use netwire::rdata::dnssec::Ds;

    for rtype in [Rtype::DS, Rtype::CDS, Rtype::DLV, Rtype::TA] {
        let record = Record::new(
            name("example.com"),
            Class::IN,
            3600,
            AnyRecordData::Ds(Ds::new(
                rtype,
                12345,
                SecurityAlgorithm::RSASHA256,
                DigestAlgorithm::SHA256,
                Bytes::from_static(&[0xAB; 32]),
            )),
        );
        assert_eq!(record.rtype(), rtype);
        let buf = compose_all(std::slice::from_ref(&record));
        let parsed = parse_all(&buf);
        assert_eq!(parsed[0].rtype(), rtype);
        assert_eq!(parsed[0].data(), record.data());
    }
}

#[test]
fn rdlen_matches_composed_rdata_for_compressing_types() {
    // MX rdata after an owner that primes the compressor: rdlen and
    // compose must walk the compressor identically.
    let record = Record::new(
        name("example.com"),
        Class::IN,
        3600,
        AnyRecordData::Mx(Mx::new(10, name("mail.example.com"))),
    );
    let mut len_cx = Compressor::new();
    let predicted = record.compressed_len(&mut len_cx, 0);
    let mut write_cx = Compressor::new();
    let mut buf = Vec::new();
    infallible(record.compose(&mut buf, &mut write_cx));
    assert_eq!(predicted, buf.len());

    // The exchange compresses against the owner, which makes the
    // record shorter than its uncompressed rendering.
    let uncompressed = 13 + 10 + record.data().rdlen(
        &mut Compressor::disabled(),
        0,
    );
    assert!(buf.len() < uncompressed);
}
