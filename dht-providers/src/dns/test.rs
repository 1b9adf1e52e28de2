use super::error::DnsError;
use super::{Header, Message, RecordData, ResourceRecord, CLASS_IN, TYPE_TXT};

fn header(answer_count: u16) -> Vec<u8> {
    let mut bytes = vec![0, 0, 0x84, 0x00, 0, 0];
    bytes.extend_from_slice(&answer_count.to_be_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

fn txt_record_tail(ttl: u32, text: &[u8]) -> Vec<u8> {
    let mut bytes = vec![];
    bytes.extend_from_slice(&TYPE_TXT.to_be_bytes());
    bytes.extend_from_slice(&CLASS_IN.to_be_bytes());
    bytes.extend_from_slice(&ttl.to_be_bytes());
    bytes.extend_from_slice(&((text.len() + 1) as u16).to_be_bytes());
    bytes.push(text.len() as u8);
    bytes.extend_from_slice(text);
    bytes
}

#[test]
fn test_pack_and_parse_message() {
    let message = Message {
        header: Header {
            id: 0,
            response: true,
            authoritative: true,
        },
        answers: vec![
            ResourceRecord::txt("_did.", 7200, "vm=k0;auth=k0"),
            ResourceRecord::txt("_k0._did.", 7200, "id=0;t=0;k=abc"),
        ],
    };

    let packed = message.pack().unwrap();
    assert_eq!(&packed[..12], &header(2)[..]);
    assert_eq!(&packed[12..18], &[4, b'_', b'd', b'i', b'd', 0]);

    let parsed = Message::parse(&packed).unwrap();
    assert_eq!(parsed, message);
    assert_eq!(
        parsed.answers[1].txt_bytes().unwrap(),
        b"id=0;t=0;k=abc".to_vec()
    );
}

#[test]
fn test_long_txt_is_split_into_character_strings() {
    let text = "a".repeat(300);
    let record = ResourceRecord::txt("_s0._did.", 7200, &text);

    match &record.data {
        RecordData::Txt(strings) => {
            assert_eq!(strings.len(), 2);
            assert_eq!(strings[0].len(), 255);
            assert_eq!(strings[1].len(), 45);
        }
        other => panic!("unexpected record data {other:?}"),
    }

    let message = Message {
        header: Header::default(),
        answers: vec![record],
    };
    let parsed = Message::parse(&message.pack().unwrap()).unwrap();
    assert_eq!(parsed.answers[0].txt_bytes().unwrap(), text.into_bytes());
}

#[test]
fn test_empty_txt_has_single_empty_string() {
    let record = ResourceRecord::txt("_did.", 1, "");
    assert_eq!(record.data, RecordData::Txt(vec![vec![]]));
}

#[test]
fn test_parse_follows_compression_pointers() {
    let mut bytes = header(2);
    bytes.extend_from_slice(&[4, b'_', b'd', b'i', b'd', 0]);
    bytes.extend(txt_record_tail(7200, b"abc"));
    bytes.extend_from_slice(&[3, b'_', b'k', b'0', 0xc0, 12]);
    bytes.extend(txt_record_tail(0, b"x"));

    let message = Message::parse(&bytes).unwrap();
    assert!(message.header.response);
    assert!(message.header.authoritative);
    assert_eq!(message.answers[0].name, "_did.");
    assert_eq!(message.answers[1].name, "_k0._did.");
    assert_eq!(message.answers[1].txt_bytes().unwrap(), b"x".to_vec());
}

#[test]
fn test_parse_rejects_pointer_loop() {
    let mut bytes = header(1);
    bytes.extend_from_slice(&[0xc0, 12]);
    bytes.extend(txt_record_tail(0, b"x"));

    assert_eq!(Message::parse(&bytes), Err(DnsError::PointerLoop(12)));
}

#[test]
fn test_parse_skips_questions_and_keeps_other_types() {
    let mut bytes = vec![0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0];
    // question: "_did." IN TXT
    bytes.extend_from_slice(&[4, b'_', b'd', b'i', b'd', 0, 0, 16, 0, 1]);
    // answer: "_did." IN A
    bytes.extend_from_slice(&[0xc0, 12, 0, 1, 0, 1, 0, 0, 0, 60, 0, 4, 127, 0, 0, 1]);

    let message = Message::parse(&bytes).unwrap();
    assert_eq!(message.header.id, 1);
    assert!(!message.header.response);
    assert_eq!(message.answers.len(), 1);
    assert_eq!(message.answers[0].r#type(), 1);
    assert_eq!(message.answers[0].txt_bytes(), None);
    assert_eq!(
        message.answers[0].data,
        RecordData::Other {
            r#type: 1,
            data: vec![127, 0, 0, 1]
        }
    );
}

#[test]
fn test_parse_rejects_truncated_input() {
    assert_eq!(Message::parse(&[0, 0, 0]), Err(DnsError::Truncated(2)));

    let mut bytes = header(1);
    bytes.extend_from_slice(&[4, b'_', b'd', b'i', b'd', 0]);
    bytes.extend_from_slice(&txt_record_tail(0, b"abc")[..12]);
    assert!(matches!(
        Message::parse(&bytes),
        Err(DnsError::Truncated(_))
    ));
}

#[test]
fn test_parse_rejects_malformed_txt() {
    let mut bytes = header(1);
    bytes.extend_from_slice(&[0]);
    bytes.extend_from_slice(&TYPE_TXT.to_be_bytes());
    bytes.extend_from_slice(&CLASS_IN.to_be_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0, 0, 2, 5, b'a']);

    assert!(matches!(
        Message::parse(&bytes),
        Err(DnsError::InvalidTxt(_))
    ));
}

#[test]
fn test_pack_rejects_invalid_names() {
    let message = |name: &str| Message {
        header: Header::default(),
        answers: vec![ResourceRecord::txt(name, 0, "x")],
    };

    assert!(matches!(
        message(&format!("{}.", "a".repeat(64))).pack(),
        Err(DnsError::LabelTooLong(_))
    ));
    assert!(matches!(
        message("_k0.._did.").pack(),
        Err(DnsError::EmptyLabel(_))
    ));
    assert!(matches!(
        message(&"abcdefgh.".repeat(32)).pack(),
        Err(DnsError::NameTooLong(_))
    ));
}

#[test]
fn test_root_name_round_trip() {
    let message = Message {
        header: Header::default(),
        answers: vec![ResourceRecord::txt(".", 0, "x")],
    };
    let packed = message.pack().unwrap();
    assert_eq!(packed[12], 0);
    assert_eq!(Message::parse(&packed).unwrap().answers[0].name, ".");
}
