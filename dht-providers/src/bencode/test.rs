use std::collections::BTreeMap;

use maplit::btreemap;

use super::{decode, encode, error::BencodeError, Value};

#[test]
fn test_encode_integers() {
    assert_eq!(b"i0e".to_vec(), encode(&Value::Integer(0)));
    assert_eq!(b"i42e".to_vec(), encode(&Value::Integer(42)));
    assert_eq!(b"i-7e".to_vec(), encode(&Value::Integer(-7)));
    assert_eq!(
        b"i-9223372036854775808e".to_vec(),
        encode(&Value::Integer(i64::MIN))
    );
}

#[test]
fn test_encode_bytes_and_lists() {
    assert_eq!(b"0:".to_vec(), encode(&Value::from("")));
    assert_eq!(b"4:spam".to_vec(), encode(&Value::from("spam")));
    assert_eq!(
        b"l4:spami3ee".to_vec(),
        encode(&Value::List(vec![Value::from("spam"), Value::Integer(3)]))
    );
}

#[test]
fn test_encode_sorts_dictionary_keys() {
    let mut entries = BTreeMap::new();
    entries.insert(b"v".to_vec(), Value::from("payload"));
    entries.insert(b"seq".to_vec(), Value::Integer(1));
    entries.insert(b"k".to_vec(), Value::from("key"));
    entries.insert(b"sig".to_vec(), Value::from("sig"));

    assert_eq!(
        b"d1:k3:key3:seqi1e3:sig3:sig1:v7:payloade".to_vec(),
        encode(&Value::Dictionary(entries))
    );
}

#[test]
fn test_decode_nested_value() {
    let value = decode(b"d4:listli1ei-2e0:e3:numi7e3:str3:abce").unwrap();

    assert_eq!(
        Value::Dictionary(btreemap! {
            b"list".to_vec() => Value::List(vec![
                Value::Integer(1),
                Value::Integer(-2),
                Value::Bytes(vec![]),
            ]),
            b"num".to_vec() => Value::Integer(7),
            b"str".to_vec() => Value::from("abc"),
        }),
        value
    );
}

#[test]
fn test_decode_of_encode_is_identity() {
    let value = Value::Dictionary(btreemap! {
        b"seq".to_vec() => Value::Integer(1_700_000_000),
        b"v".to_vec() => Value::Bytes(vec![0, 1, 2, 255]),
        b"nested".to_vec() => Value::List(vec![
            Value::Dictionary(BTreeMap::new()),
            Value::List(vec![]),
            Value::Integer(-1),
        ]),
    });

    assert_eq!(value, decode(&encode(&value)).unwrap());
}

#[test]
fn test_decode_rejects_unsorted_keys() {
    assert_eq!(
        Err(BencodeError::UnsortedKeys(7)),
        decode(b"d1:vi1e3:seqi2ee")
    );
}

#[test]
fn test_decode_rejects_duplicate_keys() {
    assert_eq!(
        Err(BencodeError::DuplicateKey(7)),
        decode(b"d1:ai1e1:ai2ee")
    );
}

#[test]
fn test_decode_rejects_non_canonical_integers() {
    assert_eq!(Err(BencodeError::InvalidInteger(0)), decode(b"i03e"));
    assert_eq!(Err(BencodeError::InvalidInteger(0)), decode(b"i-0e"));
    assert_eq!(Err(BencodeError::InvalidInteger(0)), decode(b"ie"));
    assert_eq!(Err(BencodeError::InvalidInteger(0)), decode(b"i-e"));
    assert_eq!(Err(BencodeError::InvalidInteger(0)), decode(b"i1x2e"));
    assert_eq!(
        Err(BencodeError::InvalidInteger(0)),
        decode(b"i9223372036854775808e")
    );
}

#[test]
fn test_decode_rejects_truncated_input() {
    assert_eq!(Err(BencodeError::UnexpectedEof(5)), decode(b"5:abc"));
    assert_eq!(Err(BencodeError::UnexpectedEof(3)), decode(b"i42"));
    assert_eq!(Err(BencodeError::UnexpectedEof(4)), decode(b"li1e"));
    assert_eq!(Err(BencodeError::UnexpectedEof(7)), decode(b"d1:ai1e"));
    assert_eq!(Err(BencodeError::UnexpectedEof(0)), decode(b""));
}

#[test]
fn test_decode_rejects_invalid_lengths() {
    assert_eq!(Err(BencodeError::InvalidLength(0)), decode(b"03:abc"));
    assert_eq!(Err(BencodeError::UnexpectedEof(8)), decode(b"9999:abc"));
    assert_eq!(
        Err(BencodeError::InvalidLength(0)),
        decode(b"99999999999999999999:abc")
    );
}

#[test]
fn test_decode_rejects_non_bytes_dictionary_key() {
    assert_eq!(
        Err(BencodeError::UnexpectedByte {
            byte: b'i',
            offset: 1
        }),
        decode(b"di1ei2ee")
    );
}

#[test]
fn test_decode_rejects_trailing_data() {
    assert_eq!(Err(BencodeError::TrailingData(3)), decode(b"i1ei2e"));
}

#[test]
fn test_decode_rejects_deep_nesting() {
    let mut input = vec![b'l'; 100];
    input.extend(vec![b'e'; 100]);

    assert_eq!(Err(BencodeError::TooDeep(64)), decode(&input));
}
