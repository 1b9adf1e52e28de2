use super::{decode, encode, ZBase32Error};

#[test]
fn test_encode_known_vectors() {
    assert_eq!("", encode(&[]));
    assert_eq!("yy", encode(&[0]));
    assert_eq!("999o", encode(&[0xff, 0xff]));
    assert_eq!("pb1sa5dx", encode(b"hello"));
}

#[test]
fn test_encode_public_key() {
    let key = [
        0x60, 0x27, 0x07, 0x60, 0xbd, 0xac, 0x60, 0xd3, 0xc3, 0x94, 0xa6, 0x80, 0x2d, 0xc1,
        0x26, 0x96, 0x5d, 0x87, 0x1f, 0x24, 0xfd, 0xeb, 0xc3, 0x38, 0x51, 0x66, 0xeb, 0xfb,
        0xd0, 0x85, 0x19, 0x61,
    ];

    let encoded = encode(&key);
    assert_eq!(
        "cyuoqaf7itop8ohww4yn5ojg13qaq83r9zihgqntc5i9zwrfdfoo",
        encoded
    );
    assert_eq!(key.to_vec(), decode(&encoded).unwrap());
}

#[test]
fn test_decode_did_suffix() {
    let decoded = decode("cwxob5rbhhu3z9x3gfqy6cthqgm6ngrh4k8s615n7pw11czoq4fy").unwrap();

    assert_eq!(32, decoded.len());
    assert_eq!([0x65, 0x1f, 0x00, 0xec], decoded[..4]);
}

#[test]
fn test_decode_rejects_invalid_input() {
    assert_eq!(
        Err(ZBase32Error::InvalidCharacter {
            character: 'l',
            offset: 2
        }),
        decode("yyl")
    );
    assert_eq!(Err(ZBase32Error::InvalidLength(1)), decode("y"));
    assert_eq!(Err(ZBase32Error::NonZeroPadding), decode("yb"));
}
