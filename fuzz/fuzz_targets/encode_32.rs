#![no_main]

use libfuzzer_sys::fuzz_target;
use radix58::BITCOIN;

fuzz_target!(|data: [u8; 32]| {
    let correct = bs58::encode(data).into_string();
    let encoded = radix58::encode(&BITCOIN, &data);

    // 32-byte inputs go through the fixed-size path; bs58 is the
    // independent reference
    if correct != encoded {
        panic!("encode_32 mismatch: {:?}, {:?}", correct, encoded);
    }

    let decoded = radix58::decode(&BITCOIN, &encoded).unwrap();
    if decoded != data {
        panic!("encode_32 round trip failed: {:?}, {:?}", data, decoded);
    }
});
