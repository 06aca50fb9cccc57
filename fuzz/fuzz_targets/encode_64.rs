#![no_main]

use libfuzzer_sys::fuzz_target;
use radix58::BITCOIN;

fuzz_target!(|data: [u8; 64]| {
    let correct = bs58::encode(data).into_string();
    let encoded = radix58::encode(&BITCOIN, &data);

    if correct != encoded {
        panic!("encode_64 mismatch: {:?}, {:?}", correct, encoded);
    }

    let decoded = radix58::decode(&BITCOIN, &encoded).unwrap();
    if decoded != data {
        panic!("encode_64 round trip failed: {:?}, {:?}", data, decoded);
    }
});
