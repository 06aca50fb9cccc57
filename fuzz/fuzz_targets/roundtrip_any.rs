#![no_main]

use libfuzzer_sys::fuzz_target;
use radix58::{BITCOIN, FLICKR, RIPPLE};

fuzz_target!(|data: &[u8]| {
    for alphabet in [&BITCOIN, &RIPPLE, &FLICKR] {
        let encoded = radix58::encode(alphabet, data);
        let decoded = radix58::decode(alphabet, &encoded).unwrap();
        if decoded != data {
            panic!("round trip failed: {:?}, {:?}", data, decoded);
        }
    }
});
