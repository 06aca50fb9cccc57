#![no_main]

use libfuzzer_sys::fuzz_target;
use radix58::BITCOIN;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let ours = radix58::decode(&BITCOIN, s);
    let theirs = bs58::decode(s).into_vec();
    match (ours, theirs) {
        (Ok(a), Ok(b)) => {
            if a != b {
                panic!("decode mismatch for {:?}: {:?}, {:?}", s, a, b);
            }
        }
        (Err(_), Err(_)) => {}
        (a, b) => panic!("decode disagreement for {:?}: {:?}, {:?}", s, a, b),
    }
});
