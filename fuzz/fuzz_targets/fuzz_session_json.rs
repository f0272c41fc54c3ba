#![no_main]

use libfuzzer_sys::fuzz_target;

use yams::infrastructure::repositories::session_document::{decode, encode};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Anything that decodes must encode and decode to the same session
        if let Ok(session) = decode(content) {
            let encoded = encode(&session).expect("encode decoded session");
            let again = decode(&encoded).expect("decode encoded session");
            assert_eq!(again, session);
        }
    }
});
