#![no_main]

use libfuzzer_sys::fuzz_target;

use yams::domain::services::check;
use yams::{validate, CategoryId, EntryOutcome};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(raw) = std::str::from_utf8(rest) else {
        return;
    };

    let id = CategoryId::ALL[usize::from(selector) % CategoryId::ALL.len()];
    if let EntryOutcome::Accepted(value) = validate(id.category(), raw) {
        assert!(value >= 1);
        assert!(check(id.category(), value).is_ok());
    }
});
