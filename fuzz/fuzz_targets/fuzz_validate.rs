#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic on any input, and both validation paths must agree.
        let valid = iban_engine::validate(s);
        assert_eq!(iban_engine::Iban::parse(s).is_ok(), valid);
        let _ = iban_engine::format(s);
        let _ = iban_engine::get_country_code(s);
    }
});
