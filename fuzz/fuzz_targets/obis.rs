#![no_main]
use libfuzzer_sys::fuzz_target;
use p1_telegram::ObisCode;

fuzz_target!(|s: &str| {
    let _ = s.parse::<ObisCode>();
});
