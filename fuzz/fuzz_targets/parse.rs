#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut buffer = data.to_vec();
    let len = buffer.len();
    let telegram = p1_telegram::parse_telegram_len(&mut buffer, len);
    if telegram.status().is_ok() {
        for object in telegram.objects() {
            for value in object.values() {
                let _ = p1_telegram::decode_f64(value);
            }
        }
    }
});
