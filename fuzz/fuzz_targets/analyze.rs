#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let min_length = data.first().map(|b| (*b as usize % 16) + 1).unwrap_or(5);
    let _ = dllsift::analyze(data, min_length);
});
