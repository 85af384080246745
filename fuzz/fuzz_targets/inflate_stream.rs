#![no_main]
use libfuzzer_sys::fuzz_target;

use tagged_inflate::{InflateStream, Mode, PREAMBLE};

fuzz_target!(|data: Vec<Vec<u8>>| {
    let expected: Vec<u8> = data.iter().flatten().copied().collect();

    let mut stream = InflateStream::with_capacity(64, Vec::new());
    let mut result = Ok(());
    for chunk in &data {
        result = stream.write(chunk);
        if result.is_err() {
            break;
        }
    }
    if result.is_ok() {
        result = stream.end();
    }

    match stream.mode() {
        Mode::Finished => assert!(result.is_ok()),
        Mode::Failed => assert!(result.is_err()),
        mode => panic!("stream left in {mode:?}"),
    }

    if !expected.starts_with(&PREAMBLE) {
        assert!(result.is_ok());
        assert_eq!(stream.into_inner(), expected);
    }
});
