#![no_main]
use libfuzzer_sys::fuzz_target;
use logshim::{LineWriter, Logger, Message, StdLogger};

fuzz_target!(|input: (i32, i32, String, String, &str)| {
    let (threshold, value, key, text, format) = input;
    // Arbitrary thresholds exercise the construction-time fallback
    let sink = LineWriter::new(Vec::new()).timestamp_format(format);
    let log = StdLogger::new(sink, threshold);
    let mut msg = log.warn();
    msg.str(&key, &text).int("value", value);
    msg.msg(&text);
    msg.msg(&text);
});
