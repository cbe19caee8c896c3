#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlwalk::{FormatConfig, ParserConfig, XmlSource};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let source = XmlSource::from_text(s, ParserConfig::default());
        let _ = source.render(&FormatConfig::default());
    }
});
