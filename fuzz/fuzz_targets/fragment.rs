#![no_main]

use godecl_parser::lexer::{Lexer, Tok};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    // Lexer: in-bounds, monotonic spans.
    let mut last_real_end = 0usize;
    for (start, tok, end) in Lexer::new(&s) {
        assert!(start <= end && end <= s.len());
        assert!(start >= last_real_end);
        if !(tok == Tok::Semi && start == end) {
            last_real_end = end;
        }
    }

    // Dispatcher: either English or an error naming all three categories.
    if let Err(e) = godecl::go_to_english(&s) {
        let godecl::RenderError::Unparseable { attempts } = e;
        assert_eq!(attempts.len(), 3);
    }
});
