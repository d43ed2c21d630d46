use std::io::{self, Write};

use crossterm::execute;
use crossterm::style::Print;

/// Copy text to the system clipboard through the terminal's OSC 52 escape
/// sequence. Works over SSH and inside multiplexers that pass the sequence
/// through; silently does nothing on terminals that ignore it.
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    stdout.flush().map_err(|err| err.to_string())
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_base64_payload() {
        let seq = osc52_sequence("Page 1");
        assert_eq!(seq, "\x1b]52;c;UGFnZSAx\x1b\\");
    }

    #[test]
    fn sequence_handles_multibyte_text() {
        let seq = osc52_sequence("달빛");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with("\x1b\\"));
    }
}
