//! Interrupt handling.
//!
//! Interrupting the tool is the normal way to stop it.

use std::io::{self, Write};

use crate::error::Result;

/// Install a handler that ends the line on standard output and exits the
/// process with status 0 when the operator sends an interrupt.
pub fn exit_on_interrupt() -> Result<()> {
    ctrlc::set_handler(|| {
        log::debug!("interrupted");
        let stdout = io::stdout();
        // Nothing useful can be done with a failure while exiting.
        let _ = finish_line(&mut stdout.lock());
        std::process::exit(0);
    })?;
    Ok(())
}

/// End the current line of `out`.
pub(crate) fn finish_line(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_finish_line() {
        let mut out = b"alphabet name? display name? ".to_vec();
        finish_line(&mut out).unwrap();
        assert_eq!(out, b"alphabet name? display name? \n");
    }
}
