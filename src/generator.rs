//! The authoring loop.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::Result;
use crate::fragment::AlphabetEntry;
use crate::preview::preview;
use crate::prompt::Prompter;

/// Prompt for the alphabet identifier.
pub const ID_PROMPT: &str = "alphabet name? ";

/// Prompt for the display name.
pub const NAME_PROMPT: &str = "display name? ";

/// Prompt for the glyph sequence.
pub const GLYPHS_PROMPT: &str = "alphabet? ";

/// Reads alphabets from the operator and writes one entry line for each.
pub struct Generator<R, W, E> {
    /// Prompts and entries.
    prompter: Prompter<R, W>,

    /// Diagnostic output, e.g. previews.
    diagnostics: E,

    /// Configuration.
    config: Config,
}

impl<R: BufRead, W: Write, E: Write> Generator<R, W, E> {
    /// Create a generator.  Prompts and entries are written to `output`,
    /// previews to `diagnostics`.
    pub fn new(input: R, output: W, diagnostics: E, config: Config) -> Self {
        Generator {
            prompter: Prompter::new(input, output),
            diagnostics,
            config,
        }
    }

    /// Read one alphabet from the operator.
    pub fn read_entry(&mut self) -> Result<AlphabetEntry> {
        let id = self.prompter.ask_lossy(ID_PROMPT)?;
        let display_name = self.prompter.ask_lossy(NAME_PROMPT)?;
        let glyphs = self.prompter.ask_utf8(GLYPHS_PROMPT)?;
        Ok(AlphabetEntry {
            id,
            display_name,
            glyphs,
        })
    }

    /// Run one iteration: read an alphabet and write its entry.
    pub fn step(&mut self) -> Result<()> {
        let entry = self.read_entry()?;
        let mut line = entry.render(&self.config);
        log::debug!(
            "rendered {:?} with {} glyphs",
            entry.id,
            entry.glyphs.chars().count()
        );
        line.push('\n');
        let output = self.prompter.output();
        output.write_all(line.as_bytes())?;
        output.flush()?;

        if let Some(text) = &self.config.preview {
            writeln!(self.diagnostics, "preview: {}", preview(text, &entry))?;
            self.diagnostics.flush()?;
        }
        Ok(())
    }

    /// Run iterations until one fails.  Only returns with an error; the
    /// interrupt handler ends the process otherwise.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.step()?;
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::config::{EntryFormat, SeparatorPolicy};
    use crate::error::Error;

    fn generator(input: &[u8], config: Config) -> Generator<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>> {
        Generator::new(Cursor::new(input.to_vec()), Vec::new(), Vec::new(), config)
    }

    fn output(generator: &mut Generator<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>) -> String {
        String::from_utf8(generator.prompter.output().clone()).unwrap()
    }

    #[test]
    fn test_step() {
        let mut generator = generator(b"basic\nBasic\nab'\n", Config::default());
        generator.step().unwrap();
        assert_eq!(
            output(&mut generator),
            "alphabet name? display name? alphabet? \
             basic: {rtl: false, name: 'Basic', alphabet:{32:'a', 33:'b', 34:'\\'', }},\n"
        );
        assert!(generator.diagnostics.is_empty());
    }

    #[test]
    fn test_run_until_eof() {
        let mut generator = generator(
            "one\nOne\nⓐⓑ\ntwo\nTwo\n\nthree\n".as_bytes(),
            Config::default(),
        );
        match generator.run() {
            Err(Error::UnexpectedEof { prompt }) => assert_eq!(prompt, NAME_PROMPT),
            other => panic!("unexpected result: {:?}", other),
        }
        let output = output(&mut generator);
        let lines: Vec<_> = output
            .split('\n')
            .map(|line| line.rsplit("? ").next().unwrap_or(line))
            .collect();
        assert_eq!(
            lines,
            vec![
                "one: {rtl: false, name: 'One', alphabet:{32:'ⓐ', 33:'ⓑ', }},",
                "two: {rtl: false, name: 'Two', alphabet:{}},",
                "",
            ]
        );
    }

    #[test]
    fn test_invalid_glyphs_abort() {
        let mut generator = generator(b"bad\nBad\n\xc3\x28\nnext\nNext\nx\n", Config::default());
        assert!(matches!(generator.run(), Err(Error::InvalidUtf8(_))));
        assert_eq!(
            output(&mut generator),
            "alphabet name? display name? alphabet? "
        );
    }

    #[test]
    fn test_lossy_names() {
        let mut generator = generator(b"i\xffd\nN\xffme\nz\n", Config::default());
        let entry = generator.read_entry().unwrap();
        assert_eq!(entry.id, "i\u{FFFD}d");
        assert_eq!(entry.display_name, "N\u{FFFD}me");
        assert_eq!(entry.glyphs, "z");
    }

    #[test]
    fn test_preview() {
        let config = Config {
            format: EntryFormat::Effect,
            separator: SeparatorPolicy::BetweenPairs,
            preview: Some("`!!` \"".to_string()),
            ..Config::default()
        };
        let mut generator = generator(b"bang\nBang\n_\xc7\x83\n", config);
        generator.step().unwrap();
        assert!(output(&mut generator).ends_with(
            "{id: 'bang', name: 'Bang', type: 'alphabet', alphabet:{32:'_', 33:'\u{1C3}'}},\n"
        ));
        assert_eq!(
            String::from_utf8(generator.diagnostics.clone()).unwrap(),
            "preview: \u{1C3}\u{1C3} \"\n"
        );
    }
}
