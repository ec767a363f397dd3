use notebook::api::is_confirmed;
use std::io::{self, BufRead, Write};

/// Line-oriented questions over any buffered reader.
pub struct Prompt<R: BufRead> {
    input: R,
}

impl Prompt<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Prints `label` and reads one line, trimmed. `None` at end of input.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        print!("{}", label);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`ask`](Self::ask), with end of input read as an empty answer.
    pub fn ask_or_empty(&mut self, label: &str) -> io::Result<String> {
        Ok(self.ask(label)?.unwrap_or_default())
    }

    /// Asks a yes/no question. End of input and read errors count as no.
    pub fn confirm(&mut self, label: &str) -> bool {
        match self.ask(label) {
            Ok(answer) => answer.is_some_and(|a| is_confirmed(&a)),
            Err(e) => {
                log::warn!("could not read confirmation, treating it as no: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_lines_then_none() {
        let mut prompt = Prompt::new(Cursor::new("  first \nsecond\n"));
        assert_eq!(prompt.ask("").unwrap().as_deref(), Some("first"));
        assert_eq!(prompt.ask("").unwrap().as_deref(), Some("second"));
        assert_eq!(prompt.ask("").unwrap(), None);
        assert_eq!(prompt.ask_or_empty("").unwrap(), "");
    }

    #[test]
    fn confirm_accepts_yes_only() {
        let mut prompt = Prompt::new(Cursor::new("yes
nope
"));
        assert!(prompt.confirm(""));
        assert!(!prompt.confirm(""));
        assert!(!prompt.confirm(""));
    }

    struct Broken;

    impl io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stdin closed"))
        }
    }

    #[test]
    fn confirm_read_error_declines() {
        let mut prompt = Prompt::new(io::BufReader::new(Broken));
        assert!(!prompt.confirm(""));
    }
}
