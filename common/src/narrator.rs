//! # Narrator Port
//!
//! Everything the animals "say" is a line of text handed to a [`Narrator`].
//! The CLI renders those lines on the terminal; tests collect them in a
//! [`Transcript`] and compare.

/// Sink for line-oriented output.
pub trait Narrator {
    fn say(&mut self, line: &str);

    fn header(&mut self, title: &str) {
        self.say(&format!("=== {title} ==="));
    }

    fn blank(&mut self) {
        self.say("");
    }
}

/// A narrator that remembers every line in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Narrator for Transcript {
    fn say(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

impl<N: Narrator + ?Sized> Narrator for &mut N {
    fn say(&mut self, line: &str) {
        (**self).say(line);
    }

    fn header(&mut self, title: &str) {
        (**self).header(title);
    }

    fn blank(&mut self) {
        (**self).blank();
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
