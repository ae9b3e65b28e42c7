//! Greedy word wrapping for doc comments
//!
//! Paragraphs are separated by blank lines. Indented lines are preformatted
//! and kept verbatim; other lines are joined and re-flowed.

use crate::features::doc_model::ports::CommentFormatter;

/// Default `CommentFormatter`
#[derive(Debug, Clone, Copy, Default)]
pub struct WordWrap;

impl CommentFormatter for WordWrap {
    fn format(&self, text: &str, width: usize) -> String {
        let width = width.max(1);
        let mut out: Vec<String> = Vec::new();
        let mut words: Vec<&str> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                flush(&mut words, width, &mut out);
                if out.last().is_some_and(|l| !l.is_empty()) {
                    out.push(String::new());
                }
            } else if line.starts_with(char::is_whitespace) {
                flush(&mut words, width, &mut out);
                out.push(line.trim_end().to_string());
            } else {
                words.extend(line.split_whitespace());
            }
        }
        flush(&mut words, width, &mut out);

        while out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }
        let mut text = out.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }
}

fn flush(words: &mut Vec<&str>, width: usize, out: &mut Vec<String>) {
    let mut line = String::new();
    for word in words.drain(..) {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
}
