//! Small shared helpers with no dependencies on application state.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal display width of a string in cells.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// What: Wrap text to a maximum display width in terminal cells.
///
/// Inputs:
/// - `text`: Source text; embedded newlines start fresh lines.
/// - `width`: Maximum cells per output line (CJK characters count as two).
///
/// Output:
/// - Wrapped lines, breaking at the last space when one exists on the line
///   and mid-run otherwise (CJK prose has no spaces to break at).
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    if width == 0 {
        out.push(String::new());
        return out;
    }
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_w = 0usize;
        let mut break_at: Option<usize> = None; // byte offset just past the last space
        for ch in raw.chars() {
            let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
            if line_w + cw > width && !line.is_empty() {
                if let Some(at) = break_at.filter(|&at| at < line.len()) {
                    let rest = line.split_off(at);
                    while line.ends_with(' ') {
                        line.pop();
                    }
                    out.push(std::mem::take(&mut line));
                    line = rest;
                } else {
                    out.push(std::mem::take(&mut line));
                }
                line_w = UnicodeWidthStr::width(line.as_str());
                break_at = None;
            }
            line.push(ch);
            line_w += cw;
            if ch == ' ' {
                break_at = Some(line.len());
            }
        }
        out.push(line);
    }
    out
}

/// What: Sanitize remote text for terminal display.
///
/// Inputs:
/// - `s`: Raw text from the feed document.
///
/// Output:
/// - Text with ANSI escape sequences stripped and control characters (other
///   than newline) removed; tabs become single spaces.
///
/// Details:
/// - Feed text is untrusted; it must not be able to move the cursor, change
///   colors, or otherwise inject terminal control sequences.
#[must_use]
pub fn clean_text(s: &str) -> String {
    let stripped = strip_ansi_escapes::strip_str(s);
    stripped
        .chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if c.is_control() && c != '\n' => None,
            c => Some(c),
        })
        .collect()
}

/// Open a URL with the system handler without blocking the UI thread.
pub fn open_link(url: &str) {
    let url = url.to_string();
    std::thread::spawn(move || {
        let result = std::process::Command::new("xdg-open")
            .arg(&url)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();
        if let Err(e) = result {
            tracing::warn!(error = %e, url = %url, "failed to open link");
        }
    });
}
