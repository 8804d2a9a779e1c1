//! Line input for the interactive `round` command.

use std::io::BufRead;

/// Reads one line and trims it.
///
/// Returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use tablestakes_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  bet 100 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("bet 100".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
