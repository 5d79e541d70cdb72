use std::io::{self, BufRead, Write};

/// Asks a single question on the terminal and returns the answer.
///
/// stdout and stdin are locked only for the duration of this call.
pub fn ask(question: &str) -> io::Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask_with(&mut stdin.lock(), &mut stdout.lock(), question)
}

/// Writes `question` to `output` and reads one line from `input`.
///
/// The trailing line break is removed; other whitespace is kept. End of
/// input yields an empty answer.
pub fn ask_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Parses a 1-based menu choice, returning the 0-based index.
pub fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Some(n - 1),
        _ => None,
    }
}
