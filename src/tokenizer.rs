/// Splits a raw command line into tokens.
///
/// Whitespace separates tokens. A `'` or `"` opens a quoted run in which
/// whitespace is literal; the matching quote closes the run and ends the
/// token. An opening quote also ends any token already in progress, so
/// `ab"cd ef"` yields `ab` then `cd ef`. An unterminated quote runs to the
/// end of the line. Empty tokens are never produced.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(open) => {
                if c == open {
                    quote = None;
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push(c);
                }
            }
            None => {
                if c == '"' || c == '\'' {
                    quote = Some(c);
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                } else if c.is_whitespace() {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push(c);
                }
            }
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
