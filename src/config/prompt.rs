use crate::utils::error::{DescriptorError, Result};
use std::io::{BufRead, Write};

pub const INTRO: &str = "this tool generates a JSON for the tablesalt importer.";
pub const QUESTION: &str = "what is path to the asset folder you want to generate?";

/// Asks for the asset folder on `output` and reads one line from `input`.
/// Only the line ending is stripped; the rest of the line is the path.
pub fn prompt_for_root<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    writeln!(output, "{}", INTRO)?;
    writeln!(output, "{}", QUESTION)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DescriptorError::MissingConfigError {
            field: "path".to_string(),
        });
    }

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_one_line() {
        let mut out = Vec::new();
        let path = prompt_for_root(Cursor::new("./my assets \r\nignored\n"), &mut out).unwrap();

        assert_eq!(path, "./my assets ");
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains(INTRO));
        assert!(shown.ends_with(&format!("{}\n", QUESTION)));
    }

    #[test]
    fn test_closed_input_is_missing_path() {
        let result = prompt_for_root(Cursor::new(""), Vec::new());

        assert!(matches!(result, Err(DescriptorError::MissingConfigError { .. })));
    }
}
