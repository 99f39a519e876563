//! Color list input handling.

use std::io::Read;
use std::path::Path;

use crate::parsers::parse_color_lines;

/// Read a list of colors from a file, or from stdin when the path is `-`
pub fn read_color_list(path: &Path) -> Result<Vec<String>, String> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read colors from stdin: {}", e))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?
    };

    Ok(parse_color_lines(&contents))
}
