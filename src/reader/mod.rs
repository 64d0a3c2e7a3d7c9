pub mod matrix;
pub mod samples;

use std::io::BufRead;

/// Field separators: the ASCII whitespace set of C `isspace`, vertical tab
/// included. Other bytes, UTF-8 or not, belong to the field.
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'\x0B'
}

pub(crate) fn split_fields(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|&b| is_separator(b)).filter(|f| !f.is_empty())
}

/// Reads one raw line into `buf` without its `\n`. Returns `false` at end of
/// input.
pub(crate) fn read_raw_line(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> std::io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(true)
}
