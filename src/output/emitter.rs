// Wed Feb 11 2026 - Alex

use crate::error::ExtractError;
use crate::model::BitOffset;
use crate::walk::PathBuilder;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStyle {
    /// `<prefix><qualified path> <offset>`
    Plain,
    /// `#define <prefix><sep><struct><sep><field> (<offset>)`
    Macro,
}

/// Formats one record per exported field and writes it through to the sink
/// immediately, so partial output survives a fatal abort.
pub struct Emitter<W: Write> {
    sink: W,
    style: RecordStyle,
    prefix: String,
    separator: String,
    output_bits: bool,
    records_written: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            style: RecordStyle::Plain,
            prefix: String::new(),
            separator: "::".to_string(),
            output_bits: false,
            records_written: 0,
        }
    }

    pub fn with_style(mut self, style: RecordStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_output_bits(mut self, output_bits: bool) -> Self {
        self.output_bits = output_bits;
        self
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    pub fn emit(&mut self, path: &PathBuilder, offset: BitOffset) -> Result<(), ExtractError> {
        let value = self.resolve_value(path, offset)?;

        match self.style {
            RecordStyle::Plain => {
                writeln!(self.sink, "{}{} {}", self.prefix, path.as_str(), value)?;
            }
            RecordStyle::Macro => {
                // The macro shape names exactly one struct and one field.
                if path.depth() != 2 {
                    return Err(ExtractError::MacroDepth {
                        path: path.as_str().to_string(),
                        depth: path.depth(),
                    });
                }
                if self.prefix.is_empty() {
                    writeln!(self.sink, "#define {} ({})", path.as_str(), value)?;
                } else {
                    writeln!(
                        self.sink,
                        "#define {}{}{} ({})",
                        self.prefix,
                        self.separator,
                        path.as_str(),
                        value
                    )?;
                }
            }
        }
        self.sink.flush()?;
        self.records_written += 1;
        Ok(())
    }

    fn resolve_value(&self, path: &PathBuilder, offset: BitOffset) -> Result<u64, ExtractError> {
        if self.output_bits {
            return Ok(offset.as_bits());
        }
        offset
            .as_bytes()
            .ok_or_else(|| ExtractError::MisalignedOffset {
                path: path.as_str().to_string(),
                bits: offset.as_bits(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(separator: &str, segments: &[&str]) -> PathBuilder {
        let mut path = PathBuilder::new(separator, false, 256);
        for segment in segments {
            path.push(segment).unwrap();
        }
        path
    }

    fn output(emitter: Emitter<Vec<u8>>) -> String {
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_record_in_bytes() {
        let mut emitter = Emitter::new(Vec::new());
        let path = path_of("::", &["Point", "x"]);
        emitter.emit(&path, BitOffset::new(32)).unwrap();

        assert_eq!(emitter.records_written(), 1);
        assert_eq!(output(emitter), "Point::x 4\n");
    }

    #[test]
    fn test_plain_record_with_prefix_and_bits() {
        let mut emitter = Emitter::new(Vec::new())
            .with_prefix("OFFSET.")
            .with_output_bits(true);
        let path = path_of("::", &["Point", "y"]);
        emitter.emit(&path, BitOffset::new(33)).unwrap();

        assert_eq!(output(emitter), "OFFSET.Point::y 33\n");
    }

    #[test]
    fn test_byte_mode_rejects_misaligned_offset() {
        let mut emitter = Emitter::new(Vec::new());
        let path = path_of("::", &["S", "bits"]);
        let err = emitter.emit(&path, BitOffset::new(12)).unwrap_err();

        match err {
            ExtractError::MisalignedOffset { path, bits } => {
                assert_eq!(path, "S::bits");
                assert_eq!(bits, 12);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(emitter.records_written(), 0);
    }

    #[test]
    fn test_macro_record() {
        let mut emitter = Emitter::new(Vec::new())
            .with_style(RecordStyle::Macro)
            .with_prefix("OFFSET")
            .with_separator("_");
        let path = path_of("_", &["S", "field"]);
        emitter.emit(&path, BitOffset::new(64)).unwrap();

        assert_eq!(output(emitter), "#define OFFSET_S_field (8)\n");
    }

    #[test]
    fn test_macro_record_without_prefix() {
        let mut emitter = Emitter::new(Vec::new()).with_style(RecordStyle::Macro);
        let path = path_of("::", &["S", "field"]);
        emitter.emit(&path, BitOffset::new(0)).unwrap();

        assert_eq!(output(emitter), "#define S::field (0)\n");
    }

    #[test]
    fn test_macro_record_rejects_deep_paths() {
        let mut emitter = Emitter::new(Vec::new()).with_style(RecordStyle::Macro);
        let path = path_of("_", &["S", "inner", "field"]);
        let err = emitter.emit(&path, BitOffset::new(0)).unwrap_err();

        match err {
            ExtractError::MacroDepth { depth, .. } => assert_eq!(depth, 3),
            other => panic!("unexpected error: {other}"),
        }
    }
}
