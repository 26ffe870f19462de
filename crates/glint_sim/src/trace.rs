//! Line tracing for simulation runs.
//!
//! [`TraceSink`] abstracts where recorded line values go. [`VcdTrace`]
//! writes the IEEE 1364 Value Change Dump text format with a 1 ns
//! timescale and a single module scope. Values are two-state: the designs
//! under test drive every line on every tick, so there is no unknown or
//! high-impedance state to represent.

use std::io::Write;

use crate::error::SimError;

/// Identifies one registered trace line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineId(usize);

impl LineId {
    /// The index this id was handed out for.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A destination for recorded line values.
pub trait TraceSink {
    /// Registers a named line of the given bit width before recording
    /// starts. Returns the id to record changes under.
    fn add_line(&mut self, name: &str, width: u32) -> Result<LineId, SimError>;

    /// Records the value of a line at the given time in nanoseconds.
    /// Sinks may drop records that do not change the line's value.
    fn record(&mut self, time_ns: u64, line: LineId, value: u64) -> Result<(), SimError>;

    /// Flushes and writes any trailer the format needs.
    fn finish(&mut self) -> Result<(), SimError>;
}

struct TraceLine {
    name: String,
    code: String,
    width: u32,
    last: Option<u64>,
}

/// Value Change Dump output.
///
/// Line declarations are buffered until the first recorded change, then
/// the full header (timescale, scope, variable declarations) is emitted
/// at once. Repeated identical values on a line are suppressed.
pub struct VcdTrace<W: Write> {
    writer: W,
    scope: String,
    lines: Vec<TraceLine>,
    header_written: bool,
    current_time: Option<u64>,
}

impl<W: Write> VcdTrace<W> {
    /// Creates a VCD trace writing to `writer`, with all lines declared
    /// under a single module scope named `scope`.
    pub fn new(writer: W, scope: &str) -> Self {
        Self {
            writer,
            scope: scope.to_string(),
            lines: Vec::new(),
            header_written: false,
            current_time: None,
        }
    }

    /// Short printable ASCII identifier for line `index`, per IEEE 1364:
    /// single characters `!`..`~`, then two characters, and so on.
    fn id_code(index: usize) -> String {
        let mut code = String::new();
        let mut n = index;
        loop {
            code.push((b'!' + (n % 94) as u8) as char);
            if n < 94 {
                break;
            }
            n = n / 94 - 1;
        }
        code
    }

    fn write_header(&mut self) -> Result<(), SimError> {
        writeln!(self.writer, "$version")?;
        writeln!(self.writer, "  Glint bench")?;
        writeln!(self.writer, "$end")?;
        writeln!(self.writer, "$timescale")?;
        writeln!(self.writer, "  1ns")?;
        writeln!(self.writer, "$end")?;
        writeln!(self.writer, "$scope module {} $end", self.scope)?;
        for line in &self.lines {
            writeln!(
                self.writer,
                "$var wire {} {} {} $end",
                line.width, line.code, line.name
            )?;
        }
        writeln!(self.writer, "$upscope $end")?;
        writeln!(self.writer, "$enddefinitions $end")?;
        writeln!(self.writer, "$dumpvars")?;
        self.header_written = true;
        Ok(())
    }

    /// Consumes the trace and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn format_value(value: u64, width: u32) -> String {
        if width == 1 {
            if value & 1 != 0 { "1".into() } else { "0".into() }
        } else {
            let mut s = String::with_capacity(width as usize + 1);
            s.push('b');
            for bit in (0..width).rev() {
                s.push(if (value >> bit) & 1 != 0 { '1' } else { '0' });
            }
            s
        }
    }
}

impl<W: Write> TraceSink for VcdTrace<W> {
    fn add_line(&mut self, name: &str, width: u32) -> Result<LineId, SimError> {
        let id = LineId(self.lines.len());
        self.lines.push(TraceLine {
            name: name.to_string(),
            code: Self::id_code(id.0),
            width,
            last: None,
        });
        Ok(id)
    }

    fn record(&mut self, time_ns: u64, line: LineId, value: u64) -> Result<(), SimError> {
        if !self.header_written {
            self.write_header()?;
        }
        let entry = self
            .lines
            .get_mut(line.0)
            .ok_or(SimError::UnknownLine(line.0))?;
        if entry.last == Some(value) {
            return Ok(());
        }
        entry.last = Some(value);
        let code = entry.code.clone();
        let width = entry.width;

        if self.current_time != Some(time_ns) {
            writeln!(self.writer, "#{time_ns}")?;
            self.current_time = Some(time_ns);
        }
        let val = Self::format_value(value, width);
        if width == 1 {
            writeln!(self.writer, "{val}{code}")?;
        } else {
            writeln!(self.writer, "{val} {code}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SimError> {
        if !self.header_written {
            self.write_header()?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
