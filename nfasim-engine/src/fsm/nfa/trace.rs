use std::{fmt, io::Write};

/// Human readable trace of a simulation, one line per event.
///
/// Write failures are swallowed: the trace is observational and must never
/// change the outcome of a simulation.
pub struct Trace<'w> {
    out: Option<&'w mut dyn Write>,
}

impl<'w> Trace<'w> {
    /// Creates a trace writing to `out`.
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self { out: Some(out) }
    }

    /// Creates a trace which discards every line.
    pub fn disabled() -> Self {
        Self { out: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub(crate) fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Some(out) = self.out.as_mut() {
            let _ = writeln!(out, "{}", args);
        }
    }
}

impl Default for Trace<'_> {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::Trace;
    use std::io::{self, Write};

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_lines() {
        let mut buf = Vec::new();
        let mut trace = Trace::new(&mut buf);

        assert!(trace.is_enabled());
        trace.line(format_args!("a {}", 1));
        trace.line(format_args!("b"));

        assert_eq!(String::from_utf8(buf).unwrap(), "a 1\nb\n");
    }

    #[test]
    fn disabled_and_broken_traces_are_silent() {
        let mut trace = Trace::disabled();
        assert!(!trace.is_enabled());
        trace.line(format_args!("ignored"));

        let mut broken = Broken;
        Trace::new(&mut broken).line(format_args!("ignored"));
    }
}
