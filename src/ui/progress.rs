use std::io::{self, Write};
use std::path::Path;

use crate::core::constants::display;
use crate::ui::color::{Colors, bold, colorize};

/// Console progress for a run: a header, one numbered line per file and the
/// final report location.
pub struct ProgressReporter {
    out: Box<dyn Write>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self::with_writer(Box::new(io::stdout()), enabled)
    }

    pub fn with_writer(out: Box<dyn Write>, enabled: bool) -> Self {
        Self { out, enabled }
    }

    pub fn start_run(&mut self) {
        if !self.enabled {
            return;
        }
        let header = bold(display::HEADER, Colors::GREEN);
        let _ = write!(self.out, "\n{header}\n\n");
    }

    /// `index` is zero-based; the printed counter starts at 1.
    pub fn start_file(&mut self, index: usize, total: usize, path: &Path) {
        if !self.enabled {
            return;
        }
        let counter = bold(&format!("[{}/{}]", index + 1, total), Colors::GREEN);
        let message = colorize(
            &format!("Checking {}", path.display()),
            Colors::BRIGHT_BLACK,
        );
        let _ = writeln!(self.out, "{counter} {message}");
    }

    pub fn finish_run(&mut self, report_path: &Path) {
        if !self.enabled {
            return;
        }
        let done = bold(display::REPORT_WRITTEN, Colors::GREEN);
        let location = colorize(&report_path.display().to_string(), Colors::BLUE);
        let _ = write!(self.out, "\n {done} \n\n{location}\n");
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    #[test]
    #[serial]
    fn test_progress_lines() {
        let buffer = SharedBuffer::default();
        let mut progress = ProgressReporter::with_writer(Box::new(buffer.clone()), true);

        progress.start_run();
        progress.start_file(0, 2, Path::new("/w/README.md"));
        progress.start_file(1, 2, Path::new("/w/docs/a.md"));
        progress.finish_run(Path::new("/w/tmp/markdown-link-report.json"));

        assert_eq!(
            buffer.contents(),
            "\nMarkdown Link Reporter\n\n\
             [1/2] Checking /w/README.md\n\
             [2/2] Checking /w/docs/a.md\n\
             \n Successfully generated the report: \n\n/w/tmp/markdown-link-report.json\n"
        );
    }

    #[test]
    fn test_disabled_prints_nothing() {
        let buffer = SharedBuffer::default();
        let mut progress = ProgressReporter::with_writer(Box::new(buffer.clone()), false);

        progress.start_run();
        progress.start_file(0, 1, Path::new("a.md"));
        progress.finish_run(Path::new("report.json"));

        assert!(buffer.contents().is_empty());
    }
}
