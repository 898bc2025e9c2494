use log::{Log, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::ops::DerefMut;
use std::sync::Mutex;

/// Logs records in the standard output stream
pub struct StdoutLogger;

/// Logs records in the provided file by path
pub struct FileLogger {
    file: Mutex<BufWriter<File>>,
}

/// Forces flushing buffered records to a destination while dropping
pub struct LogFlushGuard;

pub const fn make_stdout_logger() -> &'static impl Log {
    const LOGGER: StdoutLogger = StdoutLogger;
    &LOGGER
}

pub fn make_file_logger(path: &str) -> std::io::Result<&'static impl Log> {
    static LOGGER: OnceCell<FileLogger> = OnceCell::new();
    assert!(LOGGER.get().is_none());

    LOGGER.get_or_try_init(|| FileLogger::new(path))
}

fn write_record(mut w: impl Write, record: &Record) -> std::io::Result<()> {
    writeln!(
        w,
        "{} [{}] [{}] {}",
        chrono::Local::now().format("%T.%6f"),
        record.level(),
        record.target(),
        record.args(),
    )
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_record(std::io::stdout(), record).unwrap();
        }
    }

    fn flush(&self) {}
}

impl FileLogger {
    pub fn new(path: &str) -> std::io::Result<Self> {
        Ok(Self {
            file: Mutex::new(BufWriter::new(
                OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(path)?,
            )),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Err(e) = write_record(self.file.lock().unwrap().deref_mut(), record) {
                eprintln!("Log write failure: {}", e);
            }
        }
    }

    fn flush(&self) {
        if let Err(e) = self.file.lock().unwrap().flush() {
            eprintln!("Log flush failure: {}", e);
        }
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        self.flush();
    }
}

impl Drop for LogFlushGuard {
    fn drop(&mut self) {
        log::logger().flush()
    }
}
