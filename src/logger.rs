// In-app logger behind the `log` facade. Keeps a bounded buffer for the Logs window,
// optionally mirrors to stderr, appends warn+ lines to gallery.log and logs panics.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_LOG_LINES: usize = 2000;
const LOG_FILE_NAME: &str = "gallery.log";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

impl LogEntry {
    pub fn line(&self) -> String {
        format!("[{:>5}] {}: {}", self.level, self.target, self.msg)
    }
}

lazy_static! {
    static ref LOGS: Mutex<VecDeque<LogEntry>> = Mutex::new(VecDeque::new());
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
    static ref MIRROR_STDERR: bool = std::env::var("GALLERY_LOG_STDERR")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false);
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct GalleryLogger;

impl Log for GalleryLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            msg: record.args().to_string(),
        };
        let line = format!("[{}] {}", timestamp(), entry.line());

        if *MIRROR_STDERR {
            eprintln!("{line}");
        }
        if entry.level <= Level::Warn {
            write_file_line(&line);
        }
        push_entry(entry);
    }

    fn flush(&self) {
        if let Ok(mut lf) = LOG_FILE.lock() {
            if let Some(f) = lf.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

fn push_entry(entry: LogEntry) {
    if let Ok(mut buf) = LOGS.lock() {
        buf.push_back(entry);
        while buf.len() > MAX_LOG_LINES {
            buf.pop_front();
        }
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// Parses a RUST_LOG-style value. Only a bare level is understood; module filters are ignored.
fn parse_level(value: &str) -> Option<LevelFilter> {
    value
        .split(',')
        .map(str::trim)
        .find_map(|part| LevelFilter::from_str(part.rsplit('=').next().unwrap_or(part)).ok())
}

pub fn init() {
    if log::set_boxed_logger(Box::new(GalleryLogger)).is_err() {
        return;
    }
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(DEFAULT_LEVEL);
    log::set_max_level(level);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME)
        .ok();
    if let Ok(mut lf) = LOG_FILE.lock() {
        *lf = file;
    }
    install_panic_hook();

    log::info!("Logger initialized at level {level} (warnings go to {LOG_FILE_NAME})");
}

pub fn for_each_range<F: FnMut(&LogEntry)>(start: usize, end: usize, mut f: F) {
    if let Ok(buf) = LOGS.lock() {
        let end = end.min(buf.len());
        for entry in buf.range(start.min(end)..end) {
            f(entry);
        }
    }
}

pub fn all_lines() -> Vec<String> {
    LOGS.lock()
        .map(|buf| buf.iter().map(LogEntry::line).collect())
        .unwrap_or_default()
}

pub fn len() -> usize {
    LOGS.lock().map(|buf| buf.len()).unwrap_or(0)
}

pub fn clear() {
    if let Ok(mut buf) = LOGS.lock() {
        buf.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// True if anything was logged since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn write_file_line(line: &str) {
    if let Ok(mut lf) = LOG_FILE.lock() {
        if let Some(f) = lf.as_mut() {
            let _ = writeln!(f, "{line}");
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<Any>".to_string()
        };
        let loc = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        log::error!("panic at {loc}: {msg}");
        for line in format!("{:?}", Backtrace::capture()).lines() {
            write_file_line(line);
        }
    }));
}
