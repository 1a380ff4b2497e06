//! Rolling file logger
//!
//! Writes `tracing` events to stderr and to `<dir>/<app>.log`. When the file
//! grows past `max_bytes` it is rotated to `<app>.1.log`, `<app>.2.log`, ...
//! keeping at most `max_files` old files. On desktop `log` records are
//! bridged into the same output; on Android they go to logcat instead.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static LOGGER: OnceLock<Arc<Mutex<RollingFile>>> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub level: String,
    pub max_bytes: u64,
    pub max_files: usize,
    /// Route `log` records into the subscriber. Off on Android, where
    /// `android_logger` owns the `log` facade.
    pub bridge_log: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            max_bytes: 1024 * 1024,
            max_files: 3,
            bridge_log: !cfg!(target_os = "android"),
        }
    }
}

/// Size-rotated log file
pub struct RollingFile {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = log_path(dir, app_name, 0);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            app_name: app_name.to_string(),
            max_bytes: max_bytes.max(1),
            max_files,
            file,
            written,
        })
    }

    pub fn current_path(&self) -> PathBuf {
        log_path(&self.dir, &self.app_name, 0)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(self.current_path())?;
            self.written = 0;
            return Ok(());
        }

        let oldest = log_path(&self.dir, &self.app_name, self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (0..self.max_files).rev() {
            let from = log_path(&self.dir, &self.app_name, n);
            if from.exists() {
                fs::rename(&from, log_path(&self.dir, &self.app_name, n + 1))?;
            }
        }
        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.current_path())?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn log_path(dir: &Path, app_name: &str, index: usize) -> PathBuf {
    if index == 0 {
        dir.join(format!("{}.log", app_name))
    } else {
        dir.join(format!("{}.{}.log", app_name, index))
    }
}

#[derive(Clone)]
struct SharedWriter(Arc<Mutex<RollingFile>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?
            .flush()
    }
}

/// Initialize with default options
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir, app_name, LoggerOptions::default())
}

pub fn init_logger_with(log_dir: PathBuf, app_name: &str, options: LoggerOptions) -> Result<(), String> {
    let level = LevelFilter::from_str(&options.level).unwrap_or(LevelFilter::INFO);

    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::from_str(&options.level).unwrap_or(log::LevelFilter::Info))
            .with_tag(app_name),
    );

    let file = RollingFile::open(&log_dir, app_name, options.max_bytes, options.max_files)
        .map_err(|e| format!("Failed to open log file: {}", e))?;
    let shared = Arc::new(Mutex::new(file));
    LOGGER
        .set(shared.clone())
        .map_err(|_| "Logger already initialized".to_string())?;

    let writer = SharedWriter(shared);
    let subscriber = tracing_subscriber::registry()
        .with(level)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        );
    let installed = if options.bridge_log {
        subscriber.try_init().map_err(|e| e.to_string())
    } else {
        tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())
    };
    installed.map_err(|e| format!("Failed to install subscriber: {}", e))?;

    tracing::info!(
        "{} logging to {} at {} ({})",
        app_name,
        log_dir.display(),
        level,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}

fn ensure_init() -> Result<(), String> {
    if LOGGER.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::error!("{}", msg);
    Ok(())
}
