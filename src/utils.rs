/// Console and log-file printing helpers
///
/// Two runtime switches gate what is printed on stderr:
/// - 'debug' for the verbose trace of the solver
/// - 'info' for the regular progress messages
/// Info messages are also appended to the log file once `init_log_file` has
/// opened one. The switches are process-wide so that every module can print
/// without passing a logger around.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_FLAG: AtomicBool = AtomicBool::new(false);
static INFO_FLAG: AtomicBool = AtomicBool::new(true);

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Create `log_set_solver_<timestamp>.txt` in the current directory and
/// mirror info messages into it from now on
pub fn init_log_file() -> io::Result<PathBuf> {
	let now = chrono::Local::now();
	let path = PathBuf::from(format!("log_set_solver_{}.txt", now.format("%Y-%m-%d_%H-%M-%S")));

	let file = OpenOptions::new()
		.create(true)
		.write(true)
		.truncate(true)
		.open(&path)?;
	if let Ok(mut guard) = LOG_FILE.lock() {
		*guard = Some(file);
	}
	Ok(path)
}

fn write_to_log(msg: &str) {
	if let Ok(mut guard) = LOG_FILE.lock() {
		if let Some(ref mut file) = *guard {
			let _ = writeln!(file, "{}", msg);
		}
	}
}

pub fn debug_print_on() {
	DEBUG_FLAG.store(true, Ordering::Relaxed);
}

pub fn debug_print_off() {
	DEBUG_FLAG.store(false, Ordering::Relaxed);
}

pub fn info_print_on() {
	INFO_FLAG.store(true, Ordering::Relaxed);
}

pub fn info_print_off() {
	INFO_FLAG.store(false, Ordering::Relaxed);
}

pub fn debug_print(msg: &str) {
	if DEBUG_FLAG.load(Ordering::Relaxed) {
		eprintln!("debug: {}", msg);
	}
}

pub fn info_print(msg: &str) {
	if INFO_FLAG.load(Ordering::Relaxed) {
		eprintln!("{}", msg);
	}
	// the log file gets everything, even when the console is quiet
	write_to_log(msg);
}

/// Center `msg` between two rules of '=' (truncated past the banner width)
pub fn banner_string(msg: &str) -> String {
	const BANNER_WIDTH: usize = 60;
	let title: String = msg.chars().take(BANNER_WIDTH).collect();
	let total_padding = BANNER_WIDTH - title.chars().count();
	let left_padding = total_padding / 2;
	let right_padding = total_padding - left_padding;
	let line = "=".repeat(BANNER_WIDTH);
	format!("{}\n{}{}{}\n{}",
		line, " ".repeat(left_padding), title, " ".repeat(right_padding), line)
}

pub fn banner(msg: &str) {
	info_print(&banner_string(msg));
}
