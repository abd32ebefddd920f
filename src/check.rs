use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::{fs, io};

use chrono::{DateTime, Local};

use crate::{CheckConfig, CheckReport, ServiceState};

/// Format used for all user visible modification timestamps.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Errors which keep the check from reaching an OK/WARNING/CRITICAL verdict.
/// The binary reports both as UNKNOWN.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{} not found!", path.display())]
    NotFound { path: PathBuf },
    #[error("unable to read metadata of {}: {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },
}

/// Stats the file once and turns its modification time into a [CheckReport].
///
/// Existence and modification time come from the same metadata query.
pub fn perform_check(path: &Path, config: &CheckConfig) -> Result<CheckReport, CheckError> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CheckError::NotFound {
            path: path.to_owned(),
        },
        _ => CheckError::Metadata {
            path: path.to_owned(),
            source,
        },
    })?;

    let modified = metadata.modified().map_err(|source| CheckError::Metadata {
        path: path.to_owned(),
        source,
    })?;
    let modified = DateTime::<Local>::from(modified);

    if config.verbose {
        print_debug(path, config, modified);
    }

    Ok(evaluate(path, config, modified, Local::now()))
}

/// Decides between a fresh and a stale verdict. Free of file system access
/// and process exits so the threshold logic can be tested in isolation.
pub fn evaluate(
    path: &Path,
    config: &CheckConfig,
    modified: DateTime<Local>,
    now: DateTime<Local>,
) -> CheckReport {
    let name = file_base_name(path);
    let elapsed = now.signed_duration_since(modified);

    // stale iff the total elapsed minutes, truncated, exceed the threshold
    if elapsed.num_minutes() > i64::from(config.minutes) {
        let state = if config.warning {
            ServiceState::Warning
        } else {
            ServiceState::Critical
        };
        let hours = elapsed.num_hours();
        let minutes = elapsed.num_minutes() - hours * 60;

        CheckReport::new(
            state,
            format!("{state} - {name} didn't changed for {hours} hours {minutes} minutes!"),
        )
    } else {
        let mut message = format!("{name} is OK");
        if config.include {
            message.push_str(&format!(" - {}", modified.format(TIMESTAMP_FORMAT)));
        }

        CheckReport::new(ServiceState::Ok, message)
    }
}

fn print_debug(path: &Path, config: &CheckConfig, modified: DateTime<Local>) {
    println!();
    println!("DEBUG - BEGIN");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("file to check: {}", path.display());
    println!("minutes: {}", config.minutes);
    println!("last modified: {}", modified.format(TIMESTAMP_FORMAT));
    println!("DEBUG - END");
    println!();
}

fn file_base_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
}
