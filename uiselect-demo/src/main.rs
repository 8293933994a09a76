//! Line-driven host for the person picker.
//!
//! Reads commands from stdin (see `help`), applies each to the mounted widget
//! and prints what changed. An optional first argument names a JSON file with
//! the widget's attributes.

mod commands;
mod paths;
mod people;

use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use uiselect::prelude::*;

use crate::commands::{Command, HELP};
use crate::people::Person;

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn init_logging() {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("uiselect-demo.log"));
    if let Err(e) = paths::ensure_parent(&path) {
        eprintln!("cannot create log directory for {}: {}", path.display(), e);
    }
    match File::create(&path) {
        Ok(file) => {
            if WriteLogger::init(LevelFilter::Debug, Config::default(), file).is_err() {
                eprintln!("logger already initialized");
            }
        }
        Err(e) => eprintln!("logging disabled: {}: {}", path.display(), e),
    }
}

fn load_config() -> Result<SelectConfig, DemoError> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return Ok(SelectConfig {
            id: Some("people".into()),
            placeholder: Some("Pick one...".into()),
            ..SelectConfig::default()
        });
    };
    let json = fs::read_to_string(&path).map_err(|source| DemoError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    log::info!("Loaded config from {}", path.display());
    Ok(SelectConfig::from_json(&json)?)
}

fn describe(mount: &Mount<Person>) -> String {
    let state = mount.select().state();
    let shown = if mount.placeholder_visible() {
        format!("placeholder {:?}", mount.select().placeholder().unwrap_or(""))
    } else {
        format!("selected {:?}", mount.match_label())
    };
    let mut flags = Vec::new();
    if state.is_open() {
        flags.push(format!("open ({} rows)", mount.select().filtered_items().len()));
    }
    if state.is_disabled() {
        flags.push("disabled".to_string());
    }
    if !state.is_valid() {
        flags.push("invalid".to_string());
    }
    if !state.search().is_empty() {
        flags.push(format!("search {:?}", state.search()));
    }
    if flags.is_empty() {
        shown
    } else {
        format!("{}, {}", shown, flags.join(", "))
    }
}

fn apply(mount: &mut Mount<Person>, command: Command, out: &mut impl Write) -> io::Result<()> {
    let result = match command {
        Command::Activate => {
            let id = format!("{}-match", mount.select().id());
            mount.click(&id)
        }
        Command::Pick(text) => mount.click_text(&text),
        Command::Type(text) => mount.input(&text),
        Command::Key(key) => mount.key(key),
        Command::Blur => mount.blur(),
        Command::Clear => {
            mount.update(|select| select.clear());
            EventResult::Consumed
        }
        Command::Disable(disabled) => {
            mount.update(|select| select.set_disabled(disabled));
            EventResult::Consumed
        }
        Command::Html => return writeln!(out, "{}", mount.to_html()),
        Command::State => return writeln!(out, "{}", describe(mount)),
        Command::Help => return writeln!(out, "{}", HELP),
    };

    if !result.is_handled() {
        writeln!(out, "(ignored)")?;
    }
    for event in mount.update(|select| select.drain_events()) {
        log::debug!("{:?} from {}", event.kind, event.widget_id);
    }
    writeln!(out, "{}", describe(mount))
}

fn run() -> Result<(), DemoError> {
    let select = people::person_select(load_config()?)?;
    let mut mount = Mount::new(select);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", describe(&mount))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match commands::parse(&line) {
            Ok(Some(command)) => {
                log::debug!("Command: {:?}", command);
                apply(&mut mount, command, &mut out)?;
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("{}", e);
                eprintln!("error: {}", e);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
