use crate::cli::opts::Command;
use crate::cli::report::SettingsReport;

use anyhow::{Context, Result};
use protrack_core::SettingsStore;
use std::io::Write;

pub fn run_cli(store: &SettingsStore, cmd: Command, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::Get => {
            writeln!(out, "{}", store.is_store_data_in_application_directory())?;
        }
        Command::Set { value } => {
            store
                .set_store_data_in_application_directory(value)
                .with_context(|| {
                    format!(
                        "could not save settings under {}",
                        store.locations().application_relative_dir.display()
                    )
                })?;
            writeln!(out, "{}", store.application_data_directory().display())?;
        }
        Command::DataDir => {
            writeln!(out, "{}", store.application_data_directory().display())?;
        }
        Command::Show { json } => show(store, json, out)?,
    }
    Ok(())
}

fn show(store: &SettingsStore, json: bool, out: &mut impl Write) -> Result<()> {
    let report = SettingsReport::from(store);
    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "storeDataInApplicationDirectory\t{}",
        report.settings.store_data_in_application_directory
    )?;
    writeln!(
        out,
        "applicationRelativeDir\t{}",
        report.locations.application_relative_dir.display()
    )?;
    writeln!(out, "defaultDir\t{}", report.locations.default_dir.display())?;
    writeln!(
        out,
        "applicationDataDirectory\t{}",
        report.application_data_directory.display()
    )?;
    if !report.available {
        writeln!(out, "(settings file unavailable, showing defaults)")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::opts::Cli;
    use clap::Parser;
    use protrack_core::{DataLocations, MemoryRepo};
    use std::sync::Arc;

    fn store() -> SettingsStore {
        let locations = DataLocations::new("/opt/protrack", "/home/alice");
        SettingsStore::open(locations, Arc::new(MemoryRepo::new())).unwrap()
    }

    fn run(store: &SettingsStore, cmd: Command) -> String {
        let mut out = Vec::new();
        run_cli(store, cmd, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn get_set_and_data_dir() {
        let s = store();
        assert_eq!(run(&s, Command::Get), "false\n");
        assert_eq!(run(&s, Command::DataDir), "/home/alice/.ProTrack\n");
        assert_eq!(run(&s, Command::Set { value: true }), "/opt/protrack/data\n");
        assert_eq!(run(&s, Command::Get), "true\n");
    }

    #[test]
    fn set_on_unavailable_store_fails() {
        let s = SettingsStore::unavailable(DataLocations::new("/opt/protrack", "/home/alice"));
        let mut out = Vec::new();
        let err = run_cli(&s, Command::Set { value: true }, &mut out).unwrap_err();
        assert!(err.to_string().contains("/opt/protrack/data"));
        assert!(out.is_empty());
    }

    #[test]
    fn show_json_reports_everything() {
        let s = store();
        let text = run(&s, Command::Show { json: true });
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["available"], true);
        assert_eq!(v["settings"]["storeDataInApplicationDirectory"], false);
        assert_eq!(v["locations"]["applicationRelativeDir"], "/opt/protrack/data");
        assert_eq!(v["locations"]["defaultDir"], "/home/alice/.ProTrack");
        assert_eq!(v["applicationDataDirectory"], "/home/alice/.ProTrack");
    }

    #[test]
    fn parses_boolish_set_values() {
        let cli = Cli::try_parse_from(["protrack-settings", "set", "yes"]).unwrap();
        assert_eq!(cli.cmd, Command::Set { value: true });
        let cli = Cli::try_parse_from(["protrack-settings", "set", "off"]).unwrap();
        assert_eq!(cli.cmd, Command::Set { value: false });
        assert!(Cli::try_parse_from(["protrack-settings", "set", "maybe"]).is_err());
    }

    #[test]
    fn install_root_flag() {
        let cli =
            Cli::try_parse_from(["protrack-settings", "data-dir", "--install-root", "/srv/pt"])
                .unwrap();
        assert_eq!(cli.install_root.as_deref(), Some(std::path::Path::new("/srv/pt")));
        assert_eq!(cli.cmd, Command::DataDir);
    }
}
