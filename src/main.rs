use chrono::Local;
use clap::Parser;
use redshift_backup::backup::backup_config::BackupConfig;
use redshift_backup::backup::driver::RunStatus;
use redshift_backup::backup::result_error::error::Error;
use redshift_backup::backup::result_error::WithMsg;
use redshift_backup::backup::{console, driver};
use std::process::exit;
use tracing::{debug, error};
use validator::Validate;

/// Shuttles the usual home-directory items onto the backup drive
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    tracing_subscriber::fmt::init();
    let _args = Args::parse();

    let res = BackupConfig::from_env()
        .and_then(|config| {
            config
                .validate()
                .map_err(Error::from)
                .map(|_| config)
                .with_msg("Config validation failed")
        })
        .and_then(|config| {
            let mut gate = console::std_gate();
            driver::run(&config, &mut gate, Local::now())
        });

    match res {
        Ok(RunStatus::Done) => debug!("Backup run finished"),
        Ok(RunStatus::Aborted) => debug!("Backup run aborted at operator's request"),
        Err(e) => {
            error!("{e}");
            exit(1);
        }
    }
}
