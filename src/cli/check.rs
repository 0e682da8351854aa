use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::CommandFactory;

use super::Cli;
use crate::batch;
use crate::checker::{Checker, Service};
use crate::clock::SystemClock;
use crate::config::Config;
use crate::hasher::PasswordHash;
use crate::source;
use crate::status;
use crate::transport::HttpTransport;

enum Mode {
    Account(Service),
    Password,
}

fn mode(selector: &str) -> Option<Mode> {
    match selector {
        "password" => Some(Mode::Password),
        other => Service::from_selector(other).map(Mode::Account),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    status!("*-----------------------*");
    status!("??? Have I Been Pwned ???");
    status!("*-----------------------*");

    let Some(mode) = mode(&cli.service) else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = Config::load()
        .context("Failed to load configuration")?
        .build_settings(cli.key.as_deref())?;
    let transport = HttpTransport::new(&settings.user_agent)?;
    let checker = Checker::new(settings, transport, SystemClock);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(spec) = cli.file {
        let input = source::parse(&spec);
        match mode {
            Mode::Account(service) => {
                batch::check_accounts(&checker, service, input.as_ref(), &mut out)?;
            }
            Mode::Password => {
                batch::check_passwords(&checker, input.as_ref(), &mut out)?;
            }
        }
        return Ok(());
    }

    let Some(item) = cli.item else {
        bail!("No account given.");
    };

    match mode {
        Mode::Account(service) => {
            let body = checker
                .check_account(service, &item)
                .with_context(|| format!("Failed to check {}", item))?;
            if !body.is_empty() {
                out.write_all(&body)?;
                writeln!(out)?;
            }
        }
        Mode::Password => {
            let hash = PasswordHash::new(&item);
            if checker.is_password_leaked(&hash)? {
                writeln!(out, "{} has been leaked.", hash)?;
            } else {
                writeln!(out, "{} has not been leaked.", hash)?;
            }
        }
    }

    Ok(())
}
