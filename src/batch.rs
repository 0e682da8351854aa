use std::io::Write;

use crate::checker::{Checker, Service};
use crate::clock::Clock;
use crate::error::Result;
use crate::hasher::PasswordHash;
use crate::source::Source;
use crate::status;
use crate::transport::Transport;

/// Running counts for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub checked: usize,
    pub flagged: usize,
}

impl Tally {
    fn record(&mut self, flagged: bool) -> usize {
        self.checked += 1;
        if flagged {
            self.flagged += 1;
        }
        self.checked
    }
}

/// Checks every account in `source`, pausing `request_delay` between rows
/// whatever the previous row returned.
pub fn check_accounts<T, C, W>(
    checker: &Checker<T, C>,
    service: Service,
    source: &dyn Source,
    out: &mut W,
) -> Result<Tally>
where
    T: Transport,
    C: Clock,
    W: Write,
{
    status!("Checking accounts from {}...", source.name());

    let mut tally = Tally::default();
    for record in source.records()? {
        let account = record?;

        if tally.checked > 0 {
            checker.clock().sleep(checker.settings().request_delay);
        }

        let body = checker.check_account(service, &account)?;
        let row = tally.record(!body.is_empty());
        if body.is_empty() {
            writeln!(out, "{}: {} - []", row, account)?;
        } else {
            writeln!(out, "{}: {} - {}", row, account, String::from_utf8_lossy(&body))?;
        }
    }

    writeln!(out, "Accounts Checked: {}", tally.checked)?;
    writeln!(out, "Accounts Pwned: {}", tally.flagged)?;
    Ok(tally)
}

/// Checks every password in `source`. The range endpoint is unthrottled, so
/// rows go out back to back.
pub fn check_passwords<T, C, W>(
    checker: &Checker<T, C>,
    source: &dyn Source,
    out: &mut W,
) -> Result<Tally>
where
    T: Transport,
    C: Clock,
    W: Write,
{
    status!("Checking passwords from {}...", source.name());

    let mut tally = Tally::default();
    for record in source.records()? {
        let password = record?;
        let hash = PasswordHash::new(&password);

        let leaked = checker.is_password_leaked(&hash)?;
        let row = tally.record(leaked);
        if leaked {
            writeln!(out, "{}: {} - {} has been leaked!!!", row, password, hash)?;
        } else {
            writeln!(out, "{}: {} - not leaked", row, password)?;
        }
    }

    writeln!(out, "Passwords Checked: {}", tally.checked)?;
    writeln!(out, "Passwords Leaked: {}", tally.flagged)?;
    Ok(tally)
}
