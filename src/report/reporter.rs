use rust_decimal::Decimal;
use std::io::{self, Write};

use crate::config::BatchOptions;
use crate::models::HighestTransfer;
use crate::report::Console;
use crate::types::{AccountId, Rounded};

const RULE: &str = "--------------------------------";

/// Renders per-account commissions, either as `account,commission` lines or as the labelled verbose tables.
pub struct Reporter {
    commission_rate: Decimal,
    decimal_places: u32,
    verbose: bool
}

impl Reporter {
    pub fn new(commission_rate: Decimal, decimal_places: u32, verbose: bool) -> Self {
        Self {
            commission_rate,
            decimal_places,
            verbose
        }
    }

    pub fn from_options(options: &BatchOptions) -> Self {
        Self::new(options.commission_rate, options.decimal_places, options.verbose)
    }

    pub fn commission(&self, total: Decimal) -> Rounded {
        //NOTE: A product outside the Decimal range saturates instead of panicking mid-report
        Rounded::new(total.saturating_mul(self.commission_rate), self.decimal_places)
    }

    pub fn write<W: Write>(
        &self,
        console: &Console<W>,
        highest: Option<&HighestTransfer>,
        totals: &[(AccountId, Decimal)]
    ) -> io::Result<()> {
        if self.verbose {
            self.write_highest(console, highest)?;

            console.blank_line()?;
            console.line(format_args!("== Comissions =="))?;
            console.line(format_args!("AccountID\tComission"))?;
            console.line(format_args!("{RULE}"))?;
        }

        for (account_id, total) in totals {
            let commission = self.commission(*total);

            if self.verbose {
                console.line(format_args!("{account_id}\t\t{commission}"))?;
            } else {
                console.line(format_args!("{account_id},{commission}"))?;
            }
        }

        console.flush()
    }

    fn write_highest<W: Write>(&self, console: &Console<W>, highest: Option<&HighestTransfer>) -> io::Result<()> {
        let empty = HighestTransfer::default();
        let highest = highest.unwrap_or(&empty);

        console.blank_line()?;
        console.line(format_args!("== Highest Transaction =="))?;
        console.line(format_args!("AccountID\tTransaction"))?;
        console.line(format_args!("{RULE}"))?;
        console.line(format_args!(
            "{}\t\t{}",
            highest.account_id,
            Rounded::new(highest.amount, self.decimal_places)
        ))
    }
}
