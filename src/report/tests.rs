use super::{reconcile, Console, Reporter};
use crate::models::HighestTransfer;
use crate::storage::{Ledger, TransactionLedger};
use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use std::thread;

fn decimal(value: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(value)?)
}

fn rendered(console: Console<Vec<u8>>) -> Result<String> {
    Ok(String::from_utf8(console.into_inner())?)
}

#[test]
fn test_console_lines_do_not_interleave() -> Result<()> {
    let console = Arc::new(Console::new(Vec::new()));

    let handles: Vec<_> = (0..8)
        .map(|writer| {
            let console = console.clone();
            thread::spawn(move || {
                for line in 0..200 {
                    console.line(format_args!("writer-{writer}-line-{line}")).ok();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().map_err(|_| anyhow!("writer thread panicked"))?;
    }

    let console = Arc::try_unwrap(console).map_err(|_| anyhow!("console still shared"))?;
    let output = rendered(console)?;

    assert_eq!(output.lines().count(), 8 * 200);
    assert!(output.lines().all(|line| line.starts_with("writer-") && line.matches("-line-").count() == 1));

    Ok(())
}

#[test]
fn test_console_blank_line() -> Result<()> {
    let console = Console::new(Vec::new());
    console.line(format_args!("first"))?;
    console.blank_line()?;
    console.line(format_args!("second"))?;

    assert_eq!(rendered(console)?, "first\n\nsecond\n");

    Ok(())
}

#[test]
fn test_reconcile_debits_only_the_winning_account() -> Result<()> {
    let ledger = TransactionLedger::new();
    ledger.credit(&"A2".to_string(), decimal("50")?);
    ledger.credit(&"A1".to_string(), decimal("300")?);
    ledger.credit(&"A3".to_string(), decimal("200")?);

    let highest = HighestTransfer::new("A1", decimal("200")?);
    let totals = reconcile(&ledger, Some(&highest));

    assert_eq!(
        totals,
        vec![
            ("A1".to_string(), decimal("100")?),
            ("A2".to_string(), decimal("50")?),
            ("A3".to_string(), decimal("200")?)
        ]
    );

    Ok(())
}

#[test]
fn test_reconcile_without_highest_changes_nothing() -> Result<()> {
    let ledger = TransactionLedger::new();
    ledger.credit(&"B".to_string(), decimal("7")?);
    ledger.credit(&"A".to_string(), decimal("3")?);

    let totals = reconcile(&ledger, None);

    assert_eq!(totals, vec![("A".to_string(), decimal("3")?), ("B".to_string(), decimal("7")?)]);

    Ok(())
}

#[test]
fn test_reconcile_on_an_empty_ledger_creates_no_entry() {
    let ledger = TransactionLedger::new();

    assert!(reconcile(&ledger, None).is_empty());
    assert!(ledger.totals().is_empty());
}

#[test]
fn test_commission_rounds_midpoints_away_from_zero() -> Result<()> {
    let reporter = Reporter::new(decimal("0.1")?, 2, false);

    assert_eq!(reporter.commission(decimal("1.25")?).to_string(), "0.13");
    assert_eq!(reporter.commission(decimal("-1.25")?).to_string(), "-0.13");
    assert_eq!(reporter.commission(decimal("100.00")?).to_string(), "10");
    assert_eq!(reporter.commission(Decimal::ZERO).to_string(), "0");

    Ok(())
}

#[test]
fn test_commission_saturates_instead_of_overflowing() -> Result<()> {
    let reporter = Reporter::new(decimal("10")?, 6, false);

    assert_eq!(reporter.commission(Decimal::MAX).value(), Decimal::MAX);

    Ok(())
}

#[test]
fn test_compact_report() -> Result<()> {
    let console = Console::new(Vec::new());
    let reporter = Reporter::new(decimal("0.1")?, 6, false);
    let highest = HighestTransfer::new("A1", decimal("200.00")?);
    let totals = vec![("A1".to_string(), decimal("100.00")?), ("A2".to_string(), decimal("50.00")?)];

    reporter.write(&console, Some(&highest), &totals)?;

    assert_eq!(rendered(console)?, "A1,10\nA2,5\n");

    Ok(())
}

#[test]
fn test_verbose_report() -> Result<()> {
    let console = Console::new(Vec::new());
    let reporter = Reporter::new(decimal("0.1")?, 6, true);
    let highest = HighestTransfer::new("A1", decimal("200.00")?);
    let totals = vec![("A1".to_string(), decimal("100.00")?), ("A2".to_string(), decimal("0.333")?)];

    reporter.write(&console, Some(&highest), &totals)?;

    let expected = "\n\
        == Highest Transaction ==\n\
        AccountID\tTransaction\n\
        --------------------------------\n\
        A1\t\t200\n\
        \n\
        == Comissions ==\n\
        AccountID\tComission\n\
        --------------------------------\n\
        A1\t\t10\n\
        A2\t\t0.0333\n";

    assert_eq!(rendered(console)?, expected);

    Ok(())
}

#[test]
fn test_verbose_report_without_highest_shows_empty_block() -> Result<()> {
    let console = Console::new(Vec::new());
    let reporter = Reporter::new(decimal("0.1")?, 6, true);

    reporter.write(&console, None, &[])?;

    let output = rendered(console)?;

    assert!(output.lines().any(|line| line == "\t\t0"));
    assert!(output.ends_with("== Comissions ==\nAccountID\tComission\n--------------------------------\n"));

    Ok(())
}
