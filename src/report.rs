// src/report.rs

use std::io::{self, Write};

use crate::data::{Schedule, YearMonth};

/// Write the header line and one line per schedule, in extraction order.
pub fn write_monthly_schedules(
    writer: &mut impl Write,
    name: &str,
    ym: &YearMonth,
    schedules: &[Schedule],
) -> io::Result<()> {
    writeln!(
        writer,
        "{}さんの{}のスケジュールは次の通りです。",
        name,
        ym.text_jp()
    )?;
    for schedule in schedules {
        writeln!(writer, "{schedule}")?;
    }
    Ok(())
}
