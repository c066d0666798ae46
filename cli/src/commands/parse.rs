use rentr_common::clock::{Clock, SystemClock};
use rentr_core::domain::dates::DateParser;

use crate::terminal::print;

pub fn parse(expression: &str) -> anyhow::Result<()> {
    let reference = SystemClock.now();
    let resolved = DateParser::new().parse(expression, reference)?;

    print::header("date expression");
    print::aligned_line("Expression", expression);
    print::aligned_line("Reference", reference.to_rfc3339());
    print::aligned_line("Resolves to", resolved.to_rfc3339());
    Ok(())
}
