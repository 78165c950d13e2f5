use std::{fmt::Display, io::Write};

use anyhow::Result;
use clap::ValueEnum;
use log::{info, trace};

use crate::{
    timed::Timed,
    timer::get_time,
    triangular::triangular,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `{value} took {seconds} seconds.`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

pub fn render_line<T: Display>(timed: &Timed<T>) -> String {
    format!("{} took {} seconds.", timed.value, timed.secs())
}

/// Times `triangular(i)` for every `i` in `0..count`, writing one line per call.
pub fn run(count: u64, format: Format, out: &mut impl Write) -> Result<()> {
    info!("Timing {count} triangular numbers, format {format:?}");
    let f = get_time(triangular);
    for i in 0..count {
        let timed = f(i);
        trace!("Call {i} took {:?}", timed.elapsed);
        match format {
            Format::Text => writeln!(out, "{}", render_line(&timed))?,
            Format::Json => {
                serde_json::to_writer(&mut *out, &timed)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
