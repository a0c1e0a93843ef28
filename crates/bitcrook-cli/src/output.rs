//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

const BANNER: [&str; 4] = [
    r"   ___  __________________  ____  ____  __ __",
    r"  / _ )/  _/_  __/ ___/ _ \/ __ \/ __ \/ //_/",
    r" / _  |/ /  / / / /__/ , _/ /_/ / /_/ / ,<   ",
    r"/____/___/ /_/  \___/_/|_|\____/\____/_/|_|  ",
];

/// Print the startup banner to stderr so stdout stays machine readable.
pub fn banner(version: &str) {
    for (i, line) in BANNER.iter().enumerate() {
        if i == BANNER.len() - 1 {
            eprintln!("{}{}", line, format!("v{}", version).green());
        } else {
            eprintln!("{}", line);
        }
    }
    eprintln!();
    eprintln!("Bitcrook Copyright (C) 2021 Axiom");
    eprintln!("This program comes with ABSOLUTELY NO WARRANTY");
    eprintln!();
}

/// Print a section heading.
pub fn heading(msg: &str) {
    println!("{}", msg.bold());
}

/// Print a labeled field, skipping empty values.
pub fn field(label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    println!("  {}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
