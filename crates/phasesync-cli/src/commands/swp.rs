//! `phasesync compress`, `word` and `visualize`.

use std::process::ExitCode;

use phasesync_analysis::{compress as compress_text, compress_word, visualize as trace};

pub fn compress(text: &str) -> anyhow::Result<ExitCode> {
    let result = compress_text(text);
    println!("Mass: {}", result.mass);
    println!("Reduced: {}", result.reduced);
    println!("Total: {}", result.total);
    Ok(ExitCode::SUCCESS)
}

pub fn word(token: &str) -> anyhow::Result<ExitCode> {
    let result = compress_word(token);
    println!("{token}: reduced {}, total {}", result.reduced, result.total);
    Ok(ExitCode::SUCCESS)
}

pub fn visualize(token: &str) -> anyhow::Result<ExitCode> {
    println!("{}", trace(token));
    Ok(ExitCode::SUCCESS)
}
