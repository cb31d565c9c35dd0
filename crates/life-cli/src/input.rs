//! Interactive configuration intake.

use life_core::{Error, InitMode, Result, SimConfig};
use std::io::{BufRead, Write};

/// Read the three startup prompts from `input`, echoing prompt text to
/// `output`: board size, generation count, and preset-or-random choice
/// ('s'/'S' selects the glider preset, anything else random).
pub fn read_config(input: &mut impl BufRead, output: &mut impl Write) -> Result<SimConfig> {
    let size = prompt(input, output, "Enter board size: ")?
        .parse::<usize>()
        .map_err(|_| Error::Validation("board size must be a non-negative integer".into()))?;

    let generations = prompt(input, output, "Enter number of generations: ")?
        .parse::<u64>()
        .map_err(|_| Error::Validation("generation count must be a non-negative integer".into()))?;

    let answer = prompt(input, output, "Use the preset pattern? (s/n): ")?;
    let mode = if answer.eq_ignore_ascii_case("s") {
        InitMode::Glider
    } else {
        InitMode::Random
    };

    let config = SimConfig {
        size,
        generations,
        mode,
    };
    config.validate()?;
    Ok(config)
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, text: &str) -> Result<String> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
