//! Structured compression traces.

use std::fmt;

use serde::Serialize;

use crate::swp::{
    compress_word, digit_reduce, letter_value, reduction_steps, split_parts, ReductionStep,
    WordCompression,
};

/// One character and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterTrace {
    /// Uppercased display form of the character.
    pub symbol: String,
    pub value: u8,
}

/// Arithmetic for one part of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartTrace {
    pub text: String,
    pub letters: Vec<LetterTrace>,
    pub sum: u64,
    pub steps: Vec<ReductionStep>,
    pub reduced: u8,
}

impl PartTrace {
    fn build(text: &str) -> Self {
        let letters: Vec<LetterTrace> = text
            .chars()
            .map(|c| LetterTrace {
                symbol: c.to_uppercase().collect(),
                value: letter_value(c),
            })
            .collect();
        let sum = letters.iter().map(|l| u64::from(l.value)).sum();
        Self {
            text: text.to_string(),
            letters,
            sum,
            steps: reduction_steps(sum),
            reduced: digit_reduce(sum),
        }
    }
}

/// Full trace of [`compress_word`] on one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompressionTrace {
    pub token: String,
    pub parts: Vec<PartTrace>,
    /// Reduction of the summed part digits; only used for compound tokens.
    pub combine_steps: Vec<ReductionStep>,
    pub result: WordCompression,
}

impl CompressionTrace {
    /// Trace `token`, or `None` when it has no parts.
    pub fn build(token: &str) -> Option<Self> {
        let parts: Vec<PartTrace> = split_parts(token).into_iter().map(PartTrace::build).collect();
        if parts.is_empty() {
            return None;
        }
        let result = compress_word(token);
        let combine_steps = if parts.len() > 1 {
            reduction_steps(result.total)
        } else {
            Vec::new()
        };
        Some(Self {
            token: token.to_string(),
            parts,
            combine_steps,
            result,
        })
    }

    pub fn is_compound(&self) -> bool {
        self.parts.len() > 1
    }
}

fn write_steps(f: &mut fmt::Formatter<'_>, indent: &str, steps: &[ReductionStep]) -> fmt::Result {
    if steps.is_empty() {
        return Ok(());
    }
    writeln!(f, "{indent}Reduction steps:")?;
    for step in steps {
        let digits = join(step.digits.iter().map(|d| d.to_string()));
        writeln!(f, "{indent}  {digits} = {}", step.sum)?;
    }
    Ok(())
}

fn write_part(f: &mut fmt::Formatter<'_>, indent: &str, part: &PartTrace) -> fmt::Result {
    writeln!(f, "{indent}Letter values:")?;
    for letter in &part.letters {
        writeln!(f, "{indent}  {} = {}", letter.symbol, letter.value)?;
    }
    let terms = join(
        part.letters
            .iter()
            .map(|l| format!("{}({})", l.symbol, l.value)),
    );
    writeln!(f, "{indent}Sum: {terms} = {}", part.sum)?;
    write_steps(f, indent, &part.steps)?;
    writeln!(f, "{indent}Reduced: {}", part.reduced)
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(" + ")
}

impl fmt::Display for CompressionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.token)?;
        if let [single] = self.parts.as_slice() {
            write_part(f, "", single)?;
        } else {
            for (i, part) in self.parts.iter().enumerate() {
                writeln!(f, "Part {}: {}", i + 1, part.text)?;
                write_part(f, "  ", part)?;
            }
            let digits = join(self.parts.iter().map(|p| p.reduced.to_string()));
            writeln!(f, "Parts: {digits} = {}", self.result.total)?;
            write_steps(f, "", &self.combine_steps)?;
            writeln!(f, "Reduced: {}", self.result.reduced)?;
        }
        write!(f, "Total: {} (used as tie breaker)", self.result.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token_trace() {
        let trace = CompressionTrace::build("Sync").unwrap();
        assert!(!trace.is_compound());
        assert_eq!(trace.parts[0].sum, 61);
        assert_eq!(trace.parts[0].steps.len(), 1);
        assert_eq!(trace.result, WordCompression { reduced: 7, total: 61 });
        assert!(trace.combine_steps.is_empty());
    }

    #[test]
    fn test_compound_trace_renders_parts() {
        let trace = CompressionTrace::build("Core Feature Development").unwrap();
        assert!(trace.is_compound());
        let out = trace.to_string();
        assert!(out.contains("Part 1: Core"));
        assert!(out.contains("Part 3: Development"));
        assert!(out.contains("Parts: 5 + 4 + 5 = 14"));
        assert!(out.contains("1 + 4 = 5"));
        assert!(out.ends_with("Total: 14 (used as tie breaker)"));
    }

    #[test]
    fn test_single_digit_sum_has_no_steps() {
        let out = CompressionTrace::build("ab").unwrap().to_string();
        assert!(!out.contains("Reduction steps:"));
        assert!(out.contains("Sum: A(1) + B(2) = 3"));
        assert!(out.contains("Reduced: 3"));
    }

    #[test]
    fn test_none_for_empty() {
        assert!(CompressionTrace::build("").is_none());
        assert!(CompressionTrace::build("\t__\n").is_none());
    }
}
