use clap::ValueEnum;
use tracing::debug;

use placer_core::new_rules;
use placer_model::{Rule, canonical_sort, total_count};

use super::input::SpecInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One rule per line
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Compile the spec and print the rules to stdout.
pub fn compile(input: &SpecInput, output: OutputFormat, sorted: bool) -> anyhow::Result<()> {
    let text = input.read()?;
    let mut rules = new_rules(input.role, input.replicas, &text)?;
    if sorted {
        canonical_sort(&mut rules);
    }
    debug!(role = %input.role, replicas = input.replicas, rules = rules.len(), "spec compiled");

    println!("{}", render(&rules, output)?);
    Ok(())
}

/// Compile the spec and print how many replicas its rules place.
pub fn check(input: &SpecInput) -> anyhow::Result<()> {
    let text = input.read()?;
    let rules = new_rules(input.role, input.replicas, &text)?;
    let total = total_count(&rules).ok_or_else(|| anyhow::anyhow!("rule counts overflow"))?;
    debug!(role = %input.role, rules = rules.len(), total, "spec is valid");

    println!("ok: {} rule(s), {} replica(s)", rules.len(), total);
    Ok(())
}

pub fn render(rules: &[Rule], output: OutputFormat) -> anyhow::Result<String> {
    match output {
        OutputFormat::Text => Ok(rules
            .iter()
            .map(Rule::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rules)?),
    }
}
