use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use placer_model::RoleKind;

/// Where a spec comes from and what it is compiled for.
#[derive(Debug, Clone, Args)]
pub struct SpecInput {
    /// Replica role the rules apply to
    #[arg(long, default_value = "voter")]
    pub role: RoleKind,
    /// Total replica count; 0 leaves the total unconstrained for map specs
    #[arg(short = 'n', long, default_value_t = 0)]
    pub replicas: u64,
    /// Spec text, e.g. '["+zone=sh"]' or '{"+zone=sh": 2}'
    #[arg(short, long, conflicts_with = "file")]
    pub constraints: Option<String>,
    /// Read the spec from a file ("-" for stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl SpecInput {
    /// Spec text; empty when neither `--constraints` nor `--file` is given.
    pub fn read(&self) -> anyhow::Result<String> {
        if let Some(text) = &self.constraints {
            return Ok(text.clone());
        }
        match &self.file {
            None => Ok(String::new()),
            Some(path) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read spec from stdin")?;
                Ok(buf)
            }
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read spec file {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        input: SpecInput,
    }

    fn parse(args: &[&str]) -> Result<SpecInput, clap::Error> {
        Harness::try_parse_from(std::iter::once("placer").chain(args.iter().copied()))
            .map(|h| h.input)
    }

    #[test]
    fn defaults() {
        let input = parse(&[]).unwrap();
        assert_eq!(input.role, RoleKind::Voter);
        assert_eq!(input.replicas, 0);
        assert_eq!(input.read().unwrap(), "");
    }

    #[test]
    fn inline_constraints() {
        let input = parse(&["--role", "leader", "-n", "3", "-c", "[\"+zone=sh\"]"]).unwrap();
        assert_eq!(input.role, RoleKind::Leader);
        assert_eq!(input.replicas, 3);
        assert_eq!(input.read().unwrap(), "[\"+zone=sh\"]");
    }

    #[test]
    fn constraints_conflict_with_file() {
        assert!(parse(&["-c", "[]", "-f", "spec.json"]).is_err());
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(parse(&["--role", "witness"]).is_err());
    }

    #[test]
    fn reads_spec_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{'+zone=sh': 1}}").unwrap();

        let input = parse(&["-f", file.path().to_str().unwrap()]).unwrap();
        assert_eq!(input.read().unwrap(), "{'+zone=sh': 1}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placer.json");

        let input = parse(&["-f", path.to_str().unwrap()]).unwrap();
        let err = input.read().unwrap_err();
        assert!(format!("{err:#}").contains("placer.json"));
    }
}
