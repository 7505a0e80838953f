//! Deployment environment checks used by the `validate-env` binary.

use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Frontend,
    Backend,
    All,
}

/// A required setting, satisfied by any one of its variable names.
#[derive(Debug)]
pub struct Requirement {
    pub names: &'static [&'static str],
    pub target: Target,
}

impl Requirement {
    pub fn label(&self) -> String {
        self.names.join(" or ")
    }
}

pub static REQUIREMENTS: [Requirement; 5] = [
    Requirement {
        names: &["DATABASE_URL", "DATABASE_CONNECTION_STRING"],
        target: Target::Backend,
    },
    Requirement {
        names: &["JWT_SECRET"],
        target: Target::Backend,
    },
    Requirement {
        names: &["APP_ENV"],
        target: Target::Backend,
    },
    Requirement {
        names: &["VITE_API_URL"],
        target: Target::Frontend,
    },
    Requirement {
        names: &["VITE_APP_ENV"],
        target: Target::Frontend,
    },
];

/// Every variable the deployment knows about, including optional ones.
pub static KNOWN_VARIABLES: [&str; 9] = [
    "APP_ENV",
    "PORT",
    "FRONTEND_URL",
    "DATABASE_URL",
    "DATABASE_CONNECTION_STRING",
    "JWT_SECRET",
    "RUST_LOG",
    "VITE_API_URL",
    "VITE_APP_ENV",
];

#[derive(Debug)]
pub struct CheckResult {
    pub requirement: &'static Requirement,
    /// Name of the variable that satisfied the requirement.
    pub satisfied_by: Option<&'static str>,
}

#[derive(Debug)]
pub struct EnvReport {
    pub results: Vec<CheckResult>,
}

impl EnvReport {
    pub fn missing(&self) -> Vec<&CheckResult> {
        self.results
            .iter()
            .filter(|r| r.satisfied_by.is_none())
            .collect()
    }

    pub fn is_ok(&self) -> bool {
        self.missing().is_empty()
    }
}

impl fmt::Display for EnvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            match result.satisfied_by {
                Some(name) => writeln!(f, "[ok]      {}", name)?,
                None => writeln!(f, "[missing] {}", result.requirement.label())?,
            }
        }

        Ok(())
    }
}

fn is_set(value: Option<String>) -> bool {
    matches!(value, Some(v) if !v.trim().is_empty())
}

pub fn check<F>(target: Target, lookup: F) -> EnvReport
where
    F: Fn(&str) -> Option<String>,
{
    let results = REQUIREMENTS
        .iter()
        .filter(|r| target == Target::All || r.target == target)
        .map(|requirement| CheckResult {
            requirement,
            satisfied_by: requirement
                .names
                .iter()
                .copied()
                .find(|name| is_set(lookup(name))),
        })
        .collect();

    EnvReport { results }
}

/// Keeps the first and last two characters of longer values.
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();

    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();

    [head.as_str(), &"*".repeat(chars.len() - 4), tail.as_str()].concat()
}
