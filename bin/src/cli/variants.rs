use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use statement::{
    merge::MergeScope,
    variant::{PreprocessVariant, Steps},
};
use strum::{EnumMessage, IntoEnumIterator};

/// Lists the preprocessing variants, their aliases and what they do.
#[derive(Args, Debug)]
pub struct Command {}

/// Runs the subcommand.
pub fn run(_cmd: &Command) -> Result<()> {
    let mut out = io::stdout().lock();
    for variant in PreprocessVariant::iter() {
        write!(out, "{}", describe_variant(variant))?;
    }
    out.flush()?;
    Ok(())
}

fn describe_variant(variant: PreprocessVariant) -> String {
    let name = variant.to_string();
    let aliases: Vec<&str> = variant
        .get_serializations()
        .iter()
        .copied()
        .filter(|alias| *alias != name)
        .collect();

    let mut text = name.clone();
    if !aliases.is_empty() {
        text.push_str(&format!(" (alias: {})", aliases.join(", ")));
    }
    text.push('\n');
    if let Some(doc) = variant.get_documentation() {
        text.push_str(&format!("    {}\n", doc.split_whitespace().collect::<Vec<_>>().join(" ")));
    }
    text.push_str(&format!("    steps: {}\n", describe_steps(&variant.steps())));
    text
}

fn describe_steps(steps: &Steps) -> String {
    let mut parts = Vec::new();
    if steps.split_dates {
        parts.push("split leading dates".to_string());
    }
    if let Some(rule) = &steps.continuation {
        let key: Vec<String> = rule.key.iter().map(|field| field.label()).collect();
        let target = match rule.scope {
            MergeScope::Description => "description",
            MergeScope::AllFields => "fields",
        };
        parts.push(format!(
            "merge rows with blank {} into the previous row's {target}",
            key.join(", ")
        ));
        parts.push("forward-fill dates".to_string());
    }
    if steps.repair_numbers {
        parts.push("repair split numbers".to_string());
    }

    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join("; ")
    }
}
