/*
 * types.rs
 * Copyright (c) 2025 bibtxt contributors
 *
 * Types command implementation
 */

use std::process::ExitCode;

use anyhow::Result;

use bibtxt_core::{EntryType, FieldRequirement};

fn join(requirements: &[FieldRequirement]) -> String {
    if requirements.is_empty() {
        return "-".to_string();
    }
    requirements
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One block per entry type: name, required fields, optional fields.
pub fn listing() -> String {
    EntryType::ALL
        .iter()
        .map(|entry_type| {
            let spec = entry_type.spec();
            format!(
                "{}\n  required: {}\n  optional: {}",
                entry_type,
                join(spec.required),
                join(spec.optional)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute the types command
pub fn execute() -> Result<ExitCode> {
    println!("{}", listing());
    println!("\n`a/b` means either field satisfies the requirement.");
    Ok(ExitCode::SUCCESS)
}
