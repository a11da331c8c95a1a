use cssschema::{strip_vendor_prefix, CssSchema, DEFAULT, DEFINITIONS};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, SchemaChoice},
    output::{print_output, wrap_words, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct FunctionEntry {
    token: String,
    key: String,
}

#[derive(Debug, Serialize)]
struct Resolution {
    name: String,
    /// Schema key the name resolved to, `None` when disallowed
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    mask: String,
    mask_bits: u32,
    literals: Vec<String>,
    functions: Vec<FunctionEntry>,
}

#[derive(Debug, Serialize)]
struct ResolveOutput {
    schema: String,
    resolutions: Vec<Resolution>,
}

/// Finds the schema key `for_key` would use for `name`
fn matched_key(schema: &CssSchema, name: &str) -> Option<String> {
    let canonical = name.to_ascii_lowercase();
    if schema.contains(&canonical) {
        return Some(canonical);
    }
    strip_vendor_prefix(&canonical)
        .map(|(_, bare)| bare)
        .filter(|bare| schema.contains(bare))
        .map(str::to_string)
}

pub fn run(names: &[String], choice: &SchemaChoice, opts: &GlobalOptions) -> anyhow::Result<()> {
    let schema = match choice {
        SchemaChoice::Default => DEFAULT.clone(),
        SchemaChoice::All => CssSchema::with_names(DEFINITIONS.keys())?,
    };

    let resolutions = names
        .iter()
        .map(|name| {
            let rule = schema.for_key(name);
            Resolution {
                name: name.clone(),
                key: matched_key(&schema, name),
                mask: rule.mask().to_string(),
                mask_bits: rule.mask().bits(),
                literals: rule.literals().iter().cloned().collect(),
                functions: rule
                    .fn_keys()
                    .iter()
                    .map(|(token, key)| FunctionEntry {
                        token: token.clone(),
                        key: key.clone(),
                    })
                    .collect(),
            }
        })
        .collect();

    let output = ResolveOutput {
        schema: match choice {
            SchemaChoice::Default => "default".to_string(),
            SchemaChoice::All => "all".to_string(),
        },
        resolutions,
    };

    print_output(&output, opts, |o| {
        let mut tw = TabWriter::new(&[
            ("NAME", Align::Left),
            ("KEY", Align::Left),
            ("MASK", Align::Left),
            ("LITERALS", Align::Right),
            ("FUNCTIONS", Align::Right),
        ]);
        for r in &o.resolutions {
            tw.row(vec![
                r.name.clone(),
                r.key.clone().unwrap_or_else(|| "-".to_string()),
                r.mask.clone(),
                r.literals.len().to_string(),
                r.functions.len().to_string(),
            ]);
        }
        println!("Resolved against the {} schema:\n", o.schema);
        tw.print();

        for r in o.resolutions.iter().filter(|r| r.key.is_some()) {
            if r.literals.is_empty() && r.functions.is_empty() {
                continue;
            }
            println!("\n{}:", r.name);
            for line in wrap_words(r.literals.iter().map(String::as_str), 76) {
                println!("  {line}");
            }
            for f in &r.functions {
                println!("  {} -> {}", f.token, f.key);
            }
        }
    })
}
