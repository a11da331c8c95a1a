use std::collections::BTreeSet;

use cssschema::{DEFAULT, DEFINITIONS};
use serde::Serialize;

use crate::{app::GlobalOptions, output::print_output};

#[derive(Debug, Serialize)]
struct PropertyEntry {
    name: String,
    default: bool,
}

#[derive(Debug, Serialize)]
struct DumpOutput {
    properties: Vec<PropertyEntry>,
    literals: Vec<String>,
}

pub fn run(default_only: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let mut names = BTreeSet::new();
    let mut literals = BTreeSet::new();
    for (name, rule) in DEFINITIONS.iter() {
        if default_only && !DEFAULT.contains(name) {
            continue;
        }
        names.insert(*name);
        literals.extend(rule.literals().iter().map(String::as_str));
    }

    let output = DumpOutput {
        properties: names
            .into_iter()
            .map(|name| PropertyEntry {
                name: name.to_string(),
                default: DEFAULT.contains(name),
            })
            .collect(),
        literals: literals.into_iter().map(str::to_string).collect(),
    };

    print_output(&output, opts, |d| {
        println!("# Below two blocks of tokens.");
        println!("#");
        println!("# First are all property names.");
        println!("# Those followed by an asterisk (*) are in the default white-list.");
        println!("#");
        println!("# Second are the literal tokens recognized in any defined property value.");
        println!();
        for entry in &d.properties {
            let marker = if entry.default { "*" } else { "" };
            println!("{}{marker}", entry.name);
        }
        println!();
        for literal in &d.literals {
            println!("{literal}");
        }
    })
}
