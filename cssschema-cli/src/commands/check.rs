use anyhow::bail;
use cssschema::{SchemaBuilder, SchemaConfig, DEFINITIONS};
use serde::Serialize;

use crate::{app::GlobalOptions, output::print_output};

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub catalogue_entries: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

pub fn run(names: &[String], strict: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let config = SchemaConfig {
        require_self_contained: strict,
        verify_catalogue: true,
    };

    let builder = SchemaBuilder::with_config(config);
    let builder = if names.is_empty() {
        builder.defaults()
    } else {
        builder.properties(names.iter().cloned())
    };

    let (valid, properties, error_message) = match builder.build() {
        Ok(schema) => (true, Some(schema.len()), None),
        Err(e) => (false, None, Some(e.to_string())),
    };

    let result = CheckResult {
        catalogue_entries: DEFINITIONS.len(),
        valid,
        properties,
        error_message,
    };

    print_output(&result, opts, |r| {
        let status = if r.valid { "PASS" } else { "FAIL" };
        println!("{status}  catalogue: {} entries", r.catalogue_entries);
        if let Some(count) = r.properties {
            println!("  schema: {count} properties");
        }
        if let Some(err) = &r.error_message {
            println!("  Error: {err}");
        }
    })?;

    if !result.valid {
        bail!("schema check failed");
    }
    Ok(())
}
