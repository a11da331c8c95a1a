use clap::{Parser, Subcommand, ValueEnum};

/// cssschema - inspect the CSS property-admission catalogue and schemas
#[derive(Debug, Parser)]
#[command(name = "cssschema", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Which schema names are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaChoice {
    /// The conservative default white-list.
    Default,
    /// Every property of the built-in catalogue.
    All,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every catalogue property (default members marked `*`) and every literal keyword.
    Dump {
        /// List only the members of the default white-list.
        #[arg(long)]
        default_only: bool,
    },

    /// Resolve property names and show the rule each one maps to.
    Resolve {
        /// Property names, as they would appear in a style declaration.
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,

        /// Schema to resolve against.
        #[arg(short, long, value_enum, default_value = "default")]
        schema: SchemaChoice,
    },

    /// Verify the catalogue and build a schema, failing on any construction error.
    Check {
        /// Build a schema from these catalogue names instead of the default white-list.
        #[arg(value_name = "NAME")]
        names: Vec<String>,

        /// Also require the built schema to be self-contained.
        #[arg(long)]
        strict: bool,
    },
}
