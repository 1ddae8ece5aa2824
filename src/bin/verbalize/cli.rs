//! Command-line interface definitions.

use crate::error::CliError;
use clap::{ArgAction, Parser, Subcommand};

/// Turn numbers and words into plain English
#[derive(Parser, Debug)]
#[command(name = "verbalize", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Log more details (repeat for more); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Uppercase the first character
    Capitalize { text: String },

    /// Say how many times something happens, e.g. "try twice"
    #[command(allow_negative_numbers = true)]
    Times { count: i64, verb: Option<String> },

    /// Join items into a list, e.g. "a, b, and c"
    List {
        #[arg(value_name = "ITEM")]
        items: Vec<String>,

        /// Word placed before the last item
        #[arg(short, long)]
        conjunction: Option<String>,
    },

    /// Render an ordinal number, e.g. "21st"
    Order { num: u64 },

    /// Prefix a noun with "a" or "an"
    #[command(name = "a-or-an", visible_alias = "article")]
    AOrAn { noun: String },

    /// Pluralize a singular noun
    Plural { noun: String },

    /// Pair a number with the matching noun form, e.g. "3 apples"
    #[command(allow_negative_numbers = true)]
    Count {
        num: i64,
        singular: String,
        plural: Option<String>,
    },
}

impl Command {
    pub fn run(&self) -> Result<String, CliError> {
        log::debug!("Running {:?}", self);

        let output = match self {
            Command::Capitalize { text } => verbalize::capitalize(text),
            Command::Times { count, verb } => verbalize::times(*count, verb.as_deref()),
            Command::List { items, conjunction } => {
                if items.is_empty() {
                    return Err(CliError::EmptyList);
                }
                verbalize::list(items, conjunction.as_deref())
            }
            Command::Order { num } => verbalize::order(*num),
            Command::AOrAn { noun } => verbalize::a_or_an(non_empty("NOUN", noun)?),
            Command::Plural { noun } => verbalize::plural(non_empty("NOUN", noun)?),
            Command::Count {
                num,
                singular,
                plural,
            } => verbalize::count(
                *num,
                non_empty("SINGULAR", singular)?,
                plural.as_deref(),
            ),
        };

        log::debug!("Produced {:?}", output);
        Ok(output)
    }
}

fn non_empty<'a>(argument: &'static str, value: &'a str) -> Result<&'a str, CliError> {
    if value.is_empty() {
        return Err(CliError::EmptyArgument { argument });
    }
    Ok(value)
}
