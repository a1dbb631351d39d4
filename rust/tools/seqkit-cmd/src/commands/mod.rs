//! Command implementations for seqkit-cmd

use anyhow::Result;
use clap::Subcommand;
use serde_json::Value;

use crate::utils;

pub mod chunks;
pub mod group_by;
pub mod sequence;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Count the elements of an array (or the entries of an object)
    Count,

    /// Flatten nested arrays into a single array of leaves
    Flatten,

    /// Remove duplicate elements, keeping first occurrences
    Distinct,

    /// Group an array of objects by the value of a field
    GroupBy {
        /// Field name to group by
        #[arg(short, long)]
        key: String,
    },

    /// Split an array into fixed-size chunks, padding the last one
    Chunks {
        /// Number of elements per chunk
        #[arg(short, long)]
        size: usize,

        /// JSON value used for padding cells. The default `null` cannot be
        /// told apart from null elements of the input
        #[arg(short, long, value_parser = parse_json, default_value = "null")]
        pad: Value,
    },

    /// Print the first element of an array
    First {
        /// JSON value printed when there is no first element. The default
        /// `null` cannot be told apart from a null element
        #[arg(long = "or", value_parser = parse_json, default_value = "null")]
        absent: Value,
    },

    /// Print the last element of an array
    Last {
        /// JSON value printed when there is no last element. The default
        /// `null` cannot be told apart from a null element
        #[arg(long = "or", value_parser = parse_json, default_value = "null")]
        absent: Value,
    },
}

fn parse_json(arg: &str) -> serde_json::Result<Value> {
    serde_json::from_str(arg)
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Count => "count",
            Operation::Flatten => "flatten",
            Operation::Distinct => "distinct",
            Operation::GroupBy { .. } => "group-by",
            Operation::Chunks { .. } => "chunks",
            Operation::First { .. } => "first",
            Operation::Last { .. } => "last",
        }
    }
}

/// Reads the input document, applies `operation` and writes the result.
pub fn run(operation: &Operation, input: Option<&str>, output: Option<&str>) -> Result<()> {
    let document = utils::read_json(input)?;
    let result = apply(operation, document)?;
    utils::write_json(output, &result)
}

/// Applies `operation` to an in-memory JSON document.
pub fn apply(operation: &Operation, document: Value) -> Result<Value> {
    tracing::debug!(operation = operation.name(), "applying operation");
    match operation {
        Operation::Count => sequence::count(&document),
        Operation::Flatten => sequence::flatten(document),
        Operation::Distinct => sequence::distinct(document),
        Operation::GroupBy { key } => group_by::run(key, document),
        Operation::Chunks { size, pad } => chunks::run(*size, pad, document),
        Operation::First { absent } => Ok(sequence::first(&document, absent)),
        Operation::Last { absent } => Ok(sequence::last(&document, absent)),
    }
}
