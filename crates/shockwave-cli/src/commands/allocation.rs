//! Allocation command implementation.
//!
//! Shows how a holdings file is distributed over one classification.

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use shockwave_portfolio::{bucket_by_asset_class, bucket_by_industry, bucket_by_region, Allocation};

use crate::cli::OutputFormat;
use crate::commands::{load_holdings, Context};
use crate::output::{money, print_output, print_section, KeyValue};

/// Classification to bucket by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Grouping {
    /// Asset class
    #[default]
    Class,
    /// Industry
    Industry,
    /// Geographic region
    Region,
}

impl Grouping {
    fn label(self) -> &'static str {
        match self {
            Self::Class => "Asset Class",
            Self::Industry => "Industry",
            Self::Region => "Region",
        }
    }
}

/// Arguments for the allocation command.
#[derive(Args, Debug)]
pub struct AllocationArgs {
    /// Holdings CSV file
    pub portfolio: PathBuf,

    /// Classification to group by
    #[arg(short, long, value_enum, default_value = "class")]
    pub by: Grouping,
}

#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct BucketRow {
    #[tabled(rename = "Bucket")]
    bucket: String,
    #[tabled(rename = "Assets")]
    count: usize,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

/// Rows largest bucket first.
fn bucket_rows<K>(allocation: &Allocation<K>) -> Vec<BucketRow>
where
    K: Ord + Copy + Display,
{
    allocation
        .sorted_by_value()
        .into_iter()
        .map(|(key, m)| BucketRow {
            bucket: key.to_string(),
            count: m.count,
            value: money(m.value),
            weight: format!("{:.2}%", m.weight_pct),
        })
        .collect()
}

/// Execute the allocation command.
pub fn execute(args: AllocationArgs, ctx: &Context) -> Result<()> {
    let holdings = load_holdings(&args.portfolio)?;

    let (rows, json) = match args.by {
        Grouping::Class => {
            let alloc = bucket_by_asset_class(&holdings);
            (bucket_rows(&alloc), serde_json::to_value(&alloc)?)
        }
        Grouping::Industry => {
            let alloc = bucket_by_industry(&holdings);
            (bucket_rows(&alloc), serde_json::to_value(&alloc)?)
        }
        Grouping::Region => {
            let alloc = bucket_by_region(&holdings);
            (bucket_rows(&alloc), serde_json::to_value(&alloc)?)
        }
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&json)?),
        OutputFormat::Csv => print_output(&rows, ctx.format)?,
        OutputFormat::Minimal => {
            if let Some(top) = rows.first() {
                println!("{} {}", top.bucket, top.weight);
            }
        }
        OutputFormat::Table | OutputFormat::Markdown => {
            let mut summary = vec![
                KeyValue::new("Owner", holdings.owner()),
                KeyValue::money("Total Value", holdings.total_value()),
                KeyValue::new("Assets", holdings.len().to_string()),
                KeyValue::new("Distinct Buckets", rows.len().to_string()),
            ];
            if args.by == Grouping::Class {
                let alloc = bucket_by_asset_class(&holdings);
                summary.push(KeyValue::new(
                    "Defensive Weight",
                    format!("{:.2}%", alloc.defensive_weight()),
                ));
                summary.push(KeyValue::new(
                    "Alternative Weight",
                    format!("{:.2}%", alloc.alternative_weight()),
                ));
            }
            print_section("Portfolio", ctx.format);
            print_output(&summary, ctx.format)?;
            print_section(&format!("Allocation by {}", args.by.label()), ctx.format);
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}
