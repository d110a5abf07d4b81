use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "up-cli",
    about = "Validate, format and convert UP documents",
    version
)]
struct Args {
    /// Convert the document to JSON (default re-emits canonical UP)
    #[arg(short, long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Parse only; print nothing on success
    #[arg(long)]
    check: bool,

    /// Maximum container nesting depth
    #[arg(long, default_value_t = up::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    let source = match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("{}", path.display()))?;
            f.read_to_string(&mut buf)
                .with_context(|| format!("{}", path.display()))?;
            path.display().to_string()
        }
        None => {
            stdin().read_to_string(&mut buf)?;
            "<stdin>".to_string()
        }
    };

    let options = up::Options {
        max_depth: args.max_depth,
    };
    let doc = up::parse_with_options(&buf, &options).with_context(|| source)?;

    if args.check {
        return Ok(());
    }

    if args.json {
        let value = up::json::document_to_json(&doc);
        if args.pretty {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", serde_json::to_string(&value)?);
        }
    } else {
        print!("{}", up::encode_to_string(&doc));
    }

    Ok(())
}
