use std::fs::File;
use std::io::{BufWriter, Write};

use towercalc::attachment::recalculate;
use towercalc::layer::{Layer, Position, QuoteOption};
use towercalc::naming::{compact_money, name_of};
use towercalc::quota_share::band_status;
use towercalc::ratios::{IlfConvention, ratios};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut input_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut position = Position::Excess;
    let mut primary_retention: Option<f64> = None;
    let mut convention = IlfConvention::Sequential;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--position" => {
                i += 1;
                position = match args[i].as_str() {
                    "primary" => Position::Primary,
                    "excess" => Position::Excess,
                    other => panic!("--position must be primary or excess, got {other}"),
                };
            }
            "--retention" => {
                i += 1;
                primary_retention =
                    Some(args[i].parse().expect("--retention requires a number"));
            }
            "--ilf" => {
                i += 1;
                convention = match args[i].as_str() {
                    "sequential" => IlfConvention::Sequential,
                    "base" => IlfConvention::VsBase,
                    other => panic!("--ilf must be sequential or base, got {other}"),
                };
            }
            "--quiet" => quiet = true,
            path => input_path = Some(path.to_string()),
        }
        i += 1;
    }

    let input_path = input_path.expect("usage: towercalc <tower.json> [--position primary|excess] [--retention N] [--ilf sequential|base] [--output recalc.json] [--quiet]");
    let file = File::open(&input_path)
        .unwrap_or_else(|e| panic!("failed to open {input_path}: {e}"));
    let tower: Vec<Layer> =
        serde_json::from_reader(file).expect("failed to parse tower JSON");

    let tower = recalculate(&tower);
    let quote = QuoteOption { tower, position, primary_retention };

    if !quiet {
        print_worksheet(&quote, convention);
    }

    if let Some(ref path) = output_path {
        let file =
            File::create(path).unwrap_or_else(|e| panic!("failed to create {path}: {e}"));
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &quote.tower)
            .expect("failed to serialize tower");
        writeln!(writer).expect("failed to write newline");
        if !quiet {
            println!("\nRecalculated tower → {path}");
        }
    }
}

fn print_worksheet(quote: &QuoteOption, convention: IlfConvention) {
    let opt = |v: Option<f64>, f: fn(f64) -> String| match v {
        Some(v) => f(v),
        None => "-".to_string(),
    };

    println!("=== {} ===", name_of(quote));
    println!(
        "{:>3} | {:<28} | {:>10} | {:>12} | {:>12} | {:>10} | {:>8} | {:>8}",
        "#", "Carrier", "Limit", "Quota Share", "Band Fill", "Attach", "RPM", "ILF"
    );
    println!("{}", "-".repeat(108));

    for (i, layer) in quote.tower.iter().enumerate() {
        let band = band_status(&quote.tower, i);
        let r = ratios(&quote.tower, i, convention);
        println!(
            "{:>3} | {:<28} | {:>10} | {:>12} | {:>12} | {:>10} | {:>8} | {:>8}",
            i,
            layer.carrier,
            compact_money(layer.limit),
            opt(layer.quota_share, compact_money),
            match band {
                Some(b) if !b.is_complete =>
                    format!("{} short", compact_money(b.gap)),
                Some(_) => "full".to_string(),
                None => "-".to_string(),
            },
            compact_money(layer.attachment),
            opt(r.rpm, |v| format!("{v:.0}")),
            opt(r.ilf, |v| format!("{v:.2}")),
        );
    }
}
