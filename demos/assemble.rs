use fragchain::{io, Assembler, TracingObserver};
use std::env;
use std::process;

/// End-to-end assembly program: load fragments from a file, find the
/// longest overlap chain, print it, and save the merged string.
///
/// Usage: cargo run --example assemble <input-file> [output-file]
fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <input-file> [output-file]", args[0]);
        process::exit(1);
    }

    let input = &args[1];
    let output = args.get(2).map(String::as_str).unwrap_or("longest_chain.txt");

    tracing::info!("start finding the longest chain");

    let values = match io::load_fragments(input) {
        Ok(values) => values,
        Err(err) => {
            tracing::error!(file = input.as_str(), %err, "failed to load fragments");
            process::exit(1);
        }
    };
    tracing::info!(file = input.as_str(), fragments = values.len(), "file loaded");

    let mut asm: Assembler = values.into_iter().collect();
    let mut observer = TracingObserver;

    asm.build_overlap_relations_with(&mut observer);
    asm.filter_unconnected_with(&mut observer);
    let chain = asm.find_longest_chain_with(&mut observer);

    let merged = match asm.merge_chain(&chain) {
        Ok(merged) => merged,
        Err(err) => {
            tracing::error!(%err, "assembly failed");
            process::exit(1);
        }
    };

    tracing::info!(
        elements = chain.len(),
        total_length = merged.value().chars().count(),
        "longest chain found"
    );
    println!("{}", merged.value());

    if let Err(err) = io::save_result(output, merged.value()) {
        tracing::error!(file = output, %err, "failed to save result");
        process::exit(1);
    }
    tracing::info!(file = output, "result saved");
}
