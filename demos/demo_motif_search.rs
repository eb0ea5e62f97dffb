use motif_search::prelude::*;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let strategies = match args.get(1) {
        Some(s) => vec![s.parse::<SearchStrategy>().unwrap_or_else(|e| {
            eprintln!("{e}\n\nUsage:\n\t{} [exhaustive|heuristic]", &args[0]);
            std::process::exit(1)
        })],
        None => vec![SearchStrategy::Exhaustive, SearchStrategy::HeuristicConsensus],
    };

    let sequences = ["ATCGATCGA", "GCTCGATCG", "TATCGTATC", "CGATCGTCA"];
    let set = SequenceSet::new(sequences, 6).unwrap_or_die("Invalid demo input!");
    let finder = MotifFinder::new(&set, &DNA_ALPHABET);

    for strategy in strategies {
        let (positions, score) = finder.search(strategy).unwrap_or_die("Motif search failed.");
        let consensus = finder.consensus(&positions).unwrap_or_fail();
        println!(
            "Best motif positions ({strategy}): {positions} with score {score}, consensus {}",
            String::from_utf8_lossy(&consensus)
        );
    }
}
