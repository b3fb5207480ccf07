use barcode_aligner::{print_grid, AlignerConfig, BatchScorer, ScoreParams, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let template: Sequence = "CATCATCAT".into();
    let query: Sequence = "CATCAT".into();

    let mut scorer = BatchScorer::new(
        template,
        ScoreParams::default(),
        &AlignerConfig::default(),
    )?;
    let score = scorer.score(&query)?;

    println!("score: {score}");
    print_grid(scorer.grid(), scorer.template(), &query);

    Ok(())
}
