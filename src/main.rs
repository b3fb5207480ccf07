use barcode_aligner::{AlignerConfig, BatchScorer, ScoreParams, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let template: Sequence = "ACGTACGT".into();
    let queries: Vec<Sequence> = vec!["ACGTACGT".into(), "ACGTAGCT".into(), "ACGT".into()];

    let mut scorer = BatchScorer::new(template, ScoreParams::default(), &AlignerConfig::default())?;
    let scores = scorer.score_all(&queries)?;

    for (query, score) in queries.iter().zip(&scores) {
        println!("{:>5}  {}", score, String::from_utf8_lossy(query.as_bytes()));
    }

    Ok(())
}
