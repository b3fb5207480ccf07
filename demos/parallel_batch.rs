use barcode_aligner::{AlignerConfig, ParallelScorer, ScoreParams, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let template: Sequence = "ACGTACGTACGTACGT".into();

    // Rotations of the template make a cheap query set with varied scores.
    let bytes = template.as_bytes();
    let queries: Vec<Sequence> = (0..bytes.len())
        .map(|k| {
            let mut rotated = bytes[k..].to_vec();
            rotated.extend_from_slice(&bytes[..k]);
            Sequence::new(&rotated)
        })
        .collect();

    let scorer = ParallelScorer::new(
        template,
        ScoreParams::default(),
        AlignerConfig::default(),
    )
    .with_workers(4);
    let scores = scorer.score_all(&queries)?;

    for (query, score) in queries.iter().zip(&scores) {
        println!("{:>5}  {}", score, String::from_utf8_lossy(query.as_bytes()));
    }

    Ok(())
}
