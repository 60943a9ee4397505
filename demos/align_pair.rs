use nw_aligner::{Aligner, AlignerParameters, ScoreParams, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let params = AlignerParameters::new().with_score_params(ScoreParams::new(1, -1, -1));
    let aligner = Aligner::new(params);

    let seq1 = Sequence::from("ACGTACGT");
    let seq2 = Sequence::from("ACGTAGCT");

    let result = aligner.align(&seq1, &seq2)?;
    let stats = result.stats();

    println!("Score: {}", result.score);
    println!("{}", result.pretty());
    println!(
        "Matches: {}  Mismatches: {}  Gaps: {}  Identity: {:.1}%",
        stats.matches,
        stats.mismatches,
        stats.gaps,
        stats.identity() * 100.0
    );

    Ok(())
}
