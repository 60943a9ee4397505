use nw_aligner::{AlignerParameters, BatchAligner, Sequence, SequencePair};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let batch = BatchAligner::new(4, AlignerParameters::new())?;

    let pairs = vec![
        SequencePair::new(1, Sequence::from("ACGTACGT"), Sequence::from("ACGTAGCT")),
        SequencePair::new(2, Sequence::from("GGTTAACC"), Sequence::from("GGTTAACT")),
        SequencePair::new(3, Sequence::from("GATTACA"), Sequence::from("GCATGCT")),
    ];

    let rows: Vec<usize> = pairs.iter().map(|p| p.row).collect();
    for (row, result) in rows.into_iter().zip(batch.align_all(pairs)?) {
        println!("Alignment {}: Score = {}", row, result.score);
        println!("{}", result.pretty());
        println!();
    }

    Ok(())
}
