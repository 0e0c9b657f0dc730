use neuronet::{Network, Sample, TrainConfig, Trainer};

fn main() -> neuronet::Result<()> {
    tracing_subscriber::fmt::init();

    let or_gate: Vec<Sample> = vec![
        (vec![0.0, 0.0], vec![0.0]).into(),
        (vec![1.0, 0.0], vec![1.0]).into(),
        (vec![1.0, 1.0], vec![1.0]).into(),
        (vec![0.0, 1.0], vec![1.0]).into(),
    ];

    let mut network = Network::new(&[2, 1])?;
    let mut trainer = Trainer::new(&mut network, &or_gate)?;
    trainer.train_with(&TrainConfig::new(10_000, 1_000), |stats| {
        println!("Epoch {}: error = {:.6}", stats.epoch, stats.average_error);
    })?;

    for sample in &or_gate {
        let output = network.activate(&sample.input)?;
        println!("Input: {:?} -> Output: {:.4}", sample.input, output[0]);
    }
    Ok(())
}
