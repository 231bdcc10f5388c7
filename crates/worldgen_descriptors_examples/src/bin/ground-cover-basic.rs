use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use worldgen_descriptors::prelude::*;
use worldgen_descriptors_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let grass = BlockState::new("minecraft:grass_block")
        .with_property("snowy", "false")
        .into_handle();
    let dirt = BlockState::new("minecraft:dirt").into_handle();

    // Top to bottom
    let mut layers = vec![
        GroundCoverLayer::new(grass, VariableAmount::from(1)),
        GroundCoverLayer::builder()
            .block(dirt)
            .depth(VariableAmount::base_with_variance(3.0, 1.0)?)
            .build()?,
    ];

    // Dry biome variant: thicker dirt
    layers[1].set_depth(VariableAmount::range(4.0, 7.0)?);

    if let Err(err) = layers[0].try_set_depth(None) {
        warn!("Rejected layer update: {err}");
    }

    let mut rng = StdRng::seed_from_u64(7);
    for column in 0..4 {
        let depths: Vec<u32> = layers.iter().map(|l| l.sample_depth(&mut rng)).collect();
        info!("column {column}: depths {depths:?}");
    }

    for layer in &layers {
        info!("{layer}");
    }

    Ok(())
}
