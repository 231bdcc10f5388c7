use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use worldgen_descriptors::prelude::*;
use worldgen_descriptors_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let unbreaking = ItemProperty::new("unbreaking", PropertyValue::Int(2)).into_handle();
    let named = ItemProperty::new("name", PropertyValue::Text("Old Blade".into())).into_handle();

    // Candidates as a chest loot pool would declare them
    let candidates = vec![
        WeightedItem::new(
            ItemKind::handle("minecraft:bread"),
            15,
            VariableAmount::range(1.0, 4.0)?,
        ),
        WeightedItem::new(
            ItemKind::handle("minecraft:iron_ingot"),
            10,
            VariableAmount::base_with_addition(1.0, 4.0)?,
        ),
        WeightedItem::builder(ItemKind::handle("minecraft:iron_sword"), 2)
            .quantity(VariableAmount::from(1))
            .properties([unbreaking, named])
            .build()?,
    ];

    let total_weight: u32 = candidates.iter().map(Weighted::weight).sum();
    let mut rng = StdRng::seed_from_u64(2025);

    for candidate in &candidates {
        let share = f64::from(candidate.weight()) / f64::from(total_weight);
        info!(
            "{candidate} share={share:.2} quantity bounds=[{}, {}] draw={}",
            candidate.quantity().minimum(),
            candidate.quantity().maximum(),
            candidate.sample_quantity(&mut rng)
        );
    }

    Ok(())
}
