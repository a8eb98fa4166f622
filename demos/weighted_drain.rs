//! Draining a weighted pool: heavy items tend to come out first.
//!
//! Weights follow a power law (few big, many small). The draw order is a
//! weighted random permutation, so the first picks are mostly from the head
//! of the weight vector, while the rebuild counter shows how rarely the index
//! had to be compacted.

use kujibiki::WeightedPool;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let weights: Vec<f64> = (0..50)
        .map(|i| 1.0 / (1.0 + (i as f64)).powf(1.3))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut pool = WeightedPool::new((0..weights.len()).collect(), weights.clone())?;

    let k = 10usize;
    let mut head = Vec::with_capacity(k);
    for _ in 0..k {
        head.push(pool.sample_with_rng(&mut rng)?);
    }

    println!("weights[0..10]:");
    for (i, w) in weights.iter().take(10).enumerate() {
        println!("  i={i:2}  w={w:.6}");
    }
    println!();
    println!("first {k} draws:     {head:?}");
    println!("remaining:          {}", pool.remaining());

    let tail = pool.drain_with_rng(&mut rng).collect::<Vec<_>>();
    println!("drained the rest:   {} items", tail.len());
    println!("rebuilds:           {}", pool.rebuild_count());

    Ok(())
}
