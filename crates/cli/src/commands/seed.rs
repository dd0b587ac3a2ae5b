//! `seed` - write the built-in sample data into the local fallback store.

use meteor_store::StoreConfig;
use meteor_store::local::{KvStore, seed};
use meteor_store::models::{Product, Slide};
use meteor_store::record::Record;

pub fn run(force: bool) -> anyhow::Result<()> {
    let config = StoreConfig::from_env()?;
    let kv = KvStore::open(&config.data_dir)?;

    seed_collection::<Product>(&kv, seed::sample_products(), force)?;
    seed_collection::<Slide>(&kv, seed::sample_slides(), force)?;
    Ok(())
}

fn seed_collection<R: Record>(kv: &KvStore, records: Vec<R>, force: bool) -> anyhow::Result<()> {
    if kv.contains(R::STORAGE_KEY) && !force {
        println!(
            "{}: already present, skipping (use --force to overwrite)",
            R::STORAGE_KEY
        );
        return Ok(());
    }

    let count = records.len();
    kv.put(R::STORAGE_KEY, &records)?;
    println!("{}: wrote {count} records", R::STORAGE_KEY);
    Ok(())
}
