//! `mode` - report the backing store the environment would select.

use meteor_store::StoreConfig;

pub fn run() -> anyhow::Result<()> {
    let config = StoreConfig::from_env()?;

    if config.is_remote() {
        println!("remote mode (METEOR_REMOTE_URL and METEOR_REMOTE_KEY are set)");
    } else {
        println!(
            "fallback mode (local data in {})",
            config.data_dir.display()
        );
    }
    Ok(())
}
