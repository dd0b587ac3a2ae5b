//! `login` / `whoami` / `logout` - demo session identity management.
//!
//! The data service issues no tokens; the CLI plays the part of the
//! client that holds the identity, persisting it in the session entry of
//! the local store.

use meteor_store::{Store, StoreConfig};

pub async fn login(email: &str, password: &str) -> anyhow::Result<()> {
    let store = connect()?;
    let identity = store.auth().login(email, password).await?;
    store.session().save(&identity)?;

    println!("logged in as {} ({})", identity.name, identity.role);
    Ok(())
}

pub fn whoami() -> anyhow::Result<()> {
    let store = connect()?;
    match store.session().load()? {
        Some(identity) => println!(
            "{} <{}> role={}",
            identity.name, identity.email, identity.role
        ),
        None => println!("not logged in"),
    }
    Ok(())
}

pub fn logout() -> anyhow::Result<()> {
    let store = connect()?;
    store.session().clear()?;
    println!("logged out");
    Ok(())
}

fn connect() -> anyhow::Result<Store> {
    let config = StoreConfig::from_env()?;
    Ok(Store::connect(&config)?)
}
