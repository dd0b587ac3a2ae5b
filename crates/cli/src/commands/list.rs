//! `list` - print a collection through the data service.
//!
//! Goes through `Store::connect`, so it lists whichever backing store the
//! environment selects (remote or fallback).

use meteor_store::{Store, StoreConfig};

pub async fn products() -> anyhow::Result<()> {
    let store = connect()?;
    let products = store.products().get_all().await?;

    println!("{} products ({} mode)", products.len(), store.mode());
    for product in products {
        println!(
            "  {:>14}  {:<28} {:>10}  {}",
            product.id.as_i64(),
            product.name,
            product.price.to_string(),
            product.category
        );
    }
    Ok(())
}

pub async fn slides() -> anyhow::Result<()> {
    let store = connect()?;
    let slides = store.slides().get_all().await?;

    println!("{} slides ({} mode)", slides.len(), store.mode());
    for slide in slides {
        println!(
            "  {:>14}  {:<24} {}",
            slide.id.as_i64(),
            slide.title,
            slide.description
        );
    }
    Ok(())
}

fn connect() -> anyhow::Result<Store> {
    let config = StoreConfig::from_env()?;
    Ok(Store::connect(&config)?)
}
