//! Built-in sample data for fallback mode.
//!
//! Seeded into the local store on first use so the storefront is browsable
//! without a remote row-store or any manual setup.

use meteor_core::{Price, ProductId, SlideId};
use rust_decimal::Decimal;

use crate::models::{Product, Slide};

fn price(rupees: i64) -> Price {
    // Sample prices are whole rupees; Price::new only rejects negatives.
    Price::new(Decimal::new(rupees * 100, 2)).unwrap_or_else(|_| Price::zero())
}

/// The sample product catalog (eight handcrafted-footwear entries).
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Classic Jodhpur Boots".to_owned(),
            price: price(4500),
            category: "Boots".to_owned(),
            image: "https://images.unsplash.com/photo-1628253747716-0c4f5c90fdda?q=80&w=2000&auto=format&fit=crop".to_owned(),
            description: "Handcrafted Jodhpur boots made from premium leather, perfect for formal and casual wear.".to_owned(),
        },
        Product {
            id: ProductId::new(2),
            name: "Royal Ethnic Mojaris".to_owned(),
            price: price(3200),
            category: "Ethnic".to_owned(),
            image: "https://images.unsplash.com/photo-1603487742131-41f3dd70b935?q=80&w=2000&auto=format&fit=crop".to_owned(),
            description: "Traditional Mojaris with intricate embroidery for that royal Indian touch.".to_owned(),
        },
        Product {
            id: ProductId::new(3),
            name: "Urban Street Sneakers".to_owned(),
            price: price(2800),
            category: "Sneakers".to_owned(),
            image: "https://images.unsplash.com/photo-1549298916-b41d501d3772?q=80&w=2000&auto=format&fit=crop".to_owned(),
            description: "Stylish everyday sneakers designed for comfort and durability in the city.".to_owned(),
        },
        Product {
            id: ProductId::new(4),
            name: "Oxford Business Derby".to_owned(),
            price: price(5500),
            category: "Formal".to_owned(),
            image: "https://images.unsplash.com/photo-1614252369475-531eba835eb1?q=80&w=2000&auto=format&fit=crop".to_owned(),
            description: "Elegant Derby shoes crafted for the professional who values style and comfort.".to_owned(),
        },
        Product {
            id: ProductId::new(5),
            name: "Pro Performance Runners".to_owned(),
            price: Price::new(Decimal::new(3999_00, 2)).unwrap_or_else(|_| Price::zero()),
            category: "Sports".to_owned(),
            image: "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?q=80&w=2000&auto=format&fit=crop".to_owned(),
            description: "High-performance running shoes with advanced cushioning technology.".to_owned(),
        },
        Product {
            id: ProductId::new(6),
            name: "Suede Casual Loafers".to_owned(),
            price: price(2200),
            category: "Casual".to_owned(),
            image: "https://images.unsplash.com/photo-1560343090-f0409e92791a?q=80&w=2000&auto=format&fit=crop".to_owned(),
            description: "Relaxed fit loafers, ideal for weekends and casual outings.".to_owned(),
        },
        Product {
            id: ProductId::new(7),
            name: "Wedding Sherwani Shoes".to_owned(),
            price: price(6500),
            category: "Ethnic".to_owned(),
            image: "https://images.unsplash.com/photo-1595341888016-a392ef81b7de?q=80&w=2000&auto=format&fit=crop".to_owned(),
            description: "Exquisite shoes to complete your wedding ensemble, featuring traditional designs.".to_owned(),
        },
        Product {
            id: ProductId::new(8),
            name: "Court High-Tops".to_owned(),
            price: price(4200),
            category: "Sports".to_owned(),
            image: "https://images.unsplash.com/photo-1579338559194-a162d841790d?q=80&w=2000&auto=format&fit=crop".to_owned(),
            description: "Professional grade basketball shoes providing ankle support and traction.".to_owned(),
        },
    ]
}

/// The sample hero-carousel slides.
#[must_use]
pub fn sample_slides() -> Vec<Slide> {
    vec![
        Slide {
            id: SlideId::new(1),
            image: "https://images.unsplash.com/photo-1556906781-9a412961d289?q=80&w=2000&auto=format&fit=crop".to_owned(),
            title: "DROP 01: GENESIS".to_owned(),
            description: "The future of streetwear is here. Limited edition sneakers.".to_owned(),
        },
        Slide {
            id: SlideId::new(2),
            image: "https://images.unsplash.com/photo-1515955656352-a1fa3ffcd111?q=80&w=2000&auto=format&fit=crop".to_owned(),
            title: "RUN THE NIGHT".to_owned(),
            description: "Reflective gear for the nocturnal explorer.".to_owned(),
        },
        Slide {
            id: SlideId::new(3),
            image: "https://images.unsplash.com/photo-1607522370275-f14bc3a5d288?q=80&w=2000&auto=format&fit=crop".to_owned(),
            title: "METEOR CLASSICS".to_owned(),
            description: "Timeless designs re-engineered for comfort.".to_owned(),
        },
    ]
}
