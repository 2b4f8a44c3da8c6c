//! Seed catalog data

use rust_decimal::Decimal;
use shared::{Category, Product};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub fn categories() -> Vec<Category> {
    vec![
        Category::new("keychain", "Keychains"),
        Category::new("pot", "Pots & Holders"),
        Category::new("bouquet", "Bouquets"),
        Category::new("flowers", "Flowers"),
    ]
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    category: &str,
    inventory_count: u32,
    featured: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(price_cents, 2),
        category: category.to_string(),
        image_url: PLACEHOLDER_IMAGE.to_string(),
        inventory_count,
        featured,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Small Flower Keychain",
            "A cute crocheted flower keychain, perfect as a small gift or accessory for your bag.",
            1299,
            "keychain",
            15,
            true,
        ),
        product(
            "2",
            "Succulent Plant Pot",
            "Hand-crocheted plant pot, perfect for small succulents or air plants.",
            2499,
            "pot",
            8,
            true,
        ),
        product(
            "3",
            "Bouquet of Wildflowers",
            "A beautiful bouquet of crocheted wildflowers that will never wilt.",
            3999,
            "bouquet",
            5,
            true,
        ),
        product(
            "4",
            "Sunflower Wall Hanging",
            "A cheerful sunflower wall hanging to brighten up any room.",
            2999,
            "flowers",
            10,
            true,
        ),
        product(
            "5",
            "Animal Keychain Set",
            "Set of three adorable animal keychains - bunny, bear, and fox.",
            2199,
            "keychain",
            12,
            true,
        ),
        product(
            "6",
            "Hanging Plant Holder",
            "Macramé style crocheted hanging plant holder, perfect for small to medium pots.",
            1999,
            "pot",
            7,
            false,
        ),
        product(
            "7",
            "Rose Bouquet",
            "A romantic bouquet of crocheted roses in soft pink and cream colors.",
            4999,
            "bouquet",
            4,
            false,
        ),
        product(
            "8",
            "Daisy Chain Garland",
            "Cheerful daisy chain garland, perfect for decorating a child's room.",
            3499,
            "flowers",
            6,
            false,
        ),
        product(
            "9",
            "Initial Letter Keychain",
            "Personalized initial letter keychain in your choice of colors.",
            1599,
            "keychain",
            20,
            false,
        ),
        product(
            "10",
            "Decorative Bowl",
            "Large decorative crocheted bowl, perfect for holding fruit or as a centerpiece.",
            3299,
            "pot",
            5,
            false,
        ),
        product(
            "11",
            "Tulip Arrangement",
            "Spring-inspired arrangement of crocheted tulips in various colors.",
            4499,
            "bouquet",
            3,
            false,
        ),
        product(
            "12",
            "Lotus Flower Set",
            "Set of three lotus flowers in graduating sizes, beautiful as table decorations.",
            2799,
            "flowers",
            8,
            false,
        ),
    ]
}
