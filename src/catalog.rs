//! Static product catalog. Defined once per deployment and never mutated.

use crate::models::Product;

const PRICE: i64 = 320;

const fn variant(
    id: u32,
    name: &'static str,
    image: &'static str,
    large_image: &'static str,
    collection: &'static str,
) -> Product {
    Product {
        id,
        name,
        price: PRICE,
        image,
        large_image,
        collection,
    }
}

static PRODUCTS: [Product; 20] = [
    // Kick Off
    variant(1, "Her XV", "images/HER_XV_Black.png", "images/HER_XV_Black.png", "Kick Off"),
    variant(2, "Her XV", "images/HER_XV_White.resized.png", "images/HER_XV_White.resized.png", "Kick Off"),
    variant(3, "History Makers", "images/HISTORY_MAKERS_White.resized.png", "images/HISTORY_MAKERS_White.resized.png", "Kick Off"),
    variant(4, "History Makers", "images/HISTORY_MAKERS_Mint_Green.png", "images/HISTORY_MAKERS_Mint_Green.png", "Kick Off"),
    variant(5, "Blom Squad", "images/BLOM_SQUAD_White.resized.png", "images/BLOM_SQUAD_White.resized.png", "Kick Off"),
    variant(6, "Blom Squad", "images/BLOM_SQUAD_Dusty_Pink.png", "images/BLOM_SQUAD_Dusty_Pink.png", "Kick Off"),
    // Fun XV
    variant(7, "RugBee Honey Black", "images/RUGBEE_HONEY_BLACK_on_White.resized.png", "images/RUGBEE_HONEY_BLACK_on_White.resized.png", "Fun XV"),
    variant(8, "RugBee Honey Black", "images/RUGBEE_HONEY_BLACK_Dusty_Pink.png", "images/RUGBEE_HONEY_BLACK_Dusty_Pink.png", "Fun XV"),
    variant(9, "Blom Squad 2.0", "images/BLOM_SQUAD_2_0_White.png", "images/BLOM_SQUAD_2_0_White.png", "Fun XV"),
    variant(10, "Blom Squad 2.0", "images/BLOM_SQUAD_2_0_Dusty_Pink.png", "images/BLOM_SQUAD_2_0_Dusty_Pink.png", "Fun XV"),
    variant(11, "Blom Squad 2.0", "images/BLOM_SQUAD_2_0_Mint_Green.png", "images/BLOM_SQUAD_2_0_Mint_Green.png", "Fun XV"),
    variant(12, "Blom Squad 2.0", "images/BLOM_SQUAD_2.0_Sky_Blue.png", "images/BLOM_SQUAD_2_0_Sky_Blue.png", "Fun XV"),
    variant(13, "Rugby Goose", "images/RUGBY_GOOSE_White.resized.png", "images/RUGBY_GOOSE_White.resized.png", "Fun XV"),
    variant(14, "Rugby Goose", "images/RUGBY_GOOSE_Sky_Blue.png", "images/RUGBY_GOOSE_Sky_Blue.png", "Fun XV"),
    variant(15, "Rugby Goose", "images/RUGBY_GOOSE_Mint_Green.png", "images/RUGBY_GOOSE_Mint_Green.png", "Fun XV"),
    variant(16, "RugBee Try Black", "images/RUGBEE_TRY_BLACK_on_White.resized.png", "images/RUGBEE_TRY_BLACK_on_White.resized.png", "Fun XV"),
    variant(17, "RugBee Try Black", "images/RUGBEE_TRY_BLACK_Dusty_Pink.png", "images/RUGBEE_TRY_BLACK_Dusty_Pink.png", "Fun XV"),
    // Maiden, one colour each
    variant(18, "Wolfie", "images/WOLFIE_White.png", "images/WOLFIE_White.png", "Maiden"),
    variant(19, "Kapp", "images/KAPP_White.png", "images/KAPP_White.png", "Maiden"),
    variant(20, "Brits", "images/BRITS_White.png", "images/BRITS_White.png", "Maiden"),
];

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn find(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Distinct collection labels in catalog order.
pub fn collections() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = Vec::new();
    for product in &PRODUCTS {
        if !labels.contains(&product.collection) {
            labels.push(product.collection);
        }
    }
    labels
}

pub fn by_collection(label: &str) -> impl Iterator<Item = &'static Product> + '_ {
    PRODUCTS
        .iter()
        .filter(move |p| p.collection.eq_ignore_ascii_case(label))
}
