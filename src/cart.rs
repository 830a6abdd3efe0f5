use thiserror::Error;
use uuid::Uuid;

use crate::{
    catalog,
    models::{CartItem, Product, Size},
};

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Unknown product {0}")]
    UnknownProduct(u32),

    #[error("Please select a product")]
    NoProductSelected,

    #[error("Please select a size")]
    NoSizeSelected,
}

/// Ordered cart lines. Insertion order is display order and the same
/// product/size may appear on several lines.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, product: &Product, size: Size, quantity: u32) -> &CartItem {
        let quantity = clamp_quantity(quantity);
        let item = CartItem {
            id: Uuid::now_v7(),
            product_id: product.id,
            name: product.name.to_string(),
            price: product.price,
            size,
            quantity,
            image: product.image.to_string(),
            total: product.price * i64::from(quantity),
        };
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn grand_total(&self) -> i64 {
        self.items.iter().map(|item| item.total).sum()
    }
}

pub fn clamp_quantity(quantity: u32) -> u32 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

#[derive(Debug, Clone)]
pub struct Selection {
    pub product: &'static Product,
    pub size: Option<Size>,
    pub quantity: u32,
}

impl Selection {
    pub fn line_total(&self) -> i64 {
        self.product.price * i64::from(self.quantity)
    }
}

#[derive(Debug, Default)]
pub struct Storefront {
    cart: Cart,
    selection: Option<Selection>,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Selecting a product resets the size and quantity pickers.
    pub fn select_product(&mut self, product_id: u32) -> Result<&Selection, CartError> {
        let product = catalog::find(product_id).ok_or(CartError::UnknownProduct(product_id))?;
        Ok(&*self.selection.insert(Selection {
            product,
            size: None,
            quantity: MIN_QUANTITY,
        }))
    }

    pub fn set_size(&mut self, size: Size) -> Result<(), CartError> {
        let selection = self.selection.as_mut().ok_or(CartError::NoProductSelected)?;
        selection.size = Some(size);
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u32) -> Result<u32, CartError> {
        let selection = self.selection.as_mut().ok_or(CartError::NoProductSelected)?;
        selection.quantity = clamp_quantity(quantity);
        Ok(selection.quantity)
    }

    /// Steps the quantity picker. A step that would leave [1, 10] is ignored.
    pub fn change_quantity(&mut self, delta: i32) -> Result<u32, CartError> {
        let selection = self.selection.as_mut().ok_or(CartError::NoProductSelected)?;
        let next = i64::from(selection.quantity) + i64::from(delta);
        if (i64::from(MIN_QUANTITY)..=i64::from(MAX_QUANTITY)).contains(&next) {
            selection.quantity = next as u32;
        }
        Ok(selection.quantity)
    }

    pub fn pending_total(&self) -> Option<i64> {
        self.selection.as_ref().map(Selection::line_total)
    }

    pub fn add_to_cart(&mut self) -> Result<&CartItem, CartError> {
        let selection = self.selection.as_ref().ok_or(CartError::NoProductSelected)?;
        let size = selection.size.ok_or(CartError::NoSizeSelected)?;
        let (product, quantity) = (selection.product, selection.quantity);
        self.selection = None;
        let item = self.cart.add(product, size, quantity);
        tracing::debug!(product_id = product.id, %size, quantity, "added cart line");
        Ok(item)
    }

    pub fn remove_from_cart(&mut self, id: Uuid) -> bool {
        self.cart.remove(id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn clear_after_submit(&mut self) {
        self.cart.clear();
        self.selection = None;
    }

    pub fn grand_total(&self) -> i64 {
        self.cart.grand_total()
    }
}
