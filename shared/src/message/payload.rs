use serde::{Deserialize, Serialize};
use std::fmt;

// ==================== Notification Level ====================

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Regular confirmation
    #[default]
    Normal,
    /// Rejection, clamp or missing input; rendered as an error toast
    Destructive,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Destructive => write!(f, "destructive"),
        }
    }
}

// ==================== Notification Kind ====================

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    // Cart
    ItemAdded,
    QuantityUpdated,
    LimitedStock,
    OutOfStock,
    ItemRemoved,
    CartCleared,

    // Wishlist
    WishlistAdded,
    WishlistRemoved,
    WishlistCleared,

    // Inventory (admin)
    InventorySaved,
    ProductAdded,
    ProductRemoved,
    MissingInformation,
}

impl NotificationKind {
    /// Short toast title
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ItemAdded | Self::QuantityUpdated => "Added to cart",
            Self::LimitedStock => "Limited stock",
            Self::OutOfStock => "Out of stock",
            Self::ItemRemoved => "Removed from cart",
            Self::CartCleared => "Cart cleared",
            Self::WishlistAdded => "Added to wishlist",
            Self::WishlistRemoved => "Removed from wishlist",
            Self::WishlistCleared => "Wishlist cleared",
            Self::InventorySaved => "Inventory Saved",
            Self::ProductAdded => "Product Added",
            Self::ProductRemoved => "Product Removed",
            Self::MissingInformation => "Missing Information",
        }
    }

    pub const fn level(&self) -> NotificationLevel {
        match self {
            Self::LimitedStock | Self::OutOfStock | Self::MissingInformation => {
                NotificationLevel::Destructive
            }
            _ => NotificationLevel::Normal,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ==================== Notification ====================

/// A fire-and-forget message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
    pub level: NotificationLevel,
}

impl Notification {
    /// Build a notification; title and level follow from the kind
    pub fn new(kind: NotificationKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            description: description.into(),
            level: kind.level(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.level == NotificationLevel::Destructive
    }

    // ==================== Cart ====================

    pub fn item_added(product_name: &str) -> Self {
        Self::new(
            NotificationKind::ItemAdded,
            format!("{} added to your cart.", product_name),
        )
    }

    pub fn quantity_updated(product_name: &str) -> Self {
        Self::new(
            NotificationKind::QuantityUpdated,
            format!("{} quantity updated in cart.", product_name),
        )
    }

    pub fn limited_stock(available: u32) -> Self {
        Self::new(
            NotificationKind::LimitedStock,
            format!("Sorry, only {} items available.", available),
        )
    }

    pub fn out_of_stock() -> Self {
        Self::new(
            NotificationKind::OutOfStock,
            "Sorry, this item is currently out of stock.",
        )
    }

    pub fn item_removed(product_name: &str) -> Self {
        Self::new(
            NotificationKind::ItemRemoved,
            format!("{} removed from your cart.", product_name),
        )
    }

    pub fn cart_cleared() -> Self {
        Self::new(
            NotificationKind::CartCleared,
            "All items have been removed from your cart.",
        )
    }

    // ==================== Wishlist ====================

    pub fn wishlist_added(product_name: &str) -> Self {
        Self::new(
            NotificationKind::WishlistAdded,
            format!("{} added to your wishlist.", product_name),
        )
    }

    pub fn wishlist_removed(product_name: &str) -> Self {
        Self::new(
            NotificationKind::WishlistRemoved,
            format!("{} removed from your wishlist.", product_name),
        )
    }

    pub fn wishlist_cleared() -> Self {
        Self::new(
            NotificationKind::WishlistCleared,
            "All items have been removed from your wishlist.",
        )
    }

    // ==================== Inventory ====================

    pub fn inventory_saved() -> Self {
        Self::new(
            NotificationKind::InventorySaved,
            "Product inventory has been saved successfully.",
        )
    }

    pub fn product_added() -> Self {
        Self::new(
            NotificationKind::ProductAdded,
            "New product has been added to inventory.",
        )
    }

    pub fn product_removed() -> Self {
        Self::new(
            NotificationKind::ProductRemoved,
            "Product has been removed from inventory.",
        )
    }

    pub fn missing_information() -> Self {
        Self::new(
            NotificationKind::MissingInformation,
            "Please fill in all required fields.",
        )
    }
}
