//! Product listing and detail flows.
//!
//! The listing supports the backend's server-side filters plus a client-side
//! type partition (robots vs. accessories). The detail flow owns the purchase
//! gate: the add-to-cart control is only live for a logged-in shopper whose
//! account tier satisfies the product's buyer requirement.

use zenith_core::compare::AddOutcome;
use zenith_core::eligibility::{can_purchase, requirement_text};
use zenith_core::{BuyerRequirement, ProductId, format_usd};

use crate::api::ApiClient;
use crate::api::types::{Product, ProductFilters};
use crate::auth;
use crate::error::Result;
use crate::session::SessionStore;

use super::truncate;

const CARD_TEASER_LEN: usize = 80;
const MAX_ACCESSORY_SUGGESTIONS: usize = 4;

// =============================================================================
// Listing
// =============================================================================

/// Which slice of the catalog the listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductKind {
    #[default]
    All,
    Robots,
    Accessories,
}

impl ProductKind {
    /// Page heading for this slice.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Robots => "Robots",
            Self::Accessories => "Accessories",
        }
    }

    fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Robots => product.is_robot(),
            Self::Accessories => product.is_accessory(),
        }
    }
}

/// Product card for the listing grid.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub product_id: ProductId,
    pub name: String,
    pub teaser: String,
    pub price: String,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name.clone(),
            teaser: truncate(&product.description, CARD_TEASER_LEN),
            price: format_usd(product.price),
            image_url: product.image_url.clone(),
        }
    }
}

/// The product listing page.
#[derive(Debug, Clone)]
pub struct ProductsPage {
    pub heading: &'static str,
    pub count: usize,
    pub cards: Vec<ProductCardView>,
}

/// Load the listing: server-side filters, then the client-side type
/// partition.
pub async fn load_products(
    api: &ApiClient,
    filters: &ProductFilters,
    kind: ProductKind,
) -> Result<ProductsPage> {
    let products = api.products(filters).await?;

    let cards: Vec<ProductCardView> = products
        .iter()
        .filter(|product| kind.matches(product))
        .map(ProductCardView::from)
        .collect();

    Ok(ProductsPage {
        heading: kind.heading(),
        count: cards.len(),
        cards,
    })
}

/// Add a product to the persisted comparison selection and describe the
/// outcome for the shopper.
///
/// # Errors
///
/// Returns an error only if the session store cannot be written.
pub fn add_to_compare(store: &mut SessionStore, product_id: ProductId) -> Result<CompareNotice> {
    let mut selection = store.compare_list();
    let outcome = selection.add(product_id);

    if outcome == AddOutcome::Added {
        store
            .set_compare_list(&selection)
            .map_err(|e| crate::error::ApiError::Validation(e.to_string()))?;
    }

    Ok(CompareNotice { outcome })
}

/// User-visible result of a compare-add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareNotice {
    pub outcome: AddOutcome,
}

impl CompareNotice {
    /// The notice text the original storefront shows for each outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self.outcome {
            AddOutcome::Added => "Added to comparison! Go to Compare page to view.",
            AddOutcome::AlreadyPresent => "Product already in comparison list",
            AddOutcome::CapacityExceeded => "You can only compare up to 3 products",
        }
    }
}

// =============================================================================
// Detail
// =============================================================================

/// State of the detail page's primary control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseButton {
    /// Not logged in: prompt for login instead of adding to cart.
    LoginToPurchase,
    /// Logged in and eligible.
    AddToCart,
    /// Logged in but the buyer requirement is not met; control disabled.
    NotAvailable,
}

impl PurchaseButton {
    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LoginToPurchase => "Login to Purchase",
            Self::AddToCart => "Add to Cart",
            Self::NotAvailable => "Not Available",
        }
    }

    /// Whether the control is interactive.
    #[must_use]
    pub const fn enabled(self) -> bool {
        matches!(self, Self::AddToCart)
    }
}

/// Warning shown when the logged-in shopper cannot buy this product.
#[derive(Debug, Clone)]
pub struct RestrictionWarning {
    /// e.g. "Government Authorization Required"
    pub title: &'static str,
    pub message: &'static str,
}

/// The product detail page.
#[derive(Debug, Clone)]
pub struct ProductDetailPage {
    pub product: Product,
    pub price: String,
    /// Empty for unrestricted products.
    pub requirement_text: &'static str,
    pub button: PurchaseButton,
    /// Present when logged in and ineligible.
    pub warning: Option<RestrictionWarning>,
    /// Present when not logged in and the product is restricted.
    pub login_notice: Option<String>,
    /// Compatible accessories, for robots that have any.
    pub accessories: Vec<ProductCardView>,
}

/// Load the detail page with the purchase gate evaluated.
pub async fn load_product_detail(
    api: &ApiClient,
    store: &SessionStore,
    id: ProductId,
) -> Result<ProductDetailPage> {
    let product = api.product(id).await?;

    let logged_in = store.is_logged_in();
    let requirement = product.buyer_requirement;
    let text = requirement_text(requirement);

    // Until login the gate cannot be evaluated; the button asks for login
    let can_buy = !logged_in || can_purchase(auth::account_type(store), requirement);

    let button = if logged_in {
        if can_buy {
            PurchaseButton::AddToCart
        } else {
            PurchaseButton::NotAvailable
        }
    } else {
        PurchaseButton::LoginToPurchase
    };

    let warning = (logged_in && !can_buy).then(|| RestrictionWarning {
        title: text,
        message: "Your account type does not allow purchasing this product. \
                  Contact sales for assistance.",
    });

    let login_notice = (!logged_in && requirement != BuyerRequirement::None && !text.is_empty())
        .then(|| format!("{text}. Please login to check your eligibility."));

    let accessories = compatible_accessories(api, &product).await?;

    Ok(ProductDetailPage {
        price: format_usd(product.price),
        requirement_text: text,
        button,
        warning,
        login_notice,
        accessories,
        product,
    })
}

/// Accessories listing themselves as compatible with this robot, by the
/// robot's leading model name.
async fn compatible_accessories(api: &ApiClient, product: &Product) -> Result<Vec<ProductCardView>> {
    if !product.is_robot() {
        return Ok(Vec::new());
    }

    let model = product
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_uppercase();
    if model.is_empty() {
        return Ok(Vec::new());
    }

    let catalog = api.products(&ProductFilters::default()).await?;
    Ok(catalog
        .iter()
        .filter(|candidate| {
            candidate.is_accessory()
                && candidate
                    .compatible_robots
                    .as_deref()
                    .is_some_and(|robots| robots.to_uppercase().contains(&model))
        })
        .take(MAX_ACCESSORY_SUGGESTIONS)
        .map(ProductCardView::from)
        .collect())
}

/// Clamp a requested quantity into the purchasable range `[1, stock]`.
#[must_use]
pub fn clamp_quantity(requested: i64, stock: i64) -> u32 {
    let ceiling = u32::try_from(stock.max(1)).unwrap_or(u32::MAX);
    u32::try_from(requested.max(1)).map_or(ceiling, |q| q.min(ceiling))
}

/// Add `quantity` units to the cart, one server call per unit.
///
/// The backend's add endpoint increments by one; quantities beyond one go
/// through the update endpoint instead.
pub async fn add_to_cart(api: &ApiClient, id: ProductId, quantity: u32) -> Result<u64> {
    let lines = api.add_to_cart(id).await?;

    let lines = if quantity > 1 {
        let current = lines
            .iter()
            .find(|line| line.product_id == id)
            .map_or(0, |line| line.quantity);
        // The add above contributed one unit; top up to the requested amount
        api.update_cart_item(id, current + quantity - 1).await?
    } else {
        lines
    };

    Ok(zenith_core::cart::item_count(&lines))
}
