//! Static menu catalog
//!
//! The menu is fixed reference data. Lookups return borrowed products; callers
//! that put a product into a cart take a snapshot via [`CartItem::new`](crate::models::CartItem::new).

use crate::models::{Category, Modifier, Product};
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Pseudo-category listing popular products
pub const FEATURED_CATEGORY: &str = "featured";

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    vec![
        Category::new(FEATURED_CATEGORY, "Featured"),
        Category::new("cravings", "Cravings Value"),
        Category::new("tacos", "Tacos"),
        Category::new("burritos", "Burritos"),
        Category::new("quesadillas", "Quesadillas"),
        Category::new("sides", "Sides & Sweets"),
        Category::new("drinks", "Drinks"),
    ]
});

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(build_products);

fn common_modifiers() -> Vec<Modifier> {
    vec![
        Modifier::toggle("no-lettuce", "No Lettuce", Decimal::ZERO, false),
        Modifier::toggle("extra-cheese", "Extra Cheese", Decimal::new(60, 2), false),
        Modifier::toggle("add-sour-cream", "Add Sour Cream", Decimal::new(50, 2), false),
        Modifier::toggle("sub-steak", "Swap for Steak", Decimal::new(120, 2), false),
    ]
}

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    cents: i64,
    calories: u32,
    image: &'static str,
    category: &'static str,
    popular: bool,
    customizable: bool,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "t1",
        name: "Crunchy Taco Supreme®",
        description: "A crunchy corn tortilla shell filled with seasoned beef, cool sour cream, crisp shredded lettuce, shredded cheddar cheese and ripe tomatoes.",
        cents: 239,
        calories: 190,
        image: "https://images.unsplash.com/photo-1551504734-5ee1c4a1479b?auto=format&fit=crop&w=800&q=80",
        category: "tacos",
        popular: true,
        customizable: true,
    },
    Entry {
        id: "t2",
        name: "Soft Taco",
        description: "A warm flour tortilla filled with seasoned beef, crisp shredded lettuce and shredded cheddar cheese.",
        cents: 179,
        calories: 180,
        image: "https://images.unsplash.com/photo-1599974579688-8dbdd335c77f?auto=format&fit=crop&w=800&q=80",
        category: "tacos",
        popular: false,
        customizable: true,
    },
    Entry {
        id: "t3",
        name: "Doritos® Locos Tacos",
        description: "A crunchy taco shell made from Nacho Cheese Doritos® is filled with seasoned beef, crisp shredded lettuce, and shredded cheddar cheese.",
        cents: 259,
        calories: 170,
        image: "https://images.unsplash.com/photo-1613514785940-daed07799d9b?auto=format&fit=crop&w=800&q=80",
        category: "tacos",
        popular: true,
        customizable: true,
    },
    Entry {
        id: "b1",
        name: "Bean Burrito",
        description: "A warm flour tortilla loaded with hearty beans, real cheddar cheese, and tangy red sauce.",
        cents: 199,
        calories: 350,
        image: "https://images.unsplash.com/photo-1566740933430-b5e70b06d2d5?auto=format&fit=crop&w=800&q=80",
        category: "burritos",
        popular: false,
        customizable: true,
    },
    Entry {
        id: "b2",
        name: "Beefy 5-Layer Burrito",
        description: "Seasoned beef, beans, sour cream, cheese and nacho cheese sauce wrapped in a flour tortilla.",
        cents: 369,
        calories: 490,
        image: "https://images.unsplash.com/photo-1626700051175-6818013e1d4f?auto=format&fit=crop&w=800&q=80",
        category: "burritos",
        popular: true,
        customizable: true,
    },
    Entry {
        id: "q1",
        name: "Chicken Quesadilla",
        description: "An extra large flour tortilla filled with melty three-cheese blend, fire grilled chicken, and creamy jalapeño sauce.",
        cents: 519,
        calories: 510,
        image: "https://images.unsplash.com/photo-1599974579688-8dbdd335c77f?auto=format&fit=crop&w=800&q=80",
        category: "quesadillas",
        popular: false,
        customizable: true,
    },
    Entry {
        id: "c1",
        name: "Cheesy Roll Up",
        description: "A flour tortilla rolled up with a three-cheese blend. Simple and delicious.",
        cents: 100,
        calories: 180,
        image: "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?auto=format&fit=crop&w=800&q=80",
        category: "cravings",
        popular: false,
        customizable: false,
    },
    Entry {
        id: "c2",
        name: "Spicy Potato Soft Taco",
        description: "Crispy potato bites, lettuce, cheese and creamy chipotle sauce in a flour tortilla.",
        cents: 129,
        calories: 240,
        image: "https://images.unsplash.com/photo-1624300626419-bda14d960916?auto=format&fit=crop&w=800&q=80",
        category: "cravings",
        popular: true,
        customizable: true,
    },
    Entry {
        id: "s1",
        name: "Nachos BellGrande®",
        description: "A portion of crispy tortilla chips topped with warm nacho cheese sauce, refried beans, seasoned beef, ripe tomatoes and cool sour cream.",
        cents: 569,
        calories: 740,
        image: "https://images.unsplash.com/photo-1513456852971-30c0b8199d4d?auto=format&fit=crop&w=800&q=80",
        category: "sides",
        popular: false,
        customizable: true,
    },
    Entry {
        id: "s2",
        name: "Cinnabon® Delights",
        description: "Warm donut holes filled with Cinnabon® frosting and dusted with Makara cinnamon sugar.",
        cents: 229,
        calories: 160,
        image: "https://images.unsplash.com/photo-1621251336073-6775d7208856?auto=format&fit=crop&w=800&q=80",
        category: "sides",
        popular: false,
        customizable: false,
    },
    Entry {
        id: "d1",
        name: "Baja Blast®",
        description: "A tropical lime storm.",
        cents: 249,
        calories: 280,
        image: "https://images.unsplash.com/photo-1513558161293-cdaf765ed2fd?auto=format&fit=crop&w=800&q=80",
        category: "drinks",
        popular: false,
        customizable: false,
    },
];

fn build_products() -> Vec<Product> {
    ENTRIES
        .iter()
        .map(|e| Product {
            id: e.id.to_string(),
            name: e.name.to_string(),
            description: e.description.to_string(),
            price: Decimal::new(e.cents, 2),
            calories: e.calories,
            image: e.image.to_string(),
            category_id: e.category.to_string(),
            popular: e.popular,
            modifiers: if e.customizable { common_modifiers() } else { Vec::new() },
        })
        .collect()
}

/// All menu categories, in display order
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// All products, in display order
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Find a product by id
pub fn product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Find a category by id
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Products flagged as popular
pub fn popular_products() -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| p.popular).collect()
}

/// Products shown under a category tab
///
/// `featured` lists the popular products; any other id filters by category.
pub fn products_in_category(category_id: &str) -> Vec<&'static Product> {
    if category_id == FEATURED_CATEGORY {
        return popular_products();
    }
    PRODUCTS
        .iter()
        .filter(|p| p.category_id == category_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(categories().len(), 7);
        assert_eq!(products().len(), 11);
        assert_eq!(categories()[0].id, FEATURED_CATEGORY);
    }

    #[test]
    fn test_product_lookup() {
        let burrito = product("b2").unwrap();
        assert_eq!(burrito.price, Decimal::new(369, 2));
        assert_eq!(burrito.modifiers.len(), 4);
        assert!(product("zz").is_none());

        let drink = product("d1").unwrap();
        assert!(drink.modifiers.is_empty());
    }

    #[test]
    fn test_featured_lists_popular() {
        let featured = products_in_category(FEATURED_CATEGORY);
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.popular));
        assert_eq!(featured.len(), popular_products().len());
    }

    #[test]
    fn test_products_in_category() {
        let tacos = products_in_category("tacos");
        assert_eq!(tacos.len(), 3);
        assert!(products_in_category("desserts").is_empty());
        assert_eq!(category("sides").unwrap().name, "Sides & Sweets");
    }

    #[test]
    fn test_every_product_has_known_category() {
        for p in products() {
            assert!(category(&p.category_id).is_some(), "{} has unknown category", p.id);
        }
    }
}
