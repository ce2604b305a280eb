//! Static menu content for the home page.
//!
//! The kitchen's menu is small and changes rarely, so it lives in the binary
//! rather than a database. Each entry becomes a card with an add-to-cart
//! form; the card supplies the `(name, price, qty, emoji)` tuple the cart
//! endpoints consume.

/// One orderable item on the menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub name: &'static str,
    /// Unit price in whole rupees.
    pub price: u32,
    pub emoji: &'static str,
    pub blurb: &'static str,
}

/// The current menu, in display order.
#[must_use]
pub fn menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Buddha Bowl",
            price: 250,
            emoji: "🥗",
            blurb: "Quinoa, roasted veggies, hummus and tahini drizzle.",
        },
        MenuItem {
            name: "Detox Salad",
            price: 180,
            emoji: "🥬",
            blurb: "Kale, cucumber, sprouts and a lemon-ginger dressing.",
        },
        MenuItem {
            name: "Paneer Tikka Bowl",
            price: 220,
            emoji: "🍛",
            blurb: "Charred paneer over brown rice with mint chutney.",
        },
        MenuItem {
            name: "Quinoa Power Bowl",
            price: 240,
            emoji: "🍲",
            blurb: "Tri-colour quinoa, chickpeas, avocado and seeds.",
        },
        MenuItem {
            name: "Fruit Parfait",
            price: 150,
            emoji: "🍓",
            blurb: "Seasonal fruit layered with yogurt and granola.",
        },
        MenuItem {
            name: "Green Smoothie",
            price: 120,
            emoji: "🥤",
            blurb: "Spinach, banana, dates and almond milk.",
        },
    ]
}
