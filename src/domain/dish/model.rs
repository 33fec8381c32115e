use rust_decimal::Decimal;

/// Dish, always scoped to one restaurant
#[derive(Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

/// Fields supplied when adding a dish to a restaurant
#[derive(Clone, Debug)]
pub struct NewDish {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}
