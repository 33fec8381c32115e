/// Restaurant aggregate root
#[derive(Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    /// Account that created the restaurant; fixed at creation.
    pub created_by_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
}

/// Fields supplied when creating a restaurant
#[derive(Clone, Debug)]
pub struct NewRestaurant {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
}

/// Full replacement of the descriptive fields an owner may change
#[derive(Clone, Debug)]
pub struct RestaurantChanges {
    pub name: String,
    pub description: Option<String>,
    pub has_delivery: bool,
}
