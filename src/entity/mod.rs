pub mod colors;
pub mod coupons;
pub mod order_items;
pub mod orders;
pub mod product_colors;
pub mod product_sizes;
pub mod products;
pub mod sizes;
pub mod users;

pub use colors::Entity as Colors;
pub use coupons::Entity as Coupons;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use product_colors::Entity as ProductColors;
pub use product_sizes::Entity as ProductSizes;
pub use products::Entity as Products;
pub use sizes::Entity as Sizes;
pub use users::Entity as Users;
