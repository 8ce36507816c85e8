pub mod audit_logs;
pub mod categories;
pub mod cities;
pub mod comments;
pub mod countries;
pub mod departments;
pub mod favorites;
pub mod generated_videos;
pub mod marketplaces;
pub mod product_likes;
pub mod products;
pub mod profiles;
pub mod reels;
pub mod reputations;
pub mod statuses;
pub mod stores;
pub mod users;

pub use audit_logs::Entity as AuditLogs;
pub use categories::Entity as Categories;
pub use cities::Entity as Cities;
pub use comments::Entity as Comments;
pub use countries::Entity as Countries;
pub use departments::Entity as Departments;
pub use favorites::Entity as Favorites;
pub use generated_videos::Entity as GeneratedVideos;
pub use marketplaces::Entity as Marketplaces;
pub use product_likes::Entity as ProductLikes;
pub use products::Entity as Products;
pub use profiles::Entity as Profiles;
pub use reels::Entity as Reels;
pub use reputations::Entity as Reputations;
pub use statuses::Entity as Statuses;
pub use stores::Entity as Stores;
pub use users::Entity as Users;
