pub use super::biome::Entity as Biome;
pub use super::biome_image::Entity as BiomeImage;
pub use super::comment::Entity as Comment;
pub use super::post::Entity as Post;
pub use super::user::Entity as User;
