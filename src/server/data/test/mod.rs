mod biome;
mod biome_image;
mod comment;
mod post;
mod user;
