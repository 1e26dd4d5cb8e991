//! Request guards shared by the services.

pub mod auth;

#[cfg(test)]
mod test;
