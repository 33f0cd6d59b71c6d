pub mod jwt;
pub mod password;
pub mod principal;

pub use jwt::TokenIssuer;
pub use principal::AuthUser;
