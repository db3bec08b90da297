pub mod claims;
pub mod errors;
pub mod handler;
pub mod issuer;

pub use claims::AccessClaims;
pub use claims::RefreshClaims;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use issuer::TokenIssuer;
