//! Authentication and session management.
//!
//! [`Authenticator::login`] performs the credential exchange once; the
//! resulting [`Session`] is an immutable context passed by reference to every
//! later request.

mod login;
mod session;

pub use login::{Authenticator, USER_ID_COOKIE, extract_secret_token};
pub use session::{Credentials, SecretToken, Session, SessionCookie};
