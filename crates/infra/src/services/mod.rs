mod google_auth;
mod push;

pub use google_auth::{GoogleAuthService, GoogleProfile, IGoogleAuthService, StubGoogleAuthService};
pub use push::{ExpoPushMessage, ExpoPushService, IPushService, StubPushService};
