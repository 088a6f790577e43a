//! Reusable UI components shared by pages.

mod button;
mod toast;
mod user_avatar;

pub use button::{Button, ButtonVariant};
pub use toast::Toast;
pub use user_avatar::{FALLBACK_FILL, UserAvatar};
