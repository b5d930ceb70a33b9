//! Site configuration.
//!
//! Centralized fixed literals for the $NYMI site. Everything
//! user-visible that is not markup lives here, so retargeting the
//! deployment (new contract, new links) touches a single file.

/// Token display name.
pub const TOKEN_NAME: &str = "$NYMI";

/// Gate screen headline.
pub const TAGLINE: &str = "Are you ready to make it?";

/// Contract address shown on the main screen.
///
/// The clipboard payload is this same constant, so the copied text is
/// always byte-identical to the displayed one.
pub const CONTRACT_ADDRESS: &str = "Contract Address Loading ...";

/// Looping soundtrack, served from the site root.
pub const AUDIO_SRC: &str = "/music.mp3";

/// Background video, served from the site root.
pub const VIDEO_SRC: &str = "/files/video.mp4";

/// Twitter profile.
pub const TWITTER_URL: &str = "https://x.com/NigerYouMadeIt";

/// X community.
pub const COMMUNITY_URL: &str = "https://x.com/i/communities/1956706376824005092";

/// How long the "copied" acknowledgment stays up (in milliseconds).
pub const COPIED_RESET_MS: u32 = 1_500;
