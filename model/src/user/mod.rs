mod activity;
pub use activity::{Activity, CUSTOM_STATUS_NAME};

mod activity_type;
pub use activity_type::ActivityType;

mod activity_flags;
pub use activity_flags::{ActivityFlag, ActivityFlags};

mod timestamps;
pub use timestamps::Timestamps;

mod activity_emoji;
pub use activity_emoji::ActivityEmoji;

mod party;
pub use party::Party;

mod party_size;
pub use party_size::PartySize;

mod assets;
pub use assets::Assets;

mod secrets;
pub use secrets::Secrets;
