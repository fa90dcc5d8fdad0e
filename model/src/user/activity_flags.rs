use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u64)]
pub enum ActivityFlag {
    Instance = 1 << 0,
    Join = 1 << 1,
    Spectate = 1 << 2,
    JoinRequest = 1 << 3,
    Sync = 1 << 4,
    Play = 1 << 5,
    PartyPrivacyFriends = 1 << 6,
    PartyPrivacyVoiceChannel = 1 << 7,
    Embedded = 1 << 8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActivityFlags(pub u64);

impl ActivityFlags {
    pub fn contains(&self, flag: ActivityFlag) -> bool {
        let flag = flag as u64;
        self.0 & flag == flag
    }

    pub fn insert(&mut self, flag: ActivityFlag) {
        self.0 |= flag as u64;
    }
}

impl FromIterator<ActivityFlag> for ActivityFlags {
    fn from_iter<I: IntoIterator<Item = ActivityFlag>>(iter: I) -> Self {
        let mut flags = ActivityFlags::default();
        iter.into_iter().for_each(|flag| flags.insert(flag));
        flags
    }
}

impl Serialize for ActivityFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for ActivityFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ActivityFlags(u64::deserialize(deserializer)?))
    }
}

impl fmt::Display for ActivityFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
