use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Persistent status conditions. They survive switching out.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct StatusFlags: u8 {
        const SLEEP     = 1 << 0;
        const POISON    = 1 << 1;
        const TOXIC     = 1 << 2;
        const BURN      = 1 << 3;
        const FREEZE    = 1 << 4;
        const PARALYSIS = 1 << 5;
    }
}

bitflags! {
    /// Volatile conditions that only last while the combatant stays on the field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Volatiles: u16 {
        const CONFUSION         = 1 << 0;
        /// Bound by Wrap, Bind, Fire Spin and friends.
        const WRAPPED           = 1 << 1;
        /// Mean Look, Block, Spider Web.
        const ESCAPE_PREVENTION = 1 << 2;
        /// Ingrain.
        const ROOTED            = 1 << 3;
        const PERISH_SONG       = 1 << 4;
        /// Protect or Detect succeeded this turn.
        const PROTECTED         = 1 << 5;
    }
}

impl StatusFlags {
    pub fn is_poisoned(self) -> bool {
        self.intersects(StatusFlags::POISON | StatusFlags::TOXIC)
    }
}

impl Volatiles {
    /// Conditions that physically or volitionally hold the combatant in place.
    pub fn holds_in_place(self) -> bool {
        self.intersects(Volatiles::WRAPPED | Volatiles::ESCAPE_PREVENTION | Volatiles::ROOTED)
    }
}
