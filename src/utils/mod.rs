pub(crate) mod round;
pub(crate) mod timezone;

pub(crate) use round::{round_cents, round_fixed, round_percent};
pub(crate) use timezone::Timezone;
