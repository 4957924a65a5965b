// RSA Low Public Exponent Attacks
// Library surface: the attack core plus the input glue around it

pub mod attack;
pub mod cli;
pub mod util;

pub use attack::{AttackConfig, BroadcastAttack, Error, Result, TrivialAttack};
