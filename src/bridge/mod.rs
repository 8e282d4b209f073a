//! Bridge: remote controls decoupled from the television sets they drive.
//!
//! The abstraction ([`RemoteControl`]) and the implementation ([`Tv`]) are separate traits.
//! [`BasicRemote`] is generic over any `Tv`, so adding a brand never touches a remote and
//! adding a remote never touches a brand.

pub mod demo;
pub mod remote;
pub mod tv;

pub use demo::BridgeDemo;
pub use remote::{BasicRemote, RemoteControl};
pub use tv::{LgTv, SonyTv, Tv};
