// Purpose - settings persistence

#[cfg(feature = "serde")]
pub mod preset;
