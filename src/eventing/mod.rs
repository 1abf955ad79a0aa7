//! Eventing - Events Flowing from Components to Their Parents

pub mod table_event;
