pub mod description;
pub mod event_block;
pub mod modality;
pub mod property_map;
pub mod timestamp;
pub mod unfold;
