//! The CAM16 color appearance model.
//!
//! [`ViewingConditions`] capture the adaptation state of an observer and
//! [`Cam16`] the appearance correlates of a color seen under them. Unless
//! stated otherwise, colors are viewed under [`ViewingConditions::standard`].

mod cam16;
mod viewing;

pub use cam16::Cam16;
pub use viewing::ViewingConditions;
