//! Types shared between the roster frontend and anything else that speaks the
//! player API: the `Player` model, the response envelopes and request bodies.

pub mod model;
pub mod requests;
