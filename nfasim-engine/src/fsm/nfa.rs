pub(super) mod dot;
pub(super) mod error;
pub(super) mod model;
pub(super) mod sim;
pub(super) mod trace;
