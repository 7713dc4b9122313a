pub mod flight;
pub mod seat;
pub mod trip;
