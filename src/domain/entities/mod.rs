pub mod cell;
pub mod grouping;
pub mod pairing;
